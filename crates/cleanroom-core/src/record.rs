//! The record shapes the engine is permitted to touch.
//!
//! These are the *projected* forms: anything else present in raw upload
//! rows (original identifiers, user ids, ...) is dropped at ingestion by
//! the dataset store and is unreachable afterwards. The types carry no
//! serde impls on purpose: records never cross the engine boundary.

use crate::key::PseudonymousKey;

/// Advertiser-side record (click exposure).
#[derive(Debug, Clone, PartialEq)]
pub struct SideARecord {
    pub key: PseudonymousKey,
    pub clicked: bool,
    pub campaign_id: String,
    pub region: String,
}

/// Retailer-side record (purchase outcome).
#[derive(Debug, Clone, PartialEq)]
pub struct SideBRecord {
    pub key: PseudonymousKey,
    pub purchased: bool,
    pub purchase_value: f64,
}

/// Natural join of one record per side sharing a key.
///
/// The key is the join predicate only; it is absent from this type, so
/// nothing downstream of the join can observe or leak it.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub clicked: bool,
    pub campaign_id: String,
    pub region: String,
    pub purchased: bool,
    pub purchase_value: f64,
}

impl JoinedRecord {
    pub fn from_pair(a: &SideARecord, b: &SideBRecord) -> Self {
        Self {
            clicked: a.clicked,
            campaign_id: a.campaign_id.clone(),
            region: a.region.clone(),
            purchased: b.purchased,
            purchase_value: b.purchase_value,
        }
    }
}
