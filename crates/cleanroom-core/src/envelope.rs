//! Typed result envelopes.
//!
//! Exactly one variant per result; no variant can carry a pseudonymous
//! key or raw identifier (keys are not serializable at all). Errors
//! travel separately as `crate::Error`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ResultEnvelope {
    /// Distinct matched-key count.
    Count(u64),
    /// Summed purchase value, rounded to 2 decimal places.
    Sum(f64),
    /// Per-group distinct-key counts (e.g. region -> count). BTreeMap
    /// keeps the rendering deterministic.
    Distribution(BTreeMap<String, u64>),
}
