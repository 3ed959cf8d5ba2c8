#![allow(dead_code)]
//! Shared row builders for the integration tests.
//!
//! Rows are built the way collaborators upload them: JSON objects with a
//! pre-hashed key column, often carrying extra raw fields (`user_id`,
//! `email`) that ingestion must drop.

use cleanroom_core::key::derive_hex;
use serde_json::{json, Value};

pub fn side_a_row(identifier: &str, clicked: bool, campaign_id: &str, region: &str) -> Value {
    json!({
        "key": derive_hex(identifier),
        "clicked": clicked,
        "campaign_id": campaign_id,
        "region": region,
    })
}

pub fn side_b_row(identifier: &str, purchased: bool, purchase_value: f64) -> Value {
    json!({
        "key": derive_hex(identifier),
        "purchased": purchased,
        "purchase_value": purchase_value,
    })
}

/// Raw upload rows as a sloppy producer would send them: identifier
/// fields included alongside the hashed key.
pub fn side_a_row_with_identifiers(
    identifier: &str,
    clicked: bool,
    campaign_id: &str,
    region: &str,
) -> Value {
    json!({
        "user_id": identifier,
        "email": format!("{}@example.com", identifier),
        "key": derive_hex(identifier),
        "clicked": clicked,
        "campaign_id": campaign_id,
        "region": region,
    })
}

/// The two-user fixture: user_1 clicked and purchased 100.0 in region X,
/// user_2 did not click but purchased 50.0 in region Y.
pub fn two_user_fixture() -> (Vec<Value>, Vec<Value>) {
    let side_a = vec![
        side_a_row("user_1", true, "camp_a", "X"),
        side_a_row("user_2", false, "camp_b", "Y"),
    ];
    let side_b = vec![
        side_b_row("user_1", true, 100.0),
        side_b_row("user_2", true, 50.0),
    ];
    (side_a, side_b)
}

/// Larger fixture with a known key intersection: side A holds users
/// `a_start..a_end`, side B holds `b_start..b_end`.
pub fn range_fixture(
    a_range: std::ops::Range<u32>,
    b_range: std::ops::Range<u32>,
) -> (Vec<Value>, Vec<Value>) {
    let side_a = a_range
        .map(|i| {
            side_a_row(
                &format!("user_{}", i),
                i % 3 == 0,
                if i % 2 == 0 { "camp_a" } else { "camp_b" },
                if i % 2 == 0 { "X" } else { "Y" },
            )
        })
        .collect();
    let side_b = b_range
        .map(|i| side_b_row(&format!("user_{}", i), i % 2 == 0, (i as f64) * 1.5))
        .collect();
    (side_a, side_b)
}
