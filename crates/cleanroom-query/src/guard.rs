//! Privacy guard: rejects requests before any computation runs.
//!
//! Enforcement is structurally prior to the join and the aggregator — a
//! rejected request never touches the joined relation, so there is no
//! partial output or timing side channel to leak through. Rejections are
//! logged at warn level as security-relevant events.

use cleanroom_core::error::{Error, Result};
use cleanroom_core::fields;
use cleanroom_core::request::{Projection, QueryRequest};

/// Check a structured request. Rejects wildcard projections, projections
/// naming a raw identifier column, and grouping by an identifier.
pub fn check_request(request: &QueryRequest) -> Result<()> {
    match &request.projection {
        Projection::Aggregate => {}
        Projection::Wildcard => {
            return reject("full-row selection is not permitted");
        }
        Projection::Columns(columns) => {
            if let Some(col) = columns.iter().find(|c| fields::is_raw_identifier(c)) {
                return reject(&format!(
                    "projection of raw identifier column '{}' is not permitted",
                    col
                ));
            }
        }
    }

    if let Some(group) = &request.group_by {
        if fields::is_raw_identifier(group) {
            return reject(&format!(
                "grouping by identifier column '{}' is not permitted",
                group
            ));
        }
    }

    Ok(())
}

/// Check normalized query text for raw-data selection signatures before
/// classification is attempted.
pub fn check_text(normalized: &str) -> Result<()> {
    if normalized.contains("SELECT *") {
        return reject("full-row selection is not permitted");
    }
    for field in fields::RAW_IDENTIFIERS {
        let signature = format!("SELECT {}", field.to_uppercase());
        if normalized.contains(&signature) {
            return reject(&format!(
                "projection of raw identifier column '{}' is not permitted",
                field
            ));
        }
    }
    Ok(())
}

fn reject(reason: &str) -> Result<()> {
    tracing::warn!(reason, "privacy guard rejected request");
    Err(Error::Privacy(reason.to_string()))
}
