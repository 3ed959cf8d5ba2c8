//! Dataset store: ingestion-time validation and projection.
//!
//! This is the primary enforcement point for "raw data never enters the
//! engine": upload rows are projected down to exactly the permitted
//! columns before storage, so original identifiers and any other extra
//! fields are unreachable by every later operation.

use std::collections::HashSet;

use serde_json::Value;

use cleanroom_core::config::{DuplicateKeyPolicy, EngineConfig};
use cleanroom_core::error::{Error, Result};
use cleanroom_core::fields;
use cleanroom_core::key::PseudonymousKey;
use cleanroom_core::record::{SideARecord, SideBRecord};

/// The two input relations, restricted to permitted columns. Immutable
/// for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    side_a: Vec<SideARecord>,
    side_b: Vec<SideBRecord>,
}

impl DatasetStore {
    /// Validate, project, and store both sides. Fails with a schema
    /// error (naming side, row, and field) without creating a partial
    /// store.
    pub fn load(cfg: &EngineConfig, side_a_rows: &[Value], side_b_rows: &[Value]) -> Result<Self> {
        if side_a_rows.len() > cfg.max_rows_per_side {
            return Err(Error::Schema(format!(
                "side A exceeds row cap: {} > {}",
                side_a_rows.len(),
                cfg.max_rows_per_side
            )));
        }
        if side_b_rows.len() > cfg.max_rows_per_side {
            return Err(Error::Schema(format!(
                "side B exceeds row cap: {} > {}",
                side_b_rows.len(),
                cfg.max_rows_per_side
            )));
        }

        let mut side_a = Vec::with_capacity(side_a_rows.len());
        let mut seen_a = HashSet::with_capacity(side_a_rows.len());
        for (idx, row) in side_a_rows.iter().enumerate() {
            let record = project_side_a(row)
                .map_err(|msg| Error::Schema(format!("side A row {}: {}", idx, msg)))?;
            if !seen_a.insert(record.key) {
                match cfg.duplicate_keys {
                    DuplicateKeyPolicy::Reject => {
                        return Err(Error::Schema(format!(
                            "side A row {}: duplicate key",
                            idx
                        )));
                    }
                    DuplicateKeyPolicy::FirstWins => continue,
                }
            }
            side_a.push(record);
        }

        let mut side_b = Vec::with_capacity(side_b_rows.len());
        let mut seen_b = HashSet::with_capacity(side_b_rows.len());
        for (idx, row) in side_b_rows.iter().enumerate() {
            let record = project_side_b(row)
                .map_err(|msg| Error::Schema(format!("side B row {}: {}", idx, msg)))?;
            if !seen_b.insert(record.key) {
                match cfg.duplicate_keys {
                    DuplicateKeyPolicy::Reject => {
                        return Err(Error::Schema(format!(
                            "side B row {}: duplicate key",
                            idx
                        )));
                    }
                    DuplicateKeyPolicy::FirstWins => continue,
                }
            }
            side_b.push(record);
        }

        tracing::debug!(
            side_a = side_a.len(),
            side_b = side_b.len(),
            "dataset store loaded"
        );

        Ok(Self { side_a, side_b })
    }

    pub fn side_a(&self) -> &[SideARecord] {
        &self.side_a
    }

    pub fn side_b(&self) -> &[SideBRecord] {
        &self.side_b
    }
}

/// Project one side-A upload row. Extra fields are dropped here.
fn project_side_a(row: &Value) -> std::result::Result<SideARecord, String> {
    Ok(SideARecord {
        key: require_key(row)?,
        clicked: require_bool(row, fields::CLICKED)?,
        campaign_id: require_str(row, fields::CAMPAIGN_ID)?.to_string(),
        region: require_str(row, fields::REGION)?.to_string(),
    })
}

/// Project one side-B upload row. Extra fields are dropped here.
fn project_side_b(row: &Value) -> std::result::Result<SideBRecord, String> {
    let purchase_value = require_f64(row, fields::PURCHASE_VALUE)?;
    if purchase_value < 0.0 {
        return Err(format!(
            "field '{}' must be non-negative, got {}",
            fields::PURCHASE_VALUE,
            purchase_value
        ));
    }
    Ok(SideBRecord {
        key: require_key(row)?,
        purchased: require_bool(row, fields::PURCHASED)?,
        purchase_value,
    })
}

fn require_key(row: &Value) -> std::result::Result<PseudonymousKey, String> {
    let hex = require_str(row, fields::KEY)?;
    PseudonymousKey::from_hex(hex).map_err(|e| match e {
        Error::Schema(msg) => msg,
        other => other.to_string(),
    })
}

fn require_field<'a>(row: &'a Value, field: &str) -> std::result::Result<&'a Value, String> {
    let obj = row
        .as_object()
        .ok_or_else(|| "row is not an object".to_string())?;
    obj.get(field)
        .ok_or_else(|| format!("missing required field '{}'", field))
}

fn require_str<'a>(row: &'a Value, field: &str) -> std::result::Result<&'a str, String> {
    require_field(row, field)?
        .as_str()
        .ok_or_else(|| format!("field '{}' must be a string", field))
}

fn require_bool(row: &Value, field: &str) -> std::result::Result<bool, String> {
    require_field(row, field)?
        .as_bool()
        .ok_or_else(|| format!("field '{}' must be a boolean", field))
}

fn require_f64(row: &Value, field: &str) -> std::result::Result<f64, String> {
    require_field(row, field)?
        .as_f64()
        .ok_or_else(|| format!("field '{}' must be a number", field))
}
