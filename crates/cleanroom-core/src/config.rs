//! Engine configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

/// How load handles a key that appears more than once on a single side.
///
/// The join assumes at most one record per key per side; that assumption
/// is enforced here instead of inherited silently. Fan-out is not offered
/// because it would break the one-joined-record-per-key guarantee that
/// makes count-distinct equal to the filtered record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Fail the load with a schema error naming the offending side.
    Reject,
    /// Keep the first record per key, drop later ones.
    FirstWins,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hard cap on rows accepted per side at load time.
    pub max_rows_per_side: usize,

    /// Duplicate-key handling at load time.
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rows_per_side: 1_000_000,
            duplicate_keys: DuplicateKeyPolicy::Reject,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `CLEANROOM_MAX_ROWS_PER_SIDE`: row cap per input side
    /// - `CLEANROOM_DUPLICATE_KEYS`: `reject` or `first_wins`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("CLEANROOM_MAX_ROWS_PER_SIDE") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_rows_per_side = v;
            }
        }

        if let Ok(s) = std::env::var("CLEANROOM_DUPLICATE_KEYS") {
            match s.to_ascii_lowercase().as_str() {
                "reject" => cfg.duplicate_keys = DuplicateKeyPolicy::Reject,
                "first_wins" => cfg.duplicate_keys = DuplicateKeyPolicy::FirstWins,
                _ => {}
            }
        }

        cfg
    }
}
