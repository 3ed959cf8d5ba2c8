//! Inner hash join on the pseudonymous key.
//!
//! Build a hash table over side B, probe with side A: O(n + m) expected,
//! never the quadratic nested-loop scan. The key is consumed as the join
//! predicate and dropped from the output shape; only the non-identifying
//! columns survive into `JoinedRecord`.

use std::collections::HashMap;

use cleanroom_core::key::PseudonymousKey;
use cleanroom_core::record::{JoinedRecord, SideBRecord};

use crate::store::DatasetStore;

/// The joined relation: one record per key present on both sides.
/// Held read-only for a session; safe to share across concurrent
/// requests without synchronization.
#[derive(Debug, Clone, Default)]
pub struct JoinedRelation {
    records: Vec<JoinedRecord>,
}

impl JoinedRelation {
    pub fn records(&self) -> &[JoinedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Materialize the inner join of the two stored relations.
///
/// Deterministic: output order follows side A's row order (each side
/// holds at most one record per key, enforced at load).
pub fn join(store: &DatasetStore) -> JoinedRelation {
    let build: HashMap<PseudonymousKey, &SideBRecord> = store
        .side_b()
        .iter()
        .map(|record| (record.key, record))
        .collect();

    let mut records = Vec::new();
    for a in store.side_a() {
        if let Some(b) = build.get(&a.key) {
            records.push(JoinedRecord::from_pair(a, b));
        }
    }

    tracing::debug!(matched = records.len(), "joined relation materialized");

    JoinedRelation { records }
}
