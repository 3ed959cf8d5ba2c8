//! Session: one immutable dataset store plus a write-once joined
//! relation and an aggregation counter.
//!
//! The joined relation is computed lazily on the first query and cached;
//! the cache is never invalidated within a session, so concurrent
//! requests can share it read-only without locking. Requests are
//! stateless relative to each other: a rejected request never affects
//! the session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use cleanroom_core::error::Result;
use cleanroom_core::request::QueryRequest;
use cleanroom_core::ResultEnvelope;
use cleanroom_query::{guard, matcher};
use cleanroom_relation::{join, DatasetStore, JoinedRelation};

use crate::aggregate::aggregate;

pub struct Session {
    store: DatasetStore,
    joined: OnceLock<JoinedRelation>,
    aggregations: AtomicU64,
}

impl Session {
    pub fn new(store: DatasetStore) -> Self {
        Self {
            store,
            joined: OnceLock::new(),
            aggregations: AtomicU64::new(0),
        }
    }

    /// The cached joined relation, materialized on first use.
    pub fn joined(&self) -> &JoinedRelation {
        self.joined.get_or_init(|| join(&self.store))
    }

    /// Structured path: guard -> join -> aggregate.
    pub fn submit(&self, request: &QueryRequest) -> Result<ResultEnvelope> {
        guard::check_request(request)?;
        let relation = self.joined();
        self.aggregations.fetch_add(1, Ordering::Relaxed);
        aggregate(relation, request)
    }

    /// Free-text fallback: normalize -> guard on text -> classify ->
    /// guard on the resulting request -> aggregate.
    pub fn submit_text(&self, text: &str) -> Result<ResultEnvelope> {
        let request = matcher::classify(text)?;
        self.submit(&request)
    }

    /// Number of aggregator invocations so far. Rejected requests never
    /// reach the aggregator, so this stays flat across violations.
    pub fn aggregations_run(&self) -> u64 {
        self.aggregations.load(Ordering::Relaxed)
    }
}
