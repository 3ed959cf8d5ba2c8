//! Engine facade: the three operations exposed to collaborators.
//!
//! Sessions are explicit objects keyed by `SessionId`; there is no
//! module-level store, so many sessions can coexist in one process
//! without cross-contamination.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use cleanroom_core::config::EngineConfig;
use cleanroom_core::error::{Error, Result};
use cleanroom_core::id::SessionId;
use cleanroom_core::request::QueryRequest;
use cleanroom_core::ResultEnvelope;
use cleanroom_query::catalog::{supported_shapes, ShapeDescriptor};
use cleanroom_relation::DatasetStore;

use crate::session::Session;

pub struct Engine {
    cfg: EngineConfig,
    sessions: HashMap<SessionId, Arc<Session>>,
}

impl Engine {
    pub fn new(cfg: EngineConfig) -> Self {
        Self {
            cfg,
            sessions: HashMap::new(),
        }
    }

    /// Build a session from raw upload rows. Fails with a schema error
    /// (and creates nothing) on malformed input.
    pub fn initialize(
        &mut self,
        side_a_rows: &[Value],
        side_b_rows: &[Value],
    ) -> Result<SessionId> {
        let store = DatasetStore::load(&self.cfg, side_a_rows, side_b_rows)?;
        let id = SessionId::new();
        self.sessions.insert(id, Arc::new(Session::new(store)));
        tracing::info!(
            session = %id,
            side_a = side_a_rows.len(),
            side_b = side_b_rows.len(),
            "session initialized"
        );
        Ok(id)
    }

    /// Structured request path (primary interface).
    pub fn submit(&self, session: SessionId, request: &QueryRequest) -> Result<ResultEnvelope> {
        self.session(session)?.submit(request)
    }

    /// Free-text fallback path for translators that only produce strings.
    pub fn submit_text(&self, session: SessionId, text: &str) -> Result<ResultEnvelope> {
        self.session(session)?.submit_text(text)
    }

    /// What the translator may legally produce.
    pub fn describe_supported_shapes() -> Vec<ShapeDescriptor> {
        supported_shapes()
    }

    /// Aggregator-invocation count for a session (observability; also
    /// the spy used by the privacy-invariant tests).
    pub fn aggregations_run(&self, session: SessionId) -> Result<u64> {
        Ok(self.session(session)?.aggregations_run())
    }

    /// Drop a session and its datasets.
    pub fn close(&mut self, session: SessionId) {
        self.sessions.remove(&session);
    }

    fn session(&self, id: SessionId) -> Result<&Arc<Session>> {
        self.sessions
            .get(&id)
            .ok_or_else(|| Error::Computation(format!("unknown session {}", id)))
    }
}
