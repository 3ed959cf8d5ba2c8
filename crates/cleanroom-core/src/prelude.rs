//! Convenient re-exports for downstream crates.

pub use crate::config::{DuplicateKeyPolicy, EngineConfig};
pub use crate::envelope::ResultEnvelope;
pub use crate::error::{Error, Result};
pub use crate::id::SessionId;
pub use crate::key::PseudonymousKey;
pub use crate::record::{JoinedRecord, SideARecord, SideBRecord};
pub use crate::request::{AggregateKind, Predicate, PredicateValue, Projection, QueryRequest};
