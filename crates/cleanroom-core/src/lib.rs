#![forbid(unsafe_code)]
//! cleanroom-core: shared types for the clean-room aggregation engine.
//!
//! Everything here is pure data: pseudonymous keys, the projected record
//! shapes the engine is allowed to see, query requests, result envelopes,
//! errors, and config. No I/O, no execution logic.

pub mod config;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod id;
pub mod key;
pub mod prelude;
pub mod record;
pub mod request;

pub use envelope::ResultEnvelope;
pub use error::{Error, Result};
