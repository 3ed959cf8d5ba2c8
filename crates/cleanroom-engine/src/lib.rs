#![forbid(unsafe_code)]
//! cleanroom-engine: sessions, the aggregator, and the external surface.
//!
//! Control flow per request: privacy guard -> joined relation (cached
//! write-once per session) -> aggregate -> typed envelope or error.

pub mod aggregate;
pub mod engine;
pub mod session;

pub use engine::Engine;
pub use session::Session;
