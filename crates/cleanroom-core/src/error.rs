use thiserror::Error;

/// Canonical result for the clean-room engine.
pub type Result<T> = std::result::Result<T, Error>;

/// The full error taxonomy of the engine.
///
/// All variants are returned as values to the caller; none are retried
/// (every failure is deterministic for a given input). A `Privacy`
/// rejection is fatal to the single request that triggered it and never
/// affects the session or other requests.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or incomplete input records at load time. Fatal to
    /// session initialization; no partial store is created.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The request's projection or shape would expose raw identifiers.
    #[error("Privacy violation: {0}")]
    Privacy(String),

    /// The normalized query text matched no supported shape. Carries the
    /// normalized text so the caller can diagnose why matching failed.
    #[error("Unrecognized query (normalized: {normalized})")]
    Unrecognized { normalized: String },

    /// Unexpected internal failure during aggregation. A defect class,
    /// not an expected user-facing condition.
    #[error("Computation error: {0}")]
    Computation(String),
}

// Upload rows arrive as JSON; malformed row payloads are schema errors.
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Schema(e.to_string())
    }
}

impl Error {
    /// True for the security-relevant rejection kind that callers are
    /// expected to log.
    pub fn is_privacy_violation(&self) -> bool {
        matches!(self, Error::Privacy(_))
    }
}
