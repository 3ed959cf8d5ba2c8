//! Pseudonymous keys: one-way digests used as the join predicate.
//!
//! A key is an opaque 32-byte blake3 digest of an original identifier.
//! Two keys are equal iff the underlying identifiers were equal. The key
//! is never rendered, logged, serialized into a result envelope, or
//! carried by a joined record; `Debug` is redacted for that reason and
//! there is deliberately no `Display` or `Serialize` impl.

use crate::error::{Error, Result};

const DIGEST_LEN: usize = 32;

/// Opaque digest standing in for an original identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PseudonymousKey([u8; DIGEST_LEN]);

impl PseudonymousKey {
    /// One-way hash of an original identifier. This is the producer-side
    /// boundary: collaborators hash identifiers before upload and the
    /// engine only ever sees the digest.
    pub fn derive(identifier: &str) -> Self {
        let digest = blake3::hash(identifier.as_bytes());
        Self(*digest.as_bytes())
    }

    /// Parse a pre-hashed key from its hex form (64 hex chars).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        if hex.len() != DIGEST_LEN * 2 {
            return Err(Error::Schema(format!(
                "key must be {} hex chars, got {}",
                DIGEST_LEN * 2,
                hex.len()
            )));
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let hi = hex_nibble(chunk[0])?;
            let lo = hex_nibble(chunk[1])?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

/// Hash an identifier to the hex form collaborators place in upload rows.
///
/// Convenience for data producers and fixtures; the engine itself never
/// emits key material.
pub fn derive_hex(identifier: &str) -> String {
    let digest = blake3::hash(identifier.as_bytes());
    let mut s = String::with_capacity(DIGEST_LEN * 2);
    for b in digest.as_bytes() {
        use std::fmt::Write as _;
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

fn hex_nibble(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::Schema(format!(
            "key contains non-hex character '{}'",
            c as char
        ))),
    }
}

impl std::fmt::Debug for PseudonymousKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Redacted: digest bytes must never reach logs or output.
        f.write_str("PseudonymousKey(..)")
    }
}
