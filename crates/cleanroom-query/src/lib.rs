#![forbid(unsafe_code)]
//! cleanroom-query: free-text normalization, the privacy guard, and the
//! shape matcher.
//!
//! The matcher is a closed-world, ordered rule table: queries either hit
//! one of the supported aggregate shapes or come back as an unrecognized
//! error carrying the normalized text. There is deliberately no fallback
//! guessing.

pub mod catalog;
pub mod guard;
pub mod matcher;
pub mod normalize;

pub use catalog::{supported_shapes, ShapeDescriptor};
pub use matcher::classify;
pub use normalize::normalize;
