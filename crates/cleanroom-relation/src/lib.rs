#![forbid(unsafe_code)]
//! cleanroom-relation: the two private relations and their inner join.
//!
//! `store` validates and projects raw upload rows down to the permitted
//! columns; `join` materializes the joined relation the aggregator runs
//! over. Both are pure and synchronous; the store is immutable once
//! loaded.

pub mod join;
pub mod store;

pub use join::{join, JoinedRelation};
pub use store::DatasetStore;
