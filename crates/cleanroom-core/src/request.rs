//! Structured query requests: the primary interface for the translator.
//!
//! Free query text is a compatibility shim; translators that can emit
//! structured data should build a `QueryRequest` directly.

use serde::{Deserialize, Serialize};

/// The fixed family of aggregate shapes the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateKind {
    /// Number of distinct matched keys (one joined record per key).
    CountDistinctKeys,
    /// Sum of `purchase_value` over matched records, 2 decimal places.
    SumPurchaseValue,
    /// Distinct-key counts partitioned by a grouping column.
    CountDistinctKeysGrouped,
}

/// Equality constraint over a joined-record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub field: String,
    pub value: PredicateValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateValue {
    Bool(bool),
    Str(String),
}

impl Predicate {
    pub fn bool(field: impl Into<String>, value: bool) -> Self {
        Self {
            field: field.into(),
            value: PredicateValue::Bool(value),
        }
    }

    pub fn str(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: PredicateValue::Str(value.into()),
        }
    }
}

/// What the request asks to see in its output.
///
/// Only `Aggregate` passes the privacy guard unconditionally; `Wildcard`
/// is always rejected, and `Columns` is rejected when it names a raw
/// identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Aggregate-only output (the normal case).
    Aggregate,
    /// Full-row selection (`SELECT *`).
    Wildcard,
    /// Named output columns.
    Columns(Vec<String>),
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Aggregate
    }
}

/// A fully described query: shape + optional filters + optional grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub aggregate: AggregateKind,
    #[serde(default)]
    pub predicates: Vec<Predicate>,
    #[serde(default)]
    pub group_by: Option<String>,
    #[serde(default)]
    pub projection: Projection,
}

impl QueryRequest {
    pub fn new(aggregate: AggregateKind) -> Self {
        Self {
            aggregate,
            predicates: Vec::new(),
            group_by: None,
            projection: Projection::Aggregate,
        }
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn with_group_by(mut self, field: impl Into<String>) -> Self {
        self.group_by = Some(field.into());
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }
}
