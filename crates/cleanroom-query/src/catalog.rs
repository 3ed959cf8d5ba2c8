//! Shape catalog descriptors for the external translator.
//!
//! `describe_supported_shapes` tells the translator what it may legally
//! produce; the descriptors are serializable so they can cross the
//! process boundary as JSON.

use serde::{Deserialize, Serialize};

use cleanroom_core::request::AggregateKind;

use crate::matcher::SHAPE_RULES;

/// Description of one supported aggregate shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub name: &'static str,
    pub aggregate: AggregateKind,
    /// Token signature the free-text matcher looks for.
    pub signature: Vec<&'static str>,
    /// Optional equality filters any shape accepts.
    pub optional_filters: Vec<&'static str>,
    pub description: &'static str,
}

/// Descriptors for every shape in the matcher's rule table, in matching
/// priority order.
pub fn supported_shapes() -> Vec<ShapeDescriptor> {
    SHAPE_RULES
        .iter()
        .map(|rule| ShapeDescriptor {
            name: shape_name(rule.kind),
            aggregate: rule.kind,
            signature: rule.all_of.to_vec(),
            optional_filters: vec!["clicked", "purchased", "region", "campaign_id"],
            description: shape_description(rule.kind),
        })
        .collect()
}

fn shape_name(kind: AggregateKind) -> &'static str {
    match kind {
        AggregateKind::CountDistinctKeys => "count_distinct_keys",
        AggregateKind::SumPurchaseValue => "sum_purchase_value",
        AggregateKind::CountDistinctKeysGrouped => "count_distinct_keys_grouped",
    }
}

fn shape_description(kind: AggregateKind) -> &'static str {
    match kind {
        AggregateKind::CountDistinctKeys => {
            "number of distinct matched users across both datasets"
        }
        AggregateKind::SumPurchaseValue => {
            "total purchase value over matched users, rounded to 2 decimal places"
        }
        AggregateKind::CountDistinctKeysGrouped => {
            "distinct matched users partitioned by a non-identifying column"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_descriptor_per_rule_in_priority_order() {
        let shapes = supported_shapes();
        assert_eq!(shapes.len(), SHAPE_RULES.len());
        assert_eq!(shapes[0].aggregate, AggregateKind::CountDistinctKeysGrouped);
    }

    #[test]
    fn descriptors_serialize() {
        let json = serde_json::to_string(&supported_shapes()).unwrap();
        assert!(json.contains("count_distinct_keys_grouped"));
    }
}
