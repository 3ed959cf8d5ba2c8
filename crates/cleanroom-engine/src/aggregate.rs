//! Aggregator: predicate filtering plus the three aggregate shapes.
//!
//! Pure function of (relation, request). "Distinct" needs no key access:
//! the load-time duplicate policy and the inner join guarantee at most
//! one joined record per key, so the filtered record count is the
//! distinct-key count.

use std::collections::BTreeMap;

use cleanroom_core::error::{Error, Result};
use cleanroom_core::fields;
use cleanroom_core::record::JoinedRecord;
use cleanroom_core::request::{AggregateKind, Predicate, PredicateValue, QueryRequest};
use cleanroom_core::ResultEnvelope;
use cleanroom_relation::JoinedRelation;

/// Compute the requested aggregate over the joined relation.
pub fn aggregate(relation: &JoinedRelation, request: &QueryRequest) -> Result<ResultEnvelope> {
    let mut filtered = Vec::new();
    for record in relation.records() {
        if matches_all(record, &request.predicates)? {
            filtered.push(record);
        }
    }

    match request.aggregate {
        AggregateKind::CountDistinctKeys => Ok(ResultEnvelope::Count(filtered.len() as u64)),
        AggregateKind::SumPurchaseValue => {
            let total: f64 = filtered.iter().map(|r| r.purchase_value).sum();
            Ok(ResultEnvelope::Sum(round2(total)))
        }
        AggregateKind::CountDistinctKeysGrouped => {
            let group_field = request.group_by.as_deref().unwrap_or(fields::REGION);
            let mut distribution: BTreeMap<String, u64> = BTreeMap::new();
            for record in &filtered {
                let group = group_value(record, group_field)?;
                *distribution.entry(group.to_string()).or_insert(0) += 1;
            }
            Ok(ResultEnvelope::Distribution(distribution))
        }
    }
}

fn matches_all(record: &JoinedRecord, predicates: &[Predicate]) -> Result<bool> {
    for predicate in predicates {
        if !matches_one(record, predicate)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Evaluate one equality predicate against a joined record. A predicate
/// over an unknown field or with a mismatched value type is a
/// computation error (a defect in the caller, not an expected case).
fn matches_one(record: &JoinedRecord, predicate: &Predicate) -> Result<bool> {
    let field = predicate.field.as_str();
    match (&predicate.value, field) {
        (PredicateValue::Bool(v), f) if f.eq_ignore_ascii_case(fields::CLICKED) => {
            Ok(record.clicked == *v)
        }
        (PredicateValue::Bool(v), f) if f.eq_ignore_ascii_case(fields::PURCHASED) => {
            Ok(record.purchased == *v)
        }
        (PredicateValue::Str(v), f) if f.eq_ignore_ascii_case(fields::REGION) => {
            // Normalization uppercases quoted literals; compare loosely.
            Ok(record.region.eq_ignore_ascii_case(v))
        }
        (PredicateValue::Str(v), f) if f.eq_ignore_ascii_case(fields::CAMPAIGN_ID) => {
            Ok(record.campaign_id.eq_ignore_ascii_case(v))
        }
        (PredicateValue::Bool(_), f) | (PredicateValue::Str(_), f) => Err(Error::Computation(
            format!("predicate over unknown or mistyped field '{}'", f),
        )),
    }
}

fn group_value<'a>(record: &'a JoinedRecord, group_field: &str) -> Result<&'a str> {
    if group_field.eq_ignore_ascii_case(fields::REGION) {
        Ok(&record.region)
    } else if group_field.eq_ignore_ascii_case(fields::CAMPAIGN_ID) {
        Ok(&record.campaign_id)
    } else {
        Err(Error::Computation(format!(
            "cannot group by field '{}'",
            group_field
        )))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(123.456), 123.46);
        assert_eq!(round2(99.994), 99.99);
    }
}
