//! Shape matcher: classify normalized query text against the catalog.
//!
//! Matching is an ordered table of (token signature, shape) rules
//! evaluated top to bottom. The grouped-count rule sits above the plain
//! count rule because its signature is a strict superset; checking plain
//! count first would mis-classify grouped requests.
//!
//! Filter predicates are extracted independently of the shape: their
//! presence narrows the aggregator's input but never changes the
//! classification.

use cleanroom_core::error::{Error, Result};
use cleanroom_core::fields;
use cleanroom_core::request::{AggregateKind, Predicate, QueryRequest};

use crate::guard;
use crate::normalize::normalize;

/// One row of the shape table: a shape matches when the normalized text
/// contains every token in `all_of`.
pub struct ShapeRule {
    pub kind: AggregateKind,
    pub all_of: &'static [&'static str],
}

/// Ordered shape table. Superset signatures first.
pub const SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule {
        kind: AggregateKind::CountDistinctKeysGrouped,
        all_of: &["COUNT(DISTINCT KEY)", "GROUP BY"],
    },
    ShapeRule {
        kind: AggregateKind::CountDistinctKeys,
        all_of: &["COUNT(DISTINCT KEY)"],
    },
    ShapeRule {
        kind: AggregateKind::SumPurchaseValue,
        all_of: &["SUM(PURCHASE_VALUE)"],
    },
];

/// Classify free query text into a structured request.
///
/// The text is normalized, screened by the privacy guard, then matched
/// against the shape table. No fallback guessing: unmatched text is an
/// `Unrecognized` error carrying the normalized form.
pub fn classify(text: &str) -> Result<QueryRequest> {
    let normalized = normalize(text);
    guard::check_text(&normalized)?;

    let rule = SHAPE_RULES
        .iter()
        .find(|rule| rule.all_of.iter().all(|token| normalized.contains(token)))
        .ok_or_else(|| Error::Unrecognized {
            normalized: normalized.clone(),
        })?;

    let mut request = QueryRequest::new(rule.kind);
    request.predicates = extract_predicates(&normalized);
    if rule.kind == AggregateKind::CountDistinctKeysGrouped {
        request.group_by = Some(extract_group_field(&normalized)?);
    }

    tracing::debug!(shape = ?rule.kind, predicates = request.predicates.len(), "classified query");

    Ok(request)
}

/// Pull equality predicates over filterable joined-record fields out of
/// the normalized text: boolean filters (`CLICKED = TRUE`) and quoted
/// string filters (`REGION = 'X'`).
fn extract_predicates(normalized: &str) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    for field in [fields::CLICKED, fields::PURCHASED] {
        let upper = field.to_uppercase();
        if normalized.contains(&format!("{} = TRUE", upper)) {
            predicates.push(Predicate::bool(field, true));
        } else if normalized.contains(&format!("{} = FALSE", upper)) {
            predicates.push(Predicate::bool(field, false));
        }
    }

    for field in [fields::REGION, fields::CAMPAIGN_ID] {
        let needle = format!("{} = '", field.to_uppercase());
        if let Some(start) = normalized.find(&needle) {
            let rest = &normalized[start + needle.len()..];
            if let Some(end) = rest.find('\'') {
                predicates.push(Predicate::str(field, &rest[..end]));
            }
        }
    }

    predicates
}

/// Read the grouping column after `GROUP BY`. Only non-identifying
/// columns are legal group fields; the key is routed to the privacy
/// rejection path.
fn extract_group_field(normalized: &str) -> Result<String> {
    let after = normalized
        .split("GROUP BY")
        .nth(1)
        .map(str::trim_start)
        .unwrap_or("");
    let ident: String = after
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if ident.is_empty() {
        return Err(Error::Unrecognized {
            normalized: normalized.to_string(),
        });
    }
    let field = ident.to_lowercase();
    if fields::is_raw_identifier(&field) {
        tracing::warn!(field = %field, "privacy guard rejected group field");
        return Err(Error::Privacy(format!(
            "grouping by identifier column '{}' is not permitted",
            field
        )));
    }
    if !fields::is_groupable(&field) {
        return Err(Error::Unrecognized {
            normalized: normalized.to_string(),
        });
    }
    Ok(field)
}
