//! Metrics aggregation over record stores.
//!
//! Every function here is total: a zero denominator (empty input, or a
//! total of zero) yields `0.0`, never `NaN` or an error. Inputs are
//! borrowed and never mutated; nothing is cached between calls.

use creator_core::Record;
use serde::{Deserialize, Serialize};

/// `numerator / denominator`, or `0.0` when the result would not be finite.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// `numerator / denominator * 100`, guarded like [`safe_div`].
pub fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    safe_div(numerator, denominator) * 100.0
}

/// Σ field over all records.
pub fn total<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(field).sum()
}

/// Mean of `field`; `0.0` for an empty slice.
pub fn average<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    safe_div(total(records, field), records.len() as f64)
}

/// Σ numerator / Σ denominator × 100, e.g. click-through rate.
pub fn rate<T>(
    records: &[T],
    numerator: impl Fn(&T) -> f64,
    denominator: impl Fn(&T) -> f64,
) -> f64 {
    ratio_percent(total(records, numerator), total(records, denominator))
}

/// Share of one value in a total, in percent.
pub fn percentage_of_total(value: f64, total: f64) -> f64 {
    ratio_percent(value, total)
}

/// One percentage per record, in input order.
pub fn shares_of_total<T>(records: &[T], field: impl Fn(&T) -> f64) -> Vec<f64> {
    let sum = total(records, &field);
    records
        .iter()
        .map(|r| percentage_of_total(field(r), sum))
        .collect()
}

/// Return on investment: (revenue − cost) / cost × 100.
pub fn net_return(revenue: f64, cost: f64) -> f64 {
    ratio_percent(revenue - cost, cost)
}

/// Total for one group key together with its share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal<K> {
    pub key: K,
    pub amount: f64,
    pub percentage: f64,
}

/// Sum `field` per `key`. Groups appear in first-seen order.
pub fn group_totals<T, K: PartialEq + Clone>(
    records: &[T],
    key: impl Fn(&T) -> K,
    field: impl Fn(&T) -> f64,
) -> Vec<GroupTotal<K>> {
    let mut groups: Vec<GroupTotal<K>> = Vec::new();
    for record in records {
        let k = key(record);
        let amount = field(record);
        match groups.iter_mut().find(|g| g.key == k) {
            Some(group) => group.amount += amount,
            None => groups.push(GroupTotal {
                key: k,
                amount,
                percentage: 0.0,
            }),
        }
    }

    let grand_total: f64 = groups.iter().map(|g| g.amount).sum();
    for group in &mut groups {
        group.percentage = percentage_of_total(group.amount, grand_total);
    }
    groups
}

// -- by field name ----------------------------------------------------------

/// Numeric value of a named field; missing or non-numeric fields count as 0.
///
/// Goes through [`Record::field`], which serializes the whole record on every
/// lookup. Prefer the closure forms on hot paths.
pub fn numeric_field<R: Record>(record: &R, name: &str) -> f64 {
    record
        .field(name)
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// [`total`] addressed by field name.
pub fn total_of<R: Record>(records: &[R], name: &str) -> f64 {
    total(records, |r| numeric_field(r, name))
}

/// [`average`] addressed by field name.
pub fn average_of<R: Record>(records: &[R], name: &str) -> f64 {
    average(records, |r| numeric_field(r, name))
}

/// [`rate`] addressed by field names.
pub fn rate_of<R: Record>(records: &[R], numerator: &str, denominator: &str) -> f64 {
    rate(
        records,
        |r| numeric_field(r, numerator),
        |r| numeric_field(r, denominator),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
