//! Revenue center stream totals, payouts and period aggregation.

use crate::aggregator::{average, group_totals, total, GroupTotal};
use chrono::NaiveDate;
use creator_core::types::{
    RevenueKind, RevenueStream, StreamStatus, Transaction, TransactionStatus,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub total_revenue: f64,
    /// Mean of the per-stream growth percentages.
    pub avg_growth: f64,
    pub active_streams: usize,
    /// Σ amount of pending transactions.
    pub pending_payouts: f64,
    pub average_per_stream: f64,
    pub by_kind: Vec<GroupTotal<RevenueKind>>,
    /// Net of transactions inside the requested period, when one was given.
    pub period: Option<PeriodTotal>,
}

/// Net transaction amount between two dates, both inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodTotal {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub earned: f64,
    pub fees: f64,
    pub net: f64,
    pub transactions: usize,
}

pub fn summarize(
    streams: &[RevenueStream],
    transactions: &[Transaction],
    period: Option<(NaiveDate, NaiveDate)>,
) -> RevenueSummary {
    RevenueSummary {
        total_revenue: total(streams, |s| s.amount),
        avg_growth: average(streams, |s| s.growth),
        active_streams: streams
            .iter()
            .filter(|s| s.status == StreamStatus::Active)
            .count(),
        pending_payouts: pending_payouts(transactions),
        average_per_stream: average(streams, |s| s.amount),
        by_kind: group_totals(streams, |s| s.kind, |s| s.amount),
        period: period.map(|(from, to)| period_total(transactions, from, to)),
    }
}

pub fn pending_payouts(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.status == TransactionStatus::Pending)
        .map(|t| t.amount)
        .sum()
}

/// Aggregate failed-excluded transactions dated within `[from, to]`.
///
/// Negative amounts (fees) are reported separately and netted.
pub fn period_total(transactions: &[Transaction], from: NaiveDate, to: NaiveDate) -> PeriodTotal {
    let in_period: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date >= from && t.date <= to)
        .filter(|t| t.status != TransactionStatus::Failed)
        .collect();

    let earned: f64 = in_period.iter().map(|t| t.amount).filter(|a| *a > 0.0).sum();
    let fees: f64 = in_period.iter().map(|t| t.amount).filter(|a| *a < 0.0).sum();

    PeriodTotal {
        from,
        to,
        earned,
        fees,
        net: earned + fees,
        transactions: in_period.len(),
    }
}
