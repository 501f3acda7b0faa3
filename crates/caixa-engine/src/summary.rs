use chrono::NaiveDate;
use serde::Serialize;

use crate::records::{Payable, Receivable, SettlementStatus, Transaction, TransactionKind};
use crate::schedule::{DueBucket, due_bucket};

/// Discount assumed for early settlement of discount-eligible payables. The
/// prototype hard-codes 5% everywhere; keep it a named constant.
pub const EARLY_PAYMENT_DISCOUNT_RATE: f64 = 0.05;

/// Headline numbers for the payables view, always computed over the entire
/// unfiltered ledger. The view's filter only decides which rows are visible.
#[derive(Debug, Clone, Serialize)]
pub struct PayableSummary {
    pub total: f64,
    pub paid_total: f64,
    pub pending_total: f64,
    pub overdue_total: f64,
    pub due_soon_total: f64,
    pub due_later_total: f64,
    pub discount_savings_total: f64,
    pub record_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceivableSummary {
    pub total: f64,
    pub paid_total: f64,
    pub pending_total: f64,
    pub overdue_total: f64,
    pub due_soon_total: f64,
    pub due_later_total: f64,
    /// Share of the ledger that is overdue, in percent, one decimal. Zero on
    /// an empty ledger.
    pub default_rate: f64,
    pub record_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CashFlowSummary {
    pub opening_balance: f64,
    pub income_total: f64,
    pub expense_total: f64,
    pub projected_balance: f64,
    /// (income - expense) / expense, in percent, one decimal. Zero when there
    /// are no expenses rather than a division by zero.
    pub variation_percent: f64,
    pub record_count: usize,
}

pub fn summarize_payables(records: &[Payable], today: NaiveDate) -> PayableSummary {
    let (due_soon_total, due_later_total) = bucket_totals(records, today);
    let discount_savings_total = records
        .iter()
        .filter(|record| record.has_discount)
        .map(|record| record.amount * EARLY_PAYMENT_DISCOUNT_RATE)
        .sum();

    PayableSummary {
        total: records.iter().map(|record| record.amount).sum(),
        paid_total: status_total(records, SettlementStatus::Paid),
        pending_total: status_total(records, SettlementStatus::Pending),
        overdue_total: status_total(records, SettlementStatus::Overdue),
        due_soon_total,
        due_later_total,
        discount_savings_total,
        record_count: records.len(),
    }
}

pub fn summarize_receivables(records: &[Receivable], today: NaiveDate) -> ReceivableSummary {
    let total: f64 = records.iter().map(|record| record.amount).sum();
    let overdue_total = status_total(records, SettlementStatus::Overdue);
    let (due_soon_total, due_later_total) = bucket_totals(records, today);

    let default_rate = if total > 0.0 {
        round_to(overdue_total / total * 100.0, 1)
    } else {
        0.0
    };

    ReceivableSummary {
        total,
        paid_total: status_total(records, SettlementStatus::Paid),
        pending_total: status_total(records, SettlementStatus::Pending),
        overdue_total,
        due_soon_total,
        due_later_total,
        default_rate,
        record_count: records.len(),
    }
}

pub fn summarize_cash_flow(records: &[Transaction], opening_balance: f64) -> CashFlowSummary {
    let income_total: f64 = records
        .iter()
        .filter(|record| record.kind == TransactionKind::Income)
        .map(|record| record.amount)
        .sum();
    let expense_total: f64 = records
        .iter()
        .filter(|record| record.kind == TransactionKind::Expense)
        .map(|record| record.amount)
        .sum();

    let variation_percent = if expense_total > 0.0 {
        round_to((income_total - expense_total) / expense_total * 100.0, 1)
    } else {
        0.0
    };

    CashFlowSummary {
        opening_balance,
        income_total,
        expense_total,
        projected_balance: opening_balance + income_total - expense_total,
        variation_percent,
        record_count: records.len(),
    }
}

fn status_total<T>(records: &[T], wanted: SettlementStatus) -> f64
where
    T: crate::schedule::ScheduledRecord + HasAmount,
{
    records
        .iter()
        .filter(|record| record.status() == wanted)
        .map(HasAmount::amount)
        .sum()
}

/// Pending amounts split by due bucket. Pending records already past their
/// due date bucket as overdue and therefore land in neither total; see the
/// policy note on `due_bucket`.
fn bucket_totals<T>(records: &[T], today: NaiveDate) -> (f64, f64)
where
    T: crate::schedule::ScheduledRecord + HasAmount,
{
    let mut due_soon = 0.0;
    let mut due_later = 0.0;
    for record in records {
        match due_bucket(record, today) {
            Some(DueBucket::DueSoon) => due_soon += record.amount(),
            Some(DueBucket::DueLater) => due_later += record.amount(),
            Some(DueBucket::Overdue) | None => {}
        }
    }
    (due_soon, due_later)
}

trait HasAmount {
    fn amount(&self) -> f64;
}

impl HasAmount for Payable {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl HasAmount for Receivable {
    fn amount(&self) -> f64 {
        self.amount
    }
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(1);
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor
}
