use serde::Serialize;

use crate::seed::MonthlyFlow;
use crate::summary::{CashFlowSummary, PayableSummary, ReceivableSummary};

/// Echo of the criteria a view was rendered with. `null` means "all".
#[derive(Debug, Clone, Serialize)]
pub struct FilterEcho {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayableRow {
    pub id: String,
    pub supplier: String,
    pub amount: f64,
    pub issue_date: String,
    pub due_date: String,
    pub category: String,
    pub status: String,
    pub has_discount: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_bucket: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceivableRow {
    pub id: String,
    pub client: String,
    pub amount: f64,
    pub issue_date: String,
    pub due_date: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_bucket: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub kind: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayablesData {
    pub reference_date: String,
    pub filter: FilterEcho,
    pub summary: PayableSummary,
    pub rows: Vec<PayableRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceivablesData {
    pub reference_date: String,
    pub filter: FilterEcho,
    pub summary: ReceivableSummary,
    pub rows: Vec<ReceivableRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CashFlowData {
    pub filter: FilterEcho,
    pub summary: CashFlowSummary,
    pub rows: Vec<TransactionRow>,
    pub monthly_flows: Vec<MonthlyFlow>,
}

/// One snapshot feeding all three summary-card rows of the container view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub reference_date: String,
    pub receivables: ReceivableSummary,
    pub payables: PayableSummary,
    pub cash_flow: CashFlowSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub rows_read: i64,
    pub rows_valid: i64,
    pub rows_invalid: i64,
}

/// One validation finding for one field of one source row.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}
