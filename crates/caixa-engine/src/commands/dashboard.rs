use crate::commands::common::{format_iso_date, parse_opening_balance, resolve_reference_date};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::DashboardData;
use crate::error::EngineResult;
use crate::seed::{seed_payables, seed_receivables, seed_transactions};
use crate::summary::{summarize_cash_flow, summarize_payables, summarize_receivables};

const COMMAND: &str = "dashboard";

#[derive(Debug, Default)]
pub struct DashboardOptions<'a> {
    pub today: Option<&'a str>,
    pub opening_balance: Option<f64>,
}

/// One snapshot covering all three tabs, always over the bundled ledger.
pub fn view(options: DashboardOptions<'_>) -> EngineResult<SuccessEnvelope> {
    let today = resolve_reference_date(options.today, COMMAND)?;
    let opening_balance = parse_opening_balance(options.opening_balance, COMMAND)?;

    let data = DashboardData {
        reference_date: format_iso_date(today),
        receivables: summarize_receivables(&seed_receivables(), today),
        payables: summarize_payables(&seed_payables(), today),
        cash_flow: summarize_cash_flow(&seed_transactions(), opening_balance),
    };
    success(COMMAND, data)
}
