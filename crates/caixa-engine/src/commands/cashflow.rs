use std::path::Path;

use crate::commands::common::{filter_echo, format_iso_date, parse_kind_key, parse_opening_balance};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CashFlowData, TransactionRow};
use crate::error::EngineResult;
use crate::filter::{FilterCriteria, filter_records};
use crate::ingest::load_transactions;
use crate::records::Transaction;
use crate::seed::{seed_monthly_flows, seed_transactions};
use crate::summary::summarize_cash_flow;

const COMMAND: &str = "cashflow";

#[derive(Debug, Default)]
pub struct CashFlowOptions<'a> {
    pub source: Option<&'a Path>,
    pub opening_balance: Option<f64>,
    pub kind: Option<&'a str>,
    pub search: &'a str,
}

pub fn view(options: CashFlowOptions<'_>) -> EngineResult<SuccessEnvelope> {
    let opening_balance = parse_opening_balance(options.opening_balance, COMMAND)?;
    // A transaction's filterable "status" is its income/expense kind.
    let criteria = FilterCriteria {
        status: parse_kind_key(options.kind, COMMAND)?,
        category: None,
        search: options.search.trim().to_string(),
    };

    let records = match options.source {
        Some(path) => load_transactions(path)?,
        None => seed_transactions(),
    };

    let summary = summarize_cash_flow(&records, opening_balance);
    let rows = filter_records(&records, &criteria)
        .into_iter()
        .map(to_row)
        .collect();

    // The six-month history belongs to the bundled ledger; an injected
    // source has no series to show.
    let monthly_flows = if options.source.is_none() {
        seed_monthly_flows()
    } else {
        Vec::new()
    };

    let data = CashFlowData {
        filter: filter_echo(&criteria),
        summary,
        rows,
        monthly_flows,
    };
    success(COMMAND, data)
}

fn to_row(record: Transaction) -> TransactionRow {
    TransactionRow {
        id: record.id,
        description: record.description,
        amount: record.amount,
        date: format_iso_date(record.date),
        kind: record.kind.as_str().to_string(),
        category: record.category,
    }
}
