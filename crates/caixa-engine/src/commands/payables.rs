use std::path::Path;

use chrono::NaiveDate;

use crate::commands::common::{
    filter_echo, format_iso_date, parse_category_key, parse_status_key, resolve_reference_date,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{PayableRow, PayablesData};
use crate::error::EngineResult;
use crate::filter::{FilterCriteria, filter_records};
use crate::ingest::load_payables;
use crate::records::Payable;
use crate::schedule::due_bucket;
use crate::seed::seed_payables;
use crate::summary::summarize_payables;

const COMMAND: &str = "payables";

#[derive(Debug, Default)]
pub struct PayablesOptions<'a> {
    pub today: Option<&'a str>,
    pub source: Option<&'a Path>,
    pub status: Option<&'a str>,
    pub category: Option<&'a str>,
    pub search: &'a str,
}

pub fn view(options: PayablesOptions<'_>) -> EngineResult<SuccessEnvelope> {
    let today = resolve_reference_date(options.today, COMMAND)?;
    let criteria = FilterCriteria {
        status: parse_status_key(options.status, COMMAND)?,
        category: parse_category_key(options.category, COMMAND)?,
        search: options.search.trim().to_string(),
    };

    let records = match options.source {
        Some(path) => load_payables(path)?,
        None => seed_payables(),
    };

    let summary = summarize_payables(&records, today);
    let rows = filter_records(&records, &criteria)
        .into_iter()
        .map(|record| to_row(record, today))
        .collect();

    let data = PayablesData {
        reference_date: format_iso_date(today),
        filter: filter_echo(&criteria),
        summary,
        rows,
    };
    success(COMMAND, data)
}

fn to_row(record: Payable, today: NaiveDate) -> PayableRow {
    let bucket = due_bucket(&record, today).map(|bucket| bucket.as_str().to_string());
    PayableRow {
        id: record.id,
        supplier: record.supplier,
        amount: record.amount,
        issue_date: format_iso_date(record.issue_date),
        due_date: format_iso_date(record.due_date),
        category: record.category.as_str().to_string(),
        status: record.status.as_str().to_string(),
        has_discount: record.has_discount,
        due_bucket: bucket,
    }
}
