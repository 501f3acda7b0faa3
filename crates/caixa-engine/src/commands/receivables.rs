use std::path::Path;

use chrono::NaiveDate;

use crate::commands::common::{
    filter_echo, format_iso_date, parse_status_key, resolve_reference_date,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{ReceivableRow, ReceivablesData};
use crate::error::EngineResult;
use crate::filter::{FilterCriteria, filter_records};
use crate::ingest::load_receivables;
use crate::records::Receivable;
use crate::schedule::due_bucket;
use crate::seed::seed_receivables;
use crate::summary::summarize_receivables;

const COMMAND: &str = "receivables";

#[derive(Debug, Default)]
pub struct ReceivablesOptions<'a> {
    pub today: Option<&'a str>,
    pub source: Option<&'a Path>,
    pub status: Option<&'a str>,
    pub search: &'a str,
}

pub fn view(options: ReceivablesOptions<'_>) -> EngineResult<SuccessEnvelope> {
    let today = resolve_reference_date(options.today, COMMAND)?;
    let criteria = FilterCriteria {
        status: parse_status_key(options.status, COMMAND)?,
        category: None,
        search: options.search.trim().to_string(),
    };

    let records = match options.source {
        Some(path) => load_receivables(path)?,
        None => seed_receivables(),
    };

    // Headline numbers always describe the whole ledger, never the filtered
    // slice.
    let summary = summarize_receivables(&records, today);
    let rows = filter_records(&records, &criteria)
        .into_iter()
        .map(|record| to_row(record, today))
        .collect();

    let data = ReceivablesData {
        reference_date: format_iso_date(today),
        filter: filter_echo(&criteria),
        summary,
        rows,
    };
    success(COMMAND, data)
}

fn to_row(record: Receivable, today: NaiveDate) -> ReceivableRow {
    let bucket = due_bucket(&record, today).map(|bucket| bucket.as_str().to_string());
    ReceivableRow {
        id: record.id,
        client: record.client,
        amount: record.amount,
        issue_date: format_iso_date(record.issue_date),
        due_date: format_iso_date(record.due_date),
        status: record.status.as_str().to_string(),
        due_bucket: bucket,
    }
}

#[cfg(test)]
mod tests {
    use super::{ReceivablesOptions, view};

    #[test]
    fn seed_view_reports_all_rows_and_ledger_summary() {
        let envelope = view(ReceivablesOptions::default());
        assert!(envelope.is_ok());
        if let Ok(ok) = envelope {
            assert!(ok.ok);
            assert_eq!(ok.command, "receivables");
            let rows = ok.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows.len(), 5);
            assert_eq!(ok.data["summary"]["record_count"], 5);
            assert_eq!(ok.data["reference_date"], "2025-10-01");
        }
    }

    #[test]
    fn status_filter_narrows_rows_but_not_the_summary() {
        let envelope = view(ReceivablesOptions {
            status: Some("overdue"),
            ..Default::default()
        });
        assert!(envelope.is_ok());
        if let Ok(ok) = envelope {
            let rows = ok.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows.len(), 2);
            for row in &rows {
                assert_eq!(row["status"], "overdue");
                assert_eq!(row["due_bucket"], "overdue");
            }
            assert_eq!(ok.data["summary"]["record_count"], 5);
            assert_eq!(ok.data["filter"]["status"], "overdue");
        }
    }

    #[test]
    fn search_matches_client_names_case_insensitively() {
        let envelope = view(ReceivablesOptions {
            search: "EMPRESA abc",
            ..Default::default()
        });
        assert!(envelope.is_ok());
        if let Ok(ok) = envelope {
            let rows = ok.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0]["id"], "1");
        }
    }

    #[test]
    fn unknown_status_key_is_rejected_before_loading_anything() {
        let result = view(ReceivablesOptions {
            status: Some("settled"),
            ..Default::default()
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn explicit_reference_date_shifts_the_buckets() {
        let envelope = view(ReceivablesOptions {
            today: Some("2025-08-01"),
            ..Default::default()
        });
        assert!(envelope.is_ok());
        if let Ok(ok) = envelope {
            assert_eq!(ok.data["reference_date"], "2025-08-01");
            // Two months early every pending due date sits beyond the window.
            assert_eq!(ok.data["summary"]["due_soon_total"], 0.0);
        }
    }
}
