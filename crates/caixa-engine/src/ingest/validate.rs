use std::collections::HashSet;

use chrono::NaiveDate;

use crate::contracts::types::{LedgerIssue, LoadSummary};
use crate::error::{EngineError, EngineResult};
use crate::ingest::parse::ParsedRow;
use crate::records::{
    Payable, PayableCategory, Receivable, SettlementStatus, Transaction, TransactionKind,
};

pub(crate) fn validate_payables(parsed_rows: Vec<ParsedRow>) -> EngineResult<Vec<Payable>> {
    let mut builder = Builder::new(parsed_rows.len());

    for raw in &parsed_rows {
        let issues_before = builder.issues.len();

        let id = builder.required_string(raw, "id");
        let supplier = builder.required_string(raw, "supplier");
        let amount = builder.amount(raw);
        let issue_date = builder.date(raw, "issue_date");
        let due_date = builder.date(raw, "due_date");
        let category = builder.enum_value(raw, "category", PayableCategory::parse_key, CATEGORY_KEYS);
        let status = builder.enum_value(raw, "status", SettlementStatus::parse_key, STATUS_KEYS);
        let has_discount = builder.optional_flag(raw, "has_discount");
        builder.date_order(raw, issue_date, due_date);
        builder.unique_id(raw, id.as_deref());

        if builder.issues.len() > issues_before {
            continue;
        }
        if let (Some(id), Some(supplier), Some(amount), Some(issue_date), Some(due_date), Some(category), Some(status)) =
            (id, supplier, amount, issue_date, due_date, category, status)
        {
            builder.valid += 1;
            builder.payables.push(Payable {
                id,
                supplier,
                amount,
                issue_date,
                due_date,
                category,
                status,
                has_discount,
            });
        }
    }

    builder.finish().map(|()| builder.payables)
}

pub(crate) fn validate_receivables(parsed_rows: Vec<ParsedRow>) -> EngineResult<Vec<Receivable>> {
    let mut builder = Builder::new(parsed_rows.len());

    for raw in &parsed_rows {
        let issues_before = builder.issues.len();

        let id = builder.required_string(raw, "id");
        let client = builder.required_string(raw, "client");
        let amount = builder.amount(raw);
        let issue_date = builder.date(raw, "issue_date");
        let due_date = builder.date(raw, "due_date");
        let status = builder.enum_value(raw, "status", SettlementStatus::parse_key, STATUS_KEYS);
        builder.date_order(raw, issue_date, due_date);
        builder.unique_id(raw, id.as_deref());

        if builder.issues.len() > issues_before {
            continue;
        }
        if let (Some(id), Some(client), Some(amount), Some(issue_date), Some(due_date), Some(status)) =
            (id, client, amount, issue_date, due_date, status)
        {
            builder.valid += 1;
            builder.receivables.push(Receivable {
                id,
                client,
                amount,
                issue_date,
                due_date,
                status,
            });
        }
    }

    builder.finish().map(|()| builder.receivables)
}

pub(crate) fn validate_transactions(parsed_rows: Vec<ParsedRow>) -> EngineResult<Vec<Transaction>> {
    let mut builder = Builder::new(parsed_rows.len());

    for raw in &parsed_rows {
        let issues_before = builder.issues.len();

        let id = builder.required_string(raw, "id");
        let description = builder.required_string(raw, "description");
        let amount = builder.amount(raw);
        let date = builder.date(raw, "date");
        let kind = builder.enum_value(raw, "kind", TransactionKind::parse_key, KIND_KEYS);
        let category = builder.required_string(raw, "category");
        builder.unique_id(raw, id.as_deref());

        if builder.issues.len() > issues_before {
            continue;
        }
        if let (Some(id), Some(description), Some(amount), Some(date), Some(kind), Some(category)) =
            (id, description, amount, date, kind, category)
        {
            builder.valid += 1;
            builder.transactions.push(Transaction {
                id,
                description,
                amount,
                date,
                kind,
                category,
            });
        }
    }

    builder.finish().map(|()| builder.transactions)
}

const STATUS_KEYS: &str = "paid, pending, overdue";
const CATEGORY_KEYS: &str = "suppliers, services, rent, utilities, salaries, other";
const KIND_KEYS: &str = "income, expense";

/// Collects typed records and per-row issues; malformed sources fail fast
/// with the complete issue list instead of silently dropping rows.
struct Builder {
    rows_read: usize,
    valid: usize,
    issues: Vec<LedgerIssue>,
    seen_ids: HashSet<String>,
    payables: Vec<Payable>,
    receivables: Vec<Receivable>,
    transactions: Vec<Transaction>,
}

impl Builder {
    fn new(rows_read: usize) -> Self {
        Self {
            rows_read,
            valid: 0,
            issues: Vec::new(),
            seen_ids: HashSet::new(),
            payables: Vec::new(),
            receivables: Vec::new(),
            transactions: Vec::new(),
        }
    }

    fn required_string(&mut self, raw: &ParsedRow, field: &str) -> Option<String> {
        let value = raw.get(field);
        if value.is_none() {
            self.issues.push(issue(
                raw.row,
                field,
                "missing_required_field",
                &format!("{field} must be present and non-empty."),
                Some("non-empty string"),
                Some(""),
            ));
        }
        value.map(str::to_string)
    }

    fn amount(&mut self, raw: &ParsedRow) -> Option<f64> {
        let text = self.required_string(raw, "amount")?;
        let Ok(value) = text.parse::<f64>() else {
            self.issues.push(issue(
                raw.row,
                "amount",
                "invalid_number",
                "amount must be a number.",
                Some("number"),
                Some(&text),
            ));
            return None;
        };
        if !value.is_finite() || value < 0.0 {
            self.issues.push(issue(
                raw.row,
                "amount",
                "negative_amount",
                "amount must be zero or positive.",
                Some(">= 0"),
                Some(&text),
            ));
            return None;
        }
        Some(value)
    }

    fn date(&mut self, raw: &ParsedRow, field: &str) -> Option<NaiveDate> {
        let text = self.required_string(raw, field)?;
        match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            Ok(value) => Some(value),
            Err(_) => {
                self.issues.push(issue(
                    raw.row,
                    field,
                    "invalid_date",
                    &format!("{field} must use YYYY-MM-DD format with a real calendar date."),
                    Some("YYYY-MM-DD"),
                    Some(&text),
                ));
                None
            }
        }
    }

    fn enum_value<T, F>(&mut self, raw: &ParsedRow, field: &str, parse: F, allowed: &str) -> Option<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let text = self.required_string(raw, field)?;
        let parsed = parse(&text);
        if parsed.is_none() {
            self.issues.push(issue(
                raw.row,
                field,
                "invalid_enum_value",
                &format!("{field} must be one of: {allowed}."),
                Some(allowed),
                Some(&text),
            ));
        }
        parsed
    }

    fn optional_flag(&mut self, raw: &ParsedRow, field: &str) -> bool {
        match raw.get(field) {
            None => false,
            Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => {
                self.issues.push(issue(
                    raw.row,
                    field,
                    "invalid_flag",
                    &format!("{field} must be true or false."),
                    Some("true|false"),
                    Some(other),
                ));
                false
            }
        }
    }

    fn date_order(&mut self, raw: &ParsedRow, issue_date: Option<NaiveDate>, due_date: Option<NaiveDate>) {
        if let (Some(issued), Some(due)) = (issue_date, due_date)
            && issued > due
        {
            self.issues.push(issue(
                raw.row,
                "due_date",
                "due_before_issue",
                "due_date must be on or after issue_date.",
                Some("issue_date <= due_date"),
                None,
            ));
        }
    }

    fn unique_id(&mut self, raw: &ParsedRow, id: Option<&str>) {
        let Some(id) = id else {
            return;
        };
        if !self.seen_ids.insert(id.to_string()) {
            self.issues.push(issue(
                raw.row,
                "id",
                "duplicate_id",
                "id must be unique within the collection.",
                Some("unique id"),
                Some(id),
            ));
        }
    }

    fn finish(&self) -> EngineResult<()> {
        if self.issues.is_empty() {
            return Ok(());
        }
        let invalid_rows = self
            .issues
            .iter()
            .map(|item| item.row)
            .collect::<HashSet<i64>>()
            .len();
        Err(EngineError::ledger_validation_failed(
            LoadSummary {
                rows_read: self.rows_read as i64,
                rows_valid: self.valid as i64,
                rows_invalid: invalid_rows as i64,
            },
            self.issues.clone(),
        ))
    }
}

fn issue(
    row: i64,
    field: &str,
    code: &str,
    description: &str,
    expected: Option<&str>,
    received: Option<&str>,
) -> LedgerIssue {
    LedgerIssue {
        row,
        field: field.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        expected: expected.map(str::to_string),
        received: received.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use crate::ingest::parse::parse_source;
    use crate::ingest::validate::{validate_payables, validate_receivables};
    use crate::ingest::RecordKind;
    use crate::records::SettlementStatus;

    fn parsed(body: &str, kind: RecordKind) -> Vec<crate::ingest::parse::ParsedRow> {
        let rows = parse_source(body, kind);
        assert!(rows.is_ok());
        rows.unwrap_or_default()
    }

    #[test]
    fn valid_receivable_rows_become_typed_records() {
        let body = r#"[
  {"id":"10","client":"Empresa Nova","amount":1200.5,"issue_date":"2025-09-01","due_date":"2025-10-01","status":"pending"}
]"#;
        let records = validate_receivables(parsed(body, RecordKind::Receivables));
        assert!(records.is_ok());
        if let Ok(rows) = records {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].status, SettlementStatus::Pending);
            assert!((rows[0].amount - 1200.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn unknown_status_fails_fast_with_enum_issue() {
        let body = r#"[
  {"id":"10","client":"Empresa Nova","amount":100,"issue_date":"2025-09-01","due_date":"2025-10-01","status":"settled"}
]"#;
        let result = validate_receivables(parsed(body, RecordKind::Receivables));
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "ledger_validation_failed");
            let issues = error
                .data
                .as_ref()
                .and_then(|data| data.get("issues"))
                .and_then(|value| value.as_array())
                .cloned()
                .unwrap_or_default();
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0]["code"], "invalid_enum_value");
            assert_eq!(issues[0]["field"], "status");
        }
    }

    #[test]
    fn negative_amounts_are_rejected_at_the_boundary() {
        let body = r#"[
  {"id":"10","client":"Empresa Nova","amount":-5,"issue_date":"2025-09-01","due_date":"2025-10-01","status":"paid"}
]"#;
        let result = validate_receivables(parsed(body, RecordKind::Receivables));
        assert!(result.is_err());
        if let Err(error) = result {
            let issues = error
                .data
                .as_ref()
                .and_then(|data| data.get("issues"))
                .and_then(|value| value.as_array())
                .cloned()
                .unwrap_or_default();
            assert_eq!(issues[0]["code"], "negative_amount");
        }
    }

    #[test]
    fn issue_date_after_due_date_is_rejected() {
        let body = r#"[
  {"id":"10","client":"Empresa Nova","amount":5,"issue_date":"2025-11-01","due_date":"2025-10-01","status":"paid"}
]"#;
        let result = validate_receivables(parsed(body, RecordKind::Receivables));
        assert!(result.is_err());
        if let Err(error) = result {
            let issues = error
                .data
                .as_ref()
                .and_then(|data| data.get("issues"))
                .and_then(|value| value.as_array())
                .cloned()
                .unwrap_or_default();
            assert_eq!(issues[0]["code"], "due_before_issue");
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let body = r#"[
  {"id":"10","client":"Empresa A","amount":5,"issue_date":"2025-09-01","due_date":"2025-10-01","status":"paid"},
  {"id":"10","client":"Empresa B","amount":7,"issue_date":"2025-09-01","due_date":"2025-10-01","status":"paid"}
]"#;
        let result = validate_receivables(parsed(body, RecordKind::Receivables));
        assert!(result.is_err());
        if let Err(error) = result {
            let issues = error
                .data
                .as_ref()
                .and_then(|data| data.get("issues"))
                .and_then(|value| value.as_array())
                .cloned()
                .unwrap_or_default();
            assert_eq!(issues[0]["code"], "duplicate_id");
            assert_eq!(issues[0]["row"], 2);
        }
    }

    #[test]
    fn payable_discount_flag_defaults_to_false_and_parses_true() {
        let body = r#"[
  {"id":"1","supplier":"Fornecedor A","amount":10,"issue_date":"2025-09-01","due_date":"2025-10-01","category":"services","status":"pending","has_discount":true},
  {"id":"2","supplier":"Fornecedor B","amount":10,"issue_date":"2025-09-01","due_date":"2025-10-01","category":"rent","status":"paid"}
]"#;
        let records = validate_payables(parsed(body, RecordKind::Payables));
        assert!(records.is_ok());
        if let Ok(rows) = records {
            assert!(rows[0].has_discount);
            assert!(!rows[1].has_discount);
        }
    }
}
