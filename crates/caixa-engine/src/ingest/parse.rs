use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::ingest::RecordKind;

/// One raw source row. Values stay untyped strings until validation.
#[derive(Debug, Clone)]
pub(crate) struct ParsedRow {
    pub(crate) row: i64,
    fields: BTreeMap<String, String>,
}

impl ParsedRow {
    pub(crate) fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

pub(crate) fn parse_source(content: &str, kind: RecordKind) -> EngineResult<Vec<ParsedRow>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_argument("Ledger source is empty."));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed, kind);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed, kind);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(EngineError::invalid_source_format(
            "JSON input must be a top-level array of record objects.",
            "json_non_array",
        ));
    }

    Err(EngineError::invalid_source_format(
        "Unsupported ledger format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str, kind: RecordKind) -> EngineResult<Vec<ParsedRow>> {
    let parsed = serde_json::from_str::<Value>(content).map_err(|_| {
        EngineError::invalid_argument("Invalid JSON input. Provide a valid JSON array.")
    })?;

    let Some(items) = parsed.as_array() else {
        return Err(EngineError::invalid_source_format(
            "JSON input must be a top-level array of record objects.",
            "json_non_array",
        ));
    };

    let known = known_field_names(kind);
    let mut rows = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(EngineError::invalid_argument(
                "JSON array entries must all be objects with record fields.",
            ));
        };

        let mut fields = BTreeMap::new();
        for name in &known {
            if let Some(value) = read_optional_string(object.get(*name)) {
                fields.insert((*name).to_string(), value);
            }
        }
        rows.push(ParsedRow {
            row: (index as i64) + 1,
            fields,
        });
    }

    Ok(rows)
}

fn parse_csv(content: &str, kind: RecordKind) -> EngineResult<Vec<ParsedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| EngineError::invalid_argument("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers, kind) {
        return Err(EngineError::source_schema_mismatch(
            expected_headers(kind),
            headers,
        ));
    }

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row
            .map_err(|_| EngineError::invalid_argument("CSV rows are malformed or not UTF-8."))?;

        let mut fields = BTreeMap::new();
        for (header_index, name) in headers.iter().enumerate() {
            if let Some(value) = record.get(header_index) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    fields.insert(name.clone(), trimmed.to_string());
                }
            }
        }
        rows.push(ParsedRow {
            row: (row_index as i64) + 1,
            fields,
        });
    }

    Ok(rows)
}

fn read_optional_string(value: Option<&Value>) -> Option<String> {
    let current = value?;

    if current.is_null() {
        return None;
    }

    if let Some(string_value) = current.as_str() {
        return Some(string_value.to_string());
    }

    if let Some(bool_value) = current.as_bool() {
        return Some(bool_value.to_string());
    }

    if let Some(number_value) = current.as_f64() {
        return Some(number_value.to_string());
    }

    Some(current.to_string())
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}

fn headers_are_valid(actual_headers: &[String], kind: RecordKind) -> bool {
    let required = kind.required_field_names();
    let optional = kind.optional_field_names();

    for name in required {
        if !actual_headers.iter().any(|value| value == name) {
            return false;
        }
    }

    actual_headers.iter().all(|header| {
        required.iter().any(|name| header == name) || optional.iter().any(|name| header == name)
    })
}

fn expected_headers(kind: RecordKind) -> Vec<String> {
    let mut headers = kind
        .required_field_names()
        .iter()
        .map(|name| (*name).to_string())
        .collect::<Vec<String>>();
    headers.extend(kind.optional_field_names().iter().map(|name| (*name).to_string()));
    headers
}

fn known_field_names(kind: RecordKind) -> Vec<&'static str> {
    let mut names = kind.required_field_names().to_vec();
    names.extend_from_slice(kind.optional_field_names());
    names
}

#[cfg(test)]
mod tests {
    use super::parse_source;
    use crate::ingest::RecordKind;

    #[test]
    fn json_array_rows_expose_known_fields() {
        let body = r#"[
  {"id":"10","client":"Empresa Nova","amount":1200.5,"issue_date":"2025-09-01","due_date":"2025-10-01","status":"pending"}
]"#;
        let rows = parse_source(body, RecordKind::Receivables);
        assert!(rows.is_ok());
        if let Ok(parsed) = rows {
            assert_eq!(parsed.len(), 1);
            assert_eq!(parsed[0].get("client"), Some("Empresa Nova"));
            assert_eq!(parsed[0].get("amount"), Some("1200.5"));
            assert_eq!(parsed[0].get("missing"), None);
        }
    }

    #[test]
    fn csv_with_matching_headers_parses() {
        let body = "id,client,amount,issue_date,due_date,status\n10,Empresa Nova,1200.50,2025-09-01,2025-10-01,pending\n";
        let rows = parse_source(body, RecordKind::Receivables);
        assert!(rows.is_ok());
        if let Ok(parsed) = rows {
            assert_eq!(parsed.len(), 1);
            assert_eq!(parsed[0].get("status"), Some("pending"));
        }
    }

    #[test]
    fn csv_with_unknown_header_is_a_schema_mismatch() {
        let body = "id,customer,amount,issue_date,due_date,status\n10,X,1,2025-09-01,2025-10-01,pending\n";
        let result = parse_source(body, RecordKind::Receivables);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "source_schema_mismatch");
        }
    }

    #[test]
    fn non_array_json_is_rejected_with_format_error() {
        let result = parse_source(r#"{"id":"1"}"#, RecordKind::Payables);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn empty_source_is_rejected() {
        let result = parse_source("   \n", RecordKind::Transactions);
        assert!(result.is_err());
    }
}
