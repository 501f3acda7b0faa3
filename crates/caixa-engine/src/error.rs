use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::{LedgerIssue, LoadSummary};

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct EngineError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl EngineError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `caixa {cmd} --help` for usage."),
            None => "Run `caixa --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn source_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "source_unreadable",
            &format!("Cannot read ledger source at `{location}`: {detail}"),
            vec![
                format!("Check that `{location}` exists and is readable."),
                "Pass a JSON array or headered CSV file to --from.".to_string(),
            ],
        )
    }

    pub fn invalid_source_format(message: &str, received_format: &str) -> Self {
        Self::invalid_argument_with_recovery(
            message,
            vec![
                "Provide a supported ledger format (JSON array or CSV).".to_string(),
                "Run `caixa <command> --help` to confirm field requirements.".to_string(),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn source_schema_mismatch(expected_headers: Vec<String>, actual_headers: Vec<String>) -> Self {
        Self::new(
            "source_schema_mismatch",
            "CSV headers do not match the ledger schema for this record kind.",
            vec![
                "Include exactly the expected headers for the record kind.".to_string(),
                "Do not include unknown headers.".to_string(),
                "Rerun the command once the header row matches.".to_string(),
            ],
        )
        .with_data(json!({
            "expected_headers": expected_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn ledger_validation_failed(summary: LoadSummary, issues: Vec<LedgerIssue>) -> Self {
        let issue_count = summary.rows_invalid;
        Self::new(
            "ledger_validation_failed",
            &format!("Ledger source failed validation: {issue_count} rows need fixes."),
            vec![
                "Fix the listed issues in your source file.".to_string(),
                "Rerun the command with the corrected file.".to_string(),
            ],
        )
        .with_data(json!({
            "summary": summary,
            "issues": issues,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
