mod parse;
mod validate;

use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::records::{Payable, Receivable, Transaction};

/// Which ledger schema a source file must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Payables,
    Receivables,
    Transactions,
}

impl RecordKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Payables => "payables",
            Self::Receivables => "receivables",
            Self::Transactions => "transactions",
        }
    }

    pub(crate) fn required_field_names(self) -> &'static [&'static str] {
        match self {
            Self::Payables => &[
                "id",
                "supplier",
                "amount",
                "issue_date",
                "due_date",
                "category",
                "status",
            ],
            Self::Receivables => &["id", "client", "amount", "issue_date", "due_date", "status"],
            Self::Transactions => &["id", "description", "amount", "date", "kind", "category"],
        }
    }

    pub(crate) fn optional_field_names(self) -> &'static [&'static str] {
        match self {
            Self::Payables => &["has_discount"],
            Self::Receivables | Self::Transactions => &[],
        }
    }
}

pub fn load_payables(path: &Path) -> EngineResult<Vec<Payable>> {
    let rows = parse::parse_source(&read_source(path)?, RecordKind::Payables)?;
    validate::validate_payables(rows)
}

pub fn load_receivables(path: &Path) -> EngineResult<Vec<Receivable>> {
    let rows = parse::parse_source(&read_source(path)?, RecordKind::Receivables)?;
    validate::validate_receivables(rows)
}

pub fn load_transactions(path: &Path) -> EngineResult<Vec<Transaction>> {
    let rows = parse::parse_source(&read_source(path)?, RecordKind::Transactions)?;
    validate::validate_transactions(rows)
}

fn read_source(path: &Path) -> EngineResult<String> {
    std::fs::read_to_string(path)
        .map_err(|err| EngineError::source_unreadable(path, &err.to_string()))
}
