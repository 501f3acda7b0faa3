use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_status_key(value: &str) -> Result<String, String> {
    match value {
        "paid" | "pending" | "overdue" => Ok(value.to_string()),
        _ => Err("status must be one of: paid, pending, overdue".to_string()),
    }
}

pub fn parse_category_key(value: &str) -> Result<String, String> {
    match value {
        "suppliers" | "services" | "rent" | "utilities" | "salaries" | "other" => {
            Ok(value.to_string())
        }
        _ => Err(
            "category must be one of: suppliers, services, rent, utilities, salaries, other"
                .to_string(),
        ),
    }
}

pub fn parse_kind_key(value: &str) -> Result<String, String> {
    match value {
        "income" | "expense" => Ok(value.to_string()),
        _ => Err("kind must be one of: income, expense".to_string()),
    }
}

/// Extended help shown after `caixa <tab> --from --help` style lookups.
pub const FROM_AFTER_HELP: &str = "\
Ledger file formats:
  JSON — one top-level array of record objects
  CSV  — one header row with schema field names

  Payables fields:     id, supplier, amount, issue_date, due_date,
                       category, status, has_discount (optional)
  Receivables fields:  id, client, amount, issue_date, due_date, status
  Transactions fields: id, description, amount, date, kind, category

Field rules:
  Dates use exactly YYYY-MM-DD. Amounts are non-negative numbers.
  status: paid, pending, overdue
  category (payables): suppliers, services, rent, utilities, salaries, other
  kind (transactions): income, expense
  Every id must be unique within the file.

Malformed files are rejected as a whole; the error lists every row and
field that needs fixing.
";

#[derive(Debug, Parser)]
#[command(
    name = "caixa",
    version,
    about = "small-business ledger dashboard",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show receivables with summary cards and due-date buckets
    #[command(after_long_help = FROM_AFTER_HELP)]
    Receivables {
        /// Reference date for due buckets (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        /// Load the ledger from a JSON or CSV file instead of the bundled data
        #[arg(long)]
        from: Option<String>,
        /// Status filter: paid, pending, or overdue
        #[arg(long, value_parser = parse_status_key)]
        status: Option<String>,
        /// Case-insensitive substring match on the client name
        #[arg(long, default_value = "")]
        search: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show payables with summary cards, categories, and discount savings
    #[command(after_long_help = FROM_AFTER_HELP)]
    Payables {
        /// Reference date for due buckets (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        /// Load the ledger from a JSON or CSV file instead of the bundled data
        #[arg(long)]
        from: Option<String>,
        /// Status filter: paid, pending, or overdue
        #[arg(long, value_parser = parse_status_key)]
        status: Option<String>,
        /// Category filter: suppliers, services, rent, utilities, salaries, other
        #[arg(long, value_parser = parse_category_key)]
        category: Option<String>,
        /// Case-insensitive substring match on the supplier name
        #[arg(long, default_value = "")]
        search: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show transactions with the cash-flow summary and monthly history
    #[command(after_long_help = FROM_AFTER_HELP)]
    Cashflow {
        /// Load the ledger from a JSON or CSV file instead of the bundled data
        #[arg(long)]
        from: Option<String>,
        /// Opening balance for the projection (defaults to the bundled 125000)
        #[arg(long)]
        balance: Option<f64>,
        /// Kind filter: income or expense
        #[arg(long, value_parser = parse_kind_key)]
        kind: Option<String>,
        /// Case-insensitive substring match on the description
        #[arg(long, default_value = "")]
        search: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show all three summary-card rows from one snapshot of the bundled data
    Dashboard {
        /// Reference date for due buckets (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        /// Opening balance for the projection (defaults to the bundled 125000)
        #[arg(long)]
        balance: Option<f64>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
