use chrono::NaiveDate;

use crate::contracts::types::FilterEcho;
use crate::error::{EngineError, EngineResult};
use crate::filter::FilterCriteria;
use crate::records::{PayableCategory, SettlementStatus, TransactionKind};
use crate::seed::seed_reference_date;

/// Resolves `--today`. Library callers that pass nothing get the seed
/// reference date so seed-ledger output stays deterministic; the CLI injects
/// the local date before calling in.
pub(crate) fn resolve_reference_date(
    value: Option<&str>,
    command: &str,
) -> EngineResult<NaiveDate> {
    match value {
        Some(raw) => parse_iso_date_strict(raw, "today", command),
        None => Ok(seed_reference_date()),
    }
}

pub(crate) fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn parse_iso_date_strict(
    value: &str,
    field_name: &str,
    command: &str,
) -> EngineResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(EngineError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(command),
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        EngineError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with valid calendar values."),
            Some(command),
        )
    })
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

pub(crate) fn parse_status_key(
    value: Option<&str>,
    command: &str,
) -> EngineResult<Option<String>> {
    validated_key(value, command, "status", "paid, pending, overdue", |raw| {
        SettlementStatus::parse_key(raw).is_some()
    })
}

pub(crate) fn parse_category_key(
    value: Option<&str>,
    command: &str,
) -> EngineResult<Option<String>> {
    validated_key(
        value,
        command,
        "category",
        "suppliers, services, rent, utilities, salaries, other",
        |raw| PayableCategory::parse_key(raw).is_some(),
    )
}

pub(crate) fn parse_kind_key(value: Option<&str>, command: &str) -> EngineResult<Option<String>> {
    validated_key(value, command, "kind", "income, expense", |raw| {
        TransactionKind::parse_key(raw).is_some()
    })
}

fn validated_key<F>(
    value: Option<&str>,
    command: &str,
    field_name: &str,
    allowed: &str,
    is_known: F,
) -> EngineResult<Option<String>>
where
    F: Fn(&str) -> bool,
{
    let Some(raw) = value else {
        return Ok(None);
    };
    if !is_known(raw) {
        return Err(EngineError::invalid_argument_for_command(
            &format!("`{field_name}` must be one of: {allowed} (got `{raw}`)."),
            Some(command),
        ));
    }
    Ok(Some(raw.to_string()))
}

pub(crate) fn parse_opening_balance(value: Option<f64>, command: &str) -> EngineResult<f64> {
    match value {
        None => Ok(crate::seed::SEED_OPENING_BALANCE),
        Some(amount) if amount.is_finite() => Ok(amount),
        Some(_) => Err(EngineError::invalid_argument_for_command(
            "`balance` must be a finite number.",
            Some(command),
        )),
    }
}

pub(crate) fn filter_echo(criteria: &FilterCriteria) -> FilterEcho {
    FilterEcho {
        status: criteria.status.clone(),
        category: criteria.category.clone(),
        search: criteria.search.clone(),
    }
}
