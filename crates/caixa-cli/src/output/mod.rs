mod cards;
mod error_text;
mod format;
mod json;
mod ledger_text;
mod mode;

use std::io;

use caixa_engine::{EngineError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    crate::stdout_io::write_stdout_line(&body)
}

pub fn print_failure(error: &EngineError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    crate::stdout_io::write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "receivables" => ledger_text::render_receivables(&success.data),
        "payables" => ledger_text::render_payables(&success.data),
        "cashflow" => ledger_text::render_cash_flow(&success.data),
        "dashboard" => ledger_text::render_dashboard(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
