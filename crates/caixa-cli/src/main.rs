mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use caixa_engine::EngineError;
use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Caixa - small-business ledger dashboard

Usage:
  caixa <command>

Start here:
  caixa dashboard
  caixa receivables
  caixa payables --help
";

const TOP_LEVEL_HELP: &str = "Caixa - small-business ledger dashboard

USAGE: caixa <command>

Try it:
  caixa dashboard                                 All three summary-card rows at once
  caixa receivables                               Receivables table with due buckets
  caixa payables                                  Payables table with categories and discounts
  caixa cashflow                                  Transactions, projection, and monthly history

Filter any view:
  caixa receivables --status overdue              Only overdue receivables
  caixa payables --category rent --search aluguel Combine filters freely
  caixa cashflow --kind expense                   Only money going out

Bring your own ledger:
  caixa payables --from ./payables.csv            Load a JSON array or headered CSV
  caixa payables --help                           Read the accepted file schema

Other options:
  --today 2025-10-01                              Pin the reference date for buckets
  --json                                          Machine-readable output

Run `caixa <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) && is_top_level_help_request(&raw_args)
                {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                EngineError::invalid_argument_for_command(&clean_message, command_hint);
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the recovery steps are the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn command_path_from_args(raw_args: &[String]) -> Option<&'static str> {
    let first_non_flag = raw_args
        .iter()
        .skip(1)
        .find(|value| !value.starts_with('-'))?;

    match first_non_flag.as_str() {
        "receivables" => Some("receivables"),
        "payables" => Some("payables"),
        "cashflow" => Some("cashflow"),
        "dashboard" => Some("dashboard"),
        _ => None,
    }
}

fn exit_code_for_error(error: &EngineError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::{command_path_from_args, strip_clap_boilerplate};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn command_path_uses_the_first_positional() {
        assert_eq!(
            command_path_from_args(&args(&["caixa", "payables", "--category", "misc"])),
            Some("payables")
        );
        assert_eq!(
            command_path_from_args(&args(&["caixa", "--json", "cashflow"])),
            Some("cashflow")
        );
        assert_eq!(command_path_from_args(&args(&["caixa", "--json"])), None);
        assert_eq!(command_path_from_args(&args(&["caixa", "unknown"])), None);
    }

    #[test]
    fn boilerplate_stripping_drops_the_usage_tail() {
        let message = "error: invalid value\n\nUsage: caixa receivables [OPTIONS]\n";
        assert_eq!(strip_clap_boilerplate(message), "error: invalid value");
    }
}
