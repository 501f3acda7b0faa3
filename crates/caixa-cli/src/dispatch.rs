use std::path::Path;

use caixa_engine::commands::cashflow::{self, CashFlowOptions};
use caixa_engine::commands::dashboard::{self, DashboardOptions};
use caixa_engine::commands::payables::{self, PayablesOptions};
use caixa_engine::commands::receivables::{self, ReceivablesOptions};
use caixa_engine::{EngineResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> EngineResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Receivables {
            today,
            from,
            status,
            search,
            ..
        } => {
            let today = resolved_today(today.as_ref().map(crate::cli::IsoDate::as_str));
            receivables::view(ReceivablesOptions {
                today: Some(&today),
                source: from.as_deref().map(Path::new),
                status: status.as_deref(),
                search,
            })
        }
        Commands::Payables {
            today,
            from,
            status,
            category,
            search,
            ..
        } => {
            let today = resolved_today(today.as_ref().map(crate::cli::IsoDate::as_str));
            payables::view(PayablesOptions {
                today: Some(&today),
                source: from.as_deref().map(Path::new),
                status: status.as_deref(),
                category: category.as_deref(),
                search,
            })
        }
        Commands::Cashflow {
            from,
            balance,
            kind,
            search,
            ..
        } => cashflow::view(CashFlowOptions {
            source: from.as_deref().map(Path::new),
            opening_balance: *balance,
            kind: kind.as_deref(),
            search,
        }),
        Commands::Dashboard { today, balance, .. } => {
            let today = resolved_today(today.as_ref().map(crate::cli::IsoDate::as_str));
            dashboard::view(DashboardOptions {
                today: Some(&today),
                opening_balance: *balance,
            })
        }
    }
}

fn resolved_today(explicit: Option<&str>) -> String {
    match explicit {
        Some(value) => value.to_string(),
        None => chrono::Local::now()
            .date_naive()
            .format("%Y-%m-%d")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn dispatches_to_expected_command_names() {
        let cases: [(&[&str], &str); 4] = [
            (&["caixa", "receivables", "--today", "2025-10-01"], "receivables"),
            (&["caixa", "payables", "--today", "2025-10-01"], "payables"),
            (&["caixa", "cashflow"], "cashflow"),
            (&["caixa", "dashboard", "--today", "2025-10-01"], "dashboard"),
        ];

        for (args, expected_command) in cases {
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                let response = dispatch(&cli);
                assert!(response.is_ok());
                if let Ok(success) = response {
                    assert_eq!(success.command, expected_command);
                }
            }
        }
    }

    #[test]
    fn missing_today_still_dispatches_with_the_local_date() {
        let parsed = parse_from(["caixa", "receivables"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_ok());
        }
    }

    #[test]
    fn unreadable_source_surfaces_the_engine_error() {
        let parsed = parse_from(["caixa", "payables", "--from", "/nonexistent/ledger.json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "source_unreadable");
            }
        }
    }
}
