use serde_json::Value;

use super::format::{format_currency, format_percent};

/// One summary card: a headline metric with its context line.
#[derive(Debug, Clone)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub description: String,
}

pub fn receivable_cards(summary: &Value) -> Vec<SummaryCard> {
    let count = count(summary);
    vec![
        SummaryCard {
            title: "Total a Receber",
            value: format_currency(number(summary, "total")),
            description: format!("{count} títulos"),
        },
        SummaryCard {
            title: "Recebido",
            value: format_currency(number(summary, "paid_total")),
            description: "pagamentos confirmados".to_string(),
        },
        SummaryCard {
            title: "Vencido",
            value: format_currency(number(summary, "overdue_total")),
            description: format!(
                "inadimplência de {}",
                format_percent(number(summary, "default_rate"))
            ),
        },
        SummaryCard {
            title: "A Receber em 30 dias",
            value: format_currency(number(summary, "due_soon_total")),
            description: "vencimentos no período".to_string(),
        },
    ]
}

pub fn payable_cards(summary: &Value) -> Vec<SummaryCard> {
    let count = count(summary);
    vec![
        SummaryCard {
            title: "Total a Pagar",
            value: format_currency(number(summary, "total")),
            description: format!("{count} títulos"),
        },
        SummaryCard {
            title: "Pago",
            value: format_currency(number(summary, "paid_total")),
            description: "pagamentos confirmados".to_string(),
        },
        SummaryCard {
            title: "Vencido",
            value: format_currency(number(summary, "overdue_total")),
            description: "requer atenção imediata".to_string(),
        },
        SummaryCard {
            title: "Economia com Descontos",
            value: format_currency(number(summary, "discount_savings_total")),
            description: "pagamento antecipado (5%)".to_string(),
        },
    ]
}

pub fn cash_flow_cards(summary: &Value) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            title: "Saldo Atual",
            value: format_currency(number(summary, "opening_balance")),
            description: "saldo de abertura".to_string(),
        },
        SummaryCard {
            title: "Entradas",
            value: format_currency(number(summary, "income_total")),
            description: "recebimentos do período".to_string(),
        },
        SummaryCard {
            title: "Saídas",
            value: format_currency(number(summary, "expense_total")),
            description: "pagamentos do período".to_string(),
        },
        SummaryCard {
            title: "Saldo Projetado",
            value: format_currency(number(summary, "projected_balance")),
            description: format!(
                "variação de {}",
                format_percent(number(summary, "variation_percent"))
            ),
        },
    ]
}

pub fn card_lines(cards: &[SummaryCard]) -> Vec<String> {
    let entries = cards
        .iter()
        .map(|card| {
            (
                card.title,
                format!("{}  ({})", card.value, card.description),
            )
        })
        .collect::<Vec<(&str, String)>>();
    super::format::key_value_rows(&entries, 2)
}

fn number(summary: &Value, key: &str) -> f64 {
    summary.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn count(summary: &Value) -> u64 {
    summary
        .get("record_count")
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{card_lines, cash_flow_cards, receivable_cards};

    #[test]
    fn receivable_cards_format_the_default_rate() {
        let summary = json!({
            "total": 54_500.0,
            "paid_total": 15_000.0,
            "overdue_total": 9_000.0,
            "due_soon_total": 8_500.0,
            "default_rate": 16.5,
            "record_count": 5,
        });

        let cards = receivable_cards(&summary);
        assert_eq!(cards[0].value, "R$ 54.500,00");
        assert_eq!(cards[0].description, "5 títulos");
        assert!(cards[2].description.contains("16,5%"));
    }

    #[test]
    fn cash_flow_cards_carry_the_variation() {
        let summary = json!({
            "opening_balance": 125_000.0,
            "income_total": 23_500.0,
            "expense_total": 24_500.0,
            "projected_balance": 124_000.0,
            "variation_percent": -4.1,
        });

        let cards = cash_flow_cards(&summary);
        assert_eq!(cards[3].value, "R$ 124.000,00");
        assert!(cards[3].description.contains("-4,1%"));
    }

    #[test]
    fn card_lines_align_on_the_longest_title() {
        let summary = json!({
            "total": 1.0,
            "paid_total": 1.0,
            "overdue_total": 1.0,
            "due_soon_total": 1.0,
            "default_rate": 0.0,
            "record_count": 1,
        });

        let lines = card_lines(&receivable_cards(&summary));
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("  Total a Receber"));
    }
}
