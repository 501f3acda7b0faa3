use std::io;

use serde_json::Value;

use super::cards::{card_lines, cash_flow_cards, payable_cards, receivable_cards};
use super::format::{self, Align, Column, format_currency, format_date};

const NO_ACCOUNTS: &str = "  Nenhuma conta encontrada.";
const NO_TRANSACTIONS: &str = "  Nenhuma transação encontrada.";

pub fn render_receivables(data: &Value) -> io::Result<String> {
    let summary = field(data, "summary")?;
    let rows = row_array(data)?;

    let mut lines = vec![
        format!("Contas a Receber ({})", reference_date(data)),
        String::new(),
        "Resumo:".to_string(),
    ];
    lines.extend(card_lines(&receivable_cards(summary)));
    push_filter_line(&mut lines, data);

    lines.push(String::new());
    lines.push("Títulos:".to_string());
    if rows.is_empty() {
        lines.push(NO_ACCOUNTS.to_string());
        return Ok(lines.join("\n"));
    }

    let columns = [
        Column {
            name: "Cliente",
            align: Align::Left,
        },
        Column {
            name: "Valor",
            align: Align::Right,
        },
        Column {
            name: "Vencimento",
            align: Align::Left,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
        Column {
            name: "Situação",
            align: Align::Left,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "client"),
                format_currency(amount(row)),
                format_date(&text(row, "due_date")),
                status_label(&text(row, "status")),
                bucket_label(row),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table(&columns, &table_rows));

    Ok(lines.join("\n"))
}

pub fn render_payables(data: &Value) -> io::Result<String> {
    let summary = field(data, "summary")?;
    let rows = row_array(data)?;

    let mut lines = vec![
        format!("Contas a Pagar ({})", reference_date(data)),
        String::new(),
        "Resumo:".to_string(),
    ];
    lines.extend(card_lines(&payable_cards(summary)));
    push_filter_line(&mut lines, data);

    lines.push(String::new());
    lines.push("Títulos:".to_string());
    if rows.is_empty() {
        lines.push(NO_ACCOUNTS.to_string());
        return Ok(lines.join("\n"));
    }

    let columns = [
        Column {
            name: "Fornecedor",
            align: Align::Left,
        },
        Column {
            name: "Valor",
            align: Align::Right,
        },
        Column {
            name: "Vencimento",
            align: Align::Left,
        },
        Column {
            name: "Categoria",
            align: Align::Left,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
        Column {
            name: "Situação",
            align: Align::Left,
        },
        Column {
            name: "Desconto",
            align: Align::Left,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            let discount = if row.get("has_discount").and_then(Value::as_bool) == Some(true) {
                "5%".to_string()
            } else {
                "-".to_string()
            };
            vec![
                text(row, "supplier"),
                format_currency(amount(row)),
                format_date(&text(row, "due_date")),
                category_label(&text(row, "category")),
                status_label(&text(row, "status")),
                bucket_label(row),
                discount,
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table(&columns, &table_rows));

    Ok(lines.join("\n"))
}

pub fn render_cash_flow(data: &Value) -> io::Result<String> {
    let summary = field(data, "summary")?;
    let rows = row_array(data)?;

    let mut lines = vec![
        "Fluxo de Caixa".to_string(),
        String::new(),
        "Resumo:".to_string(),
    ];
    lines.extend(card_lines(&cash_flow_cards(summary)));
    push_filter_line(&mut lines, data);

    lines.push(String::new());
    lines.push("Transações:".to_string());
    if rows.is_empty() {
        lines.push(NO_TRANSACTIONS.to_string());
    } else {
        let columns = [
            Column {
                name: "Data",
                align: Align::Left,
            },
            Column {
                name: "Descrição",
                align: Align::Left,
            },
            Column {
                name: "Categoria",
                align: Align::Left,
            },
            Column {
                name: "Tipo",
                align: Align::Left,
            },
            Column {
                name: "Valor",
                align: Align::Right,
            },
        ];
        let table_rows = rows
            .iter()
            .map(|row| {
                let kind = text(row, "kind");
                let signed = if kind == "expense" {
                    -amount(row)
                } else {
                    amount(row)
                };
                vec![
                    format_date(&text(row, "date")),
                    text(row, "description"),
                    text(row, "category"),
                    kind_label(&kind),
                    format_currency(signed),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(format::render_table(&columns, &table_rows));
    }

    let series = data
        .get("monthly_flows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !series.is_empty() {
        lines.push(String::new());
        lines.push("Histórico (6 meses):".to_string());
        let columns = [
            Column {
                name: "Mês",
                align: Align::Left,
            },
            Column {
                name: "Entradas",
                align: Align::Right,
            },
            Column {
                name: "Saídas",
                align: Align::Right,
            },
        ];
        let table_rows = series
            .iter()
            .map(|point| {
                vec![
                    text(point, "month"),
                    format_currency(number(point, "inflow")),
                    format_currency(number(point, "outflow")),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(format::render_table(&columns, &table_rows));
    }

    Ok(lines.join("\n"))
}

pub fn render_dashboard(data: &Value) -> io::Result<String> {
    let receivables = field(data, "receivables")?;
    let payables = field(data, "payables")?;
    let cash_flow = field(data, "cash_flow")?;

    let mut lines = vec![format!("Visão Geral ({})", reference_date(data))];

    lines.push(String::new());
    lines.push("Contas a Receber:".to_string());
    lines.extend(card_lines(&receivable_cards(receivables)));

    lines.push(String::new());
    lines.push("Contas a Pagar:".to_string());
    lines.extend(card_lines(&payable_cards(payables)));

    lines.push(String::new());
    lines.push("Fluxo de Caixa:".to_string());
    lines.extend(card_lines(&cash_flow_cards(cash_flow)));

    Ok(lines.join("\n"))
}

fn push_filter_line(lines: &mut Vec<String>, data: &Value) {
    let Some(filter) = data.get("filter") else {
        return;
    };

    let mut parts = Vec::new();
    if let Some(status) = filter.get("status").and_then(Value::as_str) {
        parts.push(format!("status {}", status_label(status)));
    }
    if let Some(category) = filter.get("category").and_then(Value::as_str) {
        parts.push(format!("categoria {}", category_label(category)));
    }
    if let Some(search) = filter.get("search").and_then(Value::as_str)
        && !search.is_empty()
    {
        parts.push(format!("busca \"{search}\""));
    }
    if parts.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(format!("Filtros ativos: {}", parts.join(", ")));
}

fn status_label(key: &str) -> String {
    match key {
        "paid" => "Pago",
        "pending" => "Pendente",
        "overdue" => "Vencido",
        "income" => "Entrada",
        "expense" => "Saída",
        other => other,
    }
    .to_string()
}

fn category_label(key: &str) -> String {
    match key {
        "suppliers" => "Fornecedores",
        "services" => "Serviços",
        "rent" => "Aluguel",
        "utilities" => "Utilidades",
        "salaries" => "Salários",
        "other" => "Outros",
        free_text => free_text,
    }
    .to_string()
}

fn kind_label(key: &str) -> String {
    match key {
        "income" => "Entrada",
        "expense" => "Saída",
        other => other,
    }
    .to_string()
}

fn bucket_label(row: &Value) -> String {
    match row.get("due_bucket").and_then(Value::as_str) {
        Some("overdue") => "Vencido".to_string(),
        Some("due_soon") => "Até 30 dias".to_string(),
        Some("due_later") => "Após 30 dias".to_string(),
        _ => "-".to_string(),
    }
}

fn reference_date(data: &Value) -> String {
    data.get("reference_date")
        .and_then(Value::as_str)
        .map(format_date)
        .unwrap_or_else(|| "-".to_string())
}

fn row_array(data: &Value) -> io::Result<Vec<Value>> {
    data.get("rows")
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| io::Error::other("ledger output requires rows"))
}

fn field<'a>(data: &'a Value, key: &str) -> io::Result<&'a Value> {
    data.get(key)
        .ok_or_else(|| io::Error::other(format!("ledger output requires `{key}`")))
}

fn text(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}

fn amount(row: &Value) -> f64 {
    number(row, "amount")
}

fn number(row: &Value, key: &str) -> f64 {
    row.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_cash_flow, render_dashboard, render_payables, render_receivables};

    fn receivables_payload() -> serde_json::Value {
        json!({
            "reference_date": "2025-10-01",
            "filter": {"status": null, "category": null, "search": ""},
            "summary": {
                "total": 54_500.0,
                "paid_total": 15_000.0,
                "pending_total": 30_500.0,
                "overdue_total": 9_000.0,
                "due_soon_total": 8_500.0,
                "due_later_total": 22_000.0,
                "default_rate": 16.5,
                "record_count": 5,
            },
            "rows": [
                {
                    "id": "3",
                    "client": "Comércio XYZ",
                    "amount": 3_200.0,
                    "issue_date": "2025-08-10",
                    "due_date": "2025-09-10",
                    "status": "overdue",
                    "due_bucket": "overdue",
                }
            ],
        })
    }

    #[test]
    fn receivables_text_shows_heading_cards_and_rows() {
        let rendered = render_receivables(&receivables_payload());
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Contas a Receber (01/10/2025)"));
            assert!(text.contains("Total a Receber"));
            assert!(text.contains("R$ 54.500,00"));
            assert!(text.contains("16,5%"));
            assert!(text.contains("Comércio XYZ"));
            assert!(text.contains("10/09/2025"));
            assert!(text.contains("Vencido"));
            assert!(!text.contains("Filtros ativos"));
        }
    }

    #[test]
    fn empty_rows_render_the_no_accounts_line() {
        let mut payload = receivables_payload();
        payload["rows"] = json!([]);
        payload["filter"]["status"] = json!("paid");

        let rendered = render_receivables(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Nenhuma conta encontrada."));
            assert!(text.contains("Filtros ativos: status Pago"));
        }
    }

    #[test]
    fn payables_text_marks_discount_rows() {
        let payload = json!({
            "reference_date": "2025-10-01",
            "filter": {"status": null, "category": null, "search": ""},
            "summary": {
                "total": 4_500.0,
                "paid_total": 0.0,
                "pending_total": 4_500.0,
                "overdue_total": 0.0,
                "due_soon_total": 4_500.0,
                "due_later_total": 0.0,
                "discount_savings_total": 225.0,
                "record_count": 1,
            },
            "rows": [
                {
                    "id": "2",
                    "supplier": "Serviços de TI Beta",
                    "amount": 4_500.0,
                    "issue_date": "2025-09-15",
                    "due_date": "2025-10-15",
                    "category": "services",
                    "status": "pending",
                    "has_discount": true,
                    "due_bucket": "due_soon",
                }
            ],
        });

        let rendered = render_payables(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Economia com Descontos"));
            assert!(text.contains("R$ 225,00"));
            assert!(text.contains("Serviços"));
            assert!(text.contains("Até 30 dias"));
            assert!(text.contains("5%"));
        }
    }

    #[test]
    fn cash_flow_text_signs_expenses_and_shows_history() {
        let payload = json!({
            "filter": {"status": null, "category": null, "search": ""},
            "summary": {
                "opening_balance": 125_000.0,
                "income_total": 23_500.0,
                "expense_total": 24_500.0,
                "projected_balance": 124_000.0,
                "variation_percent": -4.1,
                "record_count": 2,
            },
            "rows": [
                {
                    "id": "1",
                    "description": "Recebimento - Empresa ABC",
                    "amount": 15_000.0,
                    "date": "2025-10-01",
                    "kind": "income",
                    "category": "Vendas",
                },
                {
                    "id": "2",
                    "description": "Pagamento - Fornecedor Alpha",
                    "amount": 12_000.0,
                    "date": "2025-10-02",
                    "kind": "expense",
                    "category": "Fornecedores",
                }
            ],
            "monthly_flows": [
                {"month": "Mai", "inflow": 45_000.0, "outflow": 32_000.0}
            ],
        });

        let rendered = render_cash_flow(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Saldo Projetado"));
            assert!(text.contains("-R$ 12.000,00"));
            assert!(text.contains("R$ 15.000,00"));
            assert!(text.contains("Histórico (6 meses):"));
            assert!(text.contains("Mai"));
        }
    }

    #[test]
    fn dashboard_text_has_all_three_sections() {
        let payload = json!({
            "reference_date": "2025-10-01",
            "receivables": {
                "total": 54_500.0, "paid_total": 15_000.0, "overdue_total": 9_000.0,
                "due_soon_total": 8_500.0, "default_rate": 16.5, "record_count": 5,
            },
            "payables": {
                "total": 70_700.0, "paid_total": 12_000.0, "overdue_total": 8_000.0,
                "discount_savings_total": 225.0, "record_count": 5,
            },
            "cash_flow": {
                "opening_balance": 125_000.0, "income_total": 23_500.0,
                "expense_total": 24_500.0, "projected_balance": 124_000.0,
                "variation_percent": -4.1, "record_count": 5,
            },
        });

        let rendered = render_dashboard(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Visão Geral (01/10/2025)"));
            assert!(text.contains("Contas a Receber:"));
            assert!(text.contains("Contas a Pagar:"));
            assert!(text.contains("Fluxo de Caixa:"));
            assert!(text.contains("R$ 124.000,00"));
        }
    }
}
