use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

/// Formats an amount the way the ledger's users read money: `R$ 12.000,00`,
/// thousands separated by dots, cents after a comma.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    if value < -0.005 {
        format!("-R$ {whole},{frac:02}")
    } else {
        format!("R$ {whole},{frac:02}")
    }
}

/// One decimal place, comma as the decimal separator: `16,5%`.
pub fn format_percent(value: f64) -> String {
    let text = format!("{value:.1}").replace('.', ",");
    format!("{text}%")
}

/// Turns `2025-10-01` into `01/10/2025`. Anything that is not a plain ISO
/// date passes through untouched.
pub fn format_date(iso: &str) -> String {
    let parts = iso.split('-').collect::<Vec<&str>>();
    match parts.as_slice() {
        [year, month, day] if year.len() == 4 => format!("{day}/{month}/{year}"),
        _ => iso.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let length = digits.len();
    let mut grouped = String::with_capacity(length + length / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (length - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| {
            let pad = " ".repeat(label_width - label.chars().count());
            format!("{padding}{label}{pad}  {value}")
        })
        .collect()
}

/// Renders an aligned table. Widths count characters, not bytes, so accented
/// names line up.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = column_widths(columns, rows);
    let mut output = Vec::with_capacity(rows.len() + 1);

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();
    output.push(format_row(columns, &header, &widths));

    for row in rows {
        output.push(format_row(columns, row, &widths));
    }

    output
}

fn column_widths(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = columns
        .iter()
        .map(|column| column.name.chars().count())
        .collect::<Vec<usize>>();

    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.chars().count());
            }
        }
    }

    widths
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let mut pieces = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        let width = *widths.get(index).unwrap_or(&0);
        let value = cells.get(index).cloned().unwrap_or_default();
        let pad = " ".repeat(width.saturating_sub(value.chars().count()));

        let piece = match column.align {
            Align::Left => format!("{value}{pad}"),
            Align::Right => format!("{pad}{value}"),
        };
        pieces.push(piece);
    }

    let gap = " ".repeat(COLUMN_GAP);
    format!("{}{}", " ".repeat(INDENT), pieces.join(&gap))
        .trim_end()
        .to_string()
}
