use chrono::NaiveDate;
use serde::Serialize;

use crate::records::{
    Payable, PayableCategory, Receivable, SettlementStatus, Transaction, TransactionKind,
};

/// Opening balance the prototype hard-codes for the cash-flow view. It is an
/// external input, never derived from the transaction list.
pub const SEED_OPENING_BALANCE: f64 = 125_000.0;

/// Reference day the bundled ledger was authored against. Commands default to
/// the real local date; tests and demos pin this one for stable buckets.
pub fn seed_reference_date() -> NaiveDate {
    date(2025, 10, 1)
}

pub fn seed_payables() -> Vec<Payable> {
    vec![
        Payable {
            id: "1".to_string(),
            supplier: "Fornecedor Alpha".to_string(),
            amount: 12_000.0,
            issue_date: date(2025, 9, 10),
            due_date: date(2025, 10, 10),
            category: PayableCategory::Suppliers,
            status: SettlementStatus::Paid,
            has_discount: false,
        },
        Payable {
            id: "2".to_string(),
            supplier: "Serviços de TI Beta".to_string(),
            amount: 4_500.0,
            issue_date: date(2025, 9, 15),
            due_date: date(2025, 10, 15),
            category: PayableCategory::Services,
            status: SettlementStatus::Pending,
            has_discount: true,
        },
        Payable {
            id: "3".to_string(),
            supplier: "Aluguel Escritório".to_string(),
            amount: 8_000.0,
            issue_date: date(2025, 8, 1),
            due_date: date(2025, 9, 1),
            category: PayableCategory::Rent,
            status: SettlementStatus::Overdue,
            has_discount: false,
        },
        Payable {
            id: "4".to_string(),
            supplier: "Energia Elétrica".to_string(),
            amount: 1_200.0,
            issue_date: date(2025, 9, 20),
            due_date: date(2025, 10, 20),
            category: PayableCategory::Utilities,
            status: SettlementStatus::Pending,
            has_discount: false,
        },
        Payable {
            id: "5".to_string(),
            supplier: "Folha de Pagamento".to_string(),
            amount: 45_000.0,
            issue_date: date(2025, 9, 25),
            due_date: date(2025, 10, 5),
            category: PayableCategory::Salaries,
            status: SettlementStatus::Pending,
            has_discount: false,
        },
    ]
}

pub fn seed_receivables() -> Vec<Receivable> {
    vec![
        Receivable {
            id: "1".to_string(),
            client: "Empresa ABC Ltda".to_string(),
            amount: 15_000.0,
            issue_date: date(2025, 9, 15),
            due_date: date(2025, 10, 15),
            status: SettlementStatus::Paid,
        },
        Receivable {
            id: "2".to_string(),
            client: "Tech Solutions Inc".to_string(),
            amount: 8_500.0,
            issue_date: date(2025, 9, 20),
            due_date: date(2025, 10, 20),
            status: SettlementStatus::Pending,
        },
        Receivable {
            id: "3".to_string(),
            client: "Comércio XYZ".to_string(),
            amount: 3_200.0,
            issue_date: date(2025, 8, 10),
            due_date: date(2025, 9, 10),
            status: SettlementStatus::Overdue,
        },
        Receivable {
            id: "4".to_string(),
            client: "Indústria Beta".to_string(),
            amount: 22_000.0,
            issue_date: date(2025, 9, 25),
            due_date: date(2025, 11, 25),
            status: SettlementStatus::Pending,
        },
        Receivable {
            id: "5".to_string(),
            client: "Serviços Gamma".to_string(),
            amount: 5_800.0,
            issue_date: date(2025, 8, 5),
            due_date: date(2025, 9, 5),
            status: SettlementStatus::Overdue,
        },
    ]
}

pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            description: "Recebimento - Empresa ABC".to_string(),
            amount: 15_000.0,
            date: date(2025, 10, 1),
            kind: TransactionKind::Income,
            category: "Vendas".to_string(),
        },
        Transaction {
            id: "2".to_string(),
            description: "Pagamento - Fornecedor Alpha".to_string(),
            amount: 12_000.0,
            date: date(2025, 10, 2),
            kind: TransactionKind::Expense,
            category: "Fornecedores".to_string(),
        },
        Transaction {
            id: "3".to_string(),
            description: "Recebimento - Tech Solutions".to_string(),
            amount: 8_500.0,
            date: date(2025, 10, 3),
            kind: TransactionKind::Income,
            category: "Vendas".to_string(),
        },
        Transaction {
            id: "4".to_string(),
            description: "Pagamento - Aluguel".to_string(),
            amount: 8_000.0,
            date: date(2025, 10, 4),
            kind: TransactionKind::Expense,
            category: "Aluguel".to_string(),
        },
        Transaction {
            id: "5".to_string(),
            description: "Pagamento - Serviços de TI".to_string(),
            amount: 4_500.0,
            date: date(2025, 10, 5),
            kind: TransactionKind::Expense,
            category: "Serviços".to_string(),
        },
    ]
}

/// One point of the six-month inflow/outflow series behind the cash-flow
/// charts. Plain numbers only; rendering belongs to the consumer.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyFlow {
    pub month: String,
    pub inflow: f64,
    pub outflow: f64,
}

pub fn seed_monthly_flows() -> Vec<MonthlyFlow> {
    let points = [
        ("Mai", 45_000.0, 32_000.0),
        ("Jun", 52_000.0, 38_000.0),
        ("Jul", 48_000.0, 35_000.0),
        ("Ago", 61_000.0, 42_000.0),
        ("Set", 55_000.0, 39_000.0),
        ("Out", 58_000.0, 41_000.0),
    ];
    points
        .iter()
        .map(|(month, inflow, outflow)| MonthlyFlow {
            month: (*month).to_string(),
            inflow: *inflow,
            outflow: *outflow,
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
