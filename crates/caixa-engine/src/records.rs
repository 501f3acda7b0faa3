use chrono::NaiveDate;
use serde::Serialize;

/// Settlement state shared by payables and receivables. `Overdue` is a stored
/// status, not a derived one: a pending record past its due date keeps status
/// `Pending` until something marks it otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Paid,
    Pending,
    Overdue,
}

impl SettlementStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse_key(value: &str) -> Option<Self> {
        match value {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayableCategory {
    Suppliers,
    Services,
    Rent,
    Utilities,
    Salaries,
    Other,
}

impl PayableCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Suppliers => "suppliers",
            Self::Services => "services",
            Self::Rent => "rent",
            Self::Utilities => "utilities",
            Self::Salaries => "salaries",
            Self::Other => "other",
        }
    }

    pub fn parse_key(value: &str) -> Option<Self> {
        match value {
            "suppliers" => Some(Self::Suppliers),
            "services" => Some(Self::Services),
            "rent" => Some(Self::Rent),
            "utilities" => Some(Self::Utilities),
            "salaries" => Some(Self::Salaries),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse_key(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// Money the business owes a supplier.
#[derive(Debug, Clone, Serialize)]
pub struct Payable {
    pub id: String,
    pub supplier: String,
    pub amount: f64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub category: PayableCategory,
    pub status: SettlementStatus,
    pub has_discount: bool,
}

/// Money a client owes the business. No category dimension.
#[derive(Debug, Clone, Serialize)]
pub struct Receivable {
    pub id: String,
    pub client: String,
    pub amount: f64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: SettlementStatus,
}

/// A dated income or expense movement. Category is free text here.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub category: String,
}

/// The three fields the filter cares about, so one implementation serves all
/// record kinds. The "status" of a transaction is its income/expense kind.
pub trait FilterableRecord {
    fn primary_name(&self) -> &str;
    fn status_key(&self) -> &'static str;
    fn category_key(&self) -> Option<&str>;
}

impl FilterableRecord for Payable {
    fn primary_name(&self) -> &str {
        &self.supplier
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.category.as_str())
    }
}

impl FilterableRecord for Receivable {
    fn primary_name(&self) -> &str {
        &self.client
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }

    fn category_key(&self) -> Option<&str> {
        None
    }
}

impl FilterableRecord for Transaction {
    fn primary_name(&self) -> &str {
        &self.description
    }

    fn status_key(&self) -> &'static str {
        self.kind.as_str()
    }

    fn category_key(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::{PayableCategory, SettlementStatus, TransactionKind};

    #[test]
    fn status_keys_round_trip() {
        for status in [
            SettlementStatus::Paid,
            SettlementStatus::Pending,
            SettlementStatus::Overdue,
        ] {
            assert_eq!(SettlementStatus::parse_key(status.as_str()), Some(status));
        }
        assert_eq!(SettlementStatus::parse_key("settled"), None);
    }

    #[test]
    fn category_keys_round_trip() {
        for category in [
            PayableCategory::Suppliers,
            PayableCategory::Services,
            PayableCategory::Rent,
            PayableCategory::Utilities,
            PayableCategory::Salaries,
            PayableCategory::Other,
        ] {
            assert_eq!(PayableCategory::parse_key(category.as_str()), Some(category));
        }
        assert_eq!(PayableCategory::parse_key("misc"), None);
    }

    #[test]
    fn transaction_kind_keys_round_trip() {
        assert_eq!(TransactionKind::parse_key("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse_key("expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse_key("transfer"), None);
    }
}
