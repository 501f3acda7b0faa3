mod common;

pub mod cashflow;
pub mod dashboard;
pub mod payables;
pub mod receivables;
