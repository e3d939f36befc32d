//! Dashboard domain models and mock data
//!
//! The dashboard renders mock financial data while account aggregation
//! is out of scope. The same records feed the crisis-plan flow: recent
//! transactions are flattened into the free-text field its prompt
//! expects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single account transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    /// Negative amounts are debits
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
}

/// One month of income vs expenses for the cash-flow chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

/// A bill due later this month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingBill {
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

/// Recent transactions shown on the dashboard
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "txn1".to_string(),
            description: "Starbucks".to_string(),
            amount: -5.75,
            date: NaiveDate::from_ymd_opt(2024, 7, 22).unwrap(),
            category: "Food".to_string(),
        },
        Transaction {
            id: "txn2".to_string(),
            description: "Paycheck".to_string(),
            amount: 1250.0,
            date: NaiveDate::from_ymd_opt(2024, 7, 21).unwrap(),
            category: "Income".to_string(),
        },
        Transaction {
            id: "txn3".to_string(),
            description: "Netflix Subscription".to_string(),
            amount: -15.99,
            date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
            category: "Bills".to_string(),
        },
        Transaction {
            id: "txn4".to_string(),
            description: "Gas Station".to_string(),
            amount: -45.3,
            date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
            category: "Transport".to_string(),
        },
        Transaction {
            id: "txn5".to_string(),
            description: "Grocery Store".to_string(),
            amount: -120.55,
            date: NaiveDate::from_ymd_opt(2024, 7, 19).unwrap(),
            category: "Food".to_string(),
        },
    ]
}

/// Six months of mock cash-flow data
pub fn sample_cash_flow() -> Vec<CashFlowEntry> {
    [
        ("Jan", 4000.0, 2400.0),
        ("Feb", 3000.0, 1398.0),
        ("Mar", 5000.0, 3800.0),
        ("Apr", 2780.0, 3908.0),
        ("May", 1890.0, 4800.0),
        ("Jun", 2390.0, 3800.0),
    ]
    .into_iter()
    .map(|(month, income, expenses)| CashFlowEntry {
        month: month.to_string(),
        income,
        expenses,
    })
    .collect()
}

/// Bills due soon, for the dashboard's reminder card
pub fn sample_upcoming_bills() -> Vec<UpcomingBill> {
    vec![
        UpcomingBill {
            name: "Monthly Rent".to_string(),
            amount: 2000.0,
            due_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
        },
        UpcomingBill {
            name: "Electricity Bill".to_string(),
            amount: 75.5,
            due_date: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
        },
        UpcomingBill {
            name: "Internet & Cable".to_string(),
            amount: 60.0,
            due_date: NaiveDate::from_ymd_opt(2024, 8, 10).unwrap(),
        },
    ]
}

/// Flatten transactions into the free-text form the crisis-plan flow
/// accepts, e.g. `"Starbucks: -5.75, Paycheck: 1250"`
pub fn format_recent_transactions(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|txn| format!("{}: {}", txn.description, txn.amount))
        .collect::<Vec<_>>()
        .join(", ")
}
