use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};

/// transaction kinds that can be recorded against an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Deposit => write!(f, "D"),
            TransactionType::Withdrawal => write!(f, "W"),
        }
    }
}

/// a recorded account transaction, immutable once appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// derived identifier in `YYYYMMDD-NN` form, unique per account and day
    pub id: String,
    pub account_id: String,
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub amount: Money,
}

/// an interest rule taking effect on a given date, in force until superseded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRule {
    pub effective_date: NaiveDate,
    pub rule_id: String,
    pub rate: Rate,
}

/// end-of-day balance together with the rule in force that day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: Money,
    pub rule: InterestRule,
}

/// what a statement line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Deposit,
    Withdrawal,
    /// synthetic terminal entry for the month's accrued interest
    Interest,
}

impl From<TransactionType> for LineKind {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Deposit => LineKind::Deposit,
            TransactionType::Withdrawal => LineKind::Withdrawal,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Deposit => write!(f, "D"),
            LineKind::Withdrawal => write!(f, "W"),
            LineKind::Interest => write!(f, "I"),
        }
    }
}

/// one row of a monthly account statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub date: NaiveDate,
    /// empty for the synthetic interest line
    pub id: String,
    pub kind: LineKind,
    pub amount: Money,
    pub balance: Money,
}

/// a generated monthly statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub account_id: String,
    pub lines: Vec<StatementLine>,
}
