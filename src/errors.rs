use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("too few tokens provided: expected {expected} but got {actual}")]
    TooFewTokens {
        expected: usize,
        actual: usize,
    },

    #[error("too many tokens provided: expected {expected} but got {actual}")]
    TooManyTokens {
        expected: usize,
        actual: usize,
    },

    #[error("{input} is not a valid date, expected YYYYMMDD")]
    InvalidDate {
        input: String,
    },

    #[error("{input} is not a valid year-month, expected YYYYMM")]
    InvalidYearMonth {
        input: String,
    },

    #[error("{input} is not a valid amount: must be greater than 0 with at most 2 decimal places")]
    InvalidAmount {
        input: String,
    },

    #[error("{input} is not a valid interest rate: must be greater than 0 and less than 100")]
    InvalidRate {
        input: String,
    },

    #[error("{input} is not a valid transaction type, expected D or W")]
    UnknownTransactionType {
        input: String,
    },

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        balance: Money,
        requested: Money,
    },

    #[error("no interest rule applies on {date}")]
    MissingRate {
        date: NaiveDate,
    },

    #[error("store error: {message}")]
    Store {
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Store {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Store {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
