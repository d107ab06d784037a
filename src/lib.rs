pub mod decimal;
pub mod errors;
pub mod ledger;
pub mod parse;
pub mod rules;
pub mod service;
pub mod statement;
pub mod store;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use ledger::TransactionLedger;
pub use parse::{StatementRequest, TransactionInput};
pub use rules::RateTable;
pub use service::BankService;
pub use statement::{accrue, reconstruct_month, StatementGenerator, StatementPeriod};
pub use store::{JsonFileStore, MemoryStore, RateRepository, TransactionRepository};
pub use types::{
    DailyBalance, InterestRule, LineKind, Statement, StatementLine, Transaction, TransactionType,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
