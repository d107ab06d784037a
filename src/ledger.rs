use chrono::NaiveDate;
use log::info;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::types::{Transaction, TransactionType};

/// append-only set of dated, typed transactions across accounts
///
/// a withdrawal is only accepted while the account's running total stays
/// non-negative; the check-then-append sequence is not atomic, so a
/// concurrent host must serialize access per account
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// rebuild a ledger from previously stored transactions, preserving order
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// validate and append a transaction, returning it with its derived id
    pub fn record(
        &mut self,
        account_id: &str,
        date: NaiveDate,
        kind: TransactionType,
        amount: Money,
    ) -> Result<Transaction> {
        if amount.is_zero() || amount.is_negative() {
            return Err(LedgerError::InvalidAmount {
                input: amount.to_string(),
            });
        }

        if kind == TransactionType::Withdrawal {
            let balance = self.balance(account_id);
            if (balance - amount).is_negative() {
                return Err(LedgerError::InsufficientFunds {
                    balance,
                    requested: amount,
                });
            }
        }

        let account_txns = self.for_account(account_id);
        let transaction = Transaction {
            id: derive_id(&account_txns, date),
            account_id: account_id.to_string(),
            date,
            kind,
            amount,
        };

        info!(
            "recorded {} {} {} for account {}",
            transaction.id, transaction.kind, transaction.amount, account_id
        );
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// all transactions for an account, in no guaranteed order; sort by
    /// (date, id) when chronology matters
    pub fn list_for_account(&self, account_id: &str) -> Vec<Transaction> {
        self.for_account(account_id).into_iter().cloned().collect()
    }

    /// current balance for an account: total deposits minus total withdrawals
    /// across the full history, irrespective of transaction dates
    pub fn balance(&self, account_id: &str) -> Money {
        self.for_account(account_id)
            .iter()
            .fold(Money::ZERO, |total, t| match t.kind {
                TransactionType::Deposit => total + t.amount,
                TransactionType::Withdrawal => total - t.amount,
            })
    }

    fn for_account(&self, account_id: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .collect()
    }
}

/// derive the `YYYYMMDD-NN` id for the next transaction on `date`, where NN
/// is the 1-based count of prior same-day transactions, zero-padded to two
/// digits (a day with more than 99 transactions breaks the format)
fn derive_id(existing: &[&Transaction], date: NaiveDate) -> String {
    let same_day = existing.iter().filter(|t| t.date == date).count();
    format!("{}-{:02}", date.format("%Y%m%d"), same_day + 1)
}
