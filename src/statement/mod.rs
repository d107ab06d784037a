pub mod accrual;
pub mod reconstruct;

use chrono::{Duration, Months, NaiveDate};

use crate::errors::{LedgerError, Result};
use crate::rules::RateTable;
use crate::types::{LineKind, Statement, StatementLine, Transaction, TransactionType};

pub use accrual::accrue;
pub use reconstruct::reconstruct_month;

/// one calendar month targeted by a statement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementPeriod {
    start: NaiveDate,
    next_month_start: NaiveDate,
}

impl StatementPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let invalid = || LedgerError::InvalidYearMonth {
            input: format!("{year:04}{month:02}"),
        };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month_start = start
            .checked_add_months(Months::new(1))
            .ok_or_else(invalid)?;
        Ok(Self {
            start,
            next_month_start,
        })
    }

    /// first day of the month
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// last day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.next_month_start - Duration::days(1)
    }

    /// first day of the following month
    pub fn next_month_start(&self) -> NaiveDate {
        self.next_month_start
    }

    /// whether a transaction dated `day` belongs on the statement; the upper
    /// bound is inclusive of the first day of the following month
    pub fn includes(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.next_month_start
    }

    /// every calendar day of the month, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.next_month_start;
        self.start.iter_days().take_while(move |d| *d < end)
    }
}

/// assembles monthly statements from a transaction history and a rate table
pub struct StatementGenerator<'a> {
    rates: &'a RateTable,
}

impl<'a> StatementGenerator<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// one line per transaction in the period, balances running from the
    /// pre-period total, then the month's interest as a terminal line
    ///
    /// an account with no transaction history yields an empty statement and
    /// consults no rules
    pub fn generate(
        &self,
        account_id: &str,
        transactions: &[Transaction],
        period: StatementPeriod,
    ) -> Result<Statement> {
        if transactions.is_empty() {
            return Ok(Statement {
                account_id: account_id.to_string(),
                lines: Vec::new(),
            });
        }

        let mut lines = self.transaction_lines(transactions, period);

        let daily = reconstruct::reconstruct_month(transactions, self.rates, period)?;
        let interest = accrual::accrue(&daily);
        if let Some(last) = daily.last() {
            lines.push(StatementLine {
                date: period.last_day(),
                id: String::new(),
                kind: LineKind::Interest,
                amount: interest,
                balance: last.balance + interest,
            });
        }

        Ok(Statement {
            account_id: account_id.to_string(),
            lines,
        })
    }

    fn transaction_lines(
        &self,
        transactions: &[Transaction],
        period: StatementPeriod,
    ) -> Vec<StatementLine> {
        let mut in_period: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| period.includes(t.date))
            .collect();
        in_period.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));

        let mut balance = reconstruct::balance_before(transactions, period.start());
        in_period
            .into_iter()
            .map(|t| {
                match t.kind {
                    TransactionType::Deposit => balance += t.amount,
                    TransactionType::Withdrawal => balance -= t.amount,
                }
                StatementLine {
                    date: t.date,
                    id: t.id.clone(),
                    kind: t.kind.into(),
                    amount: t.amount,
                    balance,
                }
            })
            .collect()
    }
}
