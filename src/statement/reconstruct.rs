use chrono::NaiveDate;

use crate::decimal::Money;
use crate::errors::Result;
use crate::rules::RateTable;
use crate::statement::StatementPeriod;
use crate::types::{DailyBalance, Transaction, TransactionType};

/// replay a transaction history into one end-of-day balance per calendar day
/// of the target month
///
/// the running balance is anchored on the account total over all transactions
/// dated before the month; same-day deposits and withdrawals are netted into
/// a single end-of-day figure. an account with no history at all reconstructs
/// to nothing and performs no rate lookups
pub fn reconstruct_month(
    transactions: &[Transaction],
    rates: &RateTable,
    period: StatementPeriod,
) -> Result<Vec<DailyBalance>> {
    if transactions.is_empty() {
        return Ok(Vec::new());
    }

    let mut balance = balance_before(transactions, period.start());
    let mut daily = Vec::new();

    for day in period.days() {
        let rule = rates.rate_on_date(day)?.clone();
        balance += net_on_day(transactions, day);
        daily.push(DailyBalance {
            date: day,
            balance,
            rule,
        });
    }

    Ok(daily)
}

/// account total over transactions dated strictly before `day`
pub(crate) fn balance_before(transactions: &[Transaction], day: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.date < day)
        .fold(Money::ZERO, |total, t| match t.kind {
            TransactionType::Deposit => total + t.amount,
            TransactionType::Withdrawal => total - t.amount,
        })
}

fn net_on_day(transactions: &[Transaction], day: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.date == day)
        .fold(Money::ZERO, |net, t| match t.kind {
            TransactionType::Deposit => net + t.amount,
            TransactionType::Withdrawal => net - t.amount,
        })
}
