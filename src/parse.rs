use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::statement::StatementPeriod;
use crate::types::{InterestRule, TransactionType};

/// a validated transaction request, before an id is derived for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    pub account_id: String,
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub amount: Money,
}

/// a validated statement request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRequest {
    pub account_id: String,
    pub period: StatementPeriod,
}

/// parse `<Date> <Account> <Type> <Amount>`
pub fn parse_transaction_input(input: &str) -> Result<TransactionInput> {
    let tokens = expect_tokens(input, 4)?;
    Ok(TransactionInput {
        date: parse_date(tokens[0])?,
        account_id: tokens[1].to_string(),
        kind: parse_transaction_type(tokens[2])?,
        amount: parse_amount(tokens[3])?,
    })
}

/// parse `<Date> <RuleId> <Rate in %>`
pub fn parse_rule_input(input: &str) -> Result<InterestRule> {
    let tokens = expect_tokens(input, 3)?;
    Ok(InterestRule {
        effective_date: parse_date(tokens[0])?,
        rule_id: tokens[1].to_string(),
        rate: parse_rate(tokens[2])?,
    })
}

/// parse `<Account> <YYYYMM>`
pub fn parse_statement_input(input: &str) -> Result<StatementRequest> {
    let tokens = expect_tokens(input, 2)?;
    Ok(StatementRequest {
        account_id: tokens[0].to_string(),
        period: parse_year_month(tokens[1])?,
    })
}

fn expect_tokens(input: &str, expected: usize) -> Result<Vec<&str>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() < expected {
        return Err(LedgerError::TooFewTokens {
            expected,
            actual: tokens.len(),
        });
    }
    if tokens.len() > expected {
        return Err(LedgerError::TooManyTokens {
            expected,
            actual: tokens.len(),
        });
    }
    Ok(tokens)
}

fn parse_date(token: &str) -> Result<NaiveDate> {
    if token.len() != 8 {
        return Err(LedgerError::InvalidDate {
            input: token.to_string(),
        });
    }
    NaiveDate::parse_from_str(token, "%Y%m%d").map_err(|_| LedgerError::InvalidDate {
        input: token.to_string(),
    })
}

fn parse_year_month(token: &str) -> Result<StatementPeriod> {
    let invalid = || LedgerError::InvalidYearMonth {
        input: token.to_string(),
    };
    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let year: i32 = token[..4].parse().map_err(|_| invalid())?;
    let month: u32 = token[4..].parse().map_err(|_| invalid())?;
    StatementPeriod::new(year, month).map_err(|_| invalid())
}

fn parse_transaction_type(token: &str) -> Result<TransactionType> {
    if token.eq_ignore_ascii_case("D") {
        Ok(TransactionType::Deposit)
    } else if token.eq_ignore_ascii_case("W") {
        Ok(TransactionType::Withdrawal)
    } else {
        Err(LedgerError::UnknownTransactionType {
            input: token.to_string(),
        })
    }
}

fn parse_amount(token: &str) -> Result<Money> {
    let invalid = || LedgerError::InvalidAmount {
        input: token.to_string(),
    };
    // the scale limit applies to the literal token, so 1.100 is rejected
    if let Some((_, fraction)) = token.split_once('.') {
        if fraction.len() > 2 {
            return Err(invalid());
        }
    }
    let amount = Decimal::from_str_exact(token).map_err(|_| invalid())?;
    if amount <= Decimal::ZERO {
        return Err(invalid());
    }
    Ok(Money::from_decimal(amount))
}

fn parse_rate(token: &str) -> Result<Rate> {
    let invalid = || LedgerError::InvalidRate {
        input: token.to_string(),
    };
    let percent = Decimal::from_str_exact(token).map_err(|_| invalid())?;
    if percent <= Decimal::ZERO || percent >= Decimal::from(100) {
        return Err(invalid());
    }
    Ok(Rate::from_percent(percent))
}
