use log::{info, warn};

use crate::errors::Result;
use crate::ledger::TransactionLedger;
use crate::parse;
use crate::rules::RateTable;
use crate::statement::StatementGenerator;
use crate::store::{RateRepository, TransactionRepository};
use crate::types::{InterestRule, Statement, Transaction};

/// orchestration over the two repositories: parse, validate, persist, compute
///
/// inputs are raw command strings; outputs are domain values, rendering is
/// left to the caller
pub struct BankService<R, T> {
    rates: R,
    transactions: T,
}

impl<R: RateRepository, T: TransactionRepository> BankService<R, T> {
    pub fn new(rates: R, transactions: T) -> Self {
        Self { rates, transactions }
    }

    /// define or replace an interest rule from `<Date> <RuleId> <Rate in %>`;
    /// returns the full rule list ordered by effective date
    pub fn define_rule(&mut self, input: &str) -> Result<Vec<InterestRule>> {
        let rule = parse::parse_rule_input(input)?;
        self.rates.upsert_rule(&rule)?;
        info!("defined rule {} at {}", rule.rule_id, rule.rate);

        let table = RateTable::from_rules(self.rates.load_rules()?);
        Ok(table.list_ordered_by_date())
    }

    /// all defined rules ordered by effective date
    pub fn list_rules(&self) -> Result<Vec<InterestRule>> {
        let table = RateTable::from_rules(self.rates.load_rules()?);
        Ok(table.list_ordered_by_date())
    }

    /// record a transaction from `<Date> <Account> <Type> <Amount>`; returns
    /// the account's transactions sorted by date then id
    pub fn record_transaction(&mut self, input: &str) -> Result<Vec<Transaction>> {
        let request = parse::parse_transaction_input(input)?;

        let history = self.transactions.load_for_account(&request.account_id)?;
        let mut ledger = TransactionLedger::from_transactions(history);
        let transaction = ledger
            .record(&request.account_id, request.date, request.kind, request.amount)
            .inspect_err(|err| {
                warn!("rejected transaction for {}: {err}", request.account_id)
            })?;
        self.transactions.append(&transaction)?;

        let mut listing = ledger.list_for_account(&request.account_id);
        listing.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));
        Ok(listing)
    }

    /// generate the monthly statement from `<Account> <YYYYMM>`
    pub fn statement(&self, input: &str) -> Result<Statement> {
        let request = parse::parse_statement_input(input)?;

        let transactions = self.transactions.load_for_account(&request.account_id)?;
        let rates = RateTable::from_rules(self.rates.load_rules()?);
        StatementGenerator::new(&rates).generate(&request.account_id, &transactions, request.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::errors::LedgerError;
    use crate::store::MemoryStore;
    use crate::types::LineKind;

    fn service() -> BankService<MemoryStore, MemoryStore> {
        BankService::new(MemoryStore::new(), MemoryStore::new())
    }

    #[test]
    fn test_full_session_june_statement() {
        let mut bank = service();

        bank.define_rule("20230101 RULE01 1.95").unwrap();
        bank.define_rule("20230520 RULE02 1.90").unwrap();
        bank.define_rule("20230615 RULE03 2.20").unwrap();

        bank.record_transaction("20230501 AC001 D 100.00").unwrap();
        bank.record_transaction("20230601 AC001 D 150.00").unwrap();
        bank.record_transaction("20230626 AC001 W 20.00").unwrap();
        let listing = bank.record_transaction("20230626 AC001 W 100.00").unwrap();
        assert_eq!(listing.len(), 4);
        assert_eq!(listing[3].id, "20230626-02");

        let statement = bank.statement("AC001 202306").unwrap();
        let rendered: Vec<String> = statement
            .lines
            .iter()
            .map(|l| format!("{} {} {} {} {}", l.date.format("%Y%m%d"), l.id, l.kind, l.amount, l.balance))
            .collect();
        assert_eq!(
            rendered,
            [
                "20230601 20230601-01 D 150.00 250.00",
                "20230626 20230626-01 W 20.00 230.00",
                "20230626 20230626-02 W 100.00 130.00",
                "20230630  I 0.39 130.39",
            ]
        );
    }

    #[test]
    fn test_rules_listing_is_date_ordered_after_any_upsert() {
        let mut bank = service();
        bank.define_rule("20230615 RULE03 2.20").unwrap();
        let rules = bank.define_rule("20230101 RULE01 1.95").unwrap();

        let ids: Vec<&str> = rules.iter().map(|r| r.rule_id.as_str()).collect();
        assert_eq!(ids, ["RULE01", "RULE03"]);
    }

    #[test]
    fn test_overdraft_not_persisted() {
        let mut bank = service();
        bank.record_transaction("20230601 AC001 D 50.00").unwrap();

        let result = bank.record_transaction("20230602 AC001 W 60.00");
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));

        let listing = bank.record_transaction("20230603 AC001 D 1.00").unwrap();
        assert_eq!(listing.len(), 2);
    }

    #[test]
    fn test_statement_for_unknown_account_is_empty() {
        let bank = service();
        // no rules defined either; must not error
        let statement = bank.statement("AC404 202306").unwrap();
        assert!(statement.lines.is_empty());
    }

    #[test]
    fn test_malformed_input_reaches_no_store() {
        let mut bank = service();
        assert!(bank.record_transaction("20230601 AC001 D").is_err());
        assert!(bank.record_transaction("20230601 AC001 Z 10.00").is_err());
        assert!(bank.define_rule("20230101 RULE01 105").is_err());

        let statement = bank.statement("AC001 202306").unwrap();
        assert!(statement.lines.is_empty());
    }

    #[test]
    fn test_interest_only_statement_balance() {
        let mut bank = service();
        bank.define_rule("20230101 RULE01 1.95").unwrap();
        bank.record_transaction("20230115 AC001 D 1000.00").unwrap();

        let statement = bank.statement("AC001 202302").unwrap();
        assert_eq!(statement.lines.len(), 1);
        let line = &statement.lines[0];
        assert_eq!(line.kind, LineKind::Interest);
        // 1000.00 at 1.95% for 28 days over 365 -> 1.50 (half-up from 1.4958)
        assert_eq!(line.amount, Money::from_str_exact("1.50").unwrap());
        assert_eq!(line.balance, Money::from_str_exact("1001.50").unwrap());
    }
}
