pub mod json;

use crate::errors::Result;
use crate::types::{InterestRule, Transaction};

pub use json::JsonFileStore;

/// persistence seam for interest rules
///
/// implementations must preserve insertion order and exact decimal precision
pub trait RateRepository {
    /// store a rule, replacing any rule with the same effective date
    fn upsert_rule(&mut self, rule: &InterestRule) -> Result<()>;

    fn load_rules(&self) -> Result<Vec<InterestRule>>;
}

/// append-only persistence seam for transactions
pub trait TransactionRepository {
    fn append(&mut self, transaction: &Transaction) -> Result<()>;

    fn load_for_account(&self, account_id: &str) -> Result<Vec<Transaction>>;
}

/// in-memory store, used by tests and demos
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rules: Vec<InterestRule>,
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateRepository for MemoryStore {
    fn upsert_rule(&mut self, rule: &InterestRule) -> Result<()> {
        match self
            .rules
            .iter_mut()
            .find(|r| r.effective_date == rule.effective_date)
        {
            Some(existing) => *existing = rule.clone(),
            None => self.rules.push(rule.clone()),
        }
        Ok(())
    }

    fn load_rules(&self) -> Result<Vec<InterestRule>> {
        Ok(self.rules.clone())
    }
}

impl TransactionRepository for MemoryStore {
    fn append(&mut self, transaction: &Transaction) -> Result<()> {
        self.transactions.push(transaction.clone());
        Ok(())
    }

    fn load_for_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::types::TransactionType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_memory_store_upsert_replaces() {
        let mut store = MemoryStore::new();
        store
            .upsert_rule(&InterestRule {
                effective_date: date(2023, 1, 1),
                rule_id: "RULE01".into(),
                rate: Rate::from_percent(dec!(1.95)),
            })
            .unwrap();
        store
            .upsert_rule(&InterestRule {
                effective_date: date(2023, 1, 1),
                rule_id: "RULE02".into(),
                rate: Rate::from_percent(dec!(2.10)),
            })
            .unwrap();

        let rules = store.load_rules().unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_id, "RULE02");
    }

    #[test]
    fn test_memory_store_filters_by_account() {
        let mut store = MemoryStore::new();
        for (account, id) in [("AC001", "20230601-01"), ("AC002", "20230601-01")] {
            store
                .append(&Transaction {
                    id: id.into(),
                    account_id: account.into(),
                    date: date(2023, 6, 1),
                    kind: TransactionType::Deposit,
                    amount: Money::from_major(10),
                })
                .unwrap();
        }

        let loaded = store.load_for_account("AC001").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].account_id, "AC001");
    }
}
