use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::errors::Result;
use crate::store::{RateRepository, TransactionRepository};
use crate::types::{InterestRule, Transaction};

const RULES_FILE: &str = "interest-rules.json";
const TRANSACTIONS_FILE: &str = "account-transactions.json";

/// JSON file store keeping rules and transactions in two files under a data
/// directory, created on demand; a missing file reads as an empty collection
///
/// writes rewrite the whole file; callers only see the narrow repository
/// operations
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    rules_path: PathBuf,
    transactions_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            rules_path: data_dir.join(RULES_FILE),
            transactions_path: data_dir.join(TRANSACTIONS_FILE),
        }
    }

    fn read_rules(&self) -> Result<Vec<InterestRule>> {
        read_collection(&self.rules_path)
    }

    fn read_transactions(&self) -> Result<Vec<Transaction>> {
        read_collection(&self.transactions_path)
    }
}

impl RateRepository for JsonFileStore {
    fn upsert_rule(&mut self, rule: &InterestRule) -> Result<()> {
        let mut rules = self.read_rules()?;
        rules.retain(|r| r.effective_date != rule.effective_date);
        rules.push(rule.clone());
        write_collection(&self.rules_path, &rules)?;
        info!("stored rule {} effective {}", rule.rule_id, rule.effective_date);
        Ok(())
    }

    fn load_rules(&self) -> Result<Vec<InterestRule>> {
        self.read_rules()
    }
}

impl TransactionRepository for JsonFileStore {
    fn append(&mut self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.read_transactions()?;
        transactions.push(transaction.clone());
        write_collection(&self.transactions_path, &transactions)?;
        info!(
            "stored transaction {} for account {}",
            transaction.id, transaction.account_id
        );
        Ok(())
    }

    fn load_for_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .read_transactions()?
            .into_iter()
            .filter(|t| t.account_id == account_id)
            .collect())
    }
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_collection<T: serde::Serialize>(path: &Path, items: &[T]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_string_pretty(items)?)?;
    Ok(())
}
