use chrono::NaiveDate;
use log::debug;

use crate::errors::{LedgerError, Result};
use crate::types::InterestRule;

/// table of interest rules keyed by effective date
///
/// at most one rule is held per effective date; a rule stays in force from its
/// effective date until superseded by a rule with a later effective date
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rules: Vec<InterestRule>,
}

impl RateTable {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// build a table by replaying rules in submission order, so a later rule
    /// for the same effective date supersedes an earlier one
    pub fn from_rules(rules: impl IntoIterator<Item = InterestRule>) -> Self {
        let mut table = Self::new();
        for rule in rules {
            table.upsert(rule);
        }
        table
    }

    /// insert a rule, replacing any existing rule with the same effective date
    pub fn upsert(&mut self, rule: InterestRule) {
        if let Some(existing) = self
            .rules
            .iter_mut()
            .find(|r| r.effective_date == rule.effective_date)
        {
            debug!(
                "replacing rule {} effective {} with {}",
                existing.rule_id, existing.effective_date, rule.rule_id
            );
            *existing = rule;
        } else {
            self.rules.push(rule);
        }
    }

    /// the rule in force on `day`: the one with the latest effective date
    /// not after `day`
    pub fn rate_on_date(&self, day: NaiveDate) -> Result<&InterestRule> {
        self.rules
            .iter()
            .filter(|r| r.effective_date <= day)
            .max_by_key(|r| r.effective_date)
            .ok_or(LedgerError::MissingRate { date: day })
    }

    /// all rules ascending by effective date
    pub fn list_ordered_by_date(&self) -> Vec<InterestRule> {
        let mut rules = self.rules.clone();
        rules.sort_by_key(|r| r.effective_date);
        rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    fn rule(date: (i32, u32, u32), id: &str, percent: rust_decimal::Decimal) -> InterestRule {
        InterestRule {
            effective_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            rule_id: id.to_string(),
            rate: Rate::from_percent(percent),
        }
    }

    #[test]
    fn test_latest_effective_date_wins() {
        let table = RateTable::from_rules([
            rule((2023, 1, 1), "RULE01", dec!(1.95)),
            rule((2023, 5, 20), "RULE02", dec!(1.90)),
            rule((2023, 6, 15), "RULE03", dec!(2.20)),
        ]);

        let june_1 = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert_eq!(table.rate_on_date(june_1).unwrap().rule_id, "RULE02");

        let june_15 = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(table.rate_on_date(june_15).unwrap().rule_id, "RULE03");
    }

    #[test]
    fn test_upsert_replaces_same_date() {
        let mut table = RateTable::new();
        table.upsert(rule((2023, 1, 1), "RULE01", dec!(1.95)));
        table.upsert(rule((2023, 1, 1), "RULE02", dec!(2.50)));

        let jan_1 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let active = table.rate_on_date(jan_1).unwrap();
        assert_eq!(active.rule_id, "RULE02");
        assert_eq!(active.rate, Rate::from_percent(dec!(2.50)));
        assert_eq!(table.list_ordered_by_date().len(), 1);
    }

    #[test]
    fn test_missing_rate() {
        let table = RateTable::from_rules([rule((2023, 6, 1), "RULE01", dec!(2.00))]);

        let before = NaiveDate::from_ymd_opt(2023, 5, 31).unwrap();
        assert!(matches!(
            table.rate_on_date(before),
            Err(LedgerError::MissingRate { date }) if date == before
        ));
    }

    #[test]
    fn test_rate_constant_between_effective_dates() {
        let table = RateTable::from_rules([
            rule((2023, 1, 1), "RULE01", dec!(1.95)),
            rule((2023, 7, 1), "RULE02", dec!(2.10)),
        ]);

        // every day from jan 1 to jun 30 resolves to the same rule
        let mut day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        while day <= end {
            assert_eq!(table.rate_on_date(day).unwrap().rule_id, "RULE01");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_list_ordered_by_date() {
        let table = RateTable::from_rules([
            rule((2023, 6, 15), "RULE03", dec!(2.20)),
            rule((2023, 1, 1), "RULE01", dec!(1.95)),
            rule((2023, 5, 20), "RULE02", dec!(1.90)),
        ]);

        let ordered = table.list_ordered_by_date();
        let ids: Vec<&str> = ordered.iter().map(|r| r.rule_id.as_str()).collect();
        assert_eq!(ids, ["RULE01", "RULE02", "RULE03"]);
    }
}
