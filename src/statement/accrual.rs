use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::DailyBalance;

/// simple daily interest accrued over a month of end-of-day balances,
/// annualized over 365 days and rounded half-up to cents
///
/// days are grouped by equality of the (rate, balance) pair across the whole
/// month, not by contiguous runs: separated day ranges with an identical pair
/// land in one group. interest per group is
/// `balance * rate_percent / 100 * day_count`
pub fn accrue(daily: &[DailyBalance]) -> Money {
    let annualized: Decimal = group_by_rate_and_balance(daily)
        .iter()
        .map(|(rate, balance, days)| {
            balance.as_decimal() * rate.as_fraction() * Decimal::from(*days) / Decimal::from(365)
        })
        .sum();

    Money::from_decimal_half_up(annualized)
}

fn group_by_rate_and_balance(daily: &[DailyBalance]) -> Vec<(Rate, Money, u32)> {
    let mut groups: Vec<(Rate, Money, u32)> = Vec::new();
    for record in daily {
        let key = (record.rule.rate, record.balance);
        match groups.iter_mut().find(|(r, b, _)| (*r, *b) == key) {
            Some((_, _, days)) => *days += 1,
            None => groups.push((key.0, key.1, 1)),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InterestRule;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(day: u32, balance: &str, percent: Decimal) -> DailyBalance {
        DailyBalance {
            date: NaiveDate::from_ymd_opt(2023, 6, day).unwrap(),
            balance: Money::from_str_exact(balance).unwrap(),
            rule: InterestRule {
                effective_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                rule_id: "RULE01".into(),
                rate: Rate::from_percent(percent),
            },
        }
    }

    #[test]
    fn test_empty_series_accrues_nothing() {
        assert_eq!(accrue(&[]), Money::ZERO);
    }

    #[test]
    fn test_flat_month() {
        // 100.00 at 3.65% for 30 days: 100 * 0.0365 * 30 / 365 = 0.30
        let daily: Vec<DailyBalance> = (1..=30).map(|d| record(d, "100.00", dec!(3.65))).collect();
        assert_eq!(accrue(&daily), Money::from_str_exact("0.30").unwrap());
    }

    #[test]
    fn test_rate_change_and_withdrawals_mid_month() {
        // 250.00 at 1.90% for 14 days, 250.00 at 2.20% for 11 days,
        // 130.00 at 2.20% for 5 days: (66.5 + 60.5 + 14.3) / 365 -> 0.39
        let mut daily = Vec::new();
        daily.extend((1..=14).map(|d| record(d, "250.00", dec!(1.90))));
        daily.extend((15..=25).map(|d| record(d, "250.00", dec!(2.20))));
        daily.extend((26..=30).map(|d| record(d, "130.00", dec!(2.20))));
        assert_eq!(accrue(&daily), Money::from_str_exact("0.39").unwrap());
    }

    #[test]
    fn test_separated_ranges_with_equal_pair_merge() {
        // balance dips and returns: days 1-10 and 21-30 share (rate, balance)
        // and aggregate as one 20-day group
        let mut daily = Vec::new();
        daily.extend((1..=10).map(|d| record(d, "200.00", dec!(2.00))));
        daily.extend((11..=20).map(|d| record(d, "50.00", dec!(2.00))));
        daily.extend((21..=30).map(|d| record(d, "200.00", dec!(2.00))));

        let groups = group_by_rate_and_balance(&daily);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].2, 20);
        assert_eq!(groups[1].2, 10);

        // 200 * 0.02 * 20 = 80, 50 * 0.02 * 10 = 10; 90 / 365 -> 0.25
        assert_eq!(accrue(&daily), Money::from_str_exact("0.25").unwrap());
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 365.00 at 1.00% for 1 day: exactly 0.01 after annualizing
        let daily = vec![record(1, "365.00", dec!(1.00))];
        assert_eq!(accrue(&daily), Money::from_str_exact("0.01").unwrap());

        // 182.50 at 1.00% for 1 day: 0.005 annualized, rounds up not to even
        let daily = vec![record(1, "182.50", dec!(1.00))];
        assert_eq!(accrue(&daily), Money::from_str_exact("0.01").unwrap());
    }

    #[test]
    fn test_zero_balance_days_accrue_nothing() {
        let daily: Vec<DailyBalance> = (1..=30).map(|d| record(d, "0.00", dec!(2.00))).collect();
        assert_eq!(accrue(&daily), Money::ZERO);
    }
}
