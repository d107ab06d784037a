/// monthly statement walkthrough - rate changes mid-month, same-day
/// withdrawals, and the terminal interest entry
use bank_ledger_rs::{BankService, MemoryStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = BankService::new(MemoryStore::new(), MemoryStore::new());

    // three rules; the june statement spans the last two
    let rules = [
        "20230101 RULE01 1.95",
        "20230520 RULE02 1.90",
        "20230615 RULE03 2.20",
    ];
    for rule in rules {
        bank.define_rule(rule)?;
    }

    println!("Interest rules:");
    println!("| {:<8} | {:<8} | {:>8} |", "Date", "RuleId", "Rate (%)");
    for rule in bank.list_rules()? {
        println!(
            "| {} | {:<8} | {:>8} |",
            rule.effective_date.format("%Y%m%d"),
            rule.rule_id,
            format!("{:.2}", rule.rate.as_percent())
        );
    }

    bank.record_transaction("20230501 AC001 D 100.00")?;
    bank.record_transaction("20230601 AC001 D 150.00")?;
    bank.record_transaction("20230626 AC001 W 20.00")?;
    bank.record_transaction("20230626 AC001 W 100.00")?;

    // june: 250.00 at 1.90% for 14 days, 250.00 at 2.20% for 11 days,
    // 130.00 at 2.20% for 5 days -> 0.39 interest
    let statement = bank.statement("AC001 202306")?;

    println!("\nAccount: {}", statement.account_id);
    println!(
        "| {:<8} | {:<12} | {:<4} | {:>8} | {:>8} |",
        "Date", "Txn Id", "Type", "Amount", "Balance"
    );
    for line in &statement.lines {
        println!(
            "| {} | {:<12} | {:<4} | {:>8} | {:>8} |",
            line.date.format("%Y%m%d"),
            line.id,
            line.kind.to_string(),
            line.amount.to_string(),
            line.balance.to_string()
        );
    }

    Ok(())
}
