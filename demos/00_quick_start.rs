/// quick start - minimal example to get started
use bank_ledger_rs::{BankService, MemoryStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = BankService::new(MemoryStore::new(), MemoryStore::new());

    // one interest rule covering the whole period
    bank.define_rule("20230101 RULE01 1.95")?;

    // a deposit and a withdrawal
    bank.record_transaction("20230505 AC001 D 500.00")?;
    let transactions = bank.record_transaction("20230510 AC001 W 120.00")?;

    println!("Account: AC001");
    for t in &transactions {
        println!("{} {} {} {}", t.date.format("%Y%m%d"), t.id, t.kind, t.amount);
    }

    // monthly statement with the interest entry appended
    let statement = bank.statement("AC001 202305")?;
    println!("\nStatement for 2023-05:");
    for line in &statement.lines {
        println!(
            "{} {:<11} {} {:>8} {:>8}",
            line.date.format("%Y%m%d"),
            line.id,
            line.kind,
            line.amount.to_string(),
            line.balance.to_string()
        );
    }

    Ok(())
}
