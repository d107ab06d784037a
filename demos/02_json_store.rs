/// json file persistence - rules and transactions survive across runs
use bank_ledger_rs::{BankService, JsonFileStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // both collections live under ./DATA, created on first write
    let mut bank = BankService::new(JsonFileStore::new("./DATA"), JsonFileStore::new("./DATA"));

    bank.define_rule("20230101 RULE01 2.00")?;
    bank.record_transaction("20230110 AC001 D 250.00")?;

    // a second service over the same directory sees the stored state
    let bank_reloaded = BankService::new(JsonFileStore::new("./DATA"), JsonFileStore::new("./DATA"));
    let statement = bank_reloaded.statement("AC001 202301")?;

    println!("Account: {}", statement.account_id);
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
