/// interactive teller - menu-driven session over the json file store
use std::io::{self, BufRead, Write};

use bank_ledger_rs::{BankService, JsonFileStore, Statement};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = BankService::new(JsonFileStore::new("./DATA"), JsonFileStore::new("./DATA"));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut first = true;

    loop {
        if first {
            println!("Welcome to AwesomeGIC Bank! What would you like to do?");
            first = false;
        } else {
            println!("Is there anything else you'd like to do?");
        }
        println!("[T] Input transactions");
        println!("[I] Define interest rules");
        println!("[P] Print statement");
        println!("[Q] Quit");
        print!("> ");
        io::stdout().flush()?;

        let action = match lines.next() {
            Some(line) => line?.trim().to_uppercase(),
            None => break,
        };

        match action.as_str() {
            "T" => {
                println!("Please enter transaction details in <Date> <Account> <Type> <Amount> format");
                println!("(or enter blank to go back to main menu):");
                if let Some(input) = prompt(&mut lines)? {
                    match bank.record_transaction(&input) {
                        Ok(transactions) => print_transactions(&transactions),
                        Err(err) => println!("{err}"),
                    }
                }
            }
            "I" => {
                println!("Please enter interest rules details in <Date> <RuleId> <Rate in %> format");
                println!("(or enter blank to go back to main menu):");
                if let Some(input) = prompt(&mut lines)? {
                    match bank.define_rule(&input) {
                        Ok(rules) => print_rules(&rules),
                        Err(err) => println!("{err}"),
                    }
                }
            }
            "P" => {
                println!("Please enter account and month to generate the statement <Account> <Year><Month>");
                println!("(or enter blank to go back to main menu):");
                if let Some(input) = prompt(&mut lines)? {
                    match bank.statement(&input) {
                        Ok(statement) => print_statement(&statement),
                        Err(err) => println!("{err}"),
                    }
                }
            }
            "Q" => {
                println!("Thank you for banking with AwesomeGIC Bank.");
                println!("Have a nice day!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<String>, io::Error> {
    print!("> ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => {
            let line = line?;
            if line.trim().is_empty() {
                Ok(None)
            } else {
                Ok(Some(line))
            }
        }
        None => Ok(None),
    }
}

fn print_transactions(transactions: &[bank_ledger_rs::Transaction]) {
    if let Some(first) = transactions.first() {
        println!("Account: {}", first.account_id);
    }
    println!("| {:<8} | {:<12} | {:<4} | {:>8} |", "Date", "Txn Id", "Type", "Amount");
    for t in transactions {
        println!(
            "| {} | {:<12} | {:<4} | {:>8} |",
            t.date.format("%Y%m%d"),
            t.id,
            t.kind.to_string(),
            t.amount.to_string()
        );
    }
}

fn print_rules(rules: &[bank_ledger_rs::InterestRule]) {
    println!("Interest rules:");
    println!("| {:<8} | {:<8} | {:>8} |", "Date", "RuleId", "Rate (%)");
    for rule in rules {
        println!(
            "| {} | {:<8} | {:>8} |",
            rule.effective_date.format("%Y%m%d"),
            rule.rule_id,
            format!("{:.2}", rule.rate.as_percent())
        );
    }
}

fn print_statement(statement: &Statement) {
    println!("Account: {}", statement.account_id);
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
}
