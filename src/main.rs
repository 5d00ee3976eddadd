mod alerts;
mod analytics;
mod error;
mod models;
mod operations;
mod store;

use std::io;
use std::str::FromStr;

use rust_decimal::Decimal;

use models::profile::Profile;
use operations::{add, export, import, remove, report};
use store::blob::BlobStore;
use store::ledger::Ledger;
use store::profile;

const DEFAULT_DATA_DIR: &str = "burners_data";

pub enum UserCommands {
    Add,
    List,
    Delete,
    Clear,
    Report,
    Profile,
    Export,
    Import,
    Exit,
    Unknown,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data_dir =
        std::env::var("BURNERS_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());

    let ledger_store = match BlobStore::open(&data_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open data directory '{}': {}", data_dir, e);
            return;
        }
    };
    let profile_store = match BlobStore::open(&data_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open data directory '{}': {}", data_dir, e);
            return;
        }
    };

    let mut ledger = Ledger::open(ledger_store);
    println!("Welcome to Budget Burners! ({} records loaded)", ledger.len());

    loop {
        println!(
            "Please enter a command (add, list, delete, clear, report, profile, export, import, exit):"
        );

        let input = match read_user_input() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match check_for_command(parts[0]) {
            UserCommands::Add => handle_add(&mut ledger),
            UserCommands::List => {
                print!("{}", report::format_transactions(&ledger.list()));
            }
            UserCommands::Delete => {
                println!("Provide the transaction id to delete:");
                let raw_id = match read_user_input() {
                    Ok(raw) => raw,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match remove::remove_transaction(&mut ledger, &raw_id) {
                    Ok(true) => println!("Transaction deleted."),
                    Ok(false) => println!("No transaction with id {}.", raw_id.trim()),
                    Err(e) => println!("Error: {}", e),
                }
            }
            UserCommands::Clear => {
                println!("This wipes all data permanently. Type 'yes' to confirm:");
                match read_user_input() {
                    Ok(confirm) if confirm == "yes" => match ledger.clear() {
                        Ok(()) => println!("All data wiped."),
                        Err(e) => println!("Error wiping data: {}", e),
                    },
                    _ => println!("Cancelled."),
                }
            }
            UserCommands::Report => {
                let loaded = profile::load(&profile_store);
                print!("{}", report::render(&ledger.list(), &loaded));
            }
            UserCommands::Profile => handle_profile(&profile_store),
            UserCommands::Export => {
                println!("Provide the file path to export to:");
                match read_user_input() {
                    Ok(path) => match export::export_csv(&ledger.list(), &path) {
                        Ok(count) => println!("Exported {} transactions.", count),
                        Err(e) => println!("Error exporting transactions: {}", e),
                    },
                    Err(e) => println!("Error reading input: {}", e),
                }
            }
            UserCommands::Import => {
                println!("Provide the file path to import from (csv):");
                match read_user_input() {
                    Ok(path) => match import::import_csv(&mut ledger, &path) {
                        Ok(count) => println!("Successfully imported {} transactions.", count),
                        Err(e) => println!("Error importing transactions: {}", e),
                    },
                    Err(e) => println!("Error reading input: {}", e),
                }
            }
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
            UserCommands::Unknown => {
                println!("No valid command found.");
            }
        }
    }
}

fn handle_add(ledger: &mut Ledger) {
    println!(
        "Enter transaction details in the format:\namount, type(income/expense), category, mode(online/cash)[, date(YYYY-MM-DD)[, note]]"
    );
    let input = match read_user_input() {
        Ok(details) => details,
        Err(e) => {
            println!("Error reading input: {}", e);
            return;
        }
    };

    let draft = match add::parse_draft(&input) {
        Ok(draft) => draft,
        Err(e) => {
            println!("Error: {}", e);
            println!("Please try again.");
            return;
        }
    };

    if !models::transaction::is_known_category(&draft.category) {
        println!(
            "Note: '{}' is not a known category; it will be stored as entered.",
            draft.category
        );
    }

    // Review before commit; warnings are advisory, the user decides.
    let warnings = add::review(&draft, &ledger.list());
    if !warnings.is_empty() {
        for warning in &warnings {
            println!("{}", warning);
        }
        println!("Proceed anyway? (y/n):");
        match read_user_input() {
            Ok(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => {
                println!("Transaction discarded.");
                return;
            }
        }
    }

    match ledger.append(draft) {
        Ok(stored) => println!("Transaction added with id {}.", stored.id),
        Err(e) => println!("Error adding transaction: {}", e),
    }
}

fn handle_profile(profile_store: &BlobStore) {
    let current = profile::load(profile_store);
    println!(
        "Current profile: name '{}', monthly budget {}",
        current.name,
        current
            .monthly_budget
            .map_or("not set".to_string(), |b| b.to_string()),
    );
    println!("Enter new settings as: name, monthly budget (blank budget to unset):");

    let input = match read_user_input() {
        Ok(details) => details,
        Err(e) => {
            println!("Error reading input: {}", e);
            return;
        }
    };
    let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();

    let name = parts.first().unwrap_or(&"").to_string();
    let monthly_budget = match parts.get(1) {
        Some(raw) if !raw.is_empty() => match Decimal::from_str(raw) {
            Ok(budget) => Some(budget),
            Err(_) => {
                println!("Invalid budget amount '{}'. Must be a valid number", raw);
                return;
            }
        },
        _ => None,
    };

    let updated = Profile {
        name,
        monthly_budget,
    };
    match profile::save(profile_store, &updated) {
        Ok(()) => println!("Settings saved."),
        Err(e) => println!("Error saving profile: {}", e),
    }
}

fn read_user_input() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    Ok(input.trim().to_string())
}

fn check_for_command(input: &str) -> UserCommands {
    match input {
        "add" => UserCommands::Add,
        "list" => UserCommands::List,
        "delete" => UserCommands::Delete,
        "clear" => UserCommands::Clear,
        "report" => UserCommands::Report,
        "profile" => UserCommands::Profile,
        "export" => UserCommands::Export,
        "import" => UserCommands::Import,
        "exit" => UserCommands::Exit,
        _ => UserCommands::Unknown,
    }
}
