use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use cashcard_rs::{
    CARD_OWNER_ROLE, CashCardDraft, PasswordHash, UserAccount, ValidatedPassword,
    stores::{CashCardStore, SQLiteCashCardStore, sqlite::initialize},
};

/// A utility for creating a test database and user directory for the cash card server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// File path to save the JSON user directory to.
    #[arg(long, short)]
    users_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);
    let users_path = Path::new(&args.users_path);

    for path in [output_path, users_path] {
        validate_new_file_path(path);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize(&conn)?;

    println!("Creating test cash cards...");

    let store = SQLiteCashCardStore::new(Arc::new(Mutex::new(conn)));
    for (id, amount, owner) in [
        (99, 123.45, "jack1"),
        (21, 37.69, "jack1"),
        (101, 150.00, "jack1"),
        (102, 200.00, "kumar2"),
    ] {
        store.save(CashCardDraft {
            id: Some(id),
            amount,
            owner: owner.to_owned(),
        })?;
    }

    println!("Creating test users at {users_path:#?}");

    let users = [
        ("jack1", "abc123", CARD_OWNER_ROLE),
        ("kumar2", "xyz789", CARD_OWNER_ROLE),
        ("hank-owns-no-cards", "qrs456", "NON-OWNER"),
    ]
    .into_iter()
    .map(|(username, password, role)| -> Result<UserAccount, cashcard_rs::Error> {
        Ok(UserAccount {
            username: username.to_owned(),
            password_hash: PasswordHash::new(
                ValidatedPassword::new_unchecked(password),
                PasswordHash::DEFAULT_COST,
            )?,
            roles: vec![role.to_owned()],
        })
    })
    .collect::<Result<Vec<_>, _>>()?;

    fs::write(users_path, serde_json::to_string_pretty(&users)?)?;

    println!("Success!");

    Ok(())
}

fn validate_new_file_path(path: &Path) {
    match path.extension() {
        None => {
            eprintln!(
                "Output path {path:#?} must include a file extension (e.g., 'my_database.db')."
            );
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!(
                "Output path {path:#?} must include a file extension (e.g., 'my_database.db')."
            );
            exit(1);
        }
        _ => {}
    }

    if path.is_file() {
        eprintln!("File already exists at {path:#?}!");
        exit(1);
    }
}
