//! Rolodex - Main entry point
//!
//! Demonstration driver: builds a small address book and prints its records
//! page by page, with the day count to each upcoming birthday.

use anyhow::Result;
use chrono::NaiveDate;
use rolodex::{AddressBook, Config, Record};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can serve as the fallback
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded, page size: {}", config.page_size);

    let mut book = AddressBook::new();
    book.add_record(Record::new(
        Some("0935864755"),
        NaiveDate::from_ymd_opt(1994, 1, 22),
    )?);
    book.add_record(Record::new(
        Some("0963928493"),
        NaiveDate::from_ymd_opt(1995, 8, 10),
    )?);

    info!("Address book built with {} records", book.len());

    for page in book.pages(config.page_size)? {
        for record in page {
            if let Some(phone) = record.phone() {
                println!("Phone: {}", phone);
            }
            if let Some(days) = record.days_to_birthday() {
                println!("Days to birthday: {}", days);
            }
        }
    }

    Ok(())
}
