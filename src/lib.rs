//! Rolodex - an in-memory address book with validated contact fields.
//!
//! This library models a small contact list: phone numbers and birthdays are
//! validated at construction time, records aggregate one of each, and the
//! address book supports paginated traversal over its records.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays)
//! - **models**: The record aggregate
//! - **book**: The address book collection and page iterator
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rolodex::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! book.add_record(Record::new(
//!     Some("0935864755"),
//!     NaiveDate::from_ymd_opt(1994, 1, 22),
//! )?);
//!
//! for page in book.pages(2)? {
//!     for record in page {
//!         if let Some(days) = record.days_to_birthday() {
//!             println!("{} days to birthday", days);
//!         }
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError};
pub use models::Record;
