//! Contact Book - an in-memory contact directory with birthday scheduling.
//!
//! This library stores named contact records, each holding validated phone
//! numbers and an optional birthday, and computes which contacts should be
//! congratulated in the coming week (weekend birthdays shift to the
//! following Monday).
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the [`Record`] entity owning a contact's fields
//! - **book**: the [`AddressBook`] container and reminder queries
//! - **scheduling**: pure date math for the reminder window
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//!
//! Command parsing, persistence, and presentation are the caller's
//! responsibility; the crate exposes operations and returns plain data.
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//! use contact_book::domain::PhoneNumber;
//!
//! let mut record = Record::new("John");
//! record.add_phone(PhoneNumber::new("1234567890")?);
//! record.set_birthday("18.05.1980")?;
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! assert!(book.find("John").is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod scheduling;

pub use book::{AddressBook, BirthdayReminder};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use models::Record;
