//! Dompet is a personal ledger for recording income and expenses in Rupiah.
//!
//! This library holds the ledger itself: a JSON-backed transaction store,
//! the entry validator that guards it, and the query and aggregation
//! functions behind the transaction list and the dashboard. The `dompet`
//! binary is a command line front end built on top of it.

#![warn(missing_docs)]

pub mod config;
mod csv;
mod currency;
pub mod dashboard;
mod error;
mod ledger;
mod logging;
mod notification;
pub mod stores;
mod timezone;
pub mod transaction;

pub use config::{CategorySuggestions, Config};
pub use csv::{CSV_HEADER, export_csv};
pub use currency::format_rupiah;
pub use error::Error;
pub use ledger::{Confirm, DELETE_CONFIRMATION_MESSAGE, Ledger, RemoveOutcome};
pub use logging::{DEFAULT_LOG_FILTER, setup_logging};
pub use notification::{LogNotifier, NoopNotifier, Notification, Notifier};
pub use timezone::{get_local_offset, local_now};
