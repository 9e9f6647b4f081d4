//! Transaction management for the ledger.
//!
//! This module contains everything related to individual transactions:
//! - The `Transaction` model and its persisted JSON layout
//! - The entry validator that turns user drafts into transactions
//! - Query helpers for filtering, sorting and time ranges
//! - Grouping of transactions by day for the list view

mod core;
mod grouping;
mod query;
mod range;
mod validation;

pub use core::{Transaction, TransactionId, TransactionType, parse_date};
pub use grouping::{DayGroup, format_date_label, format_short_date_label, group_by_day};
pub use query::{SortBy, TransactionQuery, TypeFilter, query, sort_transactions};
pub use range::{TimeRange, filter_by_time_range};
pub use validation::{EntryValidator, IdGenerator, TransactionDraft, ValidationError};
