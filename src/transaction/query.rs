//! Filtering and sorting of ledger snapshots for the transaction list.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

use super::core::{Transaction, TransactionType};

/// Which transaction types to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeFilter {
    /// Keep every transaction.
    #[default]
    All,
    /// Keep income only.
    Income,
    /// Keep expenses only.
    Expense,
}

impl TypeFilter {
    /// The kebab-case name of the filter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    fn matches(self, transaction_type: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => transaction_type == TransactionType::Income,
            Self::Expense => transaction_type == TransactionType::Expense,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(Error::InvalidOption(other.to_owned())),
        }
    }
}

impl Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// The order to list transactions in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Newest first.
    #[default]
    DateDesc,
    /// Oldest first.
    DateAsc,
    /// Largest amount first.
    AmountDesc,
    /// Smallest amount first.
    AmountAsc,
}

impl SortBy {
    /// The kebab-case name of the sort order.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::AmountDesc => "amount-desc",
            Self::AmountAsc => "amount-asc",
        }
    }

    fn compare(self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            Self::DateDesc => b.date.cmp(&a.date),
            Self::DateAsc => a.date.cmp(&b.date),
            Self::AmountDesc => b.amount.total_cmp(&a.amount),
            Self::AmountAsc => a.amount.total_cmp(&b.amount),
        }
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-desc" => Ok(Self::DateDesc),
            "date-asc" => Ok(Self::DateAsc),
            "amount-desc" => Ok(Self::AmountDesc),
            "amount-asc" => Ok(Self::AmountAsc),
            other => Err(Error::InvalidOption(other.to_owned())),
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Defines how transactions should be selected and ordered by [query].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Keep only transactions of this type.
    pub type_filter: TypeFilter,
    /// Case-insensitive text to look for in the description or category.
    ///
    /// An empty string matches everything.
    pub search_term: String,
    /// The order of the returned transactions.
    pub sort_by: SortBy,
}

/// Select and order transactions from a ledger snapshot.
///
/// The sort is stable: transactions with equal keys keep their relative
/// order from `transactions`.
pub fn query(transactions: &[Transaction], options: &TransactionQuery) -> Vec<Transaction> {
    let search_term = options.search_term.to_lowercase();

    let mut selected: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| options.type_filter.matches(transaction.transaction_type))
        .filter(|transaction| matches_search(transaction, &search_term))
        .cloned()
        .collect();

    sort_transactions(&mut selected, options.sort_by);

    selected
}

/// Stable in-place sort of `transactions` by `sort_by`.
pub fn sort_transactions(transactions: &mut [Transaction], sort_by: SortBy) {
    transactions.sort_by(|a, b| sort_by.compare(a, b));
}

/// `search_term` must already be lowercase.
fn matches_search(transaction: &Transaction, search_term: &str) -> bool {
    search_term.is_empty()
        || transaction.description.to_lowercase().contains(search_term)
        || transaction.category.to_lowercase().contains(search_term)
}
