//! Application configuration.
//!
//! Configuration is read from an optional JSON file. Any field that is
//! missing from the file falls back to its default, so an empty object `{}`
//! is a valid configuration.

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, stores::DEFAULT_SLOT, transaction::TransactionType};

/// The canonical timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

/// Category used when a suggestion list is empty.
const FALLBACK_CATEGORY: &str = "Other";

/// Settings shared by the command line front end and the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the storage slots.
    pub data_dir: PathBuf,
    /// Name of the storage slot holding the ledger.
    pub slot: String,
    /// Canonical (IANA) timezone used to work out "today".
    pub timezone: String,
    /// Suggested categories per transaction type.
    pub categories: CategorySuggestions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            slot: DEFAULT_SLOT.to_owned(),
            timezone: DEFAULT_TIMEZONE.to_owned(),
            categories: CategorySuggestions::default(),
        }
    }
}

impl Config {
    /// Load the configuration from the JSON file at `path`.
    ///
    /// # Errors
    /// Returns [Error::ConfigError] if the file cannot be read or is not a
    /// valid configuration.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|error| Error::ConfigError(format!("{}: {error}", path.display())))?;

        Self::from_json(&text)
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    /// Returns [Error::ConfigError] if `text` is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: Config =
            serde_json::from_str(text).map_err(|error| Error::ConfigError(error.to_string()))?;

        tracing::debug!("Loaded configuration: {config:?}");

        Ok(config)
    }
}

/// Categories offered to the user for each transaction type.
///
/// These are suggestions only: the first entry is the default when a draft
/// has no category, but any other text is accepted as a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySuggestions {
    /// Suggestions for income transactions.
    pub income: Vec<String>,
    /// Suggestions for expense transactions.
    pub expense: Vec<String>,
}

impl Default for CategorySuggestions {
    fn default() -> Self {
        let to_owned = |names: &[&str]| names.iter().map(|&name| name.to_owned()).collect();

        Self {
            income: to_owned(&["Gaji", "Bonus", "Investasi", "Freelance", "Lainnya"]),
            expense: to_owned(&[
                "Makanan",
                "Transport",
                "Belanja",
                "Tagihan",
                "Hiburan",
                "Kesehatan",
                "Lainnya",
            ]),
        }
    }
}

impl CategorySuggestions {
    /// The suggestions for `transaction_type`.
    pub fn for_type(&self, transaction_type: TransactionType) -> &[String] {
        match transaction_type {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    /// The category a draft of `transaction_type` gets when none is chosen.
    pub fn default_for(&self, transaction_type: TransactionType) -> &str {
        self.for_type(transaction_type)
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_CATEGORY)
    }
}
