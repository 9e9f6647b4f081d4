//! Defines the crate level error type.

use crate::transaction::{TransactionId, ValidationError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A draft transaction was rejected by the entry validator.
    ///
    /// The user can correct these errors, so the message should be shown to
    /// them and the draft must not be persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage backend could not be read.
    ///
    /// [crate::stores::LedgerStore::load] treats this as an empty ledger
    /// rather than surfacing it.
    #[error("could not read from storage: {0}")]
    StorageReadFailure(String),

    /// The stored ledger is not a JSON array, so it cannot be updated without
    /// losing data.
    #[error("stored ledger is corrupt: {0}")]
    CorruptStorage(String),

    /// The storage backend could not be written to.
    #[error("could not write to storage: {0}")]
    StorageWriteFailure(String),

    /// A storage key contained characters that are not allowed.
    #[error("\"{0}\" is not a valid storage key")]
    InvalidStorageKey(String),

    /// A transaction with the same ID already exists in the ledger.
    #[error("a transaction with the ID {0} already exists")]
    DuplicateId(TransactionId),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// A date string was not in the `YYYY-MM-DD` format.
    #[error("could not parse \"{0}\" as a YYYY-MM-DD date")]
    InvalidDateFormat(String),

    /// A query option (type filter, sort order or time range) was not recognised.
    #[error("\"{0}\" is not a valid option")]
    InvalidOption(String),

    /// The configuration file could not be read or parsed.
    #[error("could not load configuration: {0}")]
    ConfigError(String),

    /// The log file could not be opened for appending.
    #[error("could not open log file: {0}")]
    LogFileError(String),

    /// Writing the CSV export failed.
    #[error("could not write CSV: {0}")]
    CsvError(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}
