//! Implements the ledger store: the single owner of the persisted transactions.

use serde_json::Value;

use crate::{
    Error,
    transaction::{Transaction, TransactionId},
};

use super::KeyValueStore;

/// The storage slot that holds the ledger unless configured otherwise.
pub const DEFAULT_SLOT: &str = "transactions";

/// Loads and saves the ledger as a JSON array in one slot of a [KeyValueStore].
///
/// Every mutation reads the current ledger and writes the full updated
/// collection back with a single [KeyValueStore::set].
#[derive(Debug, Clone)]
pub struct LedgerStore<S> {
    storage: S,
    slot: String,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Create a ledger store that uses the [DEFAULT_SLOT] of `storage`.
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    /// Create a ledger store that uses `slot` of `storage`.
    pub fn with_slot(storage: S, slot: &str) -> Self {
        Self {
            storage,
            slot: slot.to_owned(),
        }
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load every persisted transaction in insertion order.
    ///
    /// A missing slot, a storage read failure, or data that is not a JSON
    /// array all produce an empty ledger. Array elements that are not valid
    /// transactions are skipped.
    pub fn load(&self) -> Vec<Transaction> {
        let text = match self.storage.get(&self.slot) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!("Treating ledger as empty: {error}");
                return Vec::new();
            }
        };

        let values: Vec<Value> = match serde_json::from_str(&text) {
            Ok(values) => values,
            Err(error) => {
                tracing::warn!(
                    "Treating ledger as empty, slot \"{}\" is not a JSON array: {error}",
                    self.slot
                );
                return Vec::new();
            }
        };

        values
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, value)| match serde_json::from_value::<Transaction>(value) {
                    Ok(transaction) => Some(transaction),
                    Err(error) => {
                        tracing::warn!("Skipping malformed transaction at index {index}: {error}");
                        None
                    }
                },
            )
            .collect()
    }

    /// Add `entry` to the end of the ledger and persist it.
    ///
    /// Stored elements that [LedgerStore::load] skips are written back
    /// unchanged.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::StorageReadFailure] if the current ledger could not be read,
    /// - [Error::CorruptStorage] if the slot does not hold a JSON array,
    /// - [Error::DuplicateId] if a transaction with the same ID is already stored,
    /// - [Error::JSONSerializationError] if the ledger cannot be encoded,
    /// - or the storage error if the ledger could not be written.
    pub fn append(&mut self, entry: Transaction) -> Result<(), Error> {
        let mut values = self.load_for_update()?;

        if values.iter().any(|value| stored_id(value) == Some(entry.id)) {
            return Err(Error::DuplicateId(entry.id));
        }

        values.push(serde_json::to_value(&entry)?);
        self.save(&values)?;

        tracing::info!(
            "Appended transaction {}, ledger now has {} entries",
            entry.id,
            values.len()
        );

        Ok(())
    }

    /// Remove the transaction with `id` and persist the result.
    ///
    /// Returns whether a transaction was removed. Nothing is written when no
    /// transaction has `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::StorageReadFailure] if the current ledger could not be read,
    /// - [Error::CorruptStorage] if the slot does not hold a JSON array,
    /// - or the serialization or storage error if the ledger could not be written.
    pub fn delete_by_id(&mut self, id: TransactionId) -> Result<bool, Error> {
        let mut values = self.load_for_update()?;
        let count_before = values.len();

        values.retain(|value| stored_id(value) != Some(id));

        if values.len() == count_before {
            tracing::debug!("No transaction with ID {id} to delete");
            return Ok(false);
        }

        self.save(&values)?;
        tracing::info!("Deleted transaction {id}");

        Ok(true)
    }

    /// Read the raw stored elements ahead of a write.
    ///
    /// Unlike [LedgerStore::load], read failures and non-array data are
    /// errors, and elements are not decoded so none of them are lost when the
    /// ledger is written back.
    fn load_for_update(&self) -> Result<Vec<Value>, Error> {
        let Some(text) = self.storage.get(&self.slot)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&text).map_err(|error| {
            Error::CorruptStorage(format!(
                "slot \"{}\" is not a JSON array: {error}",
                self.slot
            ))
        })
    }

    fn save(&mut self, values: &[Value]) -> Result<(), Error> {
        let text = serde_json::to_string(values)?;

        self.storage.set(&self.slot, &text)
    }
}

fn stored_id(value: &Value) -> Option<TransactionId> {
    value.get("id").and_then(Value::as_i64)
}
