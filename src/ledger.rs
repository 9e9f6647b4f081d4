//! Ties the entry validator, ledger store and collaborators together.
//!
//! Front ends drive the ledger through [Ledger]: drafts go through the
//! validator before they are stored, the user is notified about new entries,
//! and deletions only happen once the user has confirmed them.

use time::OffsetDateTime;

use crate::{
    Error,
    config::CategorySuggestions,
    notification::{Notification, Notifier},
    stores::{KeyValueStore, LedgerStore},
    transaction::{EntryValidator, Transaction, TransactionDraft, TransactionId},
};

/// The question asked before a transaction is deleted.
pub const DELETE_CONFIRMATION_MESSAGE: &str = "Yakin ingin hapus transaksi ini?";

/// Asks the user a yes/no question.
pub trait Confirm {
    /// Returns `true` if the user agreed to `message`.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// What happened when a transaction deletion was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The transaction was removed.
    Removed,
    /// The user confirmed but no transaction had the ID.
    NotFound,
    /// The user declined, nothing was changed.
    Declined,
}

/// The ledger as seen by a front end.
#[derive(Debug)]
pub struct Ledger<S, N> {
    store: LedgerStore<S>,
    validator: EntryValidator,
    notifier: N,
}

impl<S, N> Ledger<S, N>
where
    S: KeyValueStore,
    N: Notifier,
{
    /// Create a ledger over `store`.
    ///
    /// Generated IDs will be greater than every ID already in `store`.
    pub fn new(store: LedgerStore<S>, suggestions: CategorySuggestions, notifier: N) -> Self {
        let validator = EntryValidator::new(suggestions).seed_ids(&store.load());

        Self {
            store,
            validator,
            notifier,
        }
    }

    /// A snapshot of every transaction in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.store.load()
    }

    /// The category suggestions used for drafts without a category.
    pub fn suggestions(&self) -> &CategorySuggestions {
        self.validator.suggestions()
    }

    /// The underlying store.
    pub fn store(&self) -> &LedgerStore<S> {
        &self.store
    }

    /// Validate `draft`, store it and notify the user.
    ///
    /// `now` should be in the user's local offset; it supplies the ID and
    /// the default date.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::Validation] if the draft is rejected, in which case nothing is stored,
    /// - or any error from [LedgerStore::append].
    pub fn add(
        &mut self,
        draft: TransactionDraft,
        now: OffsetDateTime,
    ) -> Result<Transaction, Error> {
        let transaction = self.validator.validate(draft, now)?;

        self.store.append(transaction.clone())?;
        Notification::transaction_added(&transaction).send(&self.notifier);

        Ok(transaction)
    }

    /// Delete the transaction with `id` once `confirm` agrees.
    ///
    /// # Errors
    /// Returns any error from [LedgerStore::delete_by_id].
    pub fn remove(
        &mut self,
        id: TransactionId,
        confirm: &mut impl Confirm,
    ) -> Result<RemoveOutcome, Error> {
        if !confirm.confirm(DELETE_CONFIRMATION_MESSAGE) {
            return Ok(RemoveOutcome::Declined);
        }

        if self.store.delete_by_id(id)? {
            Ok(RemoveOutcome::Removed)
        } else {
            Ok(RemoveOutcome::NotFound)
        }
    }
}
