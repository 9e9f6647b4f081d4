//! Validation of user supplied drafts before they enter the ledger.

use time::{Date, OffsetDateTime};

use crate::config::CategorySuggestions;

use super::core::{Transaction, TransactionId, TransactionType};

/// The reasons a draft can be rejected.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The description was empty or only contained whitespace.
    #[error("description cannot be empty")]
    EmptyDescription,

    /// The amount was missing, not a number, or not greater than zero.
    #[error("amount must be a number greater than zero")]
    InvalidAmount,
}

/// Raw input for a new transaction, as entered by the user.
///
/// The amount is kept as text so that the validator can tell a missing
/// amount apart from a non-numeric one.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// What the transaction was for.
    pub description: String,
    /// The amount as typed by the user.
    pub amount: String,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// The chosen category, or `None` to use the default for the type.
    pub category: Option<String>,
    /// The chosen date, or `None` for today.
    pub date: Option<Date>,
}

impl TransactionDraft {
    /// Create a draft with no category and no date.
    pub fn new(description: &str, amount: &str, transaction_type: TransactionType) -> Self {
        Self {
            description: description.to_owned(),
            amount: amount.to_owned(),
            transaction_type,
            category: None,
            date: None,
        }
    }

    /// Set the category for the draft.
    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_owned);
        self
    }

    /// Set the date for the draft.
    pub fn date(mut self, date: Option<Date>) -> Self {
        self.date = date;
        self
    }
}

/// Hands out transaction IDs that never repeat.
///
/// IDs follow the wall clock in milliseconds but always move forward, even
/// when two drafts arrive within the same millisecond or the clock is set
/// back.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: TransactionId,
}

impl IdGenerator {
    /// Create a generator whose IDs will all be greater than `last`.
    pub fn after(last: TransactionId) -> Self {
        Self { last }
    }

    /// The next ID for a transaction created at `now`.
    pub fn next_id(&mut self, now: OffsetDateTime) -> TransactionId {
        let millis = (now.unix_timestamp_nanos() / 1_000_000) as TransactionId;
        self.last = millis.max(self.last.saturating_add(1));
        self.last
    }
}

/// Turns [TransactionDraft]s into normalised [Transaction]s.
#[derive(Debug, Clone)]
pub struct EntryValidator {
    suggestions: CategorySuggestions,
    ids: IdGenerator,
}

impl EntryValidator {
    /// Create a validator that defaults categories from `suggestions`.
    pub fn new(suggestions: CategorySuggestions) -> Self {
        Self {
            suggestions,
            ids: IdGenerator::default(),
        }
    }

    /// Ensure generated IDs are greater than every ID in `existing`.
    pub fn seed_ids<'a>(mut self, existing: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let last = existing.into_iter().map(|t| t.id).max().unwrap_or(0);
        self.ids = IdGenerator::after(last.max(self.ids.last));
        self
    }

    /// The category suggestions this validator defaults from.
    pub fn suggestions(&self) -> &CategorySuggestions {
        &self.suggestions
    }

    /// Validate `draft` and build the transaction to store.
    ///
    /// `now` should be in the user's local offset: it provides both the ID
    /// and the default date.
    ///
    /// # Errors
    /// This function will return a:
    /// - [ValidationError::EmptyDescription] if the trimmed description is empty,
    /// - or [ValidationError::InvalidAmount] if the amount is blank, not a
    ///   finite number, or not greater than zero.
    pub fn validate(
        &mut self,
        draft: TransactionDraft,
        now: OffsetDateTime,
    ) -> Result<Transaction, ValidationError> {
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount = parse_amount(&draft.amount)?;

        let category = match draft.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => category.to_owned(),
            _ => self
                .suggestions
                .default_for(draft.transaction_type)
                .to_owned(),
        };

        Ok(Transaction {
            id: self.ids.next_id(now),
            description: description.to_owned(),
            amount,
            transaction_type: draft.transaction_type,
            category,
            date: draft.date.unwrap_or_else(|| now.date()),
        })
    }
}

fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;

    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidAmount)
    }
}
