//! User-visible notifications sent after the ledger changes.
//!
//! Delivery is up to the front end: the ledger only calls a [Notifier].

use crate::{
    currency::format_rupiah,
    transaction::{Transaction, TransactionType},
};

/// Delivers notifications to the user.
pub trait Notifier {
    /// Show a notification with `title` and `body`.
    fn notify(&self, title: &str, body: &str);
}

/// Drops every notification, for environments that cannot show them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}

/// Emits notifications as `info` level log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str) {
        tracing::info!(title, body, "Notification");
    }
}

/// A notification's title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short heading, e.g. "Pengeluaran Ditambahkan".
    pub title: String,
    /// Details, e.g. "Makan siang - Rp25.000".
    pub body: String,
}

impl Notification {
    /// The notification shown after `transaction` was added to the ledger.
    pub fn transaction_added(transaction: &Transaction) -> Self {
        let title = match transaction.transaction_type {
            TransactionType::Income => "Pemasukan Ditambahkan",
            TransactionType::Expense => "Pengeluaran Ditambahkan",
        };

        Self {
            title: title.to_owned(),
            body: format!(
                "{} - {}",
                transaction.description,
                format_rupiah(transaction.amount)
            ),
        }
    }

    /// Deliver this notification through `notifier`.
    pub fn send(&self, notifier: &impl Notifier) {
        notifier.notify(&self.title, &self.body);
    }
}
