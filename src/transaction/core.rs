//! Defines the core data model for transactions and its persisted JSON shape.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use time::{Date, macros::format_description};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// Identifier of a transaction.
///
/// New IDs are derived from the creation time in milliseconds, so they are
/// large integers that still fit in a JSON number without losing precision.
pub type TransactionId = i64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. salary.
    Income,
    /// Money going out, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The lowercase name used in storage and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(Error::InvalidOption(other.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// New transactions should be created through
/// [EntryValidator::validate](crate::transaction::EntryValidator::validate),
/// which enforces a positive amount and a non-empty description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// Whether the amount was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// A free text label such as "Makanan" or "Gaji".
    ///
    /// Records written by older versions may lack a category or store `null`,
    /// in which case this is empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl Transaction {
    /// Whether this transaction is an income.
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Whether this transaction is an expense.
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// DATES
// ============================================================================

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns [Error::InvalidDateFormat] if `text` is not a valid calendar date
/// in that format.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDateFormat(text.to_owned()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{
        Error,
        transaction::{Transaction, TransactionType, parse_date},
    };

    #[test]
    fn serializes_to_persisted_layout() {
        let transaction = Transaction {
            id: 1704412800000,
            description: "Gaji Januari".to_owned(),
            amount: 1000000.0,
            transaction_type: TransactionType::Income,
            category: "Gaji".to_owned(),
            date: date!(2024 - 01 - 05),
        };

        let got = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            got,
            json!({
                "id": 1704412800000_i64,
                "description": "Gaji Januari",
                "amount": 1000000.0,
                "type": "income",
                "category": "Gaji",
                "date": "2024-01-05",
            })
        );
    }

    #[test]
    fn deserializes_record_without_category() {
        let value = json!({
            "id": 7,
            "description": "Parkir",
            "amount": 2000,
            "type": "expense",
            "date": "2024-02-29",
        });

        let got: Transaction = serde_json::from_value(value).unwrap();

        assert_eq!(got.category, "");
        assert_eq!(got.amount, 2000.0);
        assert_eq!(got.date, date!(2024 - 02 - 29));
        assert!(got.is_expense());
    }

    #[test]
    fn deserializes_record_with_null_category() {
        let value = json!({
            "id": 8,
            "description": "Pulsa",
            "amount": 50000,
            "type": "expense",
            "category": null,
            "date": "2024-03-01",
        });

        let got: Transaction = serde_json::from_value(value).unwrap();

        assert_eq!(got.category, "");
        assert_eq!(got.id, 8);
    }

    #[test]
    fn rejects_unknown_type() {
        let value = json!({
            "id": 7,
            "description": "x",
            "amount": 1,
            "type": "transfer",
            "category": "",
            "date": "2024-01-01",
        });

        assert!(serde_json::from_value::<Transaction>(value).is_err());
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-01-10"), Ok(date!(2024 - 01 - 10)));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert_eq!(
            parse_date("10/01/2024"),
            Err(Error::InvalidDateFormat("10/01/2024".to_owned()))
        );
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn transaction_type_round_trips_through_str() {
        for transaction_type in [TransactionType::Income, TransactionType::Expense] {
            assert_eq!(
                transaction_type.as_str().parse::<TransactionType>(),
                Ok(transaction_type)
            );
        }
        assert!("Income".parse::<TransactionType>().is_err());
    }
}
