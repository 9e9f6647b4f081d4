//! Exports the ledger as CSV for use in spreadsheets.

use std::io::Write;

use crate::{Error, transaction::Transaction};

/// The header row written by [export_csv].
pub const CSV_HEADER: [&str; 6] = ["id", "date", "type", "category", "description", "amount"];

/// Write `transactions` to `writer` as CSV, one row per transaction.
///
/// Rows follow the order of `transactions` and start with a [CSV_HEADER]
/// row. Dates are written as `YYYY-MM-DD`.
///
/// # Errors
/// Returns an [Error::CsvError] if writing to `writer` fails.
pub fn export_csv(transactions: &[Transaction], writer: impl Write) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for transaction in transactions {
        csv_writer.write_record([
            transaction.id.to_string(),
            transaction.date.to_string(),
            transaction.transaction_type.to_string(),
            transaction.category.clone(),
            transaction.description.clone(),
            transaction.amount.to_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|error| Error::CsvError(error.to_string()))?;
    tracing::debug!("Exported {} transactions as CSV", transactions.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        csv::export_csv,
        transaction::{Transaction, TransactionType},
    };

    fn export_to_string(transactions: &[Transaction]) -> String {
        let mut buffer = Vec::new();
        export_csv(transactions, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn export_empty_ledger_writes_header_only() {
        assert_eq!(
            export_to_string(&[]),
            "id,date,type,category,description,amount\n"
        );
    }

    #[test]
    fn export_writes_one_row_per_transaction() {
        let transactions = vec![
            Transaction {
                id: 1704430800000,
                description: "Gaji Januari".to_owned(),
                amount: 1000000.0,
                transaction_type: TransactionType::Income,
                category: "Gaji".to_owned(),
                date: date!(2024 - 01 - 05),
            },
            Transaction {
                id: 1704862800000,
                description: "Makan, minum".to_owned(),
                amount: 25000.5,
                transaction_type: TransactionType::Expense,
                category: "Makanan".to_owned(),
                date: date!(2024 - 01 - 10),
            },
        ];

        let got = export_to_string(&transactions);

        assert_eq!(
            got,
            "id,date,type,category,description,amount\n\
             1704430800000,2024-01-05,income,Gaji,Gaji Januari,1000000\n\
             1704862800000,2024-01-10,expense,Makanan,\"Makan, minum\",25000.5\n"
        );
    }
}
