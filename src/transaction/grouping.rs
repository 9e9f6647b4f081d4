//! Grouping of sorted transactions into per-day sections for the list view.

use std::collections::HashMap;

use time::{Date, Month};

use super::core::Transaction;

/// The transactions that happened on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    /// The day shared by every transaction in the group.
    pub date: Date,
    /// The day formatted for display, e.g. "5 Januari 2024".
    pub label: String,
    /// The transactions on `date`, in the order they were given.
    pub transactions: Vec<Transaction>,
}

/// Partition `transactions` by calendar day.
///
/// Groups are ordered by the first appearance of their day in
/// `transactions`. Transactions keep their input order within a group, and a
/// transaction whose day was already seen joins that earlier group even if
/// other days came in between (this happens when sorting by amount).
pub fn group_by_day(transactions: Vec<Transaction>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut group_index: HashMap<Date, usize> = HashMap::new();

    for transaction in transactions {
        let index = *group_index.entry(transaction.date).or_insert_with(|| {
            groups.push(DayGroup {
                date: transaction.date,
                label: format_date_label(transaction.date),
                transactions: Vec::new(),
            });
            groups.len() - 1
        });

        groups[index].transactions.push(transaction);
    }

    groups
}

/// Format `date` as a long Indonesian date, e.g. "5 Januari 2024".
pub fn format_date_label(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Format `date` as a short Indonesian date, e.g. "5 Jan".
pub fn format_short_date_label(date: Date) -> String {
    format!("{} {}", date.day(), month_abbrev(date.month()))
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    }
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "Mei",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Agu",
        Month::September => "Sep",
        Month::October => "Okt",
        Month::November => "Nov",
        Month::December => "Des",
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::transaction::{
        Transaction, TransactionType,
        grouping::{format_date_label, format_short_date_label, group_by_day},
    };

    fn row(id: i64, amount: f64, date: Date) -> Transaction {
        Transaction {
            id,
            description: "test".to_owned(),
            amount,
            transaction_type: TransactionType::Expense,
            category: "Makanan".to_owned(),
            date,
        }
    }

    fn group_ids(groups: &[super::DayGroup]) -> Vec<Vec<i64>> {
        groups
            .iter()
            .map(|group| group.transactions.iter().map(|t| t.id).collect())
            .collect()
    }

    #[test]
    fn groups_adjacent_days() {
        let transactions = vec![
            row(1, 10.0, date!(2024 - 01 - 10)),
            row(2, 20.0, date!(2024 - 01 - 05)),
            row(3, 30.0, date!(2024 - 01 - 05)),
        ];

        let groups = group_by_day(transactions);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, date!(2024 - 01 - 10));
        assert_eq!(groups[0].label, "10 Januari 2024");
        assert_eq!(groups[1].label, "5 Januari 2024");
        assert_eq!(group_ids(&groups), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn non_adjacent_days_join_first_group() {
        let transactions = vec![
            row(1, 300.0, date!(2024 - 01 - 05)),
            row(2, 200.0, date!(2024 - 01 - 10)),
            row(3, 100.0, date!(2024 - 01 - 05)),
        ];

        let groups = group_by_day(transactions);

        assert_eq!(group_ids(&groups), vec![vec![1, 3], vec![2]]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_day(vec![]).is_empty());
    }

    #[test]
    fn formats_indonesian_labels() {
        assert_eq!(format_date_label(date!(2024 - 08 - 17)), "17 Agustus 2024");
        assert_eq!(format_short_date_label(date!(2024 - 12 - 01)), "1 Des");
    }
}
