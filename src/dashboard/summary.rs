//! Builds everything the dashboard shows for one time range.

use time::Date;

use crate::transaction::{TimeRange, Transaction, TransactionType, filter_by_time_range};

use super::aggregation::{
    Totals, average_expense, category_breakdown, count_by_type, max_amount, percentage, recent,
    saving_rate, top_categories, totals,
};

/// How many recent transactions the dashboard lists.
pub const RECENT_LIMIT: usize = 5;

/// How many expense categories the dashboard ranks.
pub const TOP_CATEGORY_LIMIT: usize = 3;

/// An expense category and its share of total expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// The category name.
    pub category: String,
    /// Total spent in the category.
    pub amount: f64,
    /// `amount` as a percentage of all expenses in the range.
    pub percentage: f64,
}

/// The figures shown on the dashboard for a [TimeRange].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// The range the figures cover.
    pub time_range: TimeRange,
    /// Income, expense and balance.
    pub totals: Totals,
    /// Number of income transactions.
    pub income_count: usize,
    /// Number of expense transactions.
    pub expense_count: usize,
    /// Number of transactions of either type.
    pub transaction_count: usize,
    /// The most recent transactions, newest first.
    pub recent: Vec<Transaction>,
    /// The categories with the most spending, largest first.
    pub top_categories: Vec<CategoryShare>,
    /// Mean expense amount.
    pub average_expense: f64,
    /// Largest single amount of either type.
    pub max_amount: f64,
    /// Unspent share of income, in whole percent.
    pub saving_rate: i64,
}

impl DashboardSummary {
    /// Summarise the transactions that fall in `time_range` relative to `today`.
    pub fn build(transactions: &[Transaction], time_range: TimeRange, today: Date) -> Self {
        let in_range = filter_by_time_range(transactions, time_range, today);
        let totals = totals(&in_range);

        let top_categories = top_categories(&category_breakdown(&in_range), TOP_CATEGORY_LIMIT)
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                percentage: percentage(amount, totals.expense),
            })
            .collect();

        Self {
            time_range,
            totals,
            income_count: count_by_type(&in_range, TransactionType::Income),
            expense_count: count_by_type(&in_range, TransactionType::Expense),
            transaction_count: in_range.len(),
            recent: recent(&in_range, RECENT_LIMIT),
            top_categories,
            average_expense: average_expense(&in_range),
            max_amount: max_amount(&in_range),
            saving_rate: saving_rate(totals.income, totals.expense),
        }
    }

    /// Whether the balance is not negative.
    pub fn is_balance_healthy(&self) -> bool {
        self.totals.balance >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::{
        dashboard::{CategoryShare, DashboardSummary, Totals},
        transaction::{TimeRange, Transaction, TransactionType},
    };

    fn create_test_transaction(
        id: i64,
        amount: f64,
        transaction_type: TransactionType,
        category: &str,
        date: Date,
    ) -> Transaction {
        Transaction {
            id,
            description: format!("transaction #{id}"),
            amount,
            transaction_type,
            category: category.to_owned(),
            date,
        }
    }

    fn expense(id: i64, amount: f64, category: &str, date: Date) -> Transaction {
        create_test_transaction(id, amount, TransactionType::Expense, category, date)
    }

    fn income(id: i64, amount: f64, category: &str, date: Date) -> Transaction {
        create_test_transaction(id, amount, TransactionType::Income, category, date)
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            income(1, 1000000.0, "Gaji", date!(2024 - 01 - 05)),
            expense(2, 250000.0, "Makanan", date!(2024 - 01 - 05)),
            expense(3, 100000.0, "Transport", date!(2024 - 01 - 10)),
            expense(4, 40000.0, "Hiburan", date!(2023 - 12 - 30)),
        ]
    }

    #[test]
    fn summary_for_all_time() {
        let got = DashboardSummary::build(&ledger(), TimeRange::All, date!(2024 - 01 - 10));

        assert_eq!(
            got.totals,
            Totals {
                income: 1000000.0,
                expense: 390000.0,
                balance: 610000.0,
            }
        );
        assert_eq!(got.income_count, 1);
        assert_eq!(got.expense_count, 3);
        assert_eq!(got.transaction_count, 4);
        assert_eq!(got.max_amount, 1000000.0);
        assert_eq!(got.average_expense, 130000.0);
        assert_eq!(got.saving_rate, 61);
        assert!(got.is_balance_healthy());
        let recent_ids: Vec<i64> = got.recent.iter().map(|t| t.id).collect();
        assert_eq!(recent_ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn summary_for_month_excludes_previous_year() {
        let got = DashboardSummary::build(&ledger(), TimeRange::Month, date!(2024 - 01 - 20));

        assert_eq!(got.totals.expense, 350000.0);
        assert_eq!(
            got.top_categories,
            vec![
                CategoryShare {
                    category: "Makanan".to_owned(),
                    amount: 250000.0,
                    percentage: 250000.0 / 350000.0 * 100.0,
                },
                CategoryShare {
                    category: "Transport".to_owned(),
                    amount: 100000.0,
                    percentage: 100000.0 / 350000.0 * 100.0,
                },
            ]
        );
    }

    #[test]
    fn summary_for_week() {
        let got = DashboardSummary::build(&ledger(), TimeRange::Week, date!(2024 - 01 - 12));

        assert_eq!(got.transaction_count, 1);
        assert_eq!(got.totals.income, 0.0);
        assert_eq!(got.saving_rate, 0);
        assert!(!got.is_balance_healthy());
    }

    #[test]
    fn summary_of_empty_ledger_is_neutral() {
        let got = DashboardSummary::build(&[], TimeRange::All, date!(2024 - 01 - 11));

        assert_eq!(got.totals, Totals::default());
        assert_eq!(got.transaction_count, 0);
        assert!(got.recent.is_empty());
        assert!(got.top_categories.is_empty());
        assert_eq!(got.average_expense, 0.0);
        assert_eq!(got.max_amount, 0.0);
        assert_eq!(got.saving_rate, 0);
        assert!(got.is_balance_healthy());
    }
}
