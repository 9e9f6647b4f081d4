//! Summary statistics over a snapshot of transactions.
//!
//! Every function here is total: empty input yields zeros or empty
//! collections rather than errors or NaN.

use crate::transaction::{SortBy, Transaction, TransactionType, sort_transactions};

/// The label used for expenses without a category.
pub const UNCATEGORIZED_LABEL: &str = "Other";

/// Income, expense and balance of a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// Sum of income amounts.
    pub income: f64,
    /// Sum of expense amounts.
    pub expense: f64,
    /// `income - expense`.
    pub balance: f64,
}

/// Sums income and expenses.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let income = sum_of_type(transactions, TransactionType::Income);
    let expense = sum_of_type(transactions, TransactionType::Expense);

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Counts the transactions of `transaction_type`.
pub fn count_by_type(transactions: &[Transaction], transaction_type: TransactionType) -> usize {
    transactions
        .iter()
        .filter(|t| t.transaction_type == transaction_type)
        .count()
}

fn sum_of_type(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|t| t.transaction_type == transaction_type)
        .map(|t| t.amount)
        .sum()
}

/// Expense totals per category, in the order each category first appears.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Vec<(String, f64)>);

impl CategoryBreakdown {
    /// The `(category, total)` pairs in first-encountered order.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.0
    }

    /// The total for `category`, if it has any expenses.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    /// The number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no expenses at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sums expense amounts per category. Income is ignored.
///
/// Expenses with an empty category are counted under [UNCATEGORIZED_LABEL].
pub fn category_breakdown(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut entries: Vec<(String, f64)> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let category = match transaction.category.as_str() {
            "" => UNCATEGORIZED_LABEL,
            category => category,
        };

        match entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += transaction.amount,
            None => entries.push((category.to_owned(), transaction.amount)),
        }
    }

    CategoryBreakdown(entries)
}

/// The `n` categories with the largest totals, largest first.
///
/// Categories with equal totals keep their first-encountered order.
pub fn top_categories(breakdown: &CategoryBreakdown, n: usize) -> Vec<(String, f64)> {
    let mut sorted = breakdown.0.clone();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
    sorted.truncate(n);
    sorted
}

/// `amount` as a percentage of `total`, or 0 if `total` is 0.
pub fn percentage(amount: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        amount / total * 100.0
    }
}

/// The mean expense amount, or 0 if there are no expenses.
pub fn average_expense(transactions: &[Transaction]) -> f64 {
    let count = count_by_type(transactions, TransactionType::Expense);

    if count == 0 {
        0.0
    } else {
        sum_of_type(transactions, TransactionType::Expense) / count as f64
    }
}

/// The largest amount of any transaction, or 0 if there are none.
pub fn max_amount(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).fold(0.0, f64::max)
}

/// The share of income that was not spent, as a whole percentage.
///
/// Returns 0 when there is no income. Halves round towards positive
/// infinity, so -12.5 becomes -12.
pub fn saving_rate(income: f64, expense: f64) -> i64 {
    if income == 0.0 {
        return 0;
    }

    let rate = (income - expense) / income * 100.0;
    (rate + 0.5).floor() as i64
}

/// The `n` most recent transactions, newest first.
///
/// Transactions on the same day keep their order from `transactions`.
pub fn recent(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sort_transactions(&mut sorted, SortBy::DateDesc);
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::{
        dashboard::aggregation::{
            CategoryBreakdown, Totals, UNCATEGORIZED_LABEL, average_expense, category_breakdown,
            count_by_type, max_amount, percentage, recent, saving_rate, top_categories, totals,
        },
        transaction::{Transaction, TransactionType},
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

    fn scenario_ledger() -> Vec<Transaction> {
        vec![
            create_test_transaction(
                1,
                1000000.0,
                TransactionType::Income,
                "Gaji",
                date!(2024 - 01 - 05),
            ),
            create_test_transaction(
                2,
                250000.0,
                TransactionType::Expense,
                "Makanan",
                date!(2024 - 01 - 05),
            ),
            create_test_transaction(
                3,
                100000.0,
                TransactionType::Expense,
                "Transport",
                date!(2024 - 01 - 10),
            ),
        ]
    }

    #[test]
    fn totals_for_scenario() {
        assert_eq!(
            totals(&scenario_ledger()),
            Totals {
                income: 1000000.0,
                expense: 350000.0,
                balance: 650000.0,
            }
        );
    }

    #[test]
    fn totals_of_empty_input_are_zero() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn balance_can_be_negative() {
        let transactions = vec![
            income(1, 100.0, "", date!(2024 - 01 - 01)),
            expense(2, 300.0, "", date!(2024 - 01 - 01)),
        ];

        let got = totals(&transactions);

        assert_eq!(got.balance, got.income - got.expense);
        assert_eq!(got.balance, -200.0);
    }

    #[test]
    fn top_categories_for_scenario() {
        let breakdown = category_breakdown(&scenario_ledger());

        assert_eq!(
            top_categories(&breakdown, 3),
            vec![
                ("Makanan".to_owned(), 250000.0),
                ("Transport".to_owned(), 100000.0),
            ]
        );
    }

    #[test]
    fn breakdown_sums_expenses_per_category_and_ignores_income() {
        let transactions = vec![
            expense(1, 50.0, "Makanan", date!(2024 - 01 - 01)),
            income(2, 500.0, "Makanan", date!(2024 - 01 - 01)),
            expense(3, 20.0, "", date!(2024 - 01 - 02)),
            expense(4, 30.0, "Makanan", date!(2024 - 01 - 03)),
        ];

        let breakdown = category_breakdown(&transactions);

        assert_eq!(
            breakdown.entries(),
            &[
                ("Makanan".to_owned(), 80.0),
                (UNCATEGORIZED_LABEL.to_owned(), 20.0),
            ]
        );
        assert_eq!(breakdown.get("Makanan"), Some(80.0));
        assert_eq!(breakdown.get("Gaji"), None);
    }

    #[test]
    fn top_categories_breaks_ties_by_first_appearance_and_truncates() {
        let transactions = vec![
            expense(1, 10.0, "A", date!(2024 - 01 - 01)),
            expense(2, 30.0, "B", date!(2024 - 01 - 01)),
            expense(3, 10.0, "C", date!(2024 - 01 - 01)),
            expense(4, 10.0, "D", date!(2024 - 01 - 01)),
        ];

        let got = top_categories(&category_breakdown(&transactions), 3);

        let names: Vec<&str> = got.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn top_categories_of_empty_breakdown_is_empty() {
        assert!(top_categories(&CategoryBreakdown::default(), 3).is_empty());
    }

    #[test]
    fn percentage_handles_zero_total() {
        assert_eq!(percentage(50.0, 200.0), 25.0);
        assert_eq!(percentage(50.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn average_expense_ignores_income() {
        assert_eq!(average_expense(&scenario_ledger()), 175000.0);
        assert_eq!(average_expense(&scenario_ledger()[..1]), 0.0);
        assert_eq!(average_expense(&[]), 0.0);
    }

    #[test]
    fn max_amount_over_all_types() {
        assert_eq!(max_amount(&scenario_ledger()), 1000000.0);
        assert_eq!(max_amount(&[]), 0.0);
    }

    #[test]
    fn saving_rate_rounds_to_whole_percent() {
        assert_eq!(saving_rate(1000000.0, 350000.0), 65);
        assert_eq!(saving_rate(3.0, 1.0), 67);
        assert_eq!(saving_rate(100.0, 300.0), -200);
        assert_eq!(saving_rate(0.0, 500.0), 0);
    }

    #[test]
    fn saving_rate_rounds_halves_up() {
        assert_eq!(saving_rate(200.0, 175.0), 13);
        assert_eq!(saving_rate(200.0, 225.0), -12);
    }

    #[test]
    fn count_by_type_counts_each_type() {
        let ledger = scenario_ledger();

        assert_eq!(count_by_type(&ledger, TransactionType::Income), 1);
        assert_eq!(count_by_type(&ledger, TransactionType::Expense), 2);
    }

    #[test]
    fn recent_returns_newest_first_and_limits() {
        let transactions: Vec<Transaction> = (1..=7)
            .map(|day| {
                create_test_transaction(
                    day,
                    1.0,
                    TransactionType::Expense,
                    "",
                    Date::from_calendar_date(2024, time::Month::January, day as u8).unwrap(),
                )
            })
            .collect();

        let got: Vec<i64> = recent(&transactions, 5).iter().map(|t| t.id).collect();

        assert_eq!(got, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn recent_keeps_order_within_a_day() {
        let got: Vec<i64> = recent(&scenario_ledger(), 5).iter().map(|t| t.id).collect();

        assert_eq!(got, vec![3, 1, 2]);
    }
}
