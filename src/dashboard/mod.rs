//! Dashboard module
//!
//! Provides the summary statistics shown on the dashboard: totals, category
//! breakdowns, averages and recent activity over a time range.

mod aggregation;
mod summary;

pub use aggregation::{
    CategoryBreakdown, Totals, UNCATEGORIZED_LABEL, average_expense, category_breakdown,
    count_by_type, max_amount, percentage, recent, saving_rate, top_categories, totals,
};
pub use summary::{CategoryShare, DashboardSummary, RECENT_LIMIT, TOP_CATEGORY_LIMIT};
