//! Reports for the finance tracker
//!
//! Provides the ledger summary, per-month and per-category breakdowns,
//! budget status, and chart datasets.

pub mod analyzer;
pub mod budget_status;
pub mod category;
pub mod charts;
pub mod monthly;
pub mod summary;

pub use analyzer::Analyzer;
pub use budget_status::{format_budget_status, BudgetStatus};
pub use category::{CategoryReport, CategoryRow};
pub use charts::{BudgetBar, CategorySlice, ChartData, DailyPoint, MonthlyTrendPoint};
pub use monthly::{MonthlyReport, MonthlyRow};
pub use summary::FinancialSummary;
