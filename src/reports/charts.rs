//! Chart datasets
//!
//! Plain numeric series for an external plotting tool. Rendering is left to
//! the consumer; `finance report charts` prints these as JSON.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use super::budget_status::BudgetStatus;
use super::monthly::MonthlyReport;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Money, Transaction};

/// Income and expense for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

/// Expense total for one category and its share of all expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    pub share_pct: f64,
}

/// Spent and remaining amounts for one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetBar {
    pub category: String,
    pub spent: f64,
    pub remaining: f64,
}

/// Expense total for one day of the month, summed across months
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub day: u32,
    pub amount: f64,
}

/// Every chart dataset for the ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub monthly_trends: Vec<MonthlyTrendPoint>,
    pub category_spending: Vec<CategorySlice>,
    pub budget_bars: Vec<BudgetBar>,
    pub daily_spending: Vec<DailyPoint>,
}

impl ChartData {
    /// Build all datasets, or None when there are no transactions
    pub fn build(transactions: &[Transaction], budgets: &[Budget]) -> LedgerResult<Option<Self>> {
        let Some(monthly) = MonthlyReport::from_transactions(transactions)? else {
            return Ok(None);
        };

        let monthly_trends = monthly
            .rows
            .iter()
            .map(|row| MonthlyTrendPoint {
                month: row.month.to_string(),
                income: row.income.as_f64(),
                expense: row.expense.as_f64(),
            })
            .collect();

        let expenses: Vec<&Transaction> = transactions.iter().filter(|t| t.is_expense()).collect();
        let total_expense = Money::checked_sum(expenses.iter().map(|t| t.amount()))
            .ok_or_else(LedgerError::amount_overflow)?;

        let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
        let mut by_day: BTreeMap<u32, Money> = BTreeMap::new();
        for txn in &expenses {
            for total in [
                by_category.entry(txn.category()).or_default(),
                by_day.entry(txn.date().day()).or_default(),
            ] {
                *total = total
                    .checked_add(txn.amount())
                    .ok_or_else(LedgerError::amount_overflow)?;
            }
        }

        let category_spending = by_category
            .into_iter()
            .map(|(category, amount)| CategorySlice {
                category: category.to_string(),
                amount: amount.as_f64(),
                share_pct: amount.percent_of(total_expense),
            })
            .collect();

        let daily_spending = by_day
            .into_iter()
            .map(|(day, amount)| DailyPoint {
                day,
                amount: amount.as_f64(),
            })
            .collect();

        let budget_bars = BudgetStatus::for_budgets(budgets, transactions)?
            .into_iter()
            .map(|status| BudgetBar {
                category: status.category,
                spent: status.spent.as_f64(),
                remaining: status.remaining.as_f64(),
            })
            .collect();

        Ok(Some(Self {
            monthly_trends,
            category_spending,
            budget_bars,
            daily_spending,
        }))
    }
}
