//! Budget Status
//!
//! Spending against every stored budget.

use serde::Serialize;

use crate::display::report::{format_bar, format_percentage, truncate};
use crate::error::LedgerResult;
use crate::models::{Budget, Money, Transaction};

/// Spending against one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percentage: f64,
    pub exceeded: bool,
}

impl BudgetStatus {
    /// Status of every budget against the expense transactions, in budget order
    pub fn for_budgets(budgets: &[Budget], transactions: &[Transaction]) -> LedgerResult<Vec<Self>> {
        let expenses: Vec<&Transaction> = transactions.iter().filter(|t| t.is_expense()).collect();

        budgets
            .iter()
            .map(|budget| {
                let check = budget.check_limit(expenses.iter().copied())?;
                Ok(Self {
                    category: budget.category().to_string(),
                    limit: budget.limit(),
                    spent: check.total,
                    remaining: check.remaining,
                    percentage: check.percentage,
                    exceeded: check.exceeded,
                })
            })
            .collect()
    }
}

/// Format budget statuses for terminal display
pub fn format_budget_status(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets set yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12} {:>12} {:>12} {:>6}  {}\n",
        "Category", "Limit", "Spent", "Remaining", "Used", "Progress"
    ));
    output.push_str(&"-".repeat(88));
    output.push('\n');

    for status in statuses {
        let flag = if status.exceeded { "  EXCEEDED" } else { "" };
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12} {:>6}  {}{}\n",
            truncate(&status.category, 20),
            status.limit.format_with_symbol(symbol),
            status.spent.format_with_symbol(symbol),
            status.remaining.format_with_symbol(symbol),
            format_percentage(status.percentage),
            format_bar(status.percentage, 100.0, 20),
            flag
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;

    fn txn(category: &str, amount: &str, kind: &str) -> Transaction {
        Transaction::new(TransactionId::new(), "2024-01-01", amount, category, kind, None).unwrap()
    }

    #[test]
    fn test_no_budgets_is_empty() {
        assert!(BudgetStatus::for_budgets(&[], &[txn("Food", "1", "expense")])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_status_counts_only_expenses() {
        let budgets = vec![Budget::new("Food", "100").unwrap()];
        let transactions = vec![
            txn("Food", "40", "expense"),
            txn("Food", "70", "expense"),
            txn("Other", "1000", "expense"),
            txn("Food", "500", "income"),
        ];

        let statuses = BudgetStatus::for_budgets(&budgets, &transactions).unwrap();
        assert_eq!(statuses.len(), 1);

        let food = &statuses[0];
        assert_eq!(food.category, "Food");
        assert_eq!(food.limit, Money::from_cents(10_000));
        assert_eq!(food.spent, Money::from_cents(11_000));
        assert_eq!(food.remaining, Money::zero());
        assert_eq!(food.percentage, 100.0);
        assert!(food.exceeded);
    }

    #[test]
    fn test_budget_without_transactions() {
        let budgets = vec![Budget::new("Travel", "500").unwrap()];
        let statuses = BudgetStatus::for_budgets(&budgets, &[]).unwrap();
        assert_eq!(statuses[0].spent, Money::zero());
        assert_eq!(statuses[0].remaining, Money::from_cents(50_000));
        assert!(!statuses[0].exceeded);
    }

    #[test]
    fn test_format_marks_exceeded() {
        let budgets = vec![Budget::new("Food", "10").unwrap()];
        let statuses = BudgetStatus::for_budgets(&budgets, &[txn("Food", "20", "expense")]).unwrap();
        let output = format_budget_status(&statuses, "$");
        assert!(output.contains("EXCEEDED"));
        assert!(output.contains("$20.00"));
    }

    #[test]
    fn test_spending_too_large_to_total_is_an_error() {
        let budgets = vec![Budget::new("Food", "100").unwrap()];
        let transactions = vec![
            txn("Food", "90000000000000000", "expense"),
            txn("Food", "90000000000000000", "expense"),
        ];
        let err = BudgetStatus::for_budgets(&budgets, &transactions).unwrap_err();
        assert!(err.is_validation());
    }
}
