//! Budget display formatting

use super::report::truncate;
use crate::models::Budget;

/// Format the list of budgets
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<24} {:>14}\n", "Category", "Monthly Limit"));
    output.push_str(&"-".repeat(39));
    output.push('\n');

    for budget in budgets {
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            truncate(budget.category(), 24),
            budget.limit().format_with_symbol(symbol)
        ));
    }

    output
}
