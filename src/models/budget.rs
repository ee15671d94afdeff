//! Budget model
//!
//! A spending limit for one category. Spending is matched against the
//! budget by exact, case-sensitive category name.

use serde::Serialize;
use std::fmt;

use super::money::Money;
use super::transaction::Transaction;
use crate::error::{LedgerError, LedgerResult};

/// A spending limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Budget {
    category: String,
    limit: Money,
}

/// Result of checking spending against a budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LimitCheck {
    /// Total spent in the budget's category
    pub total: Money,
    /// Amount left before the limit, never negative
    pub remaining: Money,
    /// Share of the limit used, capped at 100
    pub percentage: f64,
    /// Whether spending went over the limit
    pub exceeded: bool,
}

impl Budget {
    /// Create a budget, rejecting limits that are not positive numbers
    pub fn new(category: impl Into<String>, limit: &str) -> LedgerResult<Self> {
        let limit = Money::parse(limit)
            .ok()
            .filter(Money::is_positive)
            .ok_or_else(|| LedgerError::validation("Budget limit must be a positive number"))?;

        Ok(Self {
            category: category.into(),
            limit,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    /// Compare the given expenses against this budget
    ///
    /// Only transactions whose category equals this budget's category are
    /// counted; the caller decides which transactions are expenses. Fails
    /// when the matching total does not fit in [`Money`].
    pub fn check_limit<'a, I>(&self, expenses: I) -> LedgerResult<LimitCheck>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let total = Money::checked_sum(
            expenses
                .into_iter()
                .filter(|t| t.category() == self.category)
                .map(Transaction::amount),
        )
        .ok_or_else(LedgerError::amount_overflow)?;

        let remaining = if total > self.limit {
            Money::zero()
        } else {
            self.limit - total
        };

        Ok(LimitCheck {
            total,
            remaining,
            percentage: total.percent_of(self.limit).min(100.0),
            exceeded: total > self.limit,
        })
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.limit)
    }
}
