// Shared test fixtures for expenses.

use crate::modules::expenses::core::expense::{Expense, ExpenseId, NewExpense};
use chrono::NaiveDate;
use serde_json::{Value, json};

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
}

pub fn new_coffee() -> NewExpense {
    NewExpense {
        description: Some("Coffee".into()),
        amount: Some(json!(3.5)),
        category: Some("Food".into()),
        date: None,
    }
}

pub struct ExpenseBuilder {
    inner: Expense,
}

impl Default for ExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ExpenseBuilder {
    pub fn new() -> Self {
        Self {
            inner: new_coffee().into_expense(1, fixed_today()),
        }
    }

    pub fn id(mut self, v: ExpenseId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn description(mut self, v: impl Into<Value>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn amount(mut self, v: impl Into<Value>) -> Self {
        self.inner.amount = Some(v.into());
        self
    }

    pub fn category(mut self, v: impl Into<Value>) -> Self {
        self.inner.category = Some(v.into());
        self
    }

    pub fn date(mut self, v: impl Into<Value>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn build(self) -> Expense {
        self.inner
    }
}

#[cfg(test)]
mod expense_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ExpenseBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.description, Some(json!("Coffee")));
        assert_eq!(built.amount, Some(json!(3.5)));
        assert_eq!(built.category, Some(json!("Food")));
        assert_eq!(built.date, "2025-03-09");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ExpenseBuilder::new()
            .id(12)
            .description("Train")
            .amount(json!(18.2))
            .category("Transport")
            .date("2025-01-02")
            .build();

        assert_eq!(custom.id, 12);
        assert_eq!(custom.description, Some(json!("Train")));
        assert_eq!(custom.amount, Some(json!(18.2)));
        assert_eq!(custom.category, Some(json!("Transport")));
        assert_eq!(custom.date, "2025-01-02");
    }
}
