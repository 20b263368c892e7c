use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::patch_field::present;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub type ExpenseId = i64;

/// A single tracked expense as stored and returned over the wire.
///
/// Every field but `id` is kept as raw JSON. Clients send strings and numbers in
/// practice, but nothing is validated and whatever arrives is echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: Option<Value>,
    pub amount: Option<Value>,
    pub category: Option<Value>,
    pub date: Value,
}

/// Input for creating an expense. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewExpense {
    pub description: Option<Value>,
    pub amount: Option<Value>,
    pub category: Option<Value>,
    pub date: Option<Value>,
}

impl NewExpense {
    /// Builds the stored record. A missing, `null` or empty date falls back to `today`.
    pub fn into_expense(self, id: ExpenseId, today: NaiveDate) -> Expense {
        let date = match self.date {
            Some(Value::String(date)) if date.is_empty() => None,
            date => date,
        }
        .unwrap_or_else(|| Value::String(today.format(DATE_FORMAT).to_string()));

        Expense {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date,
        }
    }
}

/// Partial update of an expense.
///
/// The outer `Option` tells whether the field was sent at all; an explicit `null`
/// clears `description`, `amount` and `category`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpensePatch {
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present")]
    pub amount: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Option<Value>>,
    /// Overwrites the stored date when sent. An expense always carries a date, so
    /// `null` deserializes to `None` and leaves the stored one in place.
    #[serde(default)]
    pub date: Option<Value>,
}

impl ExpensePatch {
    pub fn apply_to(self, expense: &mut Expense) {
        if let Some(description) = self.description {
            expense.description = description;
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
    }
}
