// In memory implementation of the ExpenseRepository port.
//
// Purpose
// - Hold every expense for the lifetime of the process.
//
// Responsibilities
// - Keep expenses in insertion order.
// - Hand out ids from a counter that is never rewound, even after deletes.
// - Guard the list and the counter with one lock so each operation is atomic.

use crate::modules::expenses::core::expense::{Expense, ExpenseId, ExpensePatch, NewExpense};
use crate::modules::expenses::core::ports::{ExpenseRepository, ExpenseStoreError};
use chrono::NaiveDate;
use tokio::sync::RwLock;

const FIRST_ID: ExpenseId = 1;

struct Inner {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

pub struct InMemoryExpenses {
    inner: RwLock<Inner>,
}

impl Default for InMemoryExpenses {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                expenses: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }
}

impl InMemoryExpenses {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ExpenseRepository for InMemoryExpenses {
    async fn list(&self) -> Vec<Expense> {
        self.inner.read().await.expenses.clone()
    }

    async fn create(&self, new_expense: NewExpense, today: NaiveDate) -> Expense {
        let mut guard = self.inner.write().await;
        let expense = new_expense.into_expense(guard.next_id, today);
        guard.expenses.push(expense.clone());
        guard.next_id += 1;
        tracing::debug!(id = expense.id, "expense created");
        expense
    }

    async fn update(
        &self,
        id: ExpenseId,
        patch: ExpensePatch,
    ) -> Result<Expense, ExpenseStoreError> {
        let mut guard = self.inner.write().await;
        let expense = guard
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or(ExpenseStoreError::NotFound { id })?;
        patch.apply_to(expense);
        tracing::debug!(id, "expense updated");
        Ok(expense.clone())
    }

    async fn delete(&self, id: ExpenseId) -> Result<(), ExpenseStoreError> {
        let mut guard = self.inner.write().await;
        let position = guard
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(ExpenseStoreError::NotFound { id })?;
        guard.expenses.remove(position);
        tracing::debug!(id, "expense deleted");
        Ok(())
    }
}
