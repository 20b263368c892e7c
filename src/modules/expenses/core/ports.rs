// Ports define what the expense use cases need from storage, without implementing it.
//
// Adapters implement these traits; handlers only see `dyn ExpenseRepository`.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::expenses::core::expense::{Expense, ExpenseId, ExpensePatch, NewExpense};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseStoreError {
    #[error("expense {id} not found")]
    NotFound { id: ExpenseId },
}

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// All expenses in insertion order.
    async fn list(&self) -> Vec<Expense>;

    /// Stores a new expense under the next free id. `today` fills in a missing date.
    async fn create(&self, new_expense: NewExpense, today: NaiveDate) -> Expense;

    async fn update(
        &self,
        id: ExpenseId,
        patch: ExpensePatch,
    ) -> Result<Expense, ExpenseStoreError>;

    async fn delete(&self, id: ExpenseId) -> Result<(), ExpenseStoreError>;
}
