use crate::modules::expenses::core::ports::ExpenseRepository;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub expenses: Arc<dyn ExpenseRepository>,
    /// Source of the date stamped on expenses created without one.
    pub today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(expenses: Arc<dyn ExpenseRepository>) -> Self {
        Self {
            expenses,
            today: local_today,
        }
    }
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
