use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::expenses::core::ports::ExpenseStoreError;

pub const EXPENSE_NOT_FOUND: &str = "Expense not found";
pub const EXPENSE_DELETED: &str = "Expense deleted";

/// `{"message": ...}` body shared by every non-expense response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(EXPENSE_NOT_FOUND)),
    )
        .into_response()
}

pub fn invalid_body(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection, "rejected expense body");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(MessageResponse::new(rejection.body_text())),
    )
        .into_response()
}

impl IntoResponse for ExpenseStoreError {
    fn into_response(self) -> Response {
        match self {
            ExpenseStoreError::NotFound { id } => {
                tracing::warn!(id, "expense not found");
                not_found()
            }
        }
    }
}
