use axum::{
    Json,
    extract::rejection::PathRejection,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::expenses::adapters::inbound::http_response::{
    EXPENSE_DELETED, MessageResponse, not_found,
};
use crate::modules::expenses::core::expense::ExpenseId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<ExpenseId>, PathRejection>,
) -> impl IntoResponse {
    let Ok(Path(id)) = id else {
        return not_found();
    };

    match state.expenses.delete(id).await {
        Ok(()) => Json(MessageResponse::new(EXPENSE_DELETED)).into_response(),
        Err(e) => e.into_response(),
    }
}
