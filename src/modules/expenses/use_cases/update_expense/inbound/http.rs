use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::expenses::adapters::inbound::http_response::{invalid_body, not_found};
use crate::modules::expenses::core::expense::{ExpenseId, ExpensePatch};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<ExpenseId>, PathRejection>,
    body: Result<Json<ExpensePatch>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Path(id)) = id else {
        return not_found();
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.expenses.update(id, patch).await {
        Ok(expense) => Json(expense).into_response(),
        Err(e) => e.into_response(),
    }
}
