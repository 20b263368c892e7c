use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::expenses::adapters::inbound::http_response::invalid_body;
use crate::modules::expenses::core::expense::NewExpense;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewExpense>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new_expense) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let expense = state.expenses.create(new_expense, (state.today)()).await;
    (StatusCode::CREATED, Json(expense)).into_response()
}
