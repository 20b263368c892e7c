use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::expenses::use_cases::create_expense::inbound::http as create_http;
use crate::modules::expenses::use_cases::delete_expense::inbound::http as delete_http;
use crate::modules::expenses::use_cases::list_expenses::inbound::http as list_http;
use crate::modules::expenses::use_cases::update_expense::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/expenses",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/expenses/{id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
