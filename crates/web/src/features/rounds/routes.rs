use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::{get_round, list_rounds};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rounds))
        .route("/:id", get(get_round))
}
