use axum::{Router, middleware, routing::post};

use crate::middleware::auth::require_admin;
use crate::state::AppState;

use super::handlers::reset;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/reset", post(reset))
        .layer(middleware::from_fn_with_state(state, require_admin))
}
