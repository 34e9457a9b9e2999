use axum::{Router, routing::post};

use crate::state::AppState;

use super::handlers::{list_submissions, submit};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(submit).get(list_submissions))
}
