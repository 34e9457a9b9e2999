use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::rounds::handlers::list_rounds,
        features::rounds::handlers::get_round,
        features::submissions::handlers::submit,
        features::submissions::handlers::list_submissions,
        features::leaderboard::handlers::get_leaderboard,
        features::admin::handlers::reset,
    ),
    components(
        schemas(
            storage::dto::round::RoundSummary,
            storage::dto::round::ScenarioSummary,
            storage::dto::round::RoundDetailResponse,
            storage::dto::round::ScenarioView,
            storage::dto::round::FieldView,
            storage::dto::submission::SubmitRequest,
            storage::dto::submission::SubmitResponse,
            storage::dto::leaderboard::LeaderboardResponse,
            storage::models::AnswerValue,
            storage::models::FieldScore,
            storage::models::LeaderboardEntry,
            storage::models::StoredSubmission,
        )
    ),
    tags(
        (name = "rounds", description = "Public round and scenario endpoints"),
        (name = "submissions", description = "Submission intake and listing"),
        (name = "leaderboard", description = "Per-round ranking"),
        (name = "admin", description = "Instructor controls"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Admin Key")
                        .build(),
                ),
            )
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/rounds", features::rounds::routes::routes())
        .nest("/api/submissions", features::submissions::routes::routes())
        .nest("/api/leaderboard", features::leaderboard::routes::routes())
        .nest("/api/admin", features::admin::routes::routes(state.clone()))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use storage::{Catalog, SubmissionStore};
    use tower::ServiceExt;

    use crate::middleware::auth::AdminKeys;

    const CATALOG_DOC: &str = r#"{
        "scenarios": [
            {
                "id": "churn",
                "title": "Telecom churn",
                "description": "Subscribers are leaving.",
                "fields": [
                    {
                        "name": "problem",
                        "kind": "single-choice",
                        "weight": 3,
                        "options": ["Churn", "Fraud", "Forecasting"],
                        "answer": "Churn"
                    },
                    {
                        "name": "goals",
                        "kind": "multi-select",
                        "weight": 3,
                        "options": ["Retention", "Revenue", "Latency", "Uptime"],
                        "answers": ["Retention", "Revenue", "Uptime"],
                        "penalty": "subtract-per-extra"
                    },
                    {
                        "name": "feasible_data",
                        "kind": "binary",
                        "weight": 1,
                        "prompt": "Is the required data available?",
                        "answer": true,
                        "default": true
                    }
                ]
            }
        ],
        "rounds": [
            {"id": 1, "title": "Round 1", "description": "Warm-up", "scenario": "churn"}
        ]
    }"#;

    async fn test_app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_json(CATALOG_DOC).unwrap();
        let store = SubmissionStore::open(dir.path().join("submissions.csv"))
            .await
            .unwrap();
        let state = AppState::new(
            catalog,
            store,
            AdminKeys::from_comma_separated("test-admin-key"),
        );
        (dir, build_router(state))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn submission(participant: &str, goals: Vec<&str>) -> Value {
        json!({
            "participant": participant,
            "round": 1,
            "answers": {
                "problem": "Churn",
                "goals": goals,
                "feasible_data": true
            }
        })
    }

    #[tokio::test]
    async fn list_rounds_returns_catalog_without_answers() {
        let (_dir, app) = test_app().await;

        let response = app.oneshot(get("/api/rounds")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["scenario"]["id"], "churn");
    }

    #[tokio::test]
    async fn get_round_exposes_fields_but_not_the_key() {
        let (_dir, app) = test_app().await;

        let response = app.oneshot(get("/api/rounds/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let fields = json["scenario"]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0]["kind"], "single-choice");
        // The key's correct values must never be serialized.
        assert!(fields[0].get("answer").is_none());
        assert!(fields[1].get("answers").is_none());
    }

    #[tokio::test]
    async fn unknown_round_is_404() {
        let (_dir, app) = test_app().await;

        let response = app.oneshot(get("/api/rounds/42")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn submit_scores_and_returns_breakdown() {
        let (_dir, app) = test_app().await;

        let response = app
            .oneshot(post_json(
                "/api/submissions",
                submission("Data Warriors", vec!["Retention", "Revenue", "Latency"]),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        // problem 3 + goals (2 hits - 1 extra) + feasible 1
        assert_eq!(json["score"], 5);
        assert_eq!(json["max_score"], 7);
        assert_eq!(json["scenario"], "churn");
        assert_eq!(json["fields"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn submit_to_unknown_round_is_404() {
        let (_dir, app) = test_app().await;

        let mut body = submission("Data Warriors", vec![]);
        body["round"] = json!(9);
        let response = app
            .oneshot(post_json("/api/submissions", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_participant_is_rejected() {
        let (_dir, app) = test_app().await;

        let response = app
            .oneshot(post_json("/api/submissions", submission("", vec![])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation failed");
    }

    #[tokio::test]
    async fn whitespace_only_participant_is_rejected() {
        let (_dir, app) = test_app().await;

        let response = app
            .oneshot(post_json("/api/submissions", submission("   ", vec![])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn participant_names_are_trimmed() {
        let (_dir, app) = test_app().await;

        for team in [" Data Warriors ", "Data Warriors"] {
            let response = app
                .clone()
                .oneshot(post_json(
                    "/api/submissions",
                    submission(team, vec!["Retention"]),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);

            let json = body_json(response).await;
            assert_eq!(json["participant"], "Data Warriors");
        }

        // Both submissions count as one leaderboard participant.
        let response = app.oneshot(get("/api/leaderboard?round=1")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["entries"].as_array().unwrap().len(), 1);
        assert_eq!(json["entries"][0]["participant"], "Data Warriors");
    }

    #[tokio::test]
    async fn missing_required_answer_is_rejected_not_zero_scored() {
        let (_dir, app) = test_app().await;

        // feasible_data has a default; problem does not.
        let body = json!({
            "participant": "Data Warriors",
            "round": 1,
            "answers": { "goals": ["Retention"] }
        });
        let response = app
            .oneshot(post_json("/api/submissions", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("problem"));
    }

    #[tokio::test]
    async fn leaderboard_ranks_best_score_per_participant() {
        let (_dir, app) = test_app().await;

        for (team, goals) in [
            ("alpha", vec!["Retention"]),
            ("beta", vec!["Retention", "Revenue", "Uptime"]),
            ("alpha", vec!["Retention", "Revenue"]),
        ] {
            let response = app
                .clone()
                .oneshot(post_json("/api/submissions", submission(team, goals)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.oneshot(get("/api/leaderboard?round=1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["round"], 1);
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["participant"], "beta");
        assert_eq!(entries[0]["rank"], 1);
        assert_eq!(entries[0]["score"], 7);
        assert_eq!(entries[1]["participant"], "alpha");
        assert_eq!(entries[1]["score"], 6);
    }

    #[tokio::test]
    async fn leaderboard_defaults_to_latest_round() {
        let (_dir, app) = test_app().await;

        let response = app.clone().oneshot(get("/api/leaderboard")).await.unwrap();
        let json = body_json(response).await;
        assert!(json["round"].is_null());
        assert!(json["entries"].as_array().unwrap().is_empty());

        app.clone()
            .oneshot(post_json(
                "/api/submissions",
                submission("alpha", vec!["Retention"]),
            ))
            .await
            .unwrap();

        let response = app.oneshot(get("/api/leaderboard")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["round"], 1);
        assert_eq!(json["entries"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn admin_reset_requires_a_valid_key() {
        let (_dir, app) = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/admin/reset")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/admin/reset")
                    .header(header::AUTHORIZATION, "Bearer wrong-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_reset_clears_submissions() {
        let (_dir, app) = test_app().await;

        app.clone()
            .oneshot(post_json(
                "/api/submissions",
                submission("alpha", vec!["Retention"]),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/admin/reset")
                    .header(header::AUTHORIZATION, "Bearer test-admin-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get("/api/submissions")).await.unwrap();
        let json = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }
}
