use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::WebError;
use crate::state::AppState;

/// Middleware guarding instructor endpoints: requires a configured admin key
/// as a bearer token.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if state.admin_keys.is_valid(token) => Ok(next.run(req).await),
        _ => {
            tracing::warn!("Invalid admin key attempt");
            Err(WebError::Unauthorized)
        }
    }
}

#[derive(Clone)]
pub struct AdminKeys {
    keys: std::collections::HashSet<String>,
}

impl AdminKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_keys() {
        let keys = AdminKeys::from_comma_separated(" letmein , other-key ,");
        assert!(keys.is_valid("letmein"));
        assert!(keys.is_valid("other-key"));
        assert!(!keys.is_valid(""));
        assert!(!keys.is_valid("wrong"));
    }

    #[test]
    fn empty_configuration_accepts_nothing() {
        let keys = AdminKeys::from_comma_separated("");
        assert!(!keys.is_valid("anything"));
    }
}
