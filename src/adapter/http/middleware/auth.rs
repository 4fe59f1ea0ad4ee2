use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{
    adapter::http::middleware::extractor::AuthUser,
    application::app_error::{AppError, AppResult},
    infra::state::AppState,
};

pub async fn auth_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> AppResult<Response> {
    let token = extract_token(request.headers(), &state.config.auth.token_header).ok_or_else(|| {
        warn!(uri = %request.uri(), "Request without token");
        AppError::MissingToken
    })?;
    let user_id = state.token_verifier.verify(&token)?;

    request.extensions_mut().insert(AuthUser {
        user_id: user_id.to_string(),
    });

    Ok(next.run(request).await)
}

/// Looks for the token in the configured header first, then in
/// `Authorization: Bearer <token>`.
fn extract_token(headers: &HeaderMap, token_header: &str) -> Option<String> {
    let from_header = headers
        .get(token_header)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(token) = from_header {
        return Some(token.to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
