use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::PgPool;
use tracing::error;

use crate::darkroom::auth::{
    cookies::{clear_session_cookie, extract_session_token},
    storage::delete_session,
    utils::hash_session_token,
    AuthConfig,
};

/// End the current session and send the browser to the login page.
///
/// Idempotent: logging out without a session (or with a stale cookie) is a
/// no-op apart from the redirect.
pub async fn logout(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    config: Extension<AuthConfig>,
) -> Response {
    if let Some(token) = extract_session_token(&headers) {
        let token_hash = hash_session_token(&token);
        if let Err(err) = delete_session(&pool, &token_hash).await {
            error!("Failed to delete session: {err}");
        }
    }

    // Always clear the cookie, even if the session record was missing.
    let mut response_headers = HeaderMap::new();
    if let Ok(cookie) = clear_session_cookie(&config) {
        response_headers.insert(SET_COOKIE, cookie);
    }
    (response_headers, Redirect::to("/login")).into_response()
}
