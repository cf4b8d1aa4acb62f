//! Session introspection endpoint for cookie auth.

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::darkroom::auth::{cookies::authenticate_session, storage::SessionRecord};

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub user_id: String,
    pub username: String,
}

/// Report the session bound to the request cookie.
///
/// Missing cookies are treated as "no session" to avoid leaking auth state.
pub async fn session(headers: HeaderMap, pool: Extension<PgPool>) -> Response {
    match authenticate_session(&headers, &pool).await {
        Ok(Some(SessionRecord { user_id, username })) => {
            let response = SessionResponse {
                user_id: user_id.to_string(),
                username,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(status) => status.into_response(),
    }
}
