pub mod health;
pub use self::health::health;

pub mod pages;
pub use self::pages::{editor, home, index};

pub mod session;
pub use self::session::session;

pub mod user_login;
pub use self::user_login::{login, login_form};

pub mod user_logout;
pub use self::user_logout::logout;

pub mod user_register;
pub use self::user_register::{register, register_form};

// common functions for the handlers
use crate::darkroom::auth::{cookies::session_cookie, storage, AuthConfig};
use axum::{
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use regex::Regex;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

const USERNAME_MAX_LENGTH: usize = 32;
const PASSWORD_MAX_LENGTH: usize = 128;

/// Trim surrounding whitespace before validation and lookups.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_string()
}

pub fn valid_username(username: &str) -> bool {
    if username.is_empty() || username.chars().count() > USERNAME_MAX_LENGTH {
        return false;
    }
    Regex::new(r"^\S+$").map_or(false, |re| re.is_match(username))
}

pub fn valid_password(password: &str) -> bool {
    !password.is_empty() && password.chars().count() <= PASSWORD_MAX_LENGTH
}

/// Start a session for the user and redirect, with the session cookie attached.
pub(crate) async fn start_session(
    pool: &PgPool,
    config: &AuthConfig,
    user_id: Uuid,
    destination: &'static str,
) -> Response {
    let token = match storage::insert_session(pool, user_id, config.session_ttl_seconds()).await {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to insert session: {err:?}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error creating session".to_string(),
            )
                .into_response();
        }
    };

    let mut headers = HeaderMap::new();
    match session_cookie(config, &token) {
        Ok(cookie) => {
            headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error creating session".to_string(),
            )
                .into_response();
        }
    }

    (headers, Redirect::to(destination)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  alice "), "alice");
        assert_eq!(normalize_username("alice"), "alice");
    }

    #[test]
    fn test_valid_username() {
        assert!(valid_username("alice"));
        assert!(valid_username("a"));
        assert!(valid_username("user.name_01-x"));
        assert!(!valid_username(""));
        assert!(!valid_username("has space"));
        assert!(!valid_username(&"x".repeat(33)));
        assert!(valid_username(&"x".repeat(32)));
    }

    #[test]
    fn test_valid_password() {
        assert!(valid_password("p1"));
        assert!(!valid_password(""));
        assert!(!valid_password(&"x".repeat(129)));
        assert!(valid_password(&"x".repeat(128)));
    }
}
