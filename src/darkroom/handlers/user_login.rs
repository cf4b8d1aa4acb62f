use askama_axum::Template;
use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, instrument};

use super::{normalize_username, start_session};
use crate::darkroom::auth::{storage, storage::LoginOutcome, AuthConfig};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    error: Option<&'static str>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

/// Render the login form.
pub async fn login_form() -> LoginPage {
    LoginPage { error: None }
}

/// Verify the credentials and start a session on success.
///
/// Unknown usernames and wrong passwords get the same answer; no session is
/// created on either.
#[instrument(skip_all)]
pub async fn login(
    pool: Extension<PgPool>,
    config: Extension<AuthConfig>,
    payload: Option<Form<LoginForm>>,
) -> Response {
    let Some(Form(form)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            LoginPage {
                error: Some("Username and password are required"),
            },
        )
            .into_response();
    };

    let username = normalize_username(&form.username);

    match storage::verify_credentials(&pool, &username, &form.password).await {
        Ok(LoginOutcome::Verified(user_id)) => {
            debug!("Login successful");
            start_session(&pool, &config, user_id, "/home").await
        }
        Ok(LoginOutcome::InvalidCredentials) => {
            debug!("Unauthorized");
            (
                StatusCode::UNAUTHORIZED,
                LoginPage {
                    error: Some("Invalid username or password"),
                },
            )
                .into_response()
        }
        Err(err) => {
            error!("Failed to verify credentials: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error verifying credentials".to_string(),
            )
                .into_response()
        }
    }
}
