use askama_axum::Template;
use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{error, instrument};

use super::{normalize_username, start_session, valid_password, valid_username};
use crate::darkroom::auth::{password, storage, storage::SignupOutcome, AuthConfig};

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    error: Option<&'static str>,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    username: String,
    password: String,
}

/// Render the registration form.
pub async fn register_form() -> RegisterPage {
    RegisterPage { error: None }
}

/// Create the account, start a session for it, and send the browser home.
///
/// A taken username re-renders the form with a message; no second user row
/// is ever created for it.
#[instrument(skip_all)]
pub async fn register(
    pool: Extension<PgPool>,
    config: Extension<AuthConfig>,
    payload: Option<Form<RegisterForm>>,
) -> Response {
    let Some(Form(form)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            RegisterPage {
                error: Some("Username and password are required"),
            },
        )
            .into_response();
    };

    let username = normalize_username(&form.username);

    if !valid_username(&username) {
        return (
            StatusCode::BAD_REQUEST,
            RegisterPage {
                error: Some("Invalid username"),
            },
        )
            .into_response();
    }

    if !valid_password(&form.password) {
        return (
            StatusCode::BAD_REQUEST,
            RegisterPage {
                error: Some("Invalid password"),
            },
        )
            .into_response();
    }

    let password_hash = match password::hash_password(&form.password) {
        Ok(hash) => hash,
        Err(err) => {
            error!("Failed to hash password: {err:?}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error creating user".to_string(),
            )
                .into_response();
        }
    };

    match storage::create_user(&pool, &username, &password_hash).await {
        Ok(SignupOutcome::Created(user_id)) => start_session(&pool, &config, user_id, "/home").await,
        Ok(SignupOutcome::DuplicateUsername) => {
            error!("User already exists");
            (
                StatusCode::CONFLICT,
                RegisterPage {
                    error: Some("That username is already taken"),
                },
            )
                .into_response()
        }
        Err(err) => {
            error!("Failed to insert user: {err:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error creating user".to_string(),
            )
                .into_response()
        }
    }
}
