//! Database helpers for user and session state.

use anyhow::{anyhow, Context, Result};
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

use super::password;
use super::utils::{generate_session_token, hash_session_token, is_unique_violation};

/// Outcome when attempting to create a new user.
#[derive(Debug)]
pub(crate) enum SignupOutcome {
    Created(Uuid),
    DuplicateUsername,
}

/// Outcome when verifying submitted credentials.
///
/// Unknown usernames and wrong passwords collapse into the same variant so
/// callers cannot tell them apart.
#[derive(Debug)]
pub(crate) enum LoginOutcome {
    Verified(Uuid),
    InvalidCredentials,
}

/// Minimal data returned for a valid session cookie.
pub(crate) struct SessionRecord {
    pub(crate) user_id: Uuid,
    pub(crate) username: String,
}

struct CredentialRecord {
    user_id: Uuid,
    password_hash: String,
}

/// Insert a new user, relying on the unique constraint for duplicate
/// detection rather than a racy pre-read.
pub(crate) async fn create_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<SignupOutcome> {
    let query = r"
        INSERT INTO users (username, password_hash)
        VALUES ($1, $2)
        RETURNING id
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(span)
        .await;

    match row {
        Ok(row) => Ok(SignupOutcome::Created(row.get("id"))),
        Err(err) if is_unique_violation(&err) => Ok(SignupOutcome::DuplicateUsername),
        Err(err) => Err(err).context("failed to insert user"),
    }
}

/// Check a username/password pair against the stored argon2 hash.
pub(crate) async fn verify_credentials(
    pool: &PgPool,
    username: &str,
    submitted_password: &str,
) -> Result<LoginOutcome> {
    let Some(record) = lookup_credentials(pool, username).await? else {
        return Ok(LoginOutcome::InvalidCredentials);
    };

    if password::verify_password(submitted_password, &record.password_hash)? {
        Ok(LoginOutcome::Verified(record.user_id))
    } else {
        Ok(LoginOutcome::InvalidCredentials)
    }
}

async fn lookup_credentials(pool: &PgPool, username: &str) -> Result<Option<CredentialRecord>> {
    let query = r"
        SELECT id, password_hash
        FROM users
        WHERE username = $1
        LIMIT 1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(username)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to lookup credentials")?;

    Ok(row.map(|row| CredentialRecord {
        user_id: row.get("id"),
        password_hash: row.get("password_hash"),
    }))
}

/// Create a session row and return the raw token for the cookie.
pub(crate) async fn insert_session(
    pool: &PgPool,
    user_id: Uuid,
    ttl_seconds: i64,
) -> Result<String> {
    // Generate a random token, store only its hash, and return the raw value
    // so the caller can set the session cookie.
    let query = r"
        INSERT INTO user_sessions (user_id, session_hash, expires_at)
        VALUES ($1, $2, NOW() + ($3 * INTERVAL '1 second'))
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );

    for _ in 0..3 {
        let token = generate_session_token()?;
        let token_hash = hash_session_token(&token);
        let result = sqlx::query(query)
            .bind(user_id)
            .bind(token_hash)
            .bind(ttl_seconds)
            .execute(pool)
            .instrument(span.clone())
            .await;

        match result {
            Ok(_) => return Ok(token),
            Err(err) if is_unique_violation(&err) => {}
            Err(err) => return Err(err).context("failed to insert session"),
        }
    }

    Err(anyhow!("failed to generate unique session token"))
}

pub(crate) async fn lookup_session(
    pool: &PgPool,
    token_hash: &[u8],
) -> Result<Option<SessionRecord>> {
    // Only accept unexpired sessions.
    let query = r"
        SELECT users.id, users.username
        FROM user_sessions
        JOIN users ON users.id = user_sessions.user_id
        WHERE user_sessions.session_hash = $1
          AND user_sessions.expires_at > NOW()
        LIMIT 1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(token_hash)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to lookup session")?;

    if row.is_none() {
        return Ok(None);
    }

    // Record activity for audit/visibility without extending the session TTL.
    let query = r"
        UPDATE user_sessions
        SET last_seen_at = NOW()
        WHERE session_hash = $1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "UPDATE",
        db.statement = query
    );
    sqlx::query(query)
        .bind(token_hash)
        .execute(pool)
        .instrument(span)
        .await
        .context("failed to update session last_seen_at")?;

    Ok(row.map(|row| SessionRecord {
        user_id: row.get("id"),
        username: row.get("username"),
    }))
}

pub(crate) async fn delete_session(pool: &PgPool, token_hash: &[u8]) -> Result<()> {
    // Logout is idempotent; it's fine if no rows are deleted.
    let query = "DELETE FROM user_sessions WHERE session_hash = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "DELETE",
        db.statement = query
    );
    sqlx::query(query)
        .bind(token_hash)
        .execute(pool)
        .instrument(span)
        .await
        .context("failed to delete session")?;
    Ok(())
}
