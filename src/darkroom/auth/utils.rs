//! Small helpers for session token handling.

use anyhow::{Context, Result};
use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

/// Create a new session token for the auth cookie.
/// The raw value is only returned to set the cookie; the database stores a hash.
pub(crate) fn generate_session_token() -> Result<String> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("failed to generate session token")?;
    Ok(Base64UrlUnpadded::encode_string(&bytes))
}

/// Hash a session token so raw values never touch the database.
/// The hash is used for lookups when the cookie is presented.
pub(crate) fn hash_session_token(token: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}

/// True when a sqlx error is a Postgres unique violation (code 23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "23505")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_tokens_are_unique() {
        let first = generate_session_token().unwrap();
        let second = generate_session_token().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_session_token_is_url_safe() {
        let token = generate_session_token().unwrap();
        // 32 bytes, unpadded base64
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_hash_is_deterministic() {
        let token = "some-token";
        assert_eq!(hash_session_token(token), hash_session_token(token));
        assert_eq!(hash_session_token(token).len(), 32);
        assert_ne!(hash_session_token(token), hash_session_token("other"));
    }
}
