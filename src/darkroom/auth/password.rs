//! Argon2id password hashing.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password into a PHC string for storage.
pub(crate) fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow!("failed to hash password: {err}"))?;

    Ok(hashed.to_string())
}

/// Verify a password against a stored PHC string.
///
/// A mismatch is `Ok(false)`; an unparseable stored hash is an error.
pub(crate) fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|err| anyhow!("invalid stored hash: {err}"))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(anyhow!("failed to verify password: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("p1").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("p1", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("correct horse").unwrap();
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_garbage_stored_hash_is_error() {
        assert!(verify_password("p1", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("p1").unwrap();
        let second = hash_password("p1").unwrap();
        assert_ne!(first, second);
    }
}
