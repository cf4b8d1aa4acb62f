//! # Darkroom
//!
//! `darkroom` is a web based photo editor. The server renders the editor and
//! home pages, and owns the account layer behind them: registration, login,
//! logout, and cookie-bound server side sessions.
//!
//! ## Accounts & Sessions
//!
//! - Passwords are hashed with Argon2id; only the PHC string is stored.
//! - A session is a random 32-byte token held by the browser in an
//!   `HttpOnly` cookie. The database stores the SHA-256 hash of the token,
//!   never the raw value.
//! - Logout is idempotent: clearing an absent session is a no-op.

pub mod cli;
pub mod darkroom;
