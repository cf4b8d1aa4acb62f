pub mod server;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        dsn: SecretString,
        session_ttl_seconds: i64,
        secure_cookies: bool,
    },
}
