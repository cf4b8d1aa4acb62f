use crate::cli::actions::Action;
use crate::darkroom::{auth::AuthConfig, new};
use anyhow::{ensure, Context, Result};
use secrecy::ExposeSecret;
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            session_ttl_seconds,
            secure_cookies,
        } => {
            let parsed = Url::parse(dsn.expose_secret()).context("invalid database DSN")?;

            ensure!(
                parsed.scheme() == "postgres" || parsed.scheme() == "postgresql",
                "database DSN must be a postgres:// URL"
            );

            let config = AuthConfig::new()
                .with_session_ttl_seconds(session_ttl_seconds)
                .with_cookie_secure(secure_cookies);

            new(port, dsn.expose_secret(), config).await?;
        }
    }

    Ok(())
}
