//! Startup configuration loading.
//!
//! Reads `herald.toml` into [`HeraldConfig`] and the bot token from the
//! `DISCORD_TOKEN` environment variable. Unlike tunables with defaults, the
//! guild/channel identifiers are required: a missing or unparsable config
//! file is a fatal startup error, never papered over.

use std::path::Path;

use secrecy::SecretString;

use herald_types::config::HeraldConfig;
use herald_types::error::ConfigError;

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

/// Load and parse the config file.
pub async fn load_config(path: &Path) -> Result<HeraldConfig, ConfigError> {
    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|err| ConfigError::Unreadable {
                path: path.display().to_string(),
                source: err,
            })?;

    toml::from_str(&content).map_err(|err| ConfigError::Invalid {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

/// Read the bot token from the environment, wrapped so it never appears in
/// Debug output or logs.
pub fn load_token() -> Result<SecretString, ConfigError> {
    match std::env::var(TOKEN_ENV) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingSecret(TOKEN_ENV)),
    }
}
