use std::time::Duration;

use config::{Config, ConfigError};
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_FILE: &str = "./StudyCatalog.toml";
static DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);
static DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(3);
/// the token secret a fresh install ships with. Anyone who knows it can sign their own sessions
pub static DEFAULT_TOKEN_SECRET: &str = "change-me";

#[derive(Deserialize, Clone)]
pub struct DbConfig {
    pub location: String,
}

/// config properties for the admin passcode gate
#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    /// the shared code that unlocks the admin view. Never sent to clients
    pub passcode: String,
    /// the secret mixed into session token signatures
    #[serde(rename = "tokensecret")]
    pub token_secret: String,
    /// how long an issued session token stays valid, as a humantime duration (e.g. `12h`)
    #[serde(rename = "sessionttl")]
    pub session_ttl: String,
}

#[derive(Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Deserialize, Clone)]
pub struct NotificationConfig {
    #[serde(rename = "dismissafter")]
    pub dismiss_after: String,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone)]
pub struct CatalogConfig {
    pub database: DbConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub notifications: NotificationConfig,
}

impl AuthConfig {
    pub fn session_ttl(&self) -> Duration {
        parse_duration_or(&self.session_ttl, DEFAULT_SESSION_TTL)
    }

    pub fn uses_default_token_secret(&self) -> bool {
        self.token_secret == DEFAULT_TOKEN_SECRET
    }
}

impl NotificationConfig {
    pub fn dismiss_after(&self) -> Duration {
        parse_duration_or(&self.dismiss_after, DEFAULT_DISMISS_AFTER)
    }
}

fn parse_duration_or(value: &str, fallback: Duration) -> Duration {
    match humantime::parse_duration(value) {
        Ok(duration) => duration,
        Err(e) => {
            log::warn!("Could not parse duration {value:?} ({e}), using {fallback:?} instead");
            fallback
        }
    }
}

fn build_config() -> Result<CatalogConfig, ConfigError> {
    Config::builder()
        .set_default("database.location", "./catalog.sqlite")?
        .set_default("auth.passcode", "150206")?
        .set_default("auth.tokensecret", DEFAULT_TOKEN_SECRET)?
        .set_default("auth.sessionttl", "12h")?
        .set_default("logging.level", "info")?
        .set_default("logging.file", "./study_catalog.log")?
        .set_default("notifications.dismissafter", "3s")?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .build()?
        .try_deserialize()
}

/// Parses the config file located at ./StudyCatalog.toml, if it exists, layered over the defaults.
/// A missing file is fine, but a file that exists and can't be parsed is unrecoverable
pub fn parse_config() -> CatalogConfig {
    match build_config() {
        Ok(config) => config,
        Err(e) => panic!("Failed to parse config file. Exception is {e}"),
    }
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static CATALOG_CONFIG: Lazy<CatalogConfig> = Lazy::new(parse_config);
