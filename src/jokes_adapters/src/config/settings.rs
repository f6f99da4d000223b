use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{self, env};
use crate::session::SessionConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct JokesSetting {
    pub application: ApplicationSetting,
    #[serde(default)]
    pub postgres: PostgresSetting,
    pub session: SessionSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
    pub assets_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostgresSetting {
    /// Absent means the in-memory stores are used.
    pub url: Option<Secret<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSetting {
    pub cookie_name: String,
    pub secret: Secret<String>,
    pub ttl_in_seconds: i64,
    pub secure: bool,
}

impl From<SessionSetting> for SessionConfig {
    fn from(setting: SessionSetting) -> Self {
        SessionConfig {
            cookie_name: setting.cookie_name,
            secret: setting.secret,
            ttl_in_seconds: setting.ttl_in_seconds,
            secure: setting.secure,
        }
    }
}

impl JokesSetting {
    /// Layered load: built-in defaults, `config/base.json`,
    /// `config/{APP_ENVIRONMENT}.json`, then `JOKES__*` environment variables.
    /// `DATABASE_URL` and `SESSION_SECRET` override everything else.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| constants::DEFAULT_ENVIRONMENT.to_string());

        Self::builder(&environment)?.build()?.try_deserialize()
    }

    fn builder(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", constants::prod::APP_ADDRESS)?
            .set_default("application.assets_dir", constants::ASSETS_DIR)?
            .set_default("session.cookie_name", constants::SESSION_COOKIE_NAME)?
            .set_default("session.ttl_in_seconds", constants::SESSION_TTL_IN_SECONDS)?
            .set_default("session.secure", false)?
            .add_source(File::with_name(&format!("{}/base", constants::CONFIG_DIR)).required(false))
            .add_source(
                File::with_name(&format!("{}/{environment}", constants::CONFIG_DIR))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("postgres.url", std::env::var(env::DATABASE_URL_ENV_VAR).ok())?
            .set_override_option(
                "session.secret",
                std::env::var(env::SESSION_SECRET_ENV_VAR).ok(),
            )
    }
}
