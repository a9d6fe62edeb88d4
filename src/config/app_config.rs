use ::config::{Config, Environment, Map};
use error_stack::{report, ResultExt};
use thiserror::Error;

use super::{luno_config::LunoConfig, sheets_config::SpreadsheetConfig};

/// Environment variables the exporter refuses to start without.
pub const REQUIRED_VARIABLES: [&str; 4] = [
    "LUNO_API_KEY",
    "LUNO_API_SECRET",
    "JSON_CREDENTIALS",
    "SPREADSHEET_ID",
];

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Missing environment variable {0}")]
    MissingVariable(&'static str),
    #[error("Failed to read configuration from the environment")]
    ReadEnvironment,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub luno: LunoConfig,
    pub sheets: SpreadsheetConfig,
}

// Flat view of the environment; `config` lowercases variable names.
#[derive(serde::Deserialize)]
struct EnvironmentConfig {
    luno_api_key: Box<str>,
    luno_api_secret: Box<str>,
    json_credentials: Box<str>,
    spreadsheet_id: Box<str>,
}

impl From<EnvironmentConfig> for AppConfig {
    fn from(env: EnvironmentConfig) -> Self {
        AppConfig {
            luno: LunoConfig {
                api_key: env.luno_api_key,
                api_secret: env.luno_api_secret,
            },
            sheets: SpreadsheetConfig {
                priv_key: env.json_credentials,
                spreadsheet_id: env.spreadsheet_id,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> error_stack::Result<Self, AppConfigError> {
        Self::from_source(None)
    }

    /// Reads the configuration from `source` instead of the process environment when given.
    pub fn from_source(
        source: Option<Map<String, String>>,
    ) -> error_stack::Result<Self, AppConfigError> {
        let config = Config::builder()
            .add_source(Environment::default().source(source))
            .build()
            .change_context(AppConfigError::ReadEnvironment)?;

        for variable in REQUIRED_VARIABLES {
            if config.get_string(&variable.to_lowercase()).is_err() {
                return Err(report!(AppConfigError::MissingVariable(variable)));
            }
        }

        let env: EnvironmentConfig = config
            .try_deserialize()
            .change_context(AppConfigError::ReadEnvironment)?;

        Ok(env.into())
    }
}
