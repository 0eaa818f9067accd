use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Username/password pair every API request must present via Basic auth.
#[derive(Clone)]
pub struct ApiCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    /// Store holding the song catalog; the main store unless configured.
    pub catalog_database_url: String,
    pub run_migrations: bool,
    pub connect_timeout: Option<Duration>,
    pub acquire_timeout: Option<Duration>,

    pub bind_address: String,
    pub allowed_origins: Vec<String>,
    pub credentials: ApiCredentials,

    /// Guild served by the legacy `/emoji-stats` endpoint.
    pub default_guild_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "mysql://{}:{}@{}/{}",
                required("DB_USER")?,
                required("DB_PASSWORD")?,
                required("DB_HOST")?,
                required("DB_NAME")?,
            ),
        };
        let catalog_database_url =
            var("CATALOG_DATABASE_URL").unwrap_or_else(|| database_url.clone());

        let run_migrations = match var("RUN_MIGRATIONS") {
            Some(value) => parse_bool("RUN_MIGRATIONS", &value)?,
            None => true,
        };

        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let default_guild_id = var("DEFAULT_GUILD_ID")
            .map(|value| ("DEFAULT_GUILD_ID", value))
            .or_else(|| var("OTOGAME_GUILD_ID").map(|value| ("OTOGAME_GUILD_ID", value)))
            .map(|(name, value)| parse_number::<u64>(name, &value))
            .transpose()?;

        Ok(Self {
            database_url,
            catalog_database_url,
            run_migrations,
            connect_timeout: var("DATABASE_CONNECT_TIMEOUT_SECS")
                .map(|value| parse_number("DATABASE_CONNECT_TIMEOUT_SECS", &value))
                .transpose()?
                .map(Duration::from_secs),
            acquire_timeout: var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .map(|value| parse_number("DATABASE_ACQUIRE_TIMEOUT_SECS", &value))
                .transpose()?
                .map(Duration::from_secs),
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            allowed_origins,
            credentials: ApiCredentials {
                username: required("API_USERNAME")?,
                password: required("API_PASSWORD")?,
            },
            default_guild_id,
        })
    }
}

fn parse_number<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}
