//! Server configuration loaded from environment variables.

use camino::Utf8PathBuf;
use std::env;
use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Default CV location, relative to the working directory.
pub const DEFAULT_CV_PATH: &str = "attached_assets/Aditya_Nirgude_Lebenslauf.pdf";
/// Default attachment name for the CV download.
pub const DEFAULT_CV_FILENAME: &str = "Aditya_Nirgude_CV.pdf";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be used.
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Runtime settings for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
    /// Location of the CV file.
    pub cv_path: Utf8PathBuf,
    /// Attachment name for CV downloads.
    pub cv_download_name: String,
    /// `PostgreSQL` URL; messages are kept in memory when unset.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_pool_size: u32,
    /// Directory of the built client, served for non-API paths.
    pub static_dir: Option<Utf8PathBuf>,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a value cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_lookup(|key| match key {
    ///     "PORT" => Some("8080".to_owned()),
    ///     _ => None,
    /// })
    /// .expect("valid configuration");
    ///
    /// assert_eq!(config.port, 8080);
    /// assert!(config.database_url.is_none());
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            host: parse_or(&lookup, "FOLIO_HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: parse_or(&lookup, "PORT", 5000)?,
            cv_path: non_empty(&lookup, "FOLIO_CV_PATH")
                .map_or_else(|| Utf8PathBuf::from(DEFAULT_CV_PATH), Utf8PathBuf::from),
            cv_download_name: non_empty(&lookup, "FOLIO_CV_FILENAME")
                .unwrap_or_else(|| DEFAULT_CV_FILENAME.to_owned()),
            database_url: non_empty(&lookup, "DATABASE_URL"),
            db_pool_size: parse_or(&lookup, "FOLIO_DB_POOL_SIZE", 4)?,
            static_dir: non_empty(&lookup, "FOLIO_STATIC_DIR").map(Utf8PathBuf::from),
        };

        if config.db_pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "FOLIO_DB_POOL_SIZE",
                value: "0".to_owned(),
                reason: "pool size must be at least 1".to_owned(),
            });
        }

        Ok(config)
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = non_empty(lookup, key) else {
        debug!("{key} not set, using default: {default}");
        return Ok(default);
    };
    let value = raw.parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        value: raw.clone(),
        reason: err.to_string(),
    })?;
    info!("{key} set to {raw}");
    Ok(value)
}
