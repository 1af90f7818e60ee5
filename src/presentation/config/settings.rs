use std::net::SocketAddr;
use std::path::Path;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";
const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid environment: {0}")]
    Environment(String),
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("cannot resolve server host '{host}': {source}")]
    Host {
        host: String,
        source: std::io::Error,
    },
    #[error("server host '{0}' resolved to no addresses")]
    Unresolved(String),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                json: false,
            },
        }
    }
}

impl Settings {
    /// Reads `APP_ENVIRONMENT`, defaulting to local.
    pub fn environment() -> Result<Environment, SettingsError> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => Environment::try_from(value).map_err(SettingsError::Environment),
            Err(_) => Ok(Environment::default()),
        }
    }

    /// Layers built-in defaults, the optional `appsettings.<Environment>` file
    /// in the working directory, and `APP_`-prefixed environment variables
    /// (`APP_SERVER__PORT=9000`).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::load_from(environment, Path::new(""))
    }

    /// Same as [`Settings::load`], reading the settings file from `config_dir`.
    pub fn load_from(environment: Environment, config_dir: &Path) -> Result<Self, SettingsError> {
        let settings_file = config_dir.join(environment.settings_file());
        let defaults = Settings::default();

        let configuration = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .add_source(File::with_name(&settings_file.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}

impl ServerSettings {
    /// Resolves `host` (an IP literal or a hostname) to the first bindable address.
    pub async fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        let mut addrs = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|source| SettingsError::Host {
                host: self.host.clone(),
                source,
            })?;
        addrs
            .next()
            .ok_or_else(|| SettingsError::Unresolved(self.host.clone()))
    }
}
