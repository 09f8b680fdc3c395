use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "flamewire.toml";

/// Prefix for structured environment overrides, e.g. `FLAMEWIRE__SERVER__PORT`
pub const ENV_PREFIX: &str = "FLAMEWIRE";

/// Unprefixed variables honoured for deployment compatibility
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("server.port", "PORT"),
    ("server.region", "REGION"),
    ("database.url", "DATABASE_URL"),
    ("database.name", "DATABASE_NAME"),
];

#[derive(Debug, Error)]
pub enum GatewayConfigValidationError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Region reported by the health endpoint
    pub region: String,
    /// HTTP worker threads, defaults to the number of cores
    pub workers: Option<usize>,
    /// Client request timeout in seconds
    pub request_timeout: u64,
    /// Maximum JSON body size in bytes
    pub max_json_payload_size: usize,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    /// Store URL, e.g. `sled:///var/lib/flamewire` or `memory://flamewire`
    pub url: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub level: String,
    pub ansi: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            region: "global".to_string(),
            workers: None,
            request_timeout: 30,
            max_json_payload_size: 64 * 1024,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl DatabaseConfig {
    /// Configured store URL. Empty strings count as unset
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Configured database name. Empty strings count as unset
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), GatewayConfigValidationError> {
        if self.port == 0 {
            return Err(GatewayConfigValidationError::InvalidPort(
                "server.port cannot be 0".to_string(),
            ));
        }
        if self.bind_address.trim().is_empty() {
            return Err(GatewayConfigValidationError::MissingField(
                "server.bind_address cannot be empty".to_string(),
            ));
        }
        if self.region.trim().is_empty() {
            return Err(GatewayConfigValidationError::MissingField(
                "server.region cannot be empty".to_string(),
            ));
        }
        if self.workers == Some(0) {
            return Err(GatewayConfigValidationError::InvalidValue(
                "server.workers must be > 0".to_string(),
            ));
        }
        if self.request_timeout == 0 {
            return Err(GatewayConfigValidationError::InvalidValue(
                "server.request_timeout must be >= 1 second".to_string(),
            ));
        }
        if self.max_json_payload_size == 0 {
            return Err(GatewayConfigValidationError::InvalidValue(
                "server.max_json_payload_size must be > 0".to_string(),
            ));
        }
        if self.cors_allowed_origins.is_empty() {
            return Err(GatewayConfigValidationError::MissingField(
                "server.cors_allowed_origins cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), GatewayConfigValidationError> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            GatewayConfigValidationError::InvalidValue(format!(
                "logging.level '{}' is not a valid filter: {e}",
                self.level
            ))
        })?;
        Ok(())
    }
}

impl GatewayConfig {
    /// Load configuration from defaults, an optional TOML file and the environment.
    ///
    /// `path` is used as given; see [`GatewayConfig::resolve_path`] for the
    /// default file lookup.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(config_path) = path {
            builder = builder.add_source(File::from(config_path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        for (key, var) in LEGACY_ENV_OVERRIDES {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(*key, value)?;
            }
        }

        let config: GatewayConfig = builder.build()?.try_deserialize()?;
        if let Err(e) = config.validate() {
            return Err(ConfigError::Message(format!("Configuration validation error: {e}")));
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GatewayConfigValidationError> {
        self.server.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The file to load: `explicit` if given, else `flamewire.toml` when present
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.exists().then_some(default)
    }
}
