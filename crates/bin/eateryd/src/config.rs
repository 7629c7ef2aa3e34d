//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `eatery.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use eatery_app::services::restaurant_service::ValidationPolicy;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Create/update validation switches.
    pub validation: ValidationConfig,
    /// Startup seeding.
    pub seed: SeedConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Which mutations validate their payload.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject empty required fields on create.
    pub on_create: bool,
    /// Reject empty or structured provided fields on update.
    pub on_update: bool,
}

/// Seed data toggle.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Insert the built-in restaurants when the collection is empty.
    pub enabled: bool,
}

impl Config {
    /// Load configuration from `eatery.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("eatery.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Overlay `EATERY_*` variables (and `RUST_LOG`) read through `var`.
    ///
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("EATERY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("EATERY_PORT").and_then(|val| val.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some((host, port)) = var("EATERY_BIND")
            .as_deref()
            .and_then(|val| val.rsplit_once(':'))
            .and_then(|(host, port)| Some((host.to_string(), port.parse::<u16>().ok()?)))
        {
            self.server.host = host;
            self.server.port = port;
        }
        if let Some(url) = var("EATERY_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("EATERY_LOG")) {
            self.logging.filter = filter;
        }
        if let Some(enabled) = var("EATERY_SEED").and_then(|val| val.parse::<bool>().ok()) {
            self.seed.enabled = enabled;
        }
        if let Some(on) = var("EATERY_VALIDATE_ON_CREATE").and_then(|val| val.parse::<bool>().ok())
        {
            self.validation.on_create = on;
        }
        if let Some(on) = var("EATERY_VALIDATE_ON_UPDATE").and_then(|val| val.parse::<bool>().ok())
        {
            self.validation.on_update = on;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Return the validation policy for the restaurant service.
    #[must_use]
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            validate_on_create: self.validation.on_create,
            validate_on_update: self.validation.on_update,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:eatery.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "eateryd=info,eatery=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let policy = ValidationPolicy::default();
        Self {
            on_create: policy.validate_on_create,
            on_update: policy.validate_on_update,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
