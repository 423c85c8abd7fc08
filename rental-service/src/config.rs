//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: RENTAL_, nested with `__`, e.g. RENTAL_SERVICE__PORT)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/rental-service/{service_name}/config.toml
//! 4. System directory: /etc/rental-service/{service_name}/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

const APP_PREFIX: &str = "rental-service";
const ENV_PREFIX: &str = "RENTAL_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Order service behaviour
    #[serde(default)]
    pub orders: OrdersConfig,

    /// List query bounds
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// HTTP middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Outer HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Order service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersConfig {
    /// Deadline applied to every storage call, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl OrdersConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Pagination bounds for list endpoints
///
/// `limit` values above `max_limit` are rejected, never clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller sends no `limit`
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Largest accepted `limit`
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// Enable compression
    #[serde(default = "default_true")]
    pub compression: bool,

    /// CORS configuration
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            compression: true,
            cors_mode: default_cors_mode(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

fn default_limit() -> u32 {
    10
}

fn default_max_limit() -> u32 {
    100
}

fn default_body_limit_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// The service name is inferred from the binary name.
    pub fn load() -> Result<Self> {
        let service_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| APP_PREFIX.to_string());

        Self::load_for_service(&service_name)
    }

    /// Load configuration for a specific service name
    pub fn load_for_service(service_name: &str) -> Result<Self> {
        let config_paths = Self::find_config_paths(service_name);

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so later merges win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Skips the XDG and system directories. Environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.orders.request_timeout_ms == 0 {
            return Err(crate::error::Error::InvalidConfig(
                "orders.request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        // The storage deadline must fire before the outer HTTP timeout, otherwise
        // callers get a bare 408 instead of an enveloped 500.
        if self.orders.request_timeout_ms >= self.service.timeout_secs.saturating_mul(1000) {
            return Err(crate::error::Error::InvalidConfig(format!(
                "orders.request_timeout_ms ({}) must be shorter than service.timeout_secs ({}s)",
                self.orders.request_timeout_ms, self.service.timeout_secs
            )));
        }
        if self.pagination.default_limit == 0 {
            return Err(crate::error::Error::InvalidConfig(
                "pagination.default_limit must be greater than zero".to_string(),
            ));
        }
        if self.pagination.default_limit > self.pagination.max_limit {
            return Err(crate::error::Error::InvalidConfig(format!(
                "pagination.default_limit ({}) exceeds pagination.max_limit ({})",
                self.pagination.default_limit, self.pagination.max_limit
            )));
        }
        Ok(())
    }

    /// Candidate config files, highest priority first
    fn find_config_paths(service_name: &str) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX);
        let config_file_path = Path::new(service_name).join("config.toml");
        if let Some(path) = xdg_dirs.find_config_file(&config_file_path) {
            paths.push(path);
        }

        paths.push(
            PathBuf::from("/etc")
                .join(APP_PREFIX)
                .join(service_name)
                .join("config.toml"),
        );

        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: APP_PREFIX.to_string(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
            },
            orders: OrdersConfig::default(),
            pagination: PaginationConfig::default(),
            middleware: MiddlewareConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.orders.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.pagination.default_limit, 10);
        assert_eq!(config.pagination.max_limit, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[service]
name = "orders-test"
port = 9191

[orders]
request_timeout_ms = 750

[pagination]
default_limit = 25
max_limit = 50
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.service.name, "orders-test");
        assert_eq!(config.service.port, 9191);
        assert_eq!(config.orders.request_timeout(), Duration::from_millis(750));
        assert_eq!(config.pagination.default_limit, 25);
        assert_eq!(config.pagination.max_limit, 50);
        assert_eq!(config.middleware.cors_mode, "permissive");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.service.name, "rental-service");
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let mut config = Config::default();
        config.pagination.default_limit = 200;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.orders.request_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_deadline_not_shorter_than_http_timeout() {
        let mut config = Config::default();
        config.service.timeout_secs = 1;
        config.orders.request_timeout_ms = 3_000;
        assert!(matches!(
            config.validate(),
            Err(crate::error::Error::InvalidConfig(msg)) if msg.contains("service.timeout_secs")
        ));

        config.orders.request_timeout_ms = 1_000;
        assert!(config.validate().is_err());

        config.orders.request_timeout_ms = 999;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_rejects_deadline_past_http_timeout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[service]
name = "orders-test"
timeout_secs = 1

[orders]
request_timeout_ms = 3000
"#
        )
        .unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
