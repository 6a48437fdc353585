//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache TTLs, logging, default paths, and the version environment
//! variable. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (Varnish,
// nginx, CDNs). All values are in seconds.
//
// The health endpoint carries no Cache-Control header at all: liveness probes
// must always hit the origin.

/// Home page - content only changes on redeploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

/// Stale-if-error duration - serve stale content during backend failures (5 minutes)
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

// Pre-formatted Cache-Control header value (compile-time string concatenation)
pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Environment variable holding the deployed application version
pub const APP_VERSION_ENV: &str = "APP_VERSION";

/// Fallback shown when the version environment variable is unset
pub const DEFAULT_APP_VERSION: &str = "Unknown";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "placard=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Site title shown in the page header and title.
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        "Placard".to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[http]
host = "0.0.0.0"
port = 8080

[ui]
site_name = "My Service"

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.ui.site_name, "My Service");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn defaults_apply_when_sections_omitted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[http]
host = "127.0.0.1"
port = 3000
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.ui.site_name, "Placard");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[http\nhost =").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load("config/does-not-exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
