//! TOML-based service configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Top-level service configuration parsed from TOML.
///
/// All fields have defaults, so an empty file (or no file at all) is a
/// valid configuration. Load with [`ServiceConfig::from_toml_file`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Log filter and output format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    pub host: String,
    /// TCP port to bind (must be > 0).
    pub port: u16,
    /// Per-request timeout in seconds (must be > 0).
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding and logging.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log filter and output format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directives; `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"server.port"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ServiceConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let s = &self.server;
        if s.host.trim().is_empty() {
            errors.push(ConfigError {
                field: "server.host".into(),
                message: "must not be empty".into(),
            });
        }
        if s.port == 0 {
            errors.push(ConfigError {
                field: "server.port".into(),
                message: "must be > 0".into(),
            });
        }
        if s.request_timeout_secs == 0 {
            errors.push(ConfigError {
                field: "server.request_timeout_secs".into(),
                message: "must be > 0".into(),
            });
        }

        if self.logging.filter.trim().is_empty() {
            errors.push(ConfigError {
                field: "logging.filter".into(),
                message: "must not be empty".into(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        let errors = ServiceConfig::default().validate();
        assert!(errors.is_empty(), "default should be valid: {errors:?}");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = ServiceConfig::from_toml_str("").expect("empty TOML should parse");
        assert_eq!(cfg, ServiceConfig::default());
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
request_timeout_secs = 3

[logging]
filter = "production_plan=debug,tower_http=info"
json = true
"#;
        let cfg = ServiceConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.server.port), Some(9000));
        assert_eq!(cfg.as_ref().map(|c| c.server.request_timeout_secs), Some(3));
        assert_eq!(cfg.as_ref().map(|c| c.logging.json), Some(true));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[server]
port = 8080
"#;
        let cfg = ServiceConfig::from_toml_str(toml).expect("partial TOML should parse");
        // port overridden
        assert_eq!(cfg.server.port, 8080);
        // host and logging kept default
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[server]
port = 8080
bogus_field = true
"#;
        assert!(ServiceConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        assert!(ServiceConfig::from_toml_str("[database]\nurl = \"x\"\n").is_err());
    }

    #[test]
    fn validation_catches_zero_port() {
        let mut cfg = ServiceConfig::default();
        cfg.server.port = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "server.port"));
    }

    #[test]
    fn validation_catches_zero_timeout_and_empty_host() {
        let mut cfg = ServiceConfig::default();
        cfg.server.request_timeout_secs = 0;
        cfg.server.host = "  ".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "server.request_timeout_secs"));
        assert!(errors.iter().any(|e| e.field == "server.host"));
    }

    #[test]
    fn validation_catches_empty_filter() {
        let mut cfg = ServiceConfig::default();
        cfg.logging.filter = String::new();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "logging.filter"));
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        assert_eq!(ServerConfig::default().bind_address(), "127.0.0.1:8888");
    }

    #[test]
    fn error_display_names_field() {
        let e = ConfigError {
            field: "server.port".into(),
            message: "must be > 0".into(),
        };
        assert_eq!(e.to_string(), "config error: server.port: must be > 0");
    }
}
