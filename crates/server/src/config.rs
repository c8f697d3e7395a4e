use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ServerResult;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// JSON dataset loaded at startup and on SIGHUP
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            dataset_path: default_dataset_path(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `carelist` config file, then
    /// `CARELIST__*` environment variables, then the conventional `PORT`.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("carelist").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("CARELIST").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;
        config.apply_port_override(std::env::var("PORT").ok().as_deref());

        Ok(config)
    }

    /// Honour a platform-provided port (e.g. `PORT=8080`). Unparseable values
    /// are ignored with a warning.
    pub fn apply_port_override(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            return;
        };
        match raw.trim().parse::<u16>() {
            Ok(port) => self.port = port,
            Err(_) => tracing::warn!(value = raw, "ignoring unparseable PORT"),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/professionals.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
        assert_eq!(cfg.dataset_path, PathBuf::from("data/professionals.json"));
        assert!(cfg.enable_cors);
        assert!(cfg.metrics_enabled);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_invalid_bind_addr_is_config_error() {
        let cfg = ServerConfig {
            bind_addr: "not an address".into(),
            ..Default::default()
        };
        assert!(matches!(
            cfg.socket_addr(),
            Err(crate::error::ServerError::Config(_))
        ));
    }

    #[test]
    fn test_port_override() {
        let mut cfg = ServerConfig::default();
        cfg.apply_port_override(Some("8081"));
        assert_eq!(cfg.port, 8081);

        cfg.apply_port_override(Some("eighty"));
        assert_eq!(cfg.port, 8081);

        cfg.apply_port_override(None);
        assert_eq!(cfg.port, 8081);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"port": 9000, "dataset_path": "/srv/pros.json"}"#).unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.dataset_path, PathBuf::from("/srv/pros.json"));
        assert_eq!(cfg.log_level, "info");
    }
}
