//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Downstream REST backend.
    pub backend: BackendConfig,

    /// Audit log of tool invocations.
    pub audit: AuditConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the downstream data backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL every API path is joined to.
    pub base_url: String,

    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

/// Configuration for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Whether invocations are recorded at all.
    pub enabled: bool,

    /// SQLite database file.
    pub db_path: PathBuf,

    /// Tag written into every record's `source` column.
    pub source: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` (after loading `.env`).
    ///
    /// Available before the rest of the configuration so logging can be up
    /// while [`Config::from_env`] reports what it loaded.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var("MCP_LOG_LEVEL") {
            Ok(level) if !level.is_empty() => Self { level },
            _ => Self::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            // Flask backend on the same machine
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            db_path: PathBuf::from("dchub_data.db"),
            source: "mcp".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dchub-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            backend: BackendConfig::default(),
            audit: AuditConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `MCP_` (e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`). `BACKEND_BASE_URL` and `DB_PATH` are honoured as
    /// fallbacks for deployments that predate the prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.transport = TransportConfig::from_env();

        if let Some(url) = env_with_fallback("MCP_BACKEND_URL", "BACKEND_BASE_URL") {
            config.backend.base_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_BACKEND_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.backend.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_BACKEND_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.backend.timeout_secs
                ),
            }
        }

        if let Some(path) = env_with_fallback("MCP_AUDIT_DB_PATH", "DB_PATH") {
            config.audit.db_path = PathBuf::from(path);
        }

        if let Ok(enabled) = std::env::var("MCP_AUDIT_ENABLED") {
            config.audit.enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }

        if let Ok(source) = std::env::var("MCP_AUDIT_SOURCE") {
            config.audit.source = source;
        }

        if config.audit.enabled {
            info!("Audit log enabled: {:?}", config.audit.db_path);
        } else {
            warn!("Audit log disabled - tool invocations will not be recorded");
        }

        config
    }
}

fn env_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .ok()
        .filter(|v| !v.is_empty())
}
