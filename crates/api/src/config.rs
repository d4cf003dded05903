//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Service configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — REST listen port (default: `8000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DATABASE_URL` — PostgreSQL URL; orders are kept in memory when unset
/// - `HANDLER_TIMEOUT_MS` — per-handler dispatch timeout; unset means none
/// - `BROKER_EXCHANGE` — exchange for published events (default: `"amq.direct"`)
/// - `BROKER_ROUTING_KEY` — routing key for published events (default: empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
    pub handler_timeout: Option<Duration>,
    pub broker_exchange: String,
    pub broker_routing_key: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            handler_timeout: lookup("HANDLER_TIMEOUT_MS")
                .and_then(|ms| ms.parse().ok())
                .filter(|ms: &u64| *ms > 0)
                .map(Duration::from_millis),
            broker_exchange: lookup("BROKER_EXCHANGE").unwrap_or(defaults.broker_exchange),
            broker_routing_key: lookup("BROKER_ROUTING_KEY").unwrap_or(defaults.broker_routing_key),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            database_url: None,
            handler_timeout: None,
            broker_exchange: events::OrderCreatedHandler::DEFAULT_EXCHANGE.to_string(),
            broker_routing_key: String::new(),
        }
    }
}
