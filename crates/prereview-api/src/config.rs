//! Runtime configuration read from the environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::AppError;

/// Server configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL connection string. Without one, events are kept in memory.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Upper bound on pooled database connections.
    pub database_max_connections: u32,
    /// Events buffered per event-bus subscriber before it lags.
    pub event_bus_capacity: usize,
    /// OTLP collector endpoint. Tracing is exported only when set.
    pub otel_exporter_otlp_endpoint: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let event_bus_capacity = parse_or(&present, "EVENT_BUS_CAPACITY", 256_usize)?;
        if event_bus_capacity == 0 {
            return Err(AppError::Config(
                "EVENT_BUS_CAPACITY must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            database_url: present("DATABASE_URL"),
            host: present("HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
            port: parse_or(&present, "PORT", 3000_u16)?,
            database_max_connections: parse_or(&present, "DATABASE_MAX_CONNECTIONS", 10_u32)?,
            event_bus_capacity,
            otel_exporter_otlp_endpoint: present("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a socket
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_or<T, F>(lookup: F, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} is invalid: {e}"))),
        None => Ok(default),
    }
}
