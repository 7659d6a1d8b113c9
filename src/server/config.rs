use std::{net::SocketAddr, time::Duration};

use axum::http::HeaderValue;
use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5000;

/// Which of the three services a process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Books,
    Members,
    Orders,
}

impl ServiceKind {
    /// Service identity reported by the liveness probe.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Books => "books-service",
            Self::Members => "members-service",
            Self::Orders => "orders-service",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::Books => 3001,
            Self::Members => 3002,
            Self::Orders => 3003,
        }
    }
}

/// Settings shared by every service.
pub struct Config {
    pub service: ServiceKind,
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    /// Reads the configuration for `service` from the environment.
    ///
    /// # Environment
    /// - `DATABASE_URL` - required
    /// - `BIND_ADDRESS` - optional, defaults to `0.0.0.0:<service default port>`
    /// - `ALLOWED_ORIGINS` - optional comma-separated CORS origins
    pub fn from_env(service: ServiceKind) -> Result<Self, ConfigError> {
        let bind_address = match optional_var("BIND_ADDRESS") {
            Some(raw) => raw.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    name: "BIND_ADDRESS".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], service.default_port())),
        };

        let allowed_origins = parse_origins(
            &optional_var("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        )?;

        Ok(Self {
            service,
            database_url: required_var("DATABASE_URL")?,
            bind_address,
            allowed_origins,
        })
    }
}

/// Where and how the order service reaches the member and book services.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the member service, e.g. `http://localhost:3002`.
    pub member_service_url: Url,
    /// Base URL of the book service, e.g. `http://localhost:3001`.
    pub book_service_url: Url,
    /// Bound applied to each upstream call.
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Reads the upstream configuration from the environment.
    ///
    /// # Environment
    /// - `MEMBER_SERVICE_URL` - required
    /// - `BOOK_SERVICE_URL` - required
    /// - `UPSTREAM_TIMEOUT_MS` - optional, defaults to 5000
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_ms = match optional_var("UPSTREAM_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "UPSTREAM_TIMEOUT_MS".to_string(),
                        value: raw,
                        reason: "expected a positive number of milliseconds".to_string(),
                    })
                }
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_MS,
        };

        Ok(Self {
            member_service_url: parse_base_url("MEMBER_SERVICE_URL")?,
            book_service_url: parse_base_url("BOOK_SERVICE_URL")?,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_base_url(name: &str) -> Result<Url, ConfigError> {
    let raw = required_var(name)?;

    let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        value: raw.clone(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw,
            reason: "expected an http(s) base url".to_string(),
        });
    }

    Ok(url)
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                name: "ALLOWED_ORIGINS".to_string(),
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
