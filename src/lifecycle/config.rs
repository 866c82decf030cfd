//! Startup configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `GEMINI_API_KEY` | unset (each agent run then fails) |
//! | `GEMINI_MODEL` | `gemini-2.0-flash` |
//! | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com/v1` |
//! | `GEMINI_TEMPERATURE` | `0.2` |
//! | `ALLOWED_ORIGIN` | `http://localhost:5173` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `5297` |
//!
//! Empty values count as unset. The binary loads a `.env` file first, if present.

use crate::planner::GeminiConfig;
use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub allowed_origin: HeaderValue,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub const DEFAULT_ALLOWED_ORIGIN: &'static str = "http://localhost:5173";
    pub const DEFAULT_PORT: u16 = 5297;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = GeminiConfig::default();

        let gemini = GeminiConfig {
            api_key: var("GEMINI_API_KEY"),
            model: var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            temperature: parse_var(var("GEMINI_TEMPERATURE"), "GEMINI_TEMPERATURE")?
                .unwrap_or(defaults.temperature),
            timeout: defaults.timeout,
        };
        if !gemini.temperature.is_finite() || gemini.temperature < 0.0 {
            return Err(invalid("GEMINI_TEMPERATURE", gemini.temperature.to_string()));
        }

        let allowed_origin = match var("ALLOWED_ORIGIN") {
            Some(origin) => HeaderValue::from_str(&origin).map_err(|_| invalid("ALLOWED_ORIGIN", origin))?,
            None => HeaderValue::from_static(Self::DEFAULT_ALLOWED_ORIGIN),
        };

        Ok(Self {
            gemini,
            allowed_origin,
            host: parse_var(var("HOST"), "HOST")?.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: parse_var(var("PORT"), "PORT")?.unwrap_or(Self::DEFAULT_PORT),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            allowed_origin: HeaderValue::from_static(Self::DEFAULT_ALLOWED_ORIGIN),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: Self::DEFAULT_PORT,
        }
    }
}

fn parse_var<T: std::str::FromStr>(value: Option<String>, name: &'static str) -> Result<Option<T>, ConfigError> {
    value
        .map(|raw| raw.trim().parse().map_err(|_| invalid(name, raw)))
        .transpose()
}

fn invalid(name: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { name, value }
}
