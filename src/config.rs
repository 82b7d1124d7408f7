use std::net::SocketAddr;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use reqwest::Url;
use thiserror::Error;

static DEFAULT_ORDER_ENDPOINT: Lazy<Url> =
    Lazy::new(|| Url::parse("https://httpbin.org/post").unwrap());
static DEFAULT_BIND_ADDR: Lazy<SocketAddr> = Lazy::new(|| SocketAddr::from(([0, 0, 0, 0], 3000)));
const DEFAULT_ASSETS_BASE: &str = "/assets/images";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ORDER_ENDPOINT is not a valid url: {0}")]
    InvalidOrderEndpoint(String),
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Where submitted orders are posted.
    pub order_endpoint: Url,
    /// Address the order endpoint service listens on.
    pub bind_addr: SocketAddr,
    /// Prefix for product and icon images in rendered markup.
    pub assets_base: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            order_endpoint: DEFAULT_ORDER_ENDPOINT.clone(),
            bind_addr: *DEFAULT_BIND_ADDR,
            assets_base: DEFAULT_ASSETS_BASE.to_owned(),
        }
    }
}

impl Settings {
    /// Reads `ORDER_ENDPOINT`, `BIND_ADDR` and `ASSETS_BASE`, loading `.env` first.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(value) = lookup("ORDER_ENDPOINT") {
            settings.order_endpoint = Url::parse(&value)
                .map_err(|err| ConfigError::InvalidOrderEndpoint(format!("{value}: {err}")))?;
        }
        if let Some(value) = lookup("BIND_ADDR") {
            settings.bind_addr = value
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(value.clone()))?;
        }
        if let Some(value) = lookup("ASSETS_BASE") {
            settings.assets_base = value.trim_end_matches('/').to_owned();
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Settings};

    #[test]
    fn unset_variables_keep_defaults() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.order_endpoint.as_str(), "https://httpbin.org/post");
        assert_eq!(settings.assets_base, "/assets/images");
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(|key| match key {
            "ORDER_ENDPOINT" => Some("http://127.0.0.1:3000/post".to_owned()),
            "BIND_ADDR" => Some("127.0.0.1:8080".to_owned()),
            "ASSETS_BASE" => Some("/static/".to_owned()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.order_endpoint.as_str(), "http://127.0.0.1:3000/post");
        assert_eq!(settings.bind_addr.port(), 8080);
        assert_eq!(settings.assets_base, "/static");
    }

    #[test]
    fn rejects_malformed_values() {
        let result = Settings::from_lookup(|key| (key == "BIND_ADDR").then(|| "nowhere".to_owned()));
        assert!(matches!(result, Err(ConfigError::InvalidBindAddr(_))));
    }
}
