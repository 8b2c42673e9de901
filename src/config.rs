//! Application configuration
//!
//! Settings come from the environment, with `.env` loaded by `dotenvy` when
//! present. Every setting has a default so the server starts with no setup.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::pricing::calculators::ONE_HUNDRED;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {message}")]
    InvalidValue {
        key: &'static str,
        value: String,
        message: String,
    },
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Maximum number of generated proposals kept for re-display and export
    pub proposal_cache_capacity: u64,
    pub proposal_cache_ttl: Duration,
    /// GST rate pre-filled on the form and applied when an API request omits it
    pub default_gst_rate: Decimal,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            proposal_cache_capacity: 1000,
            proposal_cache_ttl: Duration::from_secs(60 * 60),
            default_gst_rate: Decimal::from(18),
            currency: "INR".to_string(),
        }
    }
}

impl AppConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT", defaults.port)?;
        let proposal_cache_capacity =
            parse_var(&lookup, "PROPOSAL_CACHE_CAPACITY", defaults.proposal_cache_capacity)?;
        let proposal_cache_ttl = parse_var(
            &lookup,
            "PROPOSAL_CACHE_TTL_SECS",
            defaults.proposal_cache_ttl.as_secs(),
        )
        .map(Duration::from_secs)?;
        let default_gst_rate = parse_var(&lookup, "DEFAULT_GST_RATE", defaults.default_gst_rate)?;
        let currency = lookup("CURRENCY_CODE").unwrap_or(defaults.currency);

        if default_gst_rate < Decimal::ZERO || default_gst_rate > ONE_HUNDRED {
            return Err(ConfigError::InvalidValue {
                key: "DEFAULT_GST_RATE",
                value: default_gst_rate.to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            proposal_cache_capacity,
            proposal_cache_ttl,
            default_gst_rate,
            currency,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
