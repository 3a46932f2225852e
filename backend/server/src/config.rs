use std::{env, fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Redis,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "redis" => Ok(StoreKind::Redis),
            other => Err(format!("unknown store `{other}`, expected `memory` or `redis`")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreKind,
    pub redis_url: String,
    pub store_latency: Duration,
    pub analytics_latency: Duration,
    pub analytics_failure_rate: f64,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let analytics_failure_rate: f64 = try_load("ANALYTICS_FAILURE_RATE", "0.03")?;
        if !(0.0..=1.0).contains(&analytics_failure_rate) {
            return Err(ConfigError::Invalid {
                key: "ANALYTICS_FAILURE_RATE",
                reason: format!("{analytics_failure_rate} is outside 0..=1"),
            });
        }

        Ok(Self {
            port: try_load("RUST_PORT", "1111")?,
            store: try_load("FEEDBACK_STORE", "memory")?,
            redis_url: try_load("REDIS_URL", "redis://redis:6379")?,
            store_latency: Duration::from_millis(try_load("STORE_LATENCY_MS", "250")?),
            analytics_latency: Duration::from_millis(try_load("ANALYTICS_LATENCY_MS", "500")?),
            analytics_failure_rate,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 1111,
            store: StoreKind::Memory,
            redis_url: "redis://redis:6379".to_string(),
            store_latency: Duration::from_millis(250),
            analytics_latency: Duration::from_millis(500),
            analytics_failure_rate: 0.03,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}
