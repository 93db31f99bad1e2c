use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::insights::InsightConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub insights: InsightConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            insights: load_insight_config()?,
        })
    }
}

fn load_insight_config() -> Result<InsightConfig, ConfigError> {
    let defaults = InsightConfig::default();
    let config = InsightConfig {
        weakness_threshold: env_or("INSIGHT_WEAKNESS_THRESHOLD", defaults.weakness_threshold)?,
        strong_leak_threshold: env_or(
            "INSIGHT_STRONG_LEAK_THRESHOLD",
            defaults.strong_leak_threshold,
        )?,
        dominance_absolute_floor: env_or(
            "INSIGHT_DOMINANCE_FLOOR",
            defaults.dominance_absolute_floor,
        )?,
        dominance_ratio: env_or("INSIGHT_DOMINANCE_RATIO", defaults.dominance_ratio)?,
        weak_separation_delta: env_or(
            "INSIGHT_WEAK_SEPARATION_DELTA",
            defaults.weak_separation_delta,
        )?,
        free_visible_messages: env_or(
            "INSIGHT_FREE_VISIBLE_MESSAGES",
            defaults.free_visible_messages,
        )?,
    };

    let checks = [
        (
            "INSIGHT_WEAKNESS_THRESHOLD",
            config.weakness_threshold.is_finite() && config.weakness_threshold <= 0.0,
        ),
        (
            "INSIGHT_STRONG_LEAK_THRESHOLD",
            config.strong_leak_threshold.is_finite()
                && config.strong_leak_threshold <= config.weakness_threshold,
        ),
        (
            "INSIGHT_DOMINANCE_FLOOR",
            config.dominance_absolute_floor.is_finite() && config.dominance_absolute_floor > 0.0,
        ),
        (
            "INSIGHT_DOMINANCE_RATIO",
            config.dominance_ratio > 0.0 && config.dominance_ratio <= 1.0,
        ),
        (
            "INSIGHT_WEAK_SEPARATION_DELTA",
            config.weak_separation_delta.is_finite() && config.weak_separation_delta >= 0.0,
        ),
        (
            "INSIGHT_FREE_VISIBLE_MESSAGES",
            config.free_visible_messages <= 3,
        ),
    ];
    // NaN fails every comparison, so each check is phrased as the accepted range.
    if let Some(&(key, _)) = checks.iter().find(|(_, valid)| !*valid) {
        return Err(ConfigError::OutOfRange { key });
    }

    Ok(config)
}

fn env_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidValue { key: &'static str, value: String },
    OutOfRange { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "{key} has an unparseable value '{value}'")
            }
            ConfigError::OutOfRange { key } => write!(f, "{key} is outside its allowed range"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidValue { .. }
            | ConfigError::OutOfRange { .. } => None,
        }
    }
}
