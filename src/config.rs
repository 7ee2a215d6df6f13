//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TCP port the API listens on.
    pub port: u16,
    /// How long a cached response stays fresh.
    pub cache_ttl: Duration,
    /// Maximum number of cached responses.
    pub cache_capacity: usize,
    /// Notification broadcast channel capacity.
    pub hub_capacity: usize,
    /// Keep-alive comment interval for SSE streams.
    pub sse_keepalive: Duration,
    /// Interval between cache eviction sweeps.
    pub sweep_interval: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            cache_ttl: Duration::from_secs(30),
            cache_capacity: 512,
            hub_capacity: 256,
            sse_keepalive: Duration::from_secs(30),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl ServiceConfig {
    /// Build the config from `ESTATE_*` environment variables, falling back
    /// to defaults for anything unset. A set-but-unparseable value is an
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            port: env_value("ESTATE_PORT")?.unwrap_or(defaults.port),
            cache_ttl: env_value("ESTATE_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            cache_capacity: env_value("ESTATE_CACHE_CAPACITY")?
                .unwrap_or(defaults.cache_capacity),
            hub_capacity: env_value("ESTATE_HUB_CAPACITY")?.unwrap_or(defaults.hub_capacity),
            sse_keepalive: env_value("ESTATE_SSE_KEEPALIVE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.sse_keepalive),
            sweep_interval: env_value("ESTATE_SWEEP_INTERVAL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.sweep_interval),
        })
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().map(Some).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{e}"),
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8080);
        assert!(config.cache_ttl < config.sweep_interval * 10);
        assert!(config.cache_capacity > 0);
        assert!(config.hub_capacity > 0);
    }

    #[test]
    fn from_env_without_vars_matches_defaults() {
        // None of the ESTATE_* vars are set in the test environment.
        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.port, ServiceConfig::default().port);
        assert_eq!(config.cache_ttl, ServiceConfig::default().cache_ttl);
    }
}
