// src/config.rs
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value:?}")]
    InvalidAddr { key: &'static str, value: String },
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidWorkers { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// Upper bound on astra's blocking worker threads.
    pub max_workers: usize,
    /// Brand name shown in the header and page titles.
    pub brand: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            brand: "Ride".to_string(),
        }
    }
}

impl AppConfig {
    /// Read `SITE_ADDR`, `SITE_WORKERS` and `SITE_BRAND`, keeping defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(value) = lookup("SITE_ADDR") {
            cfg.addr = value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                key: "SITE_ADDR",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("SITE_WORKERS") {
            cfg.max_workers = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidWorkers {
                        key: "SITE_WORKERS",
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup("SITE_BRAND") {
            let brand = value.trim();
            if !brand.is_empty() {
                cfg.brand = brand.to_string();
            }
        }

        Ok(cfg)
    }
}
