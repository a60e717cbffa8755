use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "sample_airbnb";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_WORKERS: usize = 8;
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database: String,
    pub addr: SocketAddr,
    pub workers: usize,
    pub pool_size: u32,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri =
            lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string());
        let database = lookup("MONGOBNB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let addr = parse_or(&lookup, "MONGOBNB_ADDR", || {
            SocketAddr::from_str(DEFAULT_ADDR).map_err(|e| e.to_string())
        })?;
        let workers = parse_or(&lookup, "MONGOBNB_WORKERS", || Ok(DEFAULT_WORKERS))?;
        let pool_size = parse_or(&lookup, "MONGOBNB_POOL_SIZE", || Ok(DEFAULT_POOL_SIZE))?;

        if workers == 0 {
            return Err(ConfigError {
                key: "MONGOBNB_WORKERS",
                value: workers.to_string(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Config {
            mongodb_uri,
            database,
            addr,
            workers,
            pool_size,
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> Result<T, String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => default().map_err(|reason| ConfigError {
            key,
            value: String::new(),
            reason,
        }),
    }
}
