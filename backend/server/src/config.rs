use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

/// Which configured store endpoint an operation talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Receives every mutation.
    Write,
    /// Serves every read-back.
    Read,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreProfile {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub write: StoreProfile,
    pub read: StoreProfile,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Self::from_source(|key: &str| {
            env::var(key)
                .map_err(|_| {
                    warn!("Environment variable {key} not found, using default");
                })
                .ok()
        })
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "RUST_PORT", "5000")?,
            write: StoreProfile {
                host: try_load(&lookup, "REDIS_WRITE_HOST", "localhost")?,
                port: try_load(&lookup, "REDIS_WRITE_PORT", "6379")?,
            },
            read: StoreProfile {
                host: try_load(&lookup, "REDIS_READ_HOST", "localhost")?,
                port: try_load(&lookup, "REDIS_READ_PORT", "12000")?,
            },
        })
    }

    pub fn profile(&self, target: Target) -> &StoreProfile {
        match target {
            Target::Write => &self.write,
            Target::Read => &self.read,
        }
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            AppError::Config {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })
}
