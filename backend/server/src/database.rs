//! # Redis
//!
//! Backing store for both integer collections.
//!
//! ## Profiles
//!
//! - Write target: every mutation (seed/clear) goes here
//! - Read target: every view reads back from here
//! - Both are plain host/port pairs, see [`crate::config`]
//! - Replication between the two is the deployment's job, not ours
//!
//! ## Connections
//!
//! - One connection per operation, no pooling
//! - No retries, no timeouts, a hung server hangs that request
//! - [`connect`] never touches the network, errors surface on first use
use redis::{Client, aio::MultiplexedConnection};
use tracing::debug;

use crate::{config::StoreProfile, error::AppError};

pub fn connect(host: &str, port: u16) -> Result<Client, AppError> {
    if host.trim().is_empty() {
        return Err(AppError::Config {
            key: "host".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if port == 0 {
        return Err(AppError::Config {
            key: "port".to_string(),
            reason: "must be between 1 and 65535".to_string(),
        });
    }

    Ok(Client::open(format!("redis://{host}:{port}/0"))?)
}

pub async fn open(profile: &StoreProfile) -> Result<MultiplexedConnection, AppError> {
    debug!("Connecting to {}:{}", profile.host, profile.port);

    let client = connect(&profile.host, profile.port)?;

    Ok(client.get_multiplexed_async_connection().await?)
}
