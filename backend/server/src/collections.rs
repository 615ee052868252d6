//! # Collections
//!
//! Seeding and clearing the two integer collections.
//!
//! ## Layout
//!
//! - Sorted set under [`SORTED_SET_KEY`], every member is its own score
//! - List under [`LIST_KEY`], values pushed as text in insertion order
//! - Each seed writes [`SEED_COUNT`] consecutive integers starting at the given value
//!
//! ## Seeding
//!
//! The sorted set is cleared before every seed so it always holds exactly one
//! range. The list is NOT cleared, so seeding it twice accumulates 200 entries.
//! That asymmetry is kept as-is, see DESIGN.md.
use std::ops::RangeInclusive;

use redis::{AsyncCommands, aio::ConnectionLike};
use tracing::info;

use crate::error::AppError;

pub const SORTED_SET_KEY: &str = "integer_sorted_set";
pub const LIST_KEY: &str = "integer_list";
pub const SEED_COUNT: i64 = 100;

pub fn seed_range(start: i64) -> Result<RangeInclusive<i64>, AppError> {
    let end = start
        .checked_add(SEED_COUNT - 1)
        .ok_or(AppError::OutOfRange(start))?;

    Ok(start..=end)
}

pub async fn seed_sorted_set<C>(conn: &mut C, start: i64) -> Result<(), AppError>
where
    C: ConnectionLike + Send + Sync,
{
    let range = seed_range(start)?;
    let members: Vec<(i64, i64)> = range.clone().map(|i| (i, i)).collect();

    let _: () = conn.del(SORTED_SET_KEY).await?;
    let _: () = conn.zadd_multiple(SORTED_SET_KEY, members.as_slice()).await?;

    info!(
        "Integers from {} to {} have been added to the sorted set",
        range.start(),
        range.end()
    );

    Ok(())
}

pub async fn clear_sorted_set<C>(conn: &mut C) -> Result<(), AppError>
where
    C: ConnectionLike + Send + Sync,
{
    let _: () = conn.del(SORTED_SET_KEY).await?;

    info!("Deleted the sorted set");

    Ok(())
}

pub async fn seed_list<C>(conn: &mut C, start: i64) -> Result<(), AppError>
where
    C: ConnectionLike + Send + Sync,
{
    let range = seed_range(start)?;
    let values: Vec<String> = range.clone().map(|i| i.to_string()).collect();

    let _: () = conn.rpush(LIST_KEY, values).await?;

    info!(
        "Integers from {} to {} have been added to the list",
        range.start(),
        range.end()
    );

    Ok(())
}

pub async fn clear_list<C>(conn: &mut C) -> Result<(), AppError>
where
    C: ConnectionLike + Send + Sync,
{
    let _: () = conn.del(LIST_KEY).await?;

    info!("Deleted the list");

    Ok(())
}
