use std::fmt;

use redis::{AsyncCommands, aio::ConnectionLike};
#[cfg(feature = "verbose")]
use tracing::debug;

use crate::{
    collections::{LIST_KEY, SORTED_SET_KEY},
    error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fetches the whole sorted set, ordered by score in the given direction.
pub async fn read_sorted_set<C>(conn: &mut C, direction: Direction) -> Result<Vec<i64>, AppError>
where
    C: ConnectionLike + Send + Sync,
{
    let members: Vec<String> = match direction {
        Direction::Ascending => conn.zrange(SORTED_SET_KEY, 0, -1).await?,
        Direction::Descending => conn.zrevrange(SORTED_SET_KEY, 0, -1).await?,
    };

    let integers = parse_integers(members)?;

    #[cfg(feature = "verbose")]
    debug!("Sorted set {direction}: {integers:?}");

    Ok(integers)
}

/// Fetches the whole list in insertion order, reversing in memory for
/// [`Direction::Descending`].
pub async fn read_list<C>(conn: &mut C, direction: Direction) -> Result<Vec<i64>, AppError>
where
    C: ConnectionLike + Send + Sync,
{
    let values: Vec<String> = conn.lrange(LIST_KEY, 0, -1).await?;

    let mut integers = parse_integers(values)?;
    if direction == Direction::Descending {
        integers.reverse();
    }

    #[cfg(feature = "verbose")]
    debug!("List {direction}: {integers:?}");

    Ok(integers)
}

fn parse_integers(values: Vec<String>) -> Result<Vec<i64>, AppError> {
    values
        .into_iter()
        .map(|value| {
            let parsed = value.trim().parse::<i64>();
            parsed.map_err(|_| AppError::Decode { value })
        })
        .collect()
}
