//! In-memory stand-in for a Redis connection, covering the handful of
//! commands the collection code issues.
use std::collections::HashMap;

use redis::{
    Arg, Cmd, ErrorKind, Pipeline, RedisError, RedisFuture, RedisResult, Value,
    aio::ConnectionLike,
};

enum Entry {
    Sorted(Vec<(f64, String)>),
    List(Vec<String>),
}

#[derive(Default)]
pub struct FakeStore {
    entries: HashMap<String, Entry>,
    /// Fail every command as if the server refused the connection.
    pub offline: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert_list(&mut self, key: &str, values: &[&str]) {
        let values = values.iter().map(|v| v.to_string()).collect();
        self.entries.insert(key.to_string(), Entry::List(values));
    }

    pub fn insert_sorted(&mut self, key: &str, members: &[(f64, &str)]) {
        let mut members: Vec<(f64, String)> =
            members.iter().map(|(s, m)| (*s, m.to_string())).collect();
        sort_members(&mut members);
        self.entries.insert(key.to_string(), Entry::Sorted(members));
    }

    fn execute(&mut self, cmd: &Cmd) -> RedisResult<Value> {
        if self.offline {
            return Err(RedisError::from((ErrorKind::IoError, "Connection refused")));
        }

        let args: Vec<String> = cmd
            .args_iter()
            .filter_map(|arg| match arg {
                Arg::Simple(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
                Arg::Cursor => None,
            })
            .collect();

        let Some((name, rest)) = args.split_first() else {
            return Err(client_error("empty command"));
        };

        match name.to_uppercase().as_str() {
            "DEL" => {
                let removed = rest
                    .iter()
                    .filter(|key| self.entries.remove(key.as_str()).is_some())
                    .count();

                Ok(Value::Int(removed as i64))
            }
            "ZADD" => {
                let (key, pairs) = rest.split_first().ok_or_else(|| client_error("ZADD"))?;
                let entry = self
                    .entries
                    .entry(key.clone())
                    .or_insert_with(|| Entry::Sorted(Vec::new()));
                let Entry::Sorted(members) = entry else {
                    return Err(wrong_type());
                };

                let mut added = 0;
                for pair in pairs.chunks(2) {
                    let [score, member] = pair else {
                        return Err(client_error("ZADD"));
                    };
                    let score: f64 = score.parse().map_err(|_| client_error("score"))?;

                    match members.iter_mut().find(|(_, m)| m == member) {
                        Some(existing) => existing.0 = score,
                        None => {
                            members.push((score, member.clone()));
                            added += 1;
                        }
                    }
                }
                sort_members(members);

                Ok(Value::Int(added))
            }
            "RPUSH" => {
                let (key, values) = rest.split_first().ok_or_else(|| client_error("RPUSH"))?;
                let entry = self
                    .entries
                    .entry(key.clone())
                    .or_insert_with(|| Entry::List(Vec::new()));
                let Entry::List(list) = entry else {
                    return Err(wrong_type());
                };

                list.extend(values.iter().cloned());

                Ok(Value::Int(list.len() as i64))
            }
            "ZRANGE" | "ZREVRANGE" | "LRANGE" => {
                let [key, start, stop] = rest else {
                    return Err(client_error("range"));
                };
                let start: i64 = start.parse().map_err(|_| client_error("start"))?;
                let stop: i64 = stop.parse().map_err(|_| client_error("stop"))?;

                let values: Vec<String> = match (name.to_uppercase().as_str(), self.entries.get(key)) {
                    (_, None) => Vec::new(),
                    ("LRANGE", Some(Entry::List(list))) => list.clone(),
                    ("ZRANGE", Some(Entry::Sorted(members))) => {
                        members.iter().map(|(_, m)| m.clone()).collect()
                    }
                    ("ZREVRANGE", Some(Entry::Sorted(members))) => {
                        members.iter().rev().map(|(_, m)| m.clone()).collect()
                    }
                    _ => return Err(wrong_type()),
                };

                Ok(Value::Array(
                    slice(&values, start, stop)
                        .iter()
                        .map(|v| Value::BulkString(v.clone().into_bytes()))
                        .collect(),
                ))
            }
            _ => Err(client_error("unsupported command")),
        }
    }
}

impl ConnectionLike for FakeStore {
    fn req_packed_command<'a>(&'a mut self, cmd: &'a Cmd) -> RedisFuture<'a, Value> {
        let result = self.execute(cmd);
        Box::pin(async move { result })
    }

    fn req_packed_commands<'a>(
        &'a mut self,
        _cmd: &'a Pipeline,
        _offset: usize,
        _count: usize,
    ) -> RedisFuture<'a, Vec<Value>> {
        Box::pin(async { Err(client_error("pipelines")) })
    }

    fn get_db(&self) -> i64 {
        0
    }
}

fn sort_members(members: &mut [(f64, String)]) {
    members.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
}

// Redis-style inclusive range with negative indices counting from the end.
fn slice(values: &[String], start: i64, stop: i64) -> &[String] {
    let len = values.len() as i64;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if start > stop || start >= len {
        return &[];
    }

    &values[start as usize..=stop as usize]
}

fn client_error(detail: &'static str) -> RedisError {
    RedisError::from((ErrorKind::ClientError, "Unsupported by fake store", detail.to_string()))
}

fn wrong_type() -> RedisError {
    RedisError::from((
        ErrorKind::TypeError,
        "WRONGTYPE Operation against a key holding the wrong kind of value",
    ))
}
