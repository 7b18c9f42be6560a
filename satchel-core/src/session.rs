//! Per-client session state
//!
//! A [`Session`] is a keyed bag of [`Value`]s stamped with the unix time of
//! its last save. Expiry is judged against that stamp, so a session that is
//! never saved again ages out after one validity window.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::AccessError;
use crate::id::SessionId;
use crate::value::{FromValue, Value};

/// One client's session data.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    data: HashMap<String, Value>,
    /// Unix seconds of the last save, or of creation before the first save.
    timestamp: i64,
}

impl Session {
    /// Creates an empty session stamped with the given unix time.
    pub fn new_at(id: SessionId, now: i64) -> Self {
        Self {
            id,
            data: HashMap::new(),
            timestamp: now,
        }
    }

    /// Creates an empty session stamped with the current time.
    pub fn new(id: SessionId) -> Self {
        Self::new_at(id, chrono::Utc::now().timestamp())
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Unix seconds of the last save.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Re-stamps the session. Called by stores on save.
    pub fn touch(&mut self, now: i64) {
        self.timestamp = now;
    }

    /// True once the validity window has fully elapsed since the last save.
    ///
    /// A session saved at `T` with a window of `W` seconds is still valid at
    /// exactly `T + W` and expired from `T + W + 1` on.
    pub fn is_expired(&self, window: Duration, now: i64) -> bool {
        let window = i64::try_from(window.as_secs()).unwrap_or(i64::MAX);
        self.timestamp.saturating_add(window) < now
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Typed read that distinguishes a missing key from a kind mismatch.
    pub fn get_as<T: FromValue>(&self, key: &str) -> Result<T, AccessError> {
        let value = self.data.get(key).ok_or_else(|| AccessError::Missing {
            key: key.to_string(),
        })?;
        T::from_value(value).ok_or_else(|| AccessError::Mismatch {
            key: key.to_string(),
            expected: T::EXPECTED,
            found: value.kind(),
        })
    }

    /// Stores a value, returning the one it displaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
