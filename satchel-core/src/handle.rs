//! Shared per-request session access
//!
//! The HTTP layer loads a [`Session`](crate::session::Session) once per
//! request and binds it into the request as a [`SessionHandle`]. Handlers and
//! the layer itself all see the same session through their clones, and the
//! layer saves whatever state the handle holds once the handler returns.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::error::AccessError;
use crate::id::SessionId;
use crate::session::Session;
use crate::value::{FromValue, Value};

/// Cloneable, lock-guarded view of one request's session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub async fn id(&self) -> SessionId {
        self.inner.lock().await.id()
    }

    /// Typed read that distinguishes a missing key from a kind mismatch.
    pub async fn get<T: FromValue>(&self, key: &str) -> Result<T, AccessError> {
        self.inner.lock().await.get_as(key)
    }

    /// Stores a value, returning the one it displaced.
    pub async fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.lock().await.insert(key, value)
    }

    pub async fn remove(&self, key: &str) -> Option<Value> {
        self.inner.lock().await.remove(key)
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Runs a closure against the locked session.
    ///
    /// Useful for compound edits that should not interleave with other
    /// clones of the handle.
    pub async fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.inner.lock().await;
        f(&mut session)
    }

    /// Locks the session directly.
    ///
    /// Hold the guard only for the edit itself: the layer needs the same
    /// lock to save the session after the handler returns.
    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().await
    }
}
