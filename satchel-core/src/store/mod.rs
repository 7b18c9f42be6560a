//! Session persistence
//!
//! [`SessionStore`] is the seam between the HTTP layer and a concrete
//! backend. The bundled [`MemoryStore`] keeps everything in process memory;
//! alternative backends implement the same trait.

mod memory;

pub use memory::MemoryStore;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::id::SessionId;
use crate::session::Session;

/// Outcome of one sweep pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    /// Sessions examined by the pass.
    pub scanned: usize,
    /// Sessions removed as expired.
    pub removed: usize,
    /// Wall-clock time the pass took.
    pub elapsed: Duration,
}

/// Storage backend for sessions.
///
/// Loading never persists anything: a fresh session only reaches the store
/// through [`save`](SessionStore::save), so requests that store nothing
/// leave no trace behind.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the live session for `id`, or a fresh one when `id` is
    /// absent, unknown, or expired.
    async fn load(&self, id: Option<SessionId>) -> Result<Session, StoreError>;

    /// Persists the session, re-stamping it with the current time.
    async fn save(&self, session: &mut Session) -> Result<(), StoreError>;

    /// Removes every expired session in one pass.
    async fn sweep(&self) -> SweepStats;
}
