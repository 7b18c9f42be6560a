//! satchel-core: cookie-keyed, time-limited session storage
//!
//! This crate provides the framework-independent pieces of satchel:
//!
//! - **Sessions** - [`Session`] as a typed key/value bag stamped with its last save time
//! - **Typed values** - [`Value`] and [`FromValue`] for reads that report missing keys and kind mismatches
//! - **Storage** - the [`SessionStore`] trait and the in-memory [`MemoryStore`]
//! - **Eviction** - [`Sweeper`] background task that reclaims expired sessions
//! - **Request binding** - [`SessionHandle`] for sharing one request's session across a middleware and its handler
//!
//! HTTP framework bindings live in companion crates (`satchel-axum`).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use satchel_core::{MemoryStore, SessionConfig, SessionStore, Sweeper};
//!
//! async fn example() -> Result<(), satchel_core::SatchelError> {
//!     let config = SessionConfig::default();
//!     let store = Arc::new(MemoryStore::new(config.clone()));
//!
//!     // Sessions only persist once saved.
//!     let mut session = store.load(None).await?;
//!     session.insert("count", 1i64);
//!     store.save(&mut session).await?;
//!
//!     // Expired sessions are reclaimed in the background.
//!     let sweeper = Sweeper::spawn(store.clone(), config.sweep_interval);
//!     sweeper.shutdown();
//!     sweeper.wait_for_shutdown().await;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//!             ┌───────────────┐
//!  request ──▶│  HTTP layer   │──▶ handler (SessionHandle in extensions)
//!             └───────┬───────┘
//!                     │ load / save
//!             ┌───────▼───────┐         ┌─────────┐
//!             │  SessionStore │◀────────│ Sweeper │ evicts expired sessions
//!             └───────────────┘  sweep  └─────────┘
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod id;
pub mod session;
pub mod store;
pub mod sweep;
pub mod value;

// Re-export key types for convenience
pub use config::{
    DEFAULT_COOKIE_NAME, DEFAULT_SWEEP_INTERVAL, DEFAULT_VALIDITY_WINDOW, SessionConfig,
};
pub use error::{AccessError, IdentifierError, SatchelError, StoreError};
pub use handle::SessionHandle;
pub use id::SessionId;
pub use session::Session;
pub use store::{MemoryStore, SessionStore, SweepStats};
pub use sweep::Sweeper;
pub use value::{FromValue, Value};
