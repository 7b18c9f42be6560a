//! satchel-axum: axum binding for the satchel session store
//!
//! One middleware does all the work: it loads the session named by the
//! request's identifier cookie, binds a [`SessionHandle`] into the request
//! extensions, and after the handler runs saves the session and re-issues
//! the cookie. Handlers just extract `Extension<SessionHandle>`.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use axum::{Extension, Router, middleware, routing::get};
//! use satchel_axum::{SessionLayer, session_middleware};
//! use satchel_core::{MemoryStore, SessionConfig, SessionHandle, Sweeper};
//!
//! async fn hits(Extension(session): Extension<SessionHandle>) -> String {
//!     let hits = session.get::<i64>("hits").await.unwrap_or(0) + 1;
//!     session.set("hits", hits).await;
//!     hits.to_string()
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SessionConfig::default();
//!     let store = Arc::new(MemoryStore::new(config.clone()));
//!     let sweeper = Sweeper::spawn(store.clone(), config.sweep_interval);
//!
//!     let app = Router::new()
//!         .route("/hits", get(hits))
//!         .layer(middleware::from_fn(session_middleware))
//!         .layer(Extension(SessionLayer::new(store, config.cookie_name)));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//!
//!     sweeper.shutdown();
//!     sweeper.wait_for_shutdown().await;
//! }
//! ```

pub mod middleware;

pub use middleware::{SessionLayer, session_middleware};
