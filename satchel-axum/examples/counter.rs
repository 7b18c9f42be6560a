//! Cookie-backed visit counter.
//!
//! Run it, then hit the endpoint a few times with the same cookie jar:
//!
//! ```text
//! cargo run -p satchel-axum --example counter
//! curl -c /tmp/jar -b /tmp/jar http://127.0.0.1:4460/count
//! ```

use std::sync::Arc;

use anyhow::Result;
use axum::{Extension, Router, middleware, routing::get};
use satchel_axum::{SessionLayer, session_middleware};
use satchel_core::{MemoryStore, SessionConfig, SessionHandle, Sweeper};
use tracing::info;

async fn count(Extension(session): Extension<SessionHandle>) -> String {
    let count = session.get::<i64>("count").await.unwrap_or(0) + 1;
    session.set("count", count).await;
    format!("you have visited {count} time(s)\n")
}

async fn trail(Extension(session): Extension<SessionHandle>) -> String {
    let trail = session.get::<String>("trail").await.unwrap_or_default() + ".";
    session.set("trail", trail.clone()).await;
    format!("{trail}\n")
}

async fn ratio(Extension(session): Extension<SessionHandle>) -> String {
    let ratio = session.get::<f64>("ratio").await.unwrap_or(0.0) + 0.1;
    session.set("ratio", ratio).await;
    format!("{ratio:.1}\n")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = SessionConfig::default();
    let store = Arc::new(MemoryStore::new(config.clone()));
    let sweeper = Sweeper::spawn(store.clone(), config.sweep_interval);

    let app = Router::new()
        .route("/count", get(count))
        .route("/trail", get(trail))
        .route("/ratio", get(ratio))
        .layer(middleware::from_fn(session_middleware))
        .layer(Extension(SessionLayer::new(store, config.cookie_name)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:4460").await?;
    info!(addr = %listener.local_addr()?, "counter example listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    sweeper.shutdown();
    sweeper.wait_for_shutdown().await;
    Ok(())
}
