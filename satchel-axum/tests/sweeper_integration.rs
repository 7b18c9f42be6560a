//! Sweeper behavior behind a live session layer.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::header;
use satchel_core::{MemoryStore, SessionStore, Sweeper};

use common::{RecallResponse, VisitResponse, cookie_pair, session_cookie, test_server};

#[tokio::test]
async fn sweeper_reclaims_expired_sessions_behind_live_traffic() {
    let store = Arc::new(MemoryStore::default());

    // One ancient session the sweeper should reclaim.
    let mut stale = store.load_at(None, 0).await.unwrap();
    store.save_at(&mut stale, 0).await.unwrap();

    // One live session created over HTTP.
    let server = test_server(store.clone());
    let first = server.get("/visit").await;
    let live_id = session_cookie(&first, "satchel_id");

    let sweeper = Sweeper::spawn(store.clone(), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(!store.contains(stale.id()).await);
    assert_eq!(store.len().await, 1);

    // The surviving session keeps working.
    let follow_up = server
        .get("/visit")
        .add_header(header::COOKIE, cookie_pair("satchel_id", &live_id))
        .await;
    follow_up.assert_status_ok();
    assert_eq!(follow_up.json::<VisitResponse>().visits, 2);

    sweeper.shutdown();
    tokio::time::timeout(Duration::from_secs(1), sweeper.wait_for_shutdown())
        .await
        .expect("sweeper should stop promptly");
}

#[tokio::test]
async fn evicted_identifier_replays_as_a_fresh_session() {
    let store = Arc::new(MemoryStore::default());
    let mut stale = store.load_at(None, 0).await.unwrap();
    stale.insert("name", "ada");
    store.save_at(&mut stale, 0).await.unwrap();

    let stats = store.sweep().await;
    assert_eq!(stats.scanned, 1);
    assert_eq!(stats.removed, 1);

    let server = test_server(store.clone());
    let response = server
        .get("/recall")
        .add_header(
            header::COOKIE,
            cookie_pair("satchel_id", &stale.id().to_string()),
        )
        .await;
    response.assert_status_ok();

    let body: RecallResponse = response.json();
    assert_eq!(body.name, None);
    assert_ne!(
        session_cookie(&response, "satchel_id"),
        stale.id().to_string()
    );
}
