//! Background eviction of expired sessions.
//!
//! The [`Sweeper`] owns the only code path that deletes sessions: loading an
//! expired session merely ignores it, and the sweeper reclaims the entry on
//! its next pass. It runs as a dedicated task until explicitly shut down.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::store::SessionStore;

/// Handle to the background sweep task.
pub struct Sweeper {
    handle: JoinHandle<()>,
    shutdown: CancellationToken,
}

impl Sweeper {
    /// Spawn the sweep task against a store.
    ///
    /// The first pass runs one full `interval` after spawning, and one pass
    /// runs per interval from then on. The task keeps the store alive until
    /// it stops.
    pub fn spawn(store: Arc<dyn SessionStore>, interval: Duration) -> Self {
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let handle = tokio::spawn(async move {
            info!(interval_secs = interval.as_secs(), "sweeper started");

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        info!("sweeper received shutdown signal");
                        break;
                    }
                    _ = tokio::time::sleep(interval) => {
                        let stats = store.sweep().await;
                        info!(
                            scanned = stats.scanned,
                            removed = stats.removed,
                            elapsed_ms = stats.elapsed.as_millis() as u64,
                            "sweep pass complete"
                        );
                    }
                }
            }

            info!("sweeper stopped");
        });

        Self { handle, shutdown }
    }

    /// Signal the sweep task to shut down gracefully.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Wait for the sweep task to complete.
    pub async fn wait_for_shutdown(self) {
        if let Err(e) = self.handle.await {
            warn!(error = %e, "sweeper task panicked");
        }
    }
}
