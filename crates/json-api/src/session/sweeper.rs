//! Periodic eviction of idle sessions.

use std::{sync::Arc, time::Duration};

use storefront_app::session::SessionStore;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::debug;

/// Spawn a task that purges idle sessions every `interval`.
pub(crate) fn spawn(sessions: Arc<dyn SessionStore>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_secs(1)));

        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let evicted = sessions.purge_expired().await;

            if evicted > 0 {
                debug!(evicted, "evicted idle sessions");
            }
        }
    })
}
