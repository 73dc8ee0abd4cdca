//! Crowd zone simulation loop.
//!
//! Perturbs the zone radii on a fixed cadence and broadcasts each snapshot
//! to WebSocket subscribers. The task is spawned when the first navigation
//! view opens and aborted when the last one closes; see `AppState`.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::state::AppState;

/// Run the simulation until the owning task is aborted.
pub async fn run_crowd_loop(state: Arc<AppState>) {
    let mut ticker = interval(Duration::from_secs(state.config().crowd_tick_secs));

    loop {
        ticker.tick().await;

        // The last viewer may have left between ticks; stay idle until the
        // abort lands rather than perturbing an unwatched field.
        if !state.view_is_active() {
            continue;
        }

        let zones = state.tick_crowd();
        tracing::debug!("Crowd tick: {} zones updated", zones.len());
        state.broadcast_zones(&zones);
    }
}
