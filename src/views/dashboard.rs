//! Dashboard: the RAM summary line, refreshed on a fixed interval.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::bridge::{invoke_as, CommandBridge};
use super::sequence::{RequestSequencer, RequestTicket};
use super::Notification;
use crate::types::errors::BridgeError;
use crate::types::settings::DashboardSettings;

pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug)]
pub struct DashboardView {
    stats: String,
    seq: RequestSequencer,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self { stats: LOADING_TEXT.to_string(), seq: RequestSequencer::new() }
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &str {
        &self.stats
    }

    pub fn begin_refresh(&mut self) -> RequestTicket {
        self.seq.begin()
    }

    /// Applies a stats response. Stale responses are dropped silently;
    /// failures become a status-line message and an error notification.
    pub fn apply_stats(
        &mut self,
        ticket: RequestTicket,
        result: Result<String, BridgeError>,
    ) -> Option<Notification> {
        if !self.seq.accept(ticket) {
            debug!(seq = ticket.seq(), "dropped stale stats response");
            return None;
        }
        match result {
            Ok(stats) => {
                self.stats = stats;
                None
            }
            Err(e) => {
                self.stats = "Stats unavailable".to_string();
                Some(Notification::error(e.to_string()))
            }
        }
    }

    /// Fetches and applies stats in one step.
    pub fn refresh(&mut self, bridge: &dyn CommandBridge) -> Option<Notification> {
        let ticket = self.begin_refresh();
        let result = invoke_as::<String>(bridge, "get_system_stats", json!({}));
        self.apply_stats(ticket, result)
    }
}

/// Background task refreshing a shared [`DashboardView`] on a fixed interval.
///
/// Must be created inside a tokio runtime. The task stops when the poller
/// is stopped or dropped, which is how the dashboard is torn down.
pub struct StatsPoller {
    handle: JoinHandle<()>,
}

impl StatsPoller {
    pub fn spawn(
        bridge: Arc<dyn CommandBridge>,
        view: Arc<Mutex<DashboardView>>,
        interval: Duration,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;

                let ticket = match view.lock() {
                    Ok(mut v) => v.begin_refresh(),
                    Err(_) => break,
                };
                let bridge = Arc::clone(&bridge);
                let result = tokio::task::spawn_blocking(move || {
                    invoke_as::<String>(bridge.as_ref(), "get_system_stats", json!({}))
                })
                .await;

                let result = match result {
                    Ok(r) => r,
                    Err(e) => {
                        warn!(error = %e, "stats task panicked");
                        continue;
                    }
                };
                match view.lock() {
                    Ok(mut v) => {
                        if let Some(n) = v.apply_stats(ticket, result) {
                            warn!(message = %n.message, "stats refresh failed");
                        }
                    }
                    Err(_) => break,
                };
            }
        });
        Self { handle }
    }

    /// Spawns a poller on the configured `stats_interval_ms`.
    pub fn from_settings(
        bridge: Arc<dyn CommandBridge>,
        view: Arc<Mutex<DashboardView>>,
        settings: &DashboardSettings,
    ) -> Self {
        Self::spawn(bridge, view, settings.interval())
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops polling and waits for the task to wind down.
    pub async fn stop(mut self) {
        self.handle.abort();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for StatsPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
