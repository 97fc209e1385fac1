//! Remote-access screen.
//!
//! Shows this machine's IP and simulates connecting to a target. The
//! connection is a visual stub: `Connecting` turns into `Connected` after a
//! fixed delay and no transport is opened.

use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::json;

use super::bridge::{invoke_as, CommandBridge};
use super::Notification;

pub const CONNECT_DELAY: Duration = Duration::from_secs(2);
pub const LOADING_IP_TEXT: &str = "Loading IP...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Idle,
    Connecting,
    Connected,
}

#[derive(Debug)]
pub struct RemoteView {
    my_ip: String,
    pub target_ip: String,
    status: ConnectionStatus,
    connect_deadline: Option<Instant>,
}

impl Default for RemoteView {
    fn default() -> Self {
        Self {
            my_ip: LOADING_IP_TEXT.to_string(),
            target_ip: String::new(),
            status: ConnectionStatus::Idle,
            connect_deadline: None,
        }
    }
}

impl RemoteView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn my_ip(&self) -> &str {
        &self.my_ip
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn load_ip(&mut self, bridge: &dyn CommandBridge) -> Option<Notification> {
        match invoke_as::<String>(bridge, "get_my_ip", json!({})) {
            Ok(ip) => {
                self.my_ip = ip;
                None
            }
            Err(e) => {
                self.my_ip = "Unavailable".to_string();
                Some(Notification::error(e.to_string()))
            }
        }
    }

    pub fn copy_ip(&self) -> (String, Notification) {
        (self.my_ip.clone(), Notification::success("IP Address copied!"))
    }

    /// Starts the simulated connection at `now`.
    pub fn connect(&mut self, now: Instant) -> Option<Notification> {
        if self.target_ip.trim().is_empty() {
            return Some(Notification::error("Please enter Target IP"));
        }
        self.status = ConnectionStatus::Connecting;
        self.connect_deadline = Some(now + CONNECT_DELAY);
        None
    }

    /// Advances the simulated connection. Returns a notification on the
    /// transition to `Connected`.
    pub fn tick(&mut self, now: Instant) -> Option<Notification> {
        match (self.status, self.connect_deadline) {
            (ConnectionStatus::Connecting, Some(deadline)) if now >= deadline => {
                self.status = ConnectionStatus::Connected;
                self.connect_deadline = None;
                Some(Notification::success(format!("Connected to {}", self.target_ip)))
            }
            _ => None,
        }
    }

    pub fn disconnect(&mut self) -> Notification {
        self.status = ConnectionStatus::Idle;
        self.connect_deadline = None;
        Notification::info("Disconnected")
    }
}
