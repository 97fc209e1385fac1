//! Presentation-state core.
//!
//! Each screen of the desktop UI is an explicit state struct. A UI calls the
//! view's methods in response to user input; the view talks to the backend
//! through a [`CommandBridge`](bridge::CommandBridge) and returns a
//! [`Notification`] for anything the user should be told. Views never hold
//! global state and never panic on backend failures.

pub mod bridge;
pub mod dashboard;
pub mod generator;
pub mod notes;
pub mod remote;
pub mod sequence;
pub mod vault;

use serde::Serialize;

/// Severity of a transient user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

/// A transient message for the UI to show (toast or status line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }
}

/// Top-level navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Tab {
    #[default]
    Dashboard,
    Notes,
    Generator,
    Vault,
    Remote,
}

/// Navigation shell state: which tab is showing.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    current: Tab,
}

impl ShellState {
    pub fn current(&self) -> Tab {
        self.current
    }

    /// Switches tab. Returns the tab that was left so its view can be torn
    /// down (e.g. stopping the dashboard poller), or `None` if unchanged.
    pub fn select(&mut self, tab: Tab) -> Option<Tab> {
        if tab == self.current {
            return None;
        }
        Some(std::mem::replace(&mut self.current, tab))
    }
}
