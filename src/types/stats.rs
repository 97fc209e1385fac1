use serde::{Deserialize, Serialize};

const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

/// A single memory sample taken by the system stats service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_memory: u64,
    pub used_memory: u64,
}

impl SystemStats {
    pub fn used_gb(&self) -> u64 {
        self.used_memory / BYTES_PER_GB
    }

    pub fn total_gb(&self) -> u64 {
        self.total_memory / BYTES_PER_GB
    }

    /// Renders the one-line summary shown on the dashboard, e.g.
    /// `RAM: 7 GB Used / 15 GB Total`. Values are truncated to whole GiB.
    pub fn summary(&self) -> String {
        format!("RAM: {} GB Used / {} GB Total", self.used_gb(), self.total_gb())
    }
}
