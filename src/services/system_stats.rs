//! System stats sampler for the GlassDesk dashboard.

use sysinfo::System;
use tracing::debug;

use crate::types::stats::SystemStats;

/// Trait defining a memory sampler.
pub trait SystemStatsTrait {
    /// Refreshes memory counters and returns the new sample.
    fn sample(&mut self) -> SystemStats;
}

/// Samples RAM usage through `sysinfo`, reusing one `System` between calls.
pub struct SystemStatsService {
    sys: System,
}

impl SystemStatsService {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for SystemStatsService {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemStatsTrait for SystemStatsService {
    fn sample(&mut self) -> SystemStats {
        self.sys.refresh_memory();
        let stats = SystemStats {
            total_memory: self.sys.total_memory(),
            used_memory: self.sys.used_memory(),
        };
        debug!(total = stats.total_memory, used = stats.used_memory, "sampled memory");
        stats
    }
}
