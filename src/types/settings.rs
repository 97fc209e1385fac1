use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub network: NetworkSettings,
    #[serde(default)]
    pub rpc: RpcSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Password generator bounds and the slider's starting value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorSettings {
    pub default_length: i64,
    pub min_length: i64,
    pub max_length: i64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_length: 16,
            min_length: 6,
            max_length: 64,
        }
    }
}

impl GeneratorSettings {
    /// Clamps a requested length into `[min_length, max_length]`.
    pub fn clamp_length(&self, length: i64) -> i64 {
        length.clamp(self.min_length, self.max_length)
    }
}

/// Dashboard refresh settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    pub stats_interval_ms: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self { stats_interval_ms: 2000 }
    }
}

impl DashboardSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.stats_interval_ms)
    }
}

/// How `get_my_ip` discovers the address it reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IpLookupMode {
    /// Address of the interface used for outbound traffic.
    Local,
    /// Address reported by an external echo service.
    Public,
}

/// Network lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSettings {
    pub ip_lookup: IpLookupMode,
    pub public_ip_url: String,
    pub timeout_secs: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            ip_lookup: IpLookupMode::Local,
            public_ip_url: "https://api.ipify.org".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Limits for the stdio command server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcSettings {
    pub max_requests_per_second: u32,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self { max_requests_per_second: 200 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}
