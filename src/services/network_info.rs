//! IP address discovery for the remote-access screen.
//!
//! `Local` mode reports the address of the interface the OS would route
//! outbound traffic through. Connecting a UDP socket only selects a route;
//! no packet is sent. `Public` mode asks an external echo service and is
//! available with the `network` feature.

use std::net::{IpAddr, UdpSocket};

use tracing::debug;

use crate::types::errors::NetworkError;
use crate::types::settings::{IpLookupMode, NetworkSettings};

/// Well-known routable address used only to pick the outbound interface.
const ROUTE_PROBE_ADDR: &str = "8.8.8.8:80";

/// Trait defining IP discovery.
pub trait NetworkInfoTrait {
    fn my_ip(&self) -> Result<String, NetworkError>;
}

pub struct NetworkInfo {
    settings: NetworkSettings,
}

impl NetworkInfo {
    pub fn new(settings: NetworkSettings) -> Self {
        Self { settings }
    }

    pub fn set_settings(&mut self, settings: NetworkSettings) {
        self.settings = settings;
    }

    fn local_ip(&self) -> Result<IpAddr, NetworkError> {
        let socket = UdpSocket::bind("0.0.0.0:0").map_err(|e| NetworkError::Unavailable(e.to_string()))?;
        socket
            .connect(ROUTE_PROBE_ADDR)
            .map_err(|e| NetworkError::Unavailable(e.to_string()))?;
        let addr = socket.local_addr().map_err(|e| NetworkError::Unavailable(e.to_string()))?;
        if addr.ip().is_unspecified() {
            return Err(NetworkError::Unavailable("no outbound interface".to_string()));
        }
        Ok(addr.ip())
    }

    #[cfg(feature = "network")]
    fn public_ip(&self) -> Result<IpAddr, NetworkError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(self.settings.timeout_secs))
            .build()
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;
        let body = client
            .get(&self.settings.public_ip_url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;
        parse_ip(&body)
    }

    #[cfg(not(feature = "network"))]
    fn public_ip(&self) -> Result<IpAddr, NetworkError> {
        Err(NetworkError::Unsupported)
    }
}

impl NetworkInfoTrait for NetworkInfo {
    fn my_ip(&self) -> Result<String, NetworkError> {
        let ip = match self.settings.ip_lookup {
            IpLookupMode::Local => self.local_ip()?,
            IpLookupMode::Public => self.public_ip()?,
        };
        debug!(%ip, mode = ?self.settings.ip_lookup, "resolved ip");
        Ok(ip.to_string())
    }
}

/// Parses an echo-service body such as `"203.0.113.7\n"`.
pub fn parse_ip(body: &str) -> Result<IpAddr, NetworkError> {
    let trimmed = body.trim();
    trimmed
        .parse::<IpAddr>()
        .map_err(|_| NetworkError::InvalidResponse(trimmed.chars().take(64).collect()))
}
