use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::{BACKEND_PORT, DEV_PORT, HOSTED_SUFFIXES, LOOPBACK_HOST};

/// The parts of `window.location` the origin decision depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub protocol: String,
    pub hostname: String,
    /// `None` when the page is served on the scheme's default port.
    pub port: Option<u16>,
}

impl PageLocation {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
            port,
        }
    }

    /// Builds a location from the raw strings the browser hands out.
    /// An empty or unparsable port counts as the scheme default.
    pub fn from_parts(protocol: &str, hostname: &str, port: &str) -> Self {
        Self::new(protocol, hostname, port.parse().ok())
    }

    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("{}//{}:{}", self.protocol, self.hostname, port),
            None => format!("{}//{}", self.protocol, self.hostname),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    LocalDevelopment,
    HostedPreview,
    HostedDeployed,
    SameOrigin,
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeploymentMode::LocalDevelopment => "local development",
            DeploymentMode::HostedPreview => "hosted preview",
            DeploymentMode::HostedDeployed => "hosted deployment (single port)",
            DeploymentMode::SameOrigin => "same origin",
        };
        f.write_str(label)
    }
}

/// Decision table used to pick the backend origin for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginPolicy {
    pub loopback_host: String,
    pub dev_port: u16,
    pub backend_port: u16,
    pub hosted_suffixes: Vec<String>,
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self {
            loopback_host: LOOPBACK_HOST.to_string(),
            dev_port: DEV_PORT,
            backend_port: BACKEND_PORT,
            hosted_suffixes: HOSTED_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl OriginPolicy {
    pub fn is_hosted(&self, hostname: &str) -> bool {
        self.hosted_suffixes
            .iter()
            .any(|suffix| hostname.contains(suffix.as_str()))
    }

    /// Picks the backend origin for `location`. First matching rule wins.
    pub fn resolve(&self, location: &PageLocation) -> (DeploymentMode, String) {
        let on_dev_port = location.port == Some(self.dev_port);

        let (mode, base_url) = if location.hostname == self.loopback_host && on_dev_port {
            (
                DeploymentMode::LocalDevelopment,
                format!("http://{}:{}", self.loopback_host, self.backend_port),
            )
        } else if self.is_hosted(&location.hostname) {
            if on_dev_port {
                (
                    DeploymentMode::HostedPreview,
                    format!("{}//{}:{}", location.protocol, location.hostname, self.backend_port),
                )
            } else {
                (DeploymentMode::HostedDeployed, location.origin())
            }
        } else {
            (DeploymentMode::SameOrigin, location.origin())
        };

        info!("Frontend: {}", location.origin());
        info!("Mode: {mode}, backend: {base_url}");
        (mode, base_url)
    }
}
