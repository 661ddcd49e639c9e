use serde::{Deserialize, Serialize};

use crate::model::Location;
use crate::mvi::StoreOptions;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Vendor REST API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://threedollars.co.kr").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Session token sent as the Authorization header.
    #[serde(default)]
    pub token: Option<String>,
}

/// State container and screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Cancel superseded same-kind effects (default: true).
    #[serde(default = "default_supersede")]
    pub supersede_effects: bool,
    /// Per-topic buffer of the event bus (default: 64).
    #[serde(default = "default_bus_capacity")]
    pub bus_capacity: usize,
    /// Items fetched for preview lists such as bookmarks (default: 5).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Radius of the nearby store search in meters (default: 2000).
    #[serde(default = "default_nearby_distance")]
    pub nearby_distance_m: u32,
}

/// Fallback position used when no device location is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "https://threedollars.co.kr".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_supersede() -> bool {
    true
}

fn default_bus_capacity() -> usize {
    crate::bus::DEFAULT_CAPACITY
}

fn default_page_size() -> usize {
    5
}

fn default_nearby_distance() -> u32 {
    2000
}

fn default_latitude() -> f64 {
    37.497942
}

fn default_longitude() -> f64 {
    127.027621
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            token: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            supersede_effects: default_supersede(),
            bus_capacity: default_bus_capacity(),
            page_size: default_page_size(),
            nearby_distance_m: default_nearby_distance(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl From<&StoreConfig> for StoreOptions {
    fn from(config: &StoreConfig) -> Self {
        StoreOptions {
            supersede_effects: config.supersede_effects,
        }
    }
}

impl LocationConfig {
    pub fn to_location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}
