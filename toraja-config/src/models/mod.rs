pub mod sources;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use toraja_model::Locale;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub cors: CorsConfig,
    pub weather: WeatherConfig,
    pub carousels: CarouselSettings,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Public origin used for canonical URLs and `hreflang` links.
    pub base_url: Url,
    /// Language served when a request does not ask for one.
    pub default_locale: Locale,
    /// JSON seed for the content store. `None` starts empty.
    pub seed_path: Option<PathBuf>,
    /// How many admin changes the activity feed remembers.
    pub activity_capacity: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub enabled: bool,
    pub base_url: Url,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub timeout: Duration,
}

/// Optional tuning for the two site carousels. Unset fields keep the
/// built-in preset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub featured: CarouselOverrides,
    pub rambu_solo: CarouselOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page_desktop: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page_mobile: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoint_px: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_desktop_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_mobile_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_debounce_ms: Option<u64>,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
