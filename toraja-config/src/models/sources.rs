use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{non_empty, parse_csv};

use super::CarouselSettings;

/// Raw configuration as defined in a TOML or JSON site file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub site: FileSiteConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    #[serde(default)]
    pub weather: FileWeatherConfig,
    #[serde(default)]
    pub carousels: CarouselSettings,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_capacity: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileWeatherConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

/// Environment-derived configuration values.
///
/// Numeric and boolean variables that fail to parse are kept as raw strings
/// so the loader can report them instead of silently falling back.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub server_host: Option<String>,
    pub server_port: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub default_locale: Option<String>,
    pub site_base_url: Option<String>,
    pub seed_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub weather_enabled: Option<String>,
    pub weather_base_url: Option<String>,
    pub weather_location: Option<String>,
    pub weather_latitude: Option<String>,
    pub weather_longitude: Option<String>,
    pub weather_timezone: Option<String>,
    pub weather_timeout_ms: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| non_empty(lookup(key));
        Self {
            server_host: var("SERVER_HOST"),
            server_port: var("SERVER_PORT"),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
            default_locale: var("DEFAULT_LOCALE"),
            site_base_url: var("SITE_BASE_URL"),
            seed_path: var("SEED_PATH").map(PathBuf::from),
            config_path: var("SITE_CONFIG_PATH").map(PathBuf::from),
            weather_enabled: var("WEATHER_ENABLED"),
            weather_base_url: var("WEATHER_BASE_URL"),
            weather_location: var("WEATHER_LOCATION"),
            weather_latitude: var("WEATHER_LATITUDE"),
            weather_longitude: var("WEATHER_LONGITUDE"),
            weather_timezone: var("WEATHER_TIMEZONE"),
            weather_timeout_ms: var("WEATHER_TIMEOUT_MS"),
        }
    }
}
