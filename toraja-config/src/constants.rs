pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_WEATHER_TIMEOUT_MS: u64 = 5_000;

/// Rantepao, the tourism hub of Tana Toraja.
pub const DEFAULT_WEATHER_LOCATION: &str = "Rantepao";
pub const DEFAULT_WEATHER_LATITUDE: f64 = -2.9701;
pub const DEFAULT_WEATHER_LONGITUDE: f64 = 119.8977;
pub const DEFAULT_WEATHER_TIMEZONE: &str = "Asia/Makassar";

pub const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    "toraja.toml",
    "toraja.json",
    "config/toraja.toml",
    "config/toraja.json",
];
