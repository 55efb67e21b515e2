//! Current weather panel for Rantepao.
//!
//! The panel only fetches when asked. A refresh moves its state through
//! `Loading` to `Ready` or `Failed`, and a failure stays visible until the
//! next explicit refresh.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use toraja_model::{FetchState, Locale};
use tracing::{debug, warn};
use url::Url;

use crate::error::WeatherError;

pub const OPEN_METEO_BASE: &str = "https://api.open-meteo.com";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code";

/// Where the panel reports weather for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone used for the observation timestamp.
    pub timezone: String,
}

impl Default for WeatherLocation {
    fn default() -> Self {
        Self {
            name: "Rantepao".to_string(),
            latitude: -2.9701,
            longitude: 119.8977,
            timezone: "Asia/Makassar".to_string(),
        }
    }
}

/// Coarse sky condition derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sky {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Thunderstorm,
    Unknown,
}

impl Sky {
    pub fn from_wmo_code(code: u16) -> Self {
        match code {
            0 | 1 => Sky::Clear,
            2 => Sky::PartlyCloudy,
            3 => Sky::Overcast,
            45 | 48 => Sky::Fog,
            51..=57 => Sky::Drizzle,
            61..=67 | 80..=82 => Sky::Rain,
            95..=99 => Sky::Thunderstorm,
            _ => Sky::Unknown,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Sky::Clear, Locale::Id) => "Cerah",
            (Sky::Clear, Locale::En) => "Clear",
            (Sky::PartlyCloudy, Locale::Id) => "Berawan sebagian",
            (Sky::PartlyCloudy, Locale::En) => "Partly cloudy",
            (Sky::Overcast, Locale::Id) => "Berawan",
            (Sky::Overcast, Locale::En) => "Overcast",
            (Sky::Fog, Locale::Id) => "Berkabut",
            (Sky::Fog, Locale::En) => "Fog",
            (Sky::Drizzle, Locale::Id) => "Gerimis",
            (Sky::Drizzle, Locale::En) => "Drizzle",
            (Sky::Rain, Locale::Id) => "Hujan",
            (Sky::Rain, Locale::En) => "Rain",
            (Sky::Thunderstorm, Locale::Id) => "Badai petir",
            (Sky::Thunderstorm, Locale::En) => "Thunderstorm",
            (Sky::Unknown, Locale::Id) => "Tidak diketahui",
            (Sky::Unknown, Locale::En) => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f32,
    pub humidity_percent: Option<u8>,
    pub wind_speed_kmh: f32,
    pub weather_code: u16,
    pub sky: Sky,
    /// Local observation time as reported by the provider.
    pub observed_at: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(
        &self,
        location: &WeatherLocation,
    ) -> Result<WeatherReport, WeatherError>;
}

/// Open-Meteo forecast API client. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: Url,
    client: Arc<Client>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: String,
    temperature_2m: f32,
    #[serde(default)]
    relative_humidity_2m: Option<f32>,
    wind_speed_10m: f32,
    weather_code: u16,
}

impl OpenMeteoProvider {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            client: Arc::new(client),
        })
    }

    fn forecast_url(
        &self,
        location: &WeatherLocation,
    ) -> Result<Url, WeatherError> {
        let mut url = self.base_url.join("v1/forecast")?;
        url.query_pairs_mut()
            .append_pair("latitude", &location.latitude.to_string())
            .append_pair("longitude", &location.longitude.to_string())
            .append_pair("current", CURRENT_FIELDS)
            .append_pair("timezone", &location.timezone);
        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current(
        &self,
        location: &WeatherLocation,
    ) -> Result<WeatherReport, WeatherError> {
        let url = self.forecast_url(location)?;
        debug!(%url, "fetching current weather");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::InvalidResponse(format!(
                "open-meteo returned {status}"
            )));
        }
        let body: ForecastResponse = response.json().await?;
        Ok(report_from(location, body.current))
    }
}

fn report_from(
    location: &WeatherLocation,
    current: CurrentBlock,
) -> WeatherReport {
    WeatherReport {
        location: location.name.clone(),
        temperature_c: current.temperature_2m,
        humidity_percent: current
            .relative_humidity_2m
            .map(|h| h.clamp(0.0, 100.0).round() as u8),
        wind_speed_kmh: current.wind_speed_10m,
        weather_code: current.weather_code,
        sky: Sky::from_wmo_code(current.weather_code),
        observed_at: current.time,
    }
}

/// One-shot weather panel shared by request handlers.
pub struct WeatherPanel {
    provider: Arc<dyn WeatherProvider>,
    location: WeatherLocation,
    state: Mutex<FetchState<WeatherReport>>,
}

impl std::fmt::Debug for WeatherPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherPanel")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl WeatherPanel {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        location: WeatherLocation,
    ) -> Self {
        Self {
            provider,
            location,
            state: Mutex::new(FetchState::Idle),
        }
    }

    pub fn location(&self) -> &WeatherLocation {
        &self.location
    }

    pub async fn state(&self) -> FetchState<WeatherReport> {
        self.state.lock().clone()
    }

    /// Fetch once. While a fetch is in flight further refreshes are ignored
    /// and return the current `Loading` state. A refresh dropped before the
    /// provider answers puts the previous state back.
    pub async fn refresh(&self) -> FetchState<WeatherReport> {
        let guard = {
            let mut state = self.state.lock();
            if state.is_loading() {
                debug!("weather refresh already in flight");
                return state.clone();
            }
            let previous = std::mem::replace(&mut *state, FetchState::Loading);
            LoadingGuard {
                state: &self.state,
                previous: Some(previous),
            }
        };

        let outcome = match self.provider.current(&self.location).await {
            Ok(report) => FetchState::Ready(report),
            Err(err) => {
                warn!(
                    error = %err,
                    location = %self.location.name,
                    "weather fetch failed"
                );
                FetchState::Failed(err.to_string())
            }
        };

        guard.finish(outcome)
    }
}

/// Owns the `Loading` state for the duration of one provider call.
struct LoadingGuard<'a> {
    state: &'a Mutex<FetchState<WeatherReport>>,
    previous: Option<FetchState<WeatherReport>>,
}

impl LoadingGuard<'_> {
    fn finish(
        mut self,
        outcome: FetchState<WeatherReport>,
    ) -> FetchState<WeatherReport> {
        self.previous = None;
        let mut state = self.state.lock();
        *state = outcome;
        state.clone()
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            debug!("weather refresh cancelled before the provider answered");
            let mut state = self.state.lock();
            if state.is_loading() {
                *state = previous;
            }
        }
    }
}
