//! Builds [`AppState`] from a loaded [`Config`].

use std::{fs, sync::Arc};

use anyhow::{Context, Result};
use tracing::{info, warn};
use toraja_core::content::{InMemoryContentStore, SeedData};
use toraja_core::content::activity::DEFAULT_ACTIVITY_CAPACITY;
use toraja_core::weather::{
    OpenMeteoProvider, WeatherLocation, WeatherPanel, WeatherProvider,
};

use crate::infra::app_state::AppState;
use crate::infra::config::{Config, WeatherConfig};

/// Read the seed file named in the config, if any.
pub fn load_seed(config: &Config) -> Result<SeedData> {
    let Some(path) = config.site.seed_path.as_ref() else {
        warn!("no seed file configured; starting with an empty content store");
        return Ok(SeedData::default());
    };
    let raw = fs::read_to_string(path).with_context(|| {
        format!("failed to read seed data from {}", path.display())
    })?;
    let seed = SeedData::from_json(&raw).with_context(|| {
        format!("invalid seed data in {}", path.display())
    })?;
    info!(path = %path.display(), "seed data loaded");
    Ok(seed)
}

pub fn weather_location(config: &WeatherConfig) -> WeatherLocation {
    WeatherLocation {
        name: config.location.clone(),
        latitude: config.latitude,
        longitude: config.longitude,
        timezone: config.timezone.clone(),
    }
}

/// Assemble state with the given weather provider. Tests pass a fake here.
pub fn build_state_with_provider(
    config: Config,
    seed: SeedData,
    provider: Option<Arc<dyn WeatherProvider>>,
) -> Result<AppState> {
    let capacity = config
        .site
        .activity_capacity
        .unwrap_or(DEFAULT_ACTIVITY_CAPACITY);
    let store = InMemoryContentStore::from_seed_with_capacity(seed, capacity)
        .context("seed data failed validation")?;

    let weather = match provider {
        Some(provider) if config.weather.enabled => {
            let location = weather_location(&config.weather);
            Some(Arc::new(WeatherPanel::new(provider, location)))
        }
        _ => None,
    };

    Ok(AppState::new(config, Arc::new(store), weather))
}

/// Production wiring: seed from disk and Open-Meteo for weather.
pub fn build_state(config: Config) -> Result<AppState> {
    let seed = load_seed(&config)?;
    let provider: Option<Arc<dyn WeatherProvider>> = if config.weather.enabled {
        let provider = OpenMeteoProvider::new(
            config.weather.base_url.clone(),
            config.weather.timeout,
        )
        .context("failed to build weather client")?;
        Some(Arc::new(provider))
    } else {
        info!("weather panel disabled");
        None
    };
    build_state_with_provider(config, seed, provider)
}
