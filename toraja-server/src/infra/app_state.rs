use std::{fmt, sync::Arc};

use toraja_core::carousel::{CarouselConfig, CarouselKey};
use toraja_core::content::ContentStore;
use toraja_core::weather::WeatherPanel;
use toraja_model::Locale;

use crate::infra::config::{Config, carousel_config};

/// Shared handles passed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ContentStore>,
    /// `None` when the weather panel is disabled.
    pub weather: Option<Arc<WeatherPanel>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("weather_enabled", &self.weather.is_some())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn ContentStore>,
        weather: Option<Arc<WeatherPanel>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            weather,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    /// Locale from the `lang` query parameter, or the site default.
    pub fn locale(&self, requested: Option<Locale>) -> Locale {
        requested.unwrap_or(self.config.site.default_locale)
    }

    pub fn carousel_config(&self, key: CarouselKey) -> CarouselConfig {
        carousel_config(key, &self.config.carousels)
    }
}
