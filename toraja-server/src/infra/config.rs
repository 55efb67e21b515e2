//! Server-side view of the shared configuration.

use std::time::Duration;

use toraja_config::CarouselOverrides;
pub use toraja_config::{
    CarouselSettings, Config, ConfigLoad, ConfigLoader, ConfigMetadata,
    CorsConfig, EnvConfig, ServerConfig, SiteConfig, WeatherConfig,
};
use toraja_core::carousel::{CarouselConfig, CarouselKey};

/// Preset for `key` with any configured overrides applied.
pub fn carousel_config(
    key: CarouselKey,
    settings: &CarouselSettings,
) -> CarouselConfig {
    let overrides = match key {
        CarouselKey::FeaturedDestinations => &settings.featured,
        CarouselKey::RambuSoloEvents => &settings.rambu_solo,
        CarouselKey::Custom(_) => return key.default_config(),
    };
    apply_overrides(key.default_config(), overrides)
}

fn apply_overrides(
    mut config: CarouselConfig,
    overrides: &CarouselOverrides,
) -> CarouselConfig {
    let ms = Duration::from_millis;
    if let Some(n) = overrides.items_per_page_desktop {
        config.items_per_page_desktop = n;
    }
    if let Some(n) = overrides.items_per_page_mobile {
        config.items_per_page_mobile = n;
    }
    if let Some(px) = overrides.breakpoint_px {
        config.breakpoint_px = px;
    }
    if let Some(v) = overrides.autoplay_desktop_ms {
        config.autoplay_interval_desktop = ms(v);
    }
    if let Some(v) = overrides.autoplay_mobile_ms {
        config.autoplay_interval_mobile = ms(v);
    }
    if let Some(v) = overrides.transition_ms {
        config.transition_duration = ms(v);
    }
    if let Some(v) = overrides.resize_debounce_ms {
        config.resize_debounce = ms(v);
    }
    config.sanitized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_touch_set_fields() {
        let settings = CarouselSettings {
            rambu_solo: CarouselOverrides {
                items_per_page_desktop: Some(2),
                autoplay_desktop_ms: Some(8000),
                ..CarouselOverrides::default()
            },
            ..CarouselSettings::default()
        };

        let config = carousel_config(CarouselKey::RambuSoloEvents, &settings);
        assert_eq!(config.items_per_page_desktop, 2);
        assert_eq!(
            config.autoplay_interval_desktop,
            Duration::from_millis(8000)
        );
        assert_eq!(config.breakpoint_px, 1024.0);

        let featured =
            carousel_config(CarouselKey::FeaturedDestinations, &settings);
        assert_eq!(featured, CarouselConfig::featured_destinations());
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let settings = CarouselSettings {
            featured: CarouselOverrides {
                items_per_page_mobile: Some(0),
                ..CarouselOverrides::default()
            },
            ..CarouselSettings::default()
        };
        let config =
            carousel_config(CarouselKey::FeaturedDestinations, &settings);
        assert_eq!(config.items_per_page_mobile, 1);
    }
}
