#![allow(unused)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{Days, NaiveDate, Utc};
use serde_json::{Value, json};
use toraja_config::{Config, ConfigLoader, EnvConfig};
use toraja_core::content::SeedData;
use toraja_core::error::WeatherError;
use toraja_core::weather::{
    Sky, WeatherLocation, WeatherProvider, WeatherReport,
};
use toraja_server::{
    AppState, create_app, infra::startup::build_state_with_provider,
};

/// Provider that answers from memory and can be switched to failing.
#[derive(Debug, Default)]
pub struct FakeWeather {
    pub failing: AtomicBool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current(
        &self,
        location: &WeatherLocation,
    ) -> Result<WeatherReport, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(WeatherError::InvalidResponse(
                "service unavailable".to_string(),
            ));
        }
        Ok(WeatherReport {
            location: location.name.clone(),
            temperature_c: 21.5,
            humidity_percent: Some(82),
            wind_speed_kmh: 6.0,
            weather_code: 61,
            sky: Sky::Rain,
            observed_at: "2025-07-01T09:00".to_string(),
        })
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub weather: Arc<FakeWeather>,
}

pub fn test_config(vars: &[(&str, &str)]) -> Result<Config> {
    let mut map: HashMap<String, String> = HashMap::from([(
        "SITE_BASE_URL".to_string(),
        "https://toraja.example".to_string(),
    )]);
    for (key, value) in vars {
        map.insert(key.to_string(), value.to_string());
    }
    let load = ConfigLoader::new()
        .with_env(EnvConfig::from_lookup(|key| map.get(key).cloned()))
        .load()?;
    Ok(load.config)
}

fn in_days(today: NaiveDate, days: u64) -> String {
    today
        .checked_add_days(Days::new(days))
        .unwrap_or(today)
        .to_string()
}

fn ago(today: NaiveDate, days: u64) -> String {
    today
        .checked_sub_days(Days::new(days))
        .unwrap_or(today)
        .to_string()
}

fn destination(id: &str, en: &str, featured: bool) -> Value {
    let image =
        format!("/images/{}.jpg", id.to_lowercase().replace(' ', "-"));
    json!({
        "name": {"id": id, "en": en},
        "summary": {
            "id": format!("Ringkasan {id}"),
            "en": format!("About {en}")
        },
        "description": {
            "id": format!("Deskripsi {id}"),
            "en": format!("Description of {en}")
        },
        "category": "heritage",
        "location": "Kesu",
        "coordinates": {"lat": -3.0, "lng": 119.9},
        "images": [image],
        "ticket_price": 15000,
        "featured": featured
    })
}

/// Seed relative to today so the upcoming-event carousel stays stable.
pub fn seed_json() -> Value {
    let today = Utc::now().date_naive();
    json!({
        "destinations": [
            destination("Kete Kesu", "Kete Kesu", true),
            destination("Lemo", "Lemo", true),
            destination("Londa", "Londa", true),
            destination("Batutumonga", "Batutumonga", true),
            destination("Bori Kalimbuang", "Bori Kalimbuang", true),
            destination("Buntu Burake", "Buntu Burake", true),
            destination("Pallawa", "Pallawa", false)
        ],
        "events": [
            {
                "title": {
                    "id": "Rambu Solo Sangalla",
                    "en": "Sangalla Funeral Ceremony"
                },
                "category": "rambu-solo",
                "start_date": in_days(today, 30),
                "end_date": in_days(today, 33),
                "location": "Sangalla"
            },
            {
                "title": {
                    "id": "Rambu Solo Rantepao",
                    "en": "Rantepao Funeral Ceremony"
                },
                "category": "rambu-solo",
                "start_date": in_days(today, 7),
                "location": "Rantepao"
            },
            {
                "title": {
                    "id": "Rambu Solo Lampau",
                    "en": "Past Funeral Ceremony"
                },
                "category": "rambu-solo",
                "start_date": ago(today, 40),
                "end_date": ago(today, 38),
                "location": "Makale"
            },
            {
                "title": {"id": "Festival Toraja", "en": "Toraja Festival"},
                "category": "festival",
                "start_date": in_days(today, 60),
                "location": "Makale",
                "featured": true
            }
        ],
        "culinary": [{
            "name": {"id": "Pa'piong", "en": "Pa'piong"},
            "summary": {"id": "Masakan dalam bambu", "en": "Cooked in bamboo"},
            "category": "food",
            "price_range": "Rp 25.000 - 50.000"
        }],
        "accommodations": [{
            "name": {
                "id": "Toraja Heritage Hotel",
                "en": "Toraja Heritage Hotel"
            },
            "kind": "hotel",
            "address": "Jl. Ke'te' Kesu",
            "price_per_night": 850000,
            "rating": 4.5
        }],
        "articles": [{
            "title": {
                "id": "Mengenal Tongkonan",
                "en": "Getting to Know the Tongkonan"
            },
            "excerpt": {
                "id": "Rumah adat Toraja",
                "en": "The Toraja ancestral house"
            },
            "body": {
                "id": "Tongkonan adalah rumah adat.",
                "en": "The tongkonan is the ancestral house."
            },
            "author": "Redaksi"
        }],
        "legal": [{
            "kind": "privacy",
            "title": {"id": "Kebijakan Privasi", "en": "Privacy Policy"},
            "body": {
                "id": "Kami menghormati privasi Anda.",
                "en": "We respect your privacy."
            }
        }]
    })
}

pub fn build_test_app() -> Result<TestApp> {
    build_test_app_with(&[])
}

pub fn build_test_app_with(vars: &[(&str, &str)]) -> Result<TestApp> {
    let config = test_config(vars)?;
    let seed = SeedData::from_json(&seed_json().to_string())?;
    let weather = Arc::new(FakeWeather::default());
    let provider: Arc<dyn WeatherProvider> = weather.clone();
    let state = build_state_with_provider(config, seed, Some(provider))?;

    let router = create_app(state.clone());
    let server = TestServer::builder()
        .http_transport()
        .build(router.into_make_service())
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;

    Ok(TestApp {
        server,
        state,
        weather,
    })
}
