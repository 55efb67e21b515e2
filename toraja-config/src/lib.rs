//! Shared configuration library for the Toraja site.
//!
//! Configuration is composed from three layers, highest precedence first:
//! environment variables (optionally seeded from a `.env` file), an optional
//! TOML or JSON site file, and built-in defaults. The server binary applies
//! its command-line overrides on top of the loaded [`Config`].

#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    CarouselOverrides, CarouselSettings, Config, ConfigMetadata, CorsConfig,
    ServerConfig, SiteConfig, WeatherConfig,
};
