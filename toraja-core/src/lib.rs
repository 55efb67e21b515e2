//! # Toraja Core
//!
//! Business logic for the Tana Toraja tourism site.
//!
//! - [`carousel`]: the slide rotation engine behind the featured destinations
//!   and Rambu Solo' sliders, plus a tokio driver for live carousels.
//! - [`content`]: the content store trait, its in-memory implementation,
//!   seed loading, admin activity, and curated selections.
//! - [`seo`]: page titles, descriptions, canonical URLs, and `hreflang`
//!   alternates.
//! - [`weather`]: the one-shot weather panel and its Open-Meteo provider.
//!
//! ## Examples
//!
//! ```
//! use std::time::Instant;
//! use toraja_core::carousel::{Carousel, CarouselConfig};
//!
//! let now = Instant::now();
//! let config = CarouselConfig::featured_destinations();
//! let mut carousel = Carousel::mount(config, 9, 1280.0, now);
//! assert_eq!(carousel.total_pages(), 3);
//! assert_eq!(carousel.visible_indices(), vec![0, 1, 2, 3]);
//!
//! carousel.prev(now);
//! assert_eq!(carousel.current_page(), 2);
//! assert_eq!(carousel.visible_indices(), vec![8, 0, 1, 2]);
//! ```
#![allow(missing_docs)]

pub mod carousel;
pub mod content;
pub mod error;
pub mod seo;
pub mod weather;

pub use error::{CoreError, Result, WeatherError};

/// Common imports for server code.
pub mod prelude {
    pub use crate::carousel::{
        Carousel, CarouselConfig, CarouselKey, CarouselView, Direction,
    };
    pub use crate::content::{
        ActivityEntry, ContentStore, InMemoryContentStore, SeedData,
    };
    pub use crate::error::{CoreError, Result};
    pub use crate::seo::PageMeta;
    pub use crate::weather::{WeatherPanel, WeatherProvider, WeatherReport};
    pub use toraja_model::prelude::*;
}
