//! Shared types for the carousel module

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use crate::error::CoreError;

/// Unique key for identifying carousels throughout the site.
/// Using a strongly-typed key avoids brittle string matching and enables
/// scoped state per carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    /// Home page slider of featured destinations.
    FeaturedDestinations,
    /// Upcoming Rambu Solo' ceremonies on the events page.
    RambuSoloEvents,
    Custom(&'static str),
}

impl CarouselKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CarouselKey::FeaturedDestinations => "featured-destinations",
            CarouselKey::RambuSoloEvents => "rambu-solo",
            CarouselKey::Custom(name) => *name,
        }
    }

    /// Preset configuration for the built-in carousels.
    pub const fn default_config(&self) -> CarouselConfig {
        match self {
            CarouselKey::FeaturedDestinations => {
                CarouselConfig::featured_destinations()
            }
            CarouselKey::RambuSoloEvents => CarouselConfig::rambu_solo_events(),
            CarouselKey::Custom(_) => CarouselConfig::featured_destinations(),
        }
    }
}

impl Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarouselKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured-destinations" => Ok(CarouselKey::FeaturedDestinations),
            "rambu-solo" | "rambu-solo-events" => {
                Ok(CarouselKey::RambuSoloEvents)
            }
            other => {
                Err(CoreError::NotFound(format!("carousel '{other}'")))
            }
        }
    }
}

/// A navigation request gated by the transition lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
    /// Dot click: jump straight to a page.
    JumpTo(usize),
}

/// Notifications produced while the carousel is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    PageChanged { page: usize, total_pages: usize },
    LayoutChanged { items_per_page: usize, total_pages: usize },
}

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub items_per_page_desktop: usize,
    pub items_per_page_mobile: usize,
    /// Viewport widths below this use the mobile page size.
    pub breakpoint_px: f32,
    pub autoplay_interval_desktop: Duration,
    pub autoplay_interval_mobile: Duration,
    /// Length of one slide animation; navigation is locked for this long.
    pub transition_duration: Duration,
    /// Quiet period before a resize is applied. Zero applies immediately.
    pub resize_debounce: Duration,
}

impl CarouselConfig {
    pub const fn featured_destinations() -> Self {
        Self {
            items_per_page_desktop: 4,
            items_per_page_mobile: 1,
            breakpoint_px: 768.0,
            autoplay_interval_desktop: Duration::from_millis(5000),
            autoplay_interval_mobile: Duration::from_millis(3000),
            transition_duration: Duration::from_millis(500),
            resize_debounce: Duration::from_millis(150),
        }
    }

    pub const fn rambu_solo_events() -> Self {
        Self {
            items_per_page_desktop: 3,
            items_per_page_mobile: 1,
            breakpoint_px: 1024.0,
            autoplay_interval_desktop: Duration::from_millis(6000),
            autoplay_interval_mobile: Duration::from_millis(4000),
            transition_duration: Duration::from_millis(500),
            resize_debounce: Duration::from_millis(150),
        }
    }

    /// Page sizes of zero would make every page empty; clamp them to one.
    pub fn sanitized(mut self) -> Self {
        self.items_per_page_desktop = self.items_per_page_desktop.max(1);
        self.items_per_page_mobile = self.items_per_page_mobile.max(1);
        if !self.breakpoint_px.is_finite() || self.breakpoint_px < 0.0 {
            self.breakpoint_px = 0.0;
        }
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::featured_destinations()
    }
}
