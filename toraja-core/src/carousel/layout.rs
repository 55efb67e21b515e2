//! Viewport width to page size, with optional resize debouncing.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use super::types::CarouselConfig;

#[derive(Debug, Clone)]
pub struct LayoutResolver {
    breakpoint_px: f32,
    desktop: usize,
    mobile: usize,
    debounce: Duration,
    viewport_width: f32,
    items_per_page: usize,
    pending: Option<(f32, Instant)>,
}

impl LayoutResolver {
    pub fn new(config: &CarouselConfig, viewport_width: f32) -> Self {
        let mut resolver = Self {
            breakpoint_px: config.breakpoint_px,
            desktop: config.items_per_page_desktop.max(1),
            mobile: config.items_per_page_mobile.max(1),
            debounce: config.resize_debounce,
            viewport_width,
            items_per_page: 1,
            pending: None,
        };
        resolver.items_per_page = resolver.resolve(viewport_width);
        resolver
    }

    /// Page size for a viewport width.
    pub fn resolve(&self, viewport_width: f32) -> usize {
        if is_narrow(viewport_width, self.breakpoint_px) {
            self.mobile
        } else {
            self.desktop
        }
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn is_narrow(&self) -> bool {
        is_narrow(self.viewport_width, self.breakpoint_px)
    }

    /// Record a resize. Returns the new page size when it changed and no
    /// debounce is configured; otherwise the resize settles later through
    /// [`settle_if_due`](Self::settle_if_due).
    pub fn observe(&mut self, width: f32, now: Instant) -> Option<usize> {
        if self.debounce.is_zero() {
            self.pending = None;
            return self.apply(width);
        }
        self.pending = Some((width, now + self.debounce));
        None
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at)
    }

    pub fn settle_if_due(&mut self, now: Instant) -> Option<usize> {
        match self.pending {
            Some((width, at)) if at <= now => {
                self.pending = None;
                self.apply(width)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn apply(&mut self, width: f32) -> Option<usize> {
        self.viewport_width = width;
        let next = self.resolve(width);
        if next == self.items_per_page {
            return None;
        }
        self.items_per_page = next;
        Some(next)
    }
}

fn is_narrow(width: f32, breakpoint_px: f32) -> bool {
    // NaN widths (unknown viewport) count as narrow.
    !matches!(
        width.partial_cmp(&breakpoint_px),
        Some(Ordering::Greater | Ordering::Equal)
    )
}
