//! Registry for managing multiple carousel states keyed by CarouselKey

use std::collections::HashMap;
use std::time::Instant;

use super::controller::Carousel;
use super::types::{CarouselEvent, CarouselKey};

#[derive(Debug, Default)]
pub struct CarouselRegistry {
    carousels: HashMap<CarouselKey, Carousel>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a mutable reference, mounting a new carousel with the provided
    /// factory when absent.
    pub fn get_or_mount<F>(
        &mut self,
        key: CarouselKey,
        mount: F,
    ) -> &mut Carousel
    where
        F: FnOnce() -> Carousel,
    {
        self.carousels.entry(key).or_insert_with(mount)
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel> {
        self.carousels.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel> {
        self.carousels.get_mut(key)
    }

    /// Unmount and drop a carousel, cancelling its timers.
    pub fn unmount(&mut self, key: &CarouselKey) -> bool {
        match self.carousels.remove(key) {
            Some(mut carousel) => {
                carousel.unmount();
                true
            }
            None => false,
        }
    }

    pub fn unmount_all(&mut self) {
        for (_, mut carousel) in self.carousels.drain() {
            carousel.unmount();
        }
    }

    /// Propagate a viewport change to every carousel on the page.
    pub fn resize_all(&mut self, viewport_width: f32, now: Instant) {
        for carousel in self.carousels.values_mut() {
            carousel.resize(viewport_width, now);
        }
    }

    pub fn tick_all(
        &mut self,
        now: Instant,
    ) -> Vec<(CarouselKey, CarouselEvent)> {
        let mut events = Vec::new();
        for (key, carousel) in self.carousels.iter_mut() {
            events.extend(
                carousel.tick(now).into_iter().map(|event| (*key, event)),
            );
        }
        events
    }

    /// Earliest timer across every carousel.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.carousels
            .values()
            .filter_map(Carousel::next_deadline)
            .min()
    }

    /// Return a snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.carousels.keys().copied().collect()
    }
}
