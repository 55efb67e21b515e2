//! Compose the visible window of a carousel over a borrowed item slice.

use serde::Serialize;

use super::controller::Carousel;
use super::cycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDot {
    pub page: usize,
    pub active: bool,
}

/// What the page template renders for one carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a, T> {
    pub items: Vec<&'a T>,
    pub dots: Vec<PageDot>,
    pub show_controls: bool,
    pub current_page: usize,
    pub total_pages: usize,
}

impl<'a, T> CarouselView<'a, T> {
    /// `None` when there is nothing to show; the section is omitted entirely.
    pub fn compose(carousel: &Carousel, items: &'a [T]) -> Option<Self> {
        if items.is_empty() || !carousel.is_mounted() {
            return None;
        }

        let per_page = carousel.items_per_page();
        let total_pages = cycle::total_pages(items.len(), per_page);
        let current_page = cycle::wrap(carousel.raw_index(), total_pages);
        let show_controls = total_pages > 1;

        let visible = cycle::visible_window(
            current_page as isize,
            per_page,
            items.len(),
        )
        .into_iter()
        .map(|idx| &items[idx])
        .collect();

        let dots = if show_controls {
            (0..total_pages)
                .map(|page| PageDot {
                    page,
                    active: page == current_page,
                })
                .collect()
        } else {
            Vec::new()
        };

        Some(Self {
            items: visible,
            dots,
            show_controls,
            current_page,
            total_pages,
        })
    }

    /// Detail-page links for the visible items, built by the caller's router.
    pub fn links<F>(&self, url_for: F) -> Vec<String>
    where
        F: Fn(&T) -> String,
    {
        self.items.iter().map(|item| url_for(*item)).collect()
    }

    pub fn map<U, F>(&self, f: F) -> Vec<U>
    where
        F: Fn(&T) -> U,
    {
        self.items.iter().map(|item| f(*item)).collect()
    }
}
