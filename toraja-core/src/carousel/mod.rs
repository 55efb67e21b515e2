//! Carousel engine.
//!
//! A carousel pages through a fixed list of items, a few per page, wrapping
//! around at both ends. Navigation is gated by a transition lock, pages
//! advance on their own while nobody hovers or touches the carousel, and the
//! page size follows the viewport width once resizes settle.
//!
//! [`controller::Carousel`] is the synchronous state machine. Everything
//! time-based is expressed as deadlines that the caller fires via
//! [`controller::Carousel::tick`]; [`driver::spawn_carousel`] does that on a
//! tokio task for callers that want a live carousel.

pub mod autoplay;
pub mod controller;
pub mod cycle;
pub mod driver;
pub mod layout;
pub mod lock;
pub mod registry;
pub mod types;
pub mod view;

pub use controller::{Carousel, CarouselState};
pub use driver::{CarouselCommand, CarouselHandle, spawn_carousel};
pub use registry::CarouselRegistry;
pub use types::{CarouselConfig, CarouselEvent, CarouselKey, Direction};
pub use view::{CarouselView, PageDot};
