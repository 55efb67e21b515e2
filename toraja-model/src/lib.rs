//! Core data model definitions shared across Toraja crates.
#![allow(missing_docs)]

pub mod category;
pub mod content;
pub mod dates;
pub mod document;
pub mod error;
pub mod fetch;
pub mod ids;
pub mod locale;
pub mod prelude;
pub mod slug;

// Intentionally curated re-exports for downstream consumers.
pub use category::{
    AccommodationKind, Category, CulinaryCategory, DestinationCategory,
    EventCategory, Icon,
};
pub use content::{
    Accommodation, Article, Culinary, Destination, Event, GeoPoint, LegalKind,
    LegalPage,
};
pub use dates::{format_date, format_date_range};
pub use document::{ContentDocument, ContentKind, Document};
pub use error::{ModelError, Result as ModelResult};
pub use fetch::FetchState;
pub use ids::{AccommodationId, ArticleId, CulinaryId, DestinationId, EventId};
pub use locale::{Locale, LocalizedString};
pub use slug::slugify;
