//! Presentation focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! building page view models.

pub use super::category::{
    AccommodationKind, Category, CulinaryCategory, DestinationCategory,
    EventCategory, Icon,
};
pub use super::content::{
    Accommodation, Article, Culinary, Destination, Event, GeoPoint, LegalKind,
    LegalPage,
};
pub use super::dates::{format_date, format_date_range};
pub use super::document::{ContentDocument, ContentKind, Document};
pub use super::fetch::FetchState;
pub use super::locale::{Locale, LocalizedString};
