//! Uniform access to every content collection.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::content::{
    Accommodation, Article, Culinary, Destination, Event, GeoPoint,
};
use crate::error::ModelError;
use crate::locale::LocalizedString;
use crate::slug::slugify;

/// Collections managed through the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ContentKind {
    Destination,
    Event,
    Culinary,
    Accommodation,
    Article,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Destination,
        ContentKind::Event,
        ContentKind::Culinary,
        ContentKind::Accommodation,
        ContentKind::Article,
    ];

    /// URL path segment for the collection.
    pub const fn collection(&self) -> &'static str {
        match self {
            ContentKind::Destination => "destinations",
            ContentKind::Event => "events",
            ContentKind::Culinary => "culinary",
            ContentKind::Accommodation => "accommodations",
            ContentKind::Article => "articles",
        }
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

impl FromStr for ContentKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "destinations" | "destination" => Ok(ContentKind::Destination),
            "events" | "event" => Ok(ContentKind::Event),
            "culinary" | "culinaries" => Ok(ContentKind::Culinary),
            "accommodations" | "accommodation" => {
                Ok(ContentKind::Accommodation)
            }
            "articles" | "article" => Ok(ContentKind::Article),
            other => Err(ModelError::UnknownContentKind(other.to_string())),
        }
    }
}

/// Read-only accessors shared by every document type.
pub trait Document {
    const KIND: ContentKind;

    fn uuid(&self) -> Uuid;
    fn slug(&self) -> &str;
    fn title(&self) -> &LocalizedString;
    fn summary(&self) -> &LocalizedString;
    fn images(&self) -> &[String];
    fn updated_at(&self) -> DateTime<Utc>;

    fn is_featured(&self) -> bool {
        false
    }

    fn coordinates(&self) -> Option<GeoPoint> {
        None
    }
}

impl Document for Destination {
    const KIND: ContentKind = ContentKind::Destination;

    fn uuid(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &LocalizedString {
        &self.name
    }

    fn summary(&self) -> &LocalizedString {
        &self.summary
    }

    fn images(&self) -> &[String] {
        &self.images
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }
}

impl Document for Event {
    const KIND: ContentKind = ContentKind::Event;

    fn uuid(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &LocalizedString {
        &self.title
    }

    fn summary(&self) -> &LocalizedString {
        &self.summary
    }

    fn images(&self) -> &[String] {
        &self.images
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }
}

impl Document for Culinary {
    const KIND: ContentKind = ContentKind::Culinary;

    fn uuid(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &LocalizedString {
        &self.name
    }

    fn summary(&self) -> &LocalizedString {
        &self.summary
    }

    fn images(&self) -> &[String] {
        &self.images
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Document for Accommodation {
    const KIND: ContentKind = ContentKind::Accommodation;

    fn uuid(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &LocalizedString {
        &self.name
    }

    fn summary(&self) -> &LocalizedString {
        &self.summary
    }

    fn images(&self) -> &[String] {
        &self.images
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }
}

impl Document for Article {
    const KIND: ContentKind = ContentKind::Article;

    fn uuid(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &LocalizedString {
        &self.title
    }

    fn summary(&self) -> &LocalizedString {
        &self.excerpt
    }

    fn images(&self) -> &[String] {
        self.cover_image.as_slice()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// One document of any collection, as exchanged with the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "data", rename_all = "kebab-case")
)]
pub enum ContentDocument {
    Destination(Destination),
    Event(Event),
    Culinary(Culinary),
    Accommodation(Accommodation),
    Article(Article),
}

macro_rules! dispatch {
    ($value:expr, $doc:ident => $body:expr) => {
        match $value {
            ContentDocument::Destination($doc) => $body,
            ContentDocument::Event($doc) => $body,
            ContentDocument::Culinary($doc) => $body,
            ContentDocument::Accommodation($doc) => $body,
            ContentDocument::Article($doc) => $body,
        }
    };
}

impl ContentDocument {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentDocument::Destination(_) => ContentKind::Destination,
            ContentDocument::Event(_) => ContentKind::Event,
            ContentDocument::Culinary(_) => ContentKind::Culinary,
            ContentDocument::Accommodation(_) => ContentKind::Accommodation,
            ContentDocument::Article(_) => ContentKind::Article,
        }
    }

    pub fn uuid(&self) -> Uuid {
        dispatch!(self, d => d.uuid())
    }

    pub fn slug(&self) -> &str {
        dispatch!(self, d => d.slug())
    }

    pub fn title(&self) -> &LocalizedString {
        dispatch!(self, d => d.title())
    }

    pub fn summary(&self) -> &LocalizedString {
        dispatch!(self, d => d.summary())
    }

    pub fn images(&self) -> &[String] {
        dispatch!(self, d => d.images())
    }

    pub fn is_featured(&self) -> bool {
        dispatch!(self, d => d.is_featured())
    }

    pub fn coordinates(&self) -> Option<GeoPoint> {
        dispatch!(self, d => d.coordinates())
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        dispatch!(self, d => d.updated_at())
    }

    pub fn set_updated_at(&mut self, at: DateTime<Utc>) {
        dispatch!(self, d => d.updated_at = at)
    }

    /// Canonicalize the slug, deriving it from the Indonesian title when
    /// blank.
    pub fn normalize_slug(&mut self) {
        let derived = {
            let current = self.slug();
            if current.trim().is_empty() {
                slugify(&self.title().id)
            } else {
                slugify(current)
            }
        };
        dispatch!(self, d => d.slug = derived)
    }

    /// Check the invariants the admin forms enforce before saving.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title().id.trim().is_empty() {
            return Err(ModelError::InvalidDocument(format!(
                "{} requires an Indonesian title",
                self.kind()
            )));
        }
        if self.slug().is_empty() {
            return Err(ModelError::InvalidDocument(format!(
                "{} requires a slug",
                self.kind()
            )));
        }
        if let Some(point) = self.coordinates() {
            point.validate()?;
        }
        match self {
            ContentDocument::Event(event) => {
                if let Some(end) = event.end_date
                    && end < event.start_date
                {
                    return Err(ModelError::InvalidDocument(format!(
                        "event ends ({end}) before it starts ({})",
                        event.start_date
                    )));
                }
            }
            ContentDocument::Accommodation(stay) => {
                if let Some(rating) = stay.rating
                    && !(0.0..=5.0).contains(&rating)
                {
                    return Err(ModelError::InvalidDocument(format!(
                        "rating {rating} is outside 0-5"
                    )));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl From<Destination> for ContentDocument {
    fn from(value: Destination) -> Self {
        ContentDocument::Destination(value)
    }
}

impl From<Event> for ContentDocument {
    fn from(value: Event) -> Self {
        ContentDocument::Event(value)
    }
}

impl From<Culinary> for ContentDocument {
    fn from(value: Culinary) -> Self {
        ContentDocument::Culinary(value)
    }
}

impl From<Accommodation> for ContentDocument {
    fn from(value: Accommodation) -> Self {
        ContentDocument::Accommodation(value)
    }
}

impl From<Article> for ContentDocument {
    fn from(value: Article) -> Self {
        ContentDocument::Article(value)
    }
}
