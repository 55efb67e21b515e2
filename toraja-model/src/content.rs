//! Content documents published on the site.

use chrono::{DateTime, NaiveDate, Utc};

use crate::category::{
    AccommodationKind, CulinaryCategory, DestinationCategory, EventCategory,
};
use crate::error::ModelError;
use crate::ids::{
    AccommodationId, ArticleId, CulinaryId, DestinationId, EventId,
};
use crate::locale::LocalizedString;

/// WGS84 coordinate used for map embeds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, ModelError> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lng_ok =
            self.lng.is_finite() && (-180.0..=180.0).contains(&self.lng);
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(ModelError::InvalidCoordinates {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: DestinationId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: String,
    pub name: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: LocalizedString,
    pub category: DestinationCategory,
    /// District (kecamatan) the destination sits in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub coordinates: Option<GeoPoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<String>,
    /// Entrance fee in rupiah.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ticket_price: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub opening_hours: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: EventId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: String,
    pub title: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: LocalizedString,
    pub category: EventCategory,
    pub start_date: NaiveDate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_date: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub coordinates: Option<GeoPoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Last day of the event; single-day events end on their start date.
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.last_day() >= today
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Culinary {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: CulinaryId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: String,
    pub name: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: LocalizedString,
    pub category: CulinaryCategory,
    /// Free-form price range such as "Rp 25.000 - 50.000".
    #[cfg_attr(feature = "serde", serde(default))]
    pub price_range: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub where_to_find: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accommodation {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: AccommodationId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: String,
    pub name: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: LocalizedString,
    pub kind: AccommodationKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Starting nightly rate in rupiah.
    #[cfg_attr(feature = "serde", serde(default))]
    pub price_per_night: Option<u32>,
    /// Guest rating out of 5.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contact: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub coordinates: Option<GeoPoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Article {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: ArticleId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: String,
    pub title: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub excerpt: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cover_image: Option<String>,
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub published_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegalKind {
    Privacy,
    Terms,
}

impl LegalKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LegalKind::Privacy => "privacy",
            LegalKind::Terms => "terms",
        }
    }
}

impl std::str::FromStr for LegalKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "privacy" | "privacy-policy" => Ok(LegalKind::Privacy),
            "terms" | "terms-of-service" => Ok(LegalKind::Terms),
            other => Err(ModelError::UnknownContentKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegalPage {
    pub kind: LegalKind,
    pub title: LocalizedString,
    pub body: LocalizedString,
    #[cfg_attr(feature = "serde", serde(default = "Utc::now"))]
    pub updated_at: DateTime<Utc>,
}
