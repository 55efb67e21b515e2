use chrono::{DateTime, Utc};
use serde::Serialize;
use toraja_core::carousel::PageDot;
use toraja_core::seo::{PageMeta, document_path};
use toraja_core::weather::WeatherReport;
use toraja_model::{
    Category, ContentDocument, ContentKind, FetchState, GeoPoint, LegalKind,
    LegalPage, Locale, format_date, format_date_range,
};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBadge {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl CategoryBadge {
    pub fn new<C: Category>(category: C, locale: Locale) -> Self {
        Self {
            key: category.as_str(),
            label: category.label(locale),
            icon: category.icon().as_str(),
        }
    }
}

/// Card shown in listings and carousels.
#[derive(Debug, Clone, Serialize)]
pub struct ContentSummary {
    pub id: Uuid,
    pub kind: ContentKind,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub image: Option<String>,
    pub featured: bool,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryBadge>,
    /// Event dates, already formatted for the locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
}

impl ContentSummary {
    pub fn from_document(document: &ContentDocument, locale: Locale) -> Self {
        let (category, dates) = match document {
            ContentDocument::Destination(d) => {
                (Some(CategoryBadge::new(d.category, locale)), None)
            }
            ContentDocument::Event(e) => (
                Some(CategoryBadge::new(e.category, locale)),
                Some(format_date_range(e.start_date, e.end_date, locale)),
            ),
            ContentDocument::Culinary(c) => {
                (Some(CategoryBadge::new(c.category, locale)), None)
            }
            ContentDocument::Accommodation(a) => {
                (Some(CategoryBadge::new(a.kind, locale)), None)
            }
            ContentDocument::Article(_) => (None, None),
        };

        Self {
            id: document.uuid(),
            kind: document.kind(),
            slug: document.slug().to_string(),
            title: document.title().get(locale).to_string(),
            summary: document.summary().get(locale).to_string(),
            image: document.images().first().cloned(),
            featured: document.is_featured(),
            href: document_path(document.kind(), document.slug(), locale),
            category,
            dates,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

fn localized_fact(
    locale: Locale,
    id: &'static str,
    en: &'static str,
    value: String,
) -> Fact {
    let label = match locale {
        Locale::Id => id,
        Locale::En => en,
    };
    Fact { label, value }
}

/// `Rp 15.000`, the way prices are written on the site in both languages.
pub fn format_rupiah(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Full page for one document.
#[derive(Debug, Clone, Serialize)]
pub struct ContentDetail {
    #[serde(flatten)]
    pub summary: ContentSummary,
    pub body: String,
    pub images: Vec<String>,
    pub coordinates: Option<GeoPoint>,
    pub facts: Vec<Fact>,
    pub updated_at: DateTime<Utc>,
    pub meta: PageMeta,
}

impl ContentDetail {
    pub fn new(
        document: &ContentDocument,
        locale: Locale,
        meta: PageMeta,
    ) -> Self {
        let fact = |id, en, value| localized_fact(locale, id, en, value);
        let mut facts = Vec::new();
        let body = match document {
            ContentDocument::Destination(d) => {
                if !d.location.is_empty() {
                    facts.push(fact("Lokasi", "Location", d.location.clone()));
                }
                let price = match d.ticket_price {
                    Some(0) | None => match locale {
                        Locale::Id => "Gratis".to_string(),
                        Locale::En => "Free".to_string(),
                    },
                    Some(price) => format_rupiah(price),
                };
                facts.push(fact("Tiket masuk", "Entrance fee", price));
                if let Some(hours) = &d.opening_hours {
                    let hours = hours.clone();
                    facts.push(fact("Jam buka", "Opening hours", hours));
                }
                d.description.get(locale)
            }
            ContentDocument::Event(e) => {
                facts.push(fact(
                    "Tanggal",
                    "Date",
                    format_date_range(e.start_date, e.end_date, locale),
                ));
                if !e.location.is_empty() {
                    facts.push(fact("Lokasi", "Location", e.location.clone()));
                }
                e.description.get(locale)
            }
            ContentDocument::Culinary(c) => {
                if let Some(range) = &c.price_range {
                    let range = range.clone();
                    facts.push(fact("Kisaran harga", "Price range", range));
                }
                if let Some(place) = &c.where_to_find {
                    facts.push(fact("Tempat", "Where to find", place.clone()));
                }
                c.description.get(locale)
            }
            ContentDocument::Accommodation(a) => {
                facts.push(fact("Alamat", "Address", a.address.clone()));
                if let Some(price) = a.price_per_night {
                    facts.push(fact(
                        "Harga per malam",
                        "Price per night",
                        format_rupiah(price),
                    ));
                }
                if let Some(rating) = a.rating {
                    let rating = format!("{rating:.1}/5");
                    facts.push(fact("Penilaian", "Rating", rating));
                }
                if let Some(contact) = &a.contact {
                    facts.push(fact("Kontak", "Contact", contact.clone()));
                }
                a.description.get(locale)
            }
            ContentDocument::Article(a) => {
                facts.push(fact("Penulis", "Author", a.author.clone()));
                facts.push(fact(
                    "Terbit",
                    "Published",
                    format_date(a.published_at.date_naive(), locale),
                ));
                if !a.tags.is_empty() {
                    facts.push(fact("Tag", "Tags", a.tags.join(", ")));
                }
                a.body.get(locale)
            }
        };

        Self {
            summary: ContentSummary::from_document(document, locale),
            body: body.to_string(),
            images: document.images().to_vec(),
            coordinates: document.coordinates(),
            facts,
            updated_at: document.updated_at(),
            meta,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegalView {
    pub kind: LegalKind,
    pub title: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
    pub updated_label: String,
}

impl LegalView {
    pub fn new(page: &LegalPage, locale: Locale) -> Self {
        Self {
            kind: page.kind,
            title: page.title.get(locale).to_string(),
            body: page.body.get(locale).to_string(),
            updated_at: page.updated_at,
            updated_label: format_date(page.updated_at.date_naive(), locale),
        }
    }
}

/// One rendered page of a carousel.
#[derive(Debug, Clone, Serialize)]
pub struct CarouselWindow {
    pub key: &'static str,
    pub page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub show_controls: bool,
    pub autoplay_interval_ms: u64,
    pub transition_ms: u64,
    pub dots: Vec<PageDot>,
    pub items: Vec<ContentSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherView {
    pub location: String,
    #[serde(flatten)]
    pub state: FetchState<WeatherReport>,
    /// Localized sky condition when a report is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<&'static str>,
}

impl WeatherView {
    pub fn new(
        location: &str,
        state: FetchState<WeatherReport>,
        locale: Locale,
    ) -> Self {
        let condition = state.ready().map(|report| report.sky.label(locale));
        Self {
            location: location.to_string(),
            state,
            condition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_uses_dot_grouping() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(950), "Rp 950");
        assert_eq!(format_rupiah(15_000), "Rp 15.000");
        assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
    }
}
