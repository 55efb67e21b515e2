//! Selections feeding the home page and events page carousels.

use chrono::NaiveDate;
use toraja_model::{
    ContentDocument, ContentKind, Destination, Event, EventCategory,
};

use super::store::ContentStore;
use crate::error::Result;

/// Featured destinations, in store order.
pub fn select_featured_destinations(
    documents: impl IntoIterator<Item = ContentDocument>,
) -> Vec<Destination> {
    documents
        .into_iter()
        .filter_map(|doc| match doc {
            ContentDocument::Destination(d) if d.featured => Some(d),
            _ => None,
        })
        .collect()
}

/// Rambu Solo' ceremonies that have not finished by `today`, soonest first.
pub fn select_upcoming_rambu_solo(
    documents: impl IntoIterator<Item = ContentDocument>,
    today: NaiveDate,
) -> Vec<Event> {
    let mut events: Vec<Event> = documents
        .into_iter()
        .filter_map(|doc| match doc {
            ContentDocument::Event(e)
                if e.category == EventCategory::RambuSolo
                    && e.is_upcoming(today) =>
            {
                Some(e)
            }
            _ => None,
        })
        .collect();
    events.sort_by_key(|e| e.start_date);
    events
}

pub async fn featured_destinations(
    store: &dyn ContentStore,
) -> Result<Vec<Destination>> {
    let documents = store.list(ContentKind::Destination).await?;
    Ok(select_featured_destinations(documents))
}

pub async fn upcoming_rambu_solo(
    store: &dyn ContentStore,
    today: NaiveDate,
) -> Result<Vec<Event>> {
    let documents = store.list(ContentKind::Event).await?;
    Ok(select_upcoming_rambu_solo(documents, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use toraja_model::{
        DestinationCategory, DestinationId, EventId, LocalizedString,
    };

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn event(
        title: &str,
        category: EventCategory,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> ContentDocument {
        Event {
            id: EventId::new(),
            slug: title.to_lowercase(),
            title: LocalizedString::new(title, title),
            summary: LocalizedString::default(),
            description: LocalizedString::default(),
            category,
            start_date: start,
            end_date: end,
            location: String::new(),
            coordinates: None,
            images: Vec::new(),
            featured: false,
            updated_at: Utc::now(),
        }
        .into()
    }

    fn destination(name: &str, featured: bool) -> ContentDocument {
        Destination {
            id: DestinationId::new(),
            slug: name.to_lowercase(),
            name: LocalizedString::new(name, name),
            summary: LocalizedString::default(),
            description: LocalizedString::default(),
            category: DestinationCategory::Nature,
            location: String::new(),
            coordinates: None,
            images: Vec::new(),
            ticket_price: None,
            opening_hours: None,
            featured,
            updated_at: Utc::now(),
        }
        .into()
    }

    #[test]
    fn only_featured_destinations_keep_their_order() {
        let picked = select_featured_destinations([
            destination("Lolai", true),
            destination("Lemo", false),
            destination("Londa", true),
        ]);
        let names: Vec<_> = picked.iter().map(|d| d.name.id.as_str()).collect();
        assert_eq!(names, ["Lolai", "Londa"]);
    }

    #[test]
    fn upcoming_rambu_solo_sorted_by_start() {
        let today = day(8, 10);
        let picked = select_upcoming_rambu_solo(
            [
                event("Late", EventCategory::RambuSolo, day(9, 1), None),
                event("Past", EventCategory::RambuSolo, day(7, 1), None),
                // Started before today but still running.
                event(
                    "Running",
                    EventCategory::RambuSolo,
                    day(8, 8),
                    Some(day(8, 12)),
                ),
                event("Today", EventCategory::RambuSolo, day(8, 10), None),
                event("Wedding", EventCategory::RambuTuka, day(8, 20), None),
            ],
            today,
        );
        let titles: Vec<_> =
            picked.iter().map(|e| e.title.id.as_str()).collect();
        assert_eq!(titles, ["Running", "Today", "Late"]);
    }
}
