//! Content persistence behind a trait, with an in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use toraja_model::{ContentDocument, ContentKind, LegalKind, LegalPage};
use tracing::{debug, info};
use uuid::Uuid;

use super::activity::{ActivityAction, ActivityEntry, ActivityLog};
use super::seed::SeedData;
use crate::error::{CoreError, Result};

/// Read and write access to the site's content collections.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Every document of `kind`, in store order.
    async fn list(&self, kind: ContentKind) -> Result<Vec<ContentDocument>>;

    async fn get_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<ContentDocument>;

    /// Create or replace a document by id. Returns the stored document with
    /// its canonical slug and fresh `updated_at`, together with whether the
    /// write created or replaced it.
    async fn upsert(&self, document: ContentDocument) -> Result<Upserted>;

    /// Remove a document and return it.
    async fn delete(&self, kind: ContentKind, id: Uuid)
    -> Result<ContentDocument>;

    async fn legal_page(&self, kind: LegalKind) -> Result<LegalPage>;

    /// Most recent admin changes, newest first.
    async fn activity(&self, limit: usize) -> Result<Vec<ActivityEntry>>;
}

/// Outcome of [`ContentStore::upsert`].
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted {
    pub document: ContentDocument,
    pub action: ActivityAction,
}

impl Upserted {
    pub fn created(&self) -> bool {
        self.action == ActivityAction::Created
    }
}

#[derive(Debug, Default)]
struct Collections {
    documents: HashMap<ContentKind, Vec<ContentDocument>>,
    legal: HashMap<LegalKind, LegalPage>,
    activity: ActivityLog,
}

impl Collections {
    fn collection(&self, kind: ContentKind) -> &[ContentDocument] {
        self.documents.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Normalize, validate, and check slug uniqueness within the collection.
    fn prepare(
        &self,
        mut document: ContentDocument,
    ) -> Result<ContentDocument> {
        document.normalize_slug();
        document
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        let id = document.uuid();
        let taken = self
            .collection(document.kind())
            .iter()
            .any(|other| other.slug() == document.slug() && other.uuid() != id);
        if taken {
            return Err(CoreError::Conflict(format!(
                "{} slug '{}' is already in use",
                document.kind(),
                document.slug()
            )));
        }
        Ok(document)
    }

    /// Insert or replace in place. Returns true when the id already existed.
    fn put(&mut self, document: ContentDocument) -> bool {
        let entries = self.documents.entry(document.kind()).or_default();
        match entries.iter_mut().find(|d| d.uuid() == document.uuid()) {
            Some(slot) => {
                *slot = document;
                true
            }
            None => {
                entries.push(document);
                false
            }
        }
    }
}

/// Store backed by process memory. Suitable for a single server instance
/// seeded from a JSON file.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    inner: RwLock<Collections>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load seed content. Seeding does not touch the activity log.
    pub fn from_seed(seed: SeedData) -> Result<Self> {
        Self::from_seed_with_capacity(
            seed,
            super::activity::DEFAULT_ACTIVITY_CAPACITY,
        )
    }

    pub fn from_seed_with_capacity(
        seed: SeedData,
        activity_capacity: usize,
    ) -> Result<Self> {
        let (documents, legal) = seed.into_parts();
        let mut collections = Collections {
            activity: ActivityLog::with_capacity(activity_capacity),
            ..Collections::default()
        };

        for document in documents {
            let document = collections.prepare(document)?;
            collections.put(document);
        }
        for page in legal {
            collections.legal.insert(page.kind, page);
        }

        let documents: usize =
            collections.documents.values().map(Vec::len).sum();
        info!(
            documents,
            legal_pages = collections.legal.len(),
            "content store seeded"
        );
        Ok(Self {
            inner: RwLock::new(collections),
        })
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn list(&self, kind: ContentKind) -> Result<Vec<ContentDocument>> {
        Ok(self.inner.read().collection(kind).to_vec())
    }

    async fn get_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<ContentDocument> {
        self.inner
            .read()
            .collection(kind)
            .iter()
            .find(|d| d.slug() == slug)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("{kind} '{slug}'")))
    }

    async fn upsert(&self, document: ContentDocument) -> Result<Upserted> {
        let mut inner = self.inner.write();
        let mut document = inner.prepare(document)?;
        let now = Utc::now();
        document.set_updated_at(now);

        let replaced = inner.put(document.clone());
        let action = if replaced {
            ActivityAction::Updated
        } else {
            ActivityAction::Created
        };
        inner
            .activity
            .record(ActivityEntry::for_document(action, &document, now));

        debug!(
            kind = %document.kind(),
            slug = document.slug(),
            ?action,
            "content saved"
        );
        Ok(Upserted { document, action })
    }

    async fn delete(
        &self,
        kind: ContentKind,
        id: Uuid,
    ) -> Result<ContentDocument> {
        let mut inner = self.inner.write();
        let entries = inner
            .documents
            .get_mut(&kind)
            .ok_or_else(|| CoreError::NotFound(format!("{kind} {id}")))?;
        let position = entries
            .iter()
            .position(|d| d.uuid() == id)
            .ok_or_else(|| CoreError::NotFound(format!("{kind} {id}")))?;
        let removed = entries.remove(position);

        inner.activity.record(ActivityEntry::for_document(
            ActivityAction::Deleted,
            &removed,
            Utc::now(),
        ));
        debug!(%kind, %id, "content deleted");
        Ok(removed)
    }

    async fn legal_page(&self, kind: LegalKind) -> Result<LegalPage> {
        self.inner
            .read()
            .legal
            .get(&kind)
            .cloned()
            .ok_or_else(|| {
                CoreError::NotFound(format!("legal page '{}'", kind.as_str()))
            })
    }

    async fn activity(&self, limit: usize) -> Result<Vec<ActivityEntry>> {
        Ok(self.inner.read().activity.recent(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use toraja_model::{
        Destination, DestinationCategory, DestinationId, Event, EventCategory,
        EventId, GeoPoint, LocalizedString,
    };

    fn destination(name: &str) -> Destination {
        Destination {
            id: DestinationId::new(),
            slug: String::new(),
            name: LocalizedString::new(name, name),
            summary: LocalizedString::default(),
            description: LocalizedString::default(),
            category: DestinationCategory::Heritage,
            location: "Sanggalangi".into(),
            coordinates: None,
            images: Vec::new(),
            ticket_price: None,
            opening_hours: None,
            featured: false,
            updated_at: Utc::now(),
        }
    }

    fn seeded() -> InMemoryContentStore {
        let seed = SeedData {
            destinations: vec![destination("Kete Kesu"), destination("Lemo")],
            legal: vec![LegalPage {
                kind: LegalKind::Privacy,
                title: LocalizedString::new(
                    "Kebijakan Privasi",
                    "Privacy Policy",
                ),
                body: LocalizedString::new("...", "..."),
                updated_at: Utc::now(),
            }],
            ..SeedData::default()
        };
        InMemoryContentStore::from_seed(seed).unwrap()
    }

    #[tokio::test]
    async fn seed_derives_slugs_and_keeps_order() {
        let store = seeded();
        let slugs: Vec<_> = store
            .list(ContentKind::Destination)
            .await
            .unwrap()
            .iter()
            .map(|d| d.slug().to_string())
            .collect();
        assert_eq!(slugs, ["kete-kesu", "lemo"]);
        assert!(store.activity(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upsert_creates_then_updates() {
        let store = seeded();
        let mut doc = destination("Batutumonga");
        let saved = store.upsert(doc.clone().into()).await.unwrap();
        assert_eq!(saved.document.slug(), "batutumonga");
        assert!(saved.created());

        doc.summary = LocalizedString::new("Negeri di atas awan", "");
        let replaced = store.upsert(doc.into()).await.unwrap();
        assert_eq!(replaced.action, ActivityAction::Updated);

        let found = store
            .get_by_slug(ContentKind::Destination, "batutumonga")
            .await
            .unwrap();
        assert_eq!(found.summary().id, "Negeri di atas awan");
        let destinations = store.list(ContentKind::Destination).await.unwrap();
        assert_eq!(destinations.len(), 3);

        let actions: Vec<_> = store
            .activity(10)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.action)
            .collect();
        assert_eq!(actions, [ActivityAction::Updated, ActivityAction::Created]);
    }

    #[tokio::test]
    async fn slug_taken_by_another_document_conflicts() {
        let store = seeded();
        let mut clash = destination("Another");
        clash.slug = "Kete Kesu".into();

        let err = store.upsert(clash.into()).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn invalid_documents_are_rejected() {
        let store = seeded();
        let mut bad = destination("Bori Kalimbuang");
        bad.coordinates = Some(GeoPoint { lat: 120.0, lng: 0.0 });
        let err = store.upsert(bad.into()).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let event = Event {
            id: EventId::new(),
            slug: String::new(),
            title: LocalizedString::new("Rambu Solo' Ne' Lai", ""),
            summary: LocalizedString::default(),
            description: LocalizedString::default(),
            category: EventCategory::RambuSolo,
            start_date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 18),
            location: String::new(),
            coordinates: None,
            images: Vec::new(),
            featured: false,
            updated_at: Utc::now(),
        };
        let err = store.upsert(event.into()).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.activity(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_and_logs() {
        let store = seeded();
        let lemo = store
            .get_by_slug(ContentKind::Destination, "lemo")
            .await
            .unwrap();

        let removed = store
            .delete(ContentKind::Destination, lemo.uuid())
            .await
            .unwrap();
        assert_eq!(removed.slug(), "lemo");
        assert!(
            store
                .get_by_slug(ContentKind::Destination, "lemo")
                .await
                .is_err()
        );

        let log = store.activity(1).await.unwrap();
        assert_eq!(log[0].action, ActivityAction::Deleted);
        assert_eq!(log[0].title, "Lemo");

        let again = store.delete(ContentKind::Destination, lemo.uuid()).await;
        assert!(matches!(again, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn legal_pages_are_looked_up_by_kind() {
        let store = seeded();
        let privacy = store.legal_page(LegalKind::Privacy).await.unwrap();
        assert_eq!(privacy.title.en, "Privacy Policy");
        assert!(matches!(
            store.legal_page(LegalKind::Terms).await,
            Err(CoreError::NotFound(_))
        ));
    }
}
