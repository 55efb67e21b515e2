//! Initial content handed to the store at startup.

use serde::Deserialize;
use toraja_model::{
    Accommodation, Article, ContentDocument, Culinary, Destination, Event,
    LegalPage,
};

use crate::error::Result;

/// Seed document layout, one array per collection. Missing arrays are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub destinations: Vec<Destination>,
    pub events: Vec<Event>,
    pub culinary: Vec<Culinary>,
    pub accommodations: Vec<Accommodation>,
    pub articles: Vec<Article>,
    pub legal: Vec<LegalPage>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Split into documents and legal pages, collections in a fixed order.
    pub fn into_parts(self) -> (Vec<ContentDocument>, Vec<LegalPage>) {
        let documents = self
            .destinations
            .into_iter()
            .map(ContentDocument::from)
            .chain(self.events.into_iter().map(ContentDocument::from))
            .chain(self.culinary.into_iter().map(ContentDocument::from))
            .chain(self.accommodations.into_iter().map(ContentDocument::from))
            .chain(self.articles.into_iter().map(ContentDocument::from))
            .collect();
        (documents, self.legal)
    }
}
