//! Bounded admin activity feed.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use toraja_model::{ContentDocument, ContentKind};
use tracing::warn;
use uuid::Uuid;

pub const DEFAULT_ACTIVITY_CAPACITY: usize = 100;
pub const MAX_ACTIVITY_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Created,
    Updated,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub action: ActivityAction,
    pub kind: ContentKind,
    pub id: Uuid,
    /// Indonesian title at the time of the change.
    pub title: String,
    pub at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn for_document(
        action: ActivityAction,
        document: &ContentDocument,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            action,
            kind: document.kind(),
            id: document.uuid(),
            title: document.title().id.clone(),
            at,
        }
    }
}

/// Newest-first log that forgets the oldest entries past its capacity.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// Capacity is kept within `1..=MAX_ACTIVITY_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity > MAX_ACTIVITY_CAPACITY {
            warn!(
                requested = capacity,
                max = MAX_ACTIVITY_CAPACITY,
                "activity capacity clamped"
            );
        }
        let capacity = capacity.clamp(1, MAX_ACTIVITY_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(
                capacity.min(DEFAULT_ACTIVITY_CAPACITY),
            ),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record(&mut self, entry: ActivityEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    pub fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ACTIVITY_CAPACITY)
    }
}
