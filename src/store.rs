//! Collection store for persisting classified feedback
//!
//! The store holds the flat feedback collection and assigns identity; it is
//! injected into the service rather than accessed globally. `load` returns
//! `None` when nothing was ever saved, which triggers demo seeding on first
//! run, and `Some` (possibly empty) afterwards.

use crate::classifier::classify;
use crate::error::Result;
use crate::models::{FeedbackItem, NewFeedback};
use chrono::{Duration, Local};
use std::path::Path;
use std::sync::Mutex;

/// Key under which the serialized collection is stored
pub const STORAGE_KEY: &str = "feedback-dashboard-data";

/// Persistence contract for the feedback collection
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackStore {
    /// Load the persisted collection; `None` when nothing was ever saved
    fn load(&self) -> Result<Option<Vec<FeedbackItem>>>;

    /// Persist the full collection, replacing any previous state
    fn save(&self, items: &[FeedbackItem]) -> Result<()>;

    /// Remove all persisted state, returning the store to its unwritten state
    fn clear(&self) -> Result<()>;
}

/// Sled-backed store keeping the whole collection under a single key
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open (or create) the store at the given directory
    pub fn open(path: &Path) -> Result<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl FeedbackStore for SledStore {
    fn load(&self) -> Result<Option<Vec<FeedbackItem>>> {
        match self.db.get(STORAGE_KEY)? {
            Some(data) => {
                let items: Vec<FeedbackItem> = bincode::deserialize(&data)?;
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    fn save(&self, items: &[FeedbackItem]) -> Result<()> {
        let data = bincode::serialize(items)?;
        self.db.insert(STORAGE_KEY, data)?;
        self.db.flush()?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.db.remove(STORAGE_KEY)?;
        self.db.flush()?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<Option<Vec<FeedbackItem>>>,
}

impl MemoryStore {
    /// Create an unwritten store (first `load` returns `None`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with the given collection
    #[must_use]
    pub fn with_items(items: Vec<FeedbackItem>) -> Self {
        Self {
            items: Mutex::new(Some(items)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Vec<FeedbackItem>>>> {
        self.items
            .lock()
            .map_err(|_| crate::error::FeedbackError::Store("store mutex poisoned".to_string()))
    }
}

impl FeedbackStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<FeedbackItem>>> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, items: &[FeedbackItem]) -> Result<()> {
        *self.lock()? = Some(items.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}

/// Build the demo collection shown on first run
///
/// Texts and metadata come from the original dashboard's seed data; sentiment
/// and tags are derived through the classifier so the derived-field invariant
/// holds for every stored item.
#[must_use]
pub fn demo_feedback() -> Vec<FeedbackItem> {
    let seeds: [(&str, Option<u8>, &str, i64); 8] = [
        (
            "The delivery was fast and the service staff was incredibly polite and helpful!",
            Some(5),
            "Sarah M.",
            7,
        ),
        (
            "Food quality was great but delivery was late by 30 minutes",
            Some(3),
            "John D.",
            6,
        ),
        (
            "The staff was rude and we had to wait way too long. Very disappointed.",
            Some(1),
            "Emily T.",
            5,
        ),
        (
            "Excellent value for money! The pricing is very competitive and the taste is outstanding.",
            Some(5),
            "Mike R.",
            4,
        ),
        (
            "Delivery on time but the food was cold and taste was mediocre",
            Some(2),
            "Lisa K.",
            3,
        ),
        (
            "Great experience overall! Polite staff, tasty food, and fair prices.",
            Some(4),
            "David C.",
            2,
        ),
        (
            "Waited 45 minutes for delivery. Extremely frustrated with the delay.",
            Some(1),
            "Angela P.",
            1,
        ),
        (
            "Perfect order! Everything was fresh and delicious. Will order again!",
            Some(5),
            "Tom B.",
            0,
        ),
    ];

    let now = Local::now();
    seeds
        .iter()
        .enumerate()
        .map(|(i, (text, rating, customer, days_ago))| {
            let classification = classify(text);
            FeedbackItem {
                id: (i + 1).to_string(),
                text: (*text).to_string(),
                rating: *rating,
                customer: (*customer).to_string(),
                date: now - Duration::days(*days_ago),
                sentiment: classification.sentiment,
                tags: classification.tags,
            }
        })
        .collect()
}

/// Create a feedback item from a creation payload and an assigned id
///
/// Classification happens here, atomically with creation; items are never
/// reclassified afterwards.
#[must_use]
pub fn build_item(id: String, new: NewFeedback) -> FeedbackItem {
    let classification = classify(&new.text);
    FeedbackItem {
        id,
        text: new.text.trim().to_string(),
        rating: new.rating,
        customer: new
            .customer
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| "Anonymous".to_string()),
        date: new.date.unwrap_or_else(Local::now),
        sentiment: classification.sentiment,
        tags: classification.tags,
    }
}
