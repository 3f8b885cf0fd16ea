//! Feedback service: orchestration over the store, classifier, and aggregator
//!
//! Owns the in-memory collection and an injected store. Items are classified
//! atomically with creation, assigned an identifier here (never by the
//! classifier), appended, and persisted. The only destructive operation is
//! clear-all; there is no partial update or soft-delete.

use crate::aggregator;
use crate::error::Result;
use crate::import::{parse_csv, ImportRecord};
use crate::metrics::MetricsCollector;
use crate::models::{
    ActionItem, FeedbackItem, KpiSummary, NewFeedback, Sentiment, SentimentStats, ThemeCount,
};
use crate::store::{build_item, demo_feedback, FeedbackStore};
use crate::validation::InputValidator;
use chrono::Local;
use std::io::Read;
use std::time::Instant;
use tracing::{debug, info};

/// Orchestrates feedback creation, import, persistence, and derived views
pub struct FeedbackService {
    store: Box<dyn FeedbackStore>,
    items: Vec<FeedbackItem>,
    metrics: MetricsCollector,
}

impl FeedbackService {
    /// Load the collection from the store, seeding demo data on first run
    ///
    /// A store that has never been written (`load` returns `None`) is seeded
    /// with the demo collection; a cleared-but-saved store stays empty.
    pub fn new(store: Box<dyn FeedbackStore>) -> Result<Self> {
        let items = match store.load()? {
            Some(items) => items,
            None => {
                info!("No stored feedback found, seeding demo data");
                let demo = demo_feedback();
                store.save(&demo)?;
                demo
            }
        };

        let metrics = MetricsCollector::default();
        metrics.update_collection_size(items.len());

        Ok(Self {
            store,
            items,
            metrics,
        })
    }

    /// The current collection, in insertion order
    #[must_use]
    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    /// Validate, classify, and persist one new feedback item
    pub fn add_feedback(&mut self, new: NewFeedback) -> Result<FeedbackItem> {
        InputValidator::validate_feedback_text(&new.text)?;
        InputValidator::validate_rating(new.rating)?;
        if let Some(customer) = &new.customer {
            InputValidator::validate_customer_name(customer)?;
        }

        let started = Instant::now();
        let item = build_item(self.next_id(), new);
        self.metrics.record_classification(started.elapsed());

        debug!(
            id = %item.id,
            sentiment = %item.sentiment,
            tags = item.tags.len(),
            "Classified feedback item"
        );

        self.items.push(item.clone());
        self.store.save(&self.items)?;

        self.metrics.record_item_added(item.sentiment.as_str());
        self.metrics.update_collection_size(self.items.len());

        Ok(item)
    }

    /// Bulk-import feedback from CSV, one record at a time through the same
    /// classification path as manual entry
    ///
    /// Returns the number of items added. The collection is persisted once,
    /// after the whole batch.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let started = Instant::now();
        let records = parse_csv(reader)?;
        let mut added = 0;

        for ImportRecord {
            text,
            rating,
            customer,
        } in records
        {
            if InputValidator::validate_feedback_text(&text).is_err() {
                continue;
            }
            let item = build_item(
                self.next_id(),
                NewFeedback {
                    text,
                    rating,
                    customer,
                    date: None,
                },
            );
            self.metrics.record_item_added(item.sentiment.as_str());
            self.items.push(item);
            added += 1;
        }

        if added > 0 {
            self.store.save(&self.items)?;
        }

        self.metrics.record_import(added, started.elapsed());
        self.metrics.update_collection_size(self.items.len());
        info!(added, "Imported feedback from CSV");

        Ok(added)
    }

    /// Remove every item, persisting the empty collection
    pub fn clear_all(&mut self) -> Result<()> {
        self.items.clear();
        self.store.save(&self.items)?;
        self.metrics.update_collection_size(0);
        info!("Cleared all feedback");
        Ok(())
    }

    /// Reset the store to its unwritten state (demo data reappears next run)
    pub fn purge(&mut self) -> Result<()> {
        self.items.clear();
        self.store.clear()?;
        self.metrics.update_collection_size(0);
        info!("Purged feedback store");
        Ok(())
    }

    /// Sentiment distribution; errors on an empty collection
    pub fn sentiment_stats(&self) -> Result<SentimentStats> {
        aggregator::calculate_sentiment_stats(&self.items)
    }

    /// Top themes, optionally restricted to one sentiment
    #[must_use]
    pub fn top_themes(&self, sentiment: Option<Sentiment>) -> Vec<ThemeCount> {
        aggregator::extract_top_themes(&self.items, sentiment)
    }

    /// Key performance indicators
    #[must_use]
    pub fn kpis(&self) -> KpiSummary {
        aggregator::calculate_kpis(&self.items)
    }

    /// Ranked remediation actions for the top negative themes
    #[must_use]
    pub fn action_items(&self) -> Vec<ActionItem> {
        aggregator::get_action_items(&self.items)
    }

    /// Next unique identifier: millisecond timestamp, bumped on collision
    fn next_id(&self) -> String {
        let mut candidate = Local::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !self.items.iter().any(|item| item.id == id) {
                return id;
            }
            candidate += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockFeedbackStore;

    #[test]
    fn test_seeds_demo_data_on_unwritten_store() {
        let mut store = MockFeedbackStore::new();
        store.expect_load().times(1).returning(|| Ok(None));
        store
            .expect_save()
            .times(1)
            .withf(|items: &[FeedbackItem]| items.len() == 8)
            .returning(|_| Ok(()));

        let service = FeedbackService::new(Box::new(store)).unwrap();
        assert_eq!(service.items().len(), 8);
    }

    #[test]
    fn test_respects_saved_empty_collection() {
        let mut store = MockFeedbackStore::new();
        store
            .expect_load()
            .times(1)
            .returning(|| Ok(Some(Vec::new())));
        store.expect_save().times(0);

        let service = FeedbackService::new(Box::new(store)).unwrap();
        assert!(service.items().is_empty());
    }

    #[test]
    fn test_add_feedback_persists() {
        let mut store = MockFeedbackStore::new();
        store
            .expect_load()
            .returning(|| Ok(Some(Vec::new())));
        store
            .expect_save()
            .times(1)
            .withf(|items: &[FeedbackItem]| items.len() == 1)
            .returning(|_| Ok(()));

        let mut service = FeedbackService::new(Box::new(store)).unwrap();
        let item = service
            .add_feedback(NewFeedback {
                text: "Excellent service and fast delivery!".to_string(),
                rating: Some(5),
                customer: None,
                date: None,
            })
            .unwrap();
        assert_eq!(item.sentiment, Sentiment::Positive);
        assert_eq!(item.customer, "Anonymous");
    }

    #[test]
    fn test_add_feedback_rejects_invalid_rating() {
        let mut store = MockFeedbackStore::new();
        store
            .expect_load()
            .returning(|| Ok(Some(Vec::new())));
        store.expect_save().times(0);

        let mut service = FeedbackService::new(Box::new(store)).unwrap();
        let result = service.add_feedback(NewFeedback {
            text: "fine".to_string(),
            rating: Some(9),
            customer: None,
            date: None,
        });
        assert!(result.is_err());
        assert!(service.items().is_empty());
    }
}
