//! Metrics collection

use anyhow::Result;
use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Metric names used throughout the application
pub struct MetricsCollector {
    /// Counter of feedback items added (labeled by sentiment)
    pub items_added_total: &'static str,
    /// Counter of items brought in via bulk import
    pub items_imported_total: &'static str,
    /// Counter of export operations (labeled by format)
    pub exports_total: &'static str,
    /// Histogram of classification durations
    pub classification_duration: &'static str,
    /// Gauge tracking the current collection size
    pub collection_size: &'static str,
    /// Counter of errors (labeled by type)
    pub errors_total: &'static str,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self {
            items_added_total: "feedback_dashboard_items_added_total",
            items_imported_total: "feedback_dashboard_items_imported_total",
            exports_total: "feedback_dashboard_exports_total",
            classification_duration: "feedback_dashboard_classification_duration_seconds",
            collection_size: "feedback_dashboard_collection_size",
            errors_total: "feedback_dashboard_errors_total",
        }
    }
}

impl MetricsCollector {
    /// Install the global metrics recorder
    pub fn init() -> Result<()> {
        metrics::set_global_recorder(metrics::NoopRecorder)
            .map_err(|e| anyhow::anyhow!("Failed to initialize metrics recorder: {e}"))?;
        Ok(())
    }

    /// Record a single added feedback item
    pub fn record_item_added(&self, sentiment: &str) {
        counter!(self.items_added_total, "sentiment" => sentiment.to_string()).increment(1);
    }

    /// Record a completed bulk import
    pub fn record_import(&self, count: usize, duration: Duration) {
        counter!(self.items_imported_total).increment(count as u64);
        histogram!("feedback_dashboard_import_duration_seconds").record(duration.as_secs_f64());
    }

    /// Record an export operation
    pub fn record_export(&self, format: &str) {
        counter!(self.exports_total, "format" => format.to_string()).increment(1);
    }

    /// Record how long one classification took
    pub fn record_classification(&self, duration: Duration) {
        histogram!(self.classification_duration).record(duration.as_secs_f64());
    }

    /// Update the collection size gauge
    pub fn update_collection_size(&self, size: usize) {
        gauge!(self.collection_size).set(size as f64);
    }

    /// Record an error
    pub fn record_error(&self, error_type: &str) {
        counter!(self.errors_total, "type" => error_type.to_string()).increment(1);
    }
}
