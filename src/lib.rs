//! Feedback Dashboard - Sentiment Analytics
//!
//! A Rust library for classifying short free-text feedback by sentiment and
//! theme, and aggregating classified collections into summary statistics,
//! KPIs, and recommended remediation actions.
//!
//! # Features
//!
//! - Lexicon-based sentiment classification and theme extraction
//! - Sentiment distribution, top-theme rankings, KPIs, and action items
//! - Local persistence in an embedded key-value store
//! - Bulk CSV import and TXT/CSV/JSON export
//! - Plain-text analysis report generation

/// Aggregation of classified feedback into derived views
pub mod aggregator;
/// Sentiment and theme classification
pub mod classifier;
/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// Bulk CSV import
pub mod import;
/// Static lexicon tables
pub mod lexicon;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// Report rendering and export
pub mod report;
/// Feedback service orchestration
pub mod service;
/// Collection store implementations
pub mod store;
/// Input validation and sanitization
pub mod validation;

// Re-export key components for easier access
pub use classifier::{analyze_sentiment, classify, extract_themes};
pub use error::{FeedbackError, Result};
pub use models::{FeedbackItem, NewFeedback, OutputFormat, Sentiment, Theme};
pub use service::FeedbackService;
pub use store::{FeedbackStore, MemoryStore, SledStore};
