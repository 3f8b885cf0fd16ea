//! Data models for feedback items and derived views
//!
//! This module contains all data structures used throughout the application:
//! feedback items, the sentiment and theme vocabularies, and the read-only
//! view structures computed by the aggregator.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse three-way polarity label assigned to a feedback text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive than negative indicators matched
    Positive,
    /// More negative than positive indicators matched
    Negative,
    /// No indicators matched, or an exact balance
    Neutral,
}

impl Sentiment {
    /// Get the lowercase label for this sentiment
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topical category assignable to feedback text via keyword presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Delivery speed and punctuality
    Delivery,
    /// Staff and customer service
    Service,
    /// Taste and flavor of the food
    Taste,
    /// Price and value for money
    Pricing,
    /// Product quality and condition
    Quality,
    /// Waiting and queue times
    WaitTime,
}

impl Theme {
    /// Get the snake_case identifier for this theme
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::Service => "service",
            Self::Taste => "taste",
            Self::Pricing => "pricing",
            Self::Quality => "quality",
            Self::WaitTime => "wait_time",
        }
    }

    /// Get a human-readable name (underscores replaced with spaces)
    #[must_use]
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feedback item, the unit of analysis
///
/// `sentiment` and `tags` are derived from `text` exactly once, at creation
/// time; items are immutable afterwards. `id` is assigned by the collection
/// store, never by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Opaque unique identifier assigned by the store
    pub id: String,
    /// Raw feedback text, non-empty
    pub text: String,
    /// Optional star rating in [1,5]
    pub rating: Option<u8>,
    /// Customer display name ("Anonymous" when not supplied)
    pub customer: String,
    /// Timestamp of submission
    pub date: DateTime<Local>,
    /// Derived sentiment label
    pub sentiment: Sentiment,
    /// Derived theme tags; set semantics, each theme appears at most once
    pub tags: Vec<Theme>,
}

/// Payload for creating a new feedback item, before classification
#[derive(Debug, Clone, Default)]
pub struct NewFeedback {
    /// Raw feedback text
    pub text: String,
    /// Optional star rating in [1,5]
    pub rating: Option<u8>,
    /// Customer display name (defaults to "Anonymous")
    pub customer: Option<String>,
    /// Submission timestamp (defaults to now)
    pub date: Option<DateTime<Local>>,
}

/// Classifier output for a single text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Derived sentiment label
    pub sentiment: Sentiment,
    /// Derived theme tags, deduplicated by construction
    pub tags: Vec<Theme>,
}

/// A theme with its occurrence count, one row of a theme ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCount {
    /// The theme
    pub theme: Theme,
    /// Number of items tagged with the theme
    pub count: usize,
}

/// Sentiment distribution over a non-empty collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentStats {
    /// Total number of items
    pub total: usize,
    /// Number of positive items
    pub positive: usize,
    /// Number of negative items
    pub negative: usize,
    /// Number of neutral items
    pub neutral: usize,
    /// Positive share of the total, rounded to one decimal place
    pub positive_percent: f64,
    /// Negative share of the total, rounded to one decimal place
    pub negative_percent: f64,
    /// Neutral share of the total, rounded to one decimal place
    pub neutral_percent: f64,
    /// "Mostly Positive", "Needs Attention", or "Mixed"
    pub headline: String,
}

/// Key performance indicators computed from the full collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Mean of all present ratings formatted to one decimal, or "N/A"
    pub avg_rating: String,
    /// Highest-ranked negative theme identifier, or "None"
    pub most_common_complaint: String,
    /// Highest-ranked positive theme identifier, or "None"
    pub most_praised_aspect: String,
    /// Unfiltered item count
    pub total_feedback: usize,
}

/// A recommended remediation tied to a top-ranked negative theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// The negative theme being addressed
    pub theme: Theme,
    /// Number of negative items tagged with the theme
    pub count: usize,
    /// Suggested remediation from the advice table
    pub suggestion: String,
}

/// Output format for exported feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values format
    Csv,
    /// Plain text format
    Txt,
    /// JSON format
    Json,
}

impl OutputFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Txt => "txt",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = crate::error::FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "txt" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            other => Err(crate::error::FeedbackError::InvalidFormat(
                other.to_string(),
            )),
        }
    }
}
