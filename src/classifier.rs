//! Sentiment and theme classification
//!
//! Pure, deterministic substring scanning against the fixed lexicon. This is
//! intentionally simple pattern matching, not NLP: indicators are matched as
//! substrings of the lowercased input, each firing at most once regardless of
//! how often it occurs. Empty or indicator-free input yields `Neutral` and an
//! empty theme list, never an error.

use crate::lexicon::{NEGATIVE_INDICATORS, POSITIVE_INDICATORS, THEME_KEYWORDS};
use crate::models::{Classification, Sentiment, Theme};
use std::cmp::Ordering;

/// Classify the sentiment of a feedback text
///
/// Scores +1 for each positive indicator present and -1 for each negative
/// indicator present (presence test, not occurrence count). Positive score
/// maps to `Positive`, negative to `Negative`, zero to `Neutral`.
#[must_use]
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let mut score: i32 = 0;

    for word in POSITIVE_INDICATORS {
        if lower.contains(word) {
            score += 1;
        }
    }

    for word in NEGATIVE_INDICATORS {
        if lower.contains(word) {
            score -= 1;
        }
    }

    match score.cmp(&0) {
        Ordering::Greater => Sentiment::Positive,
        Ordering::Less => Sentiment::Negative,
        Ordering::Equal => Sentiment::Neutral,
    }
}

/// Extract the set of themes mentioned in a feedback text
///
/// A theme is included exactly once if any of its keywords is present as a
/// substring. The result is deduplicated by construction and ordered by the
/// fixed lexicon table order.
#[must_use]
pub fn extract_themes(text: &str) -> Vec<Theme> {
    let lower = text.to_lowercase();

    THEME_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(theme, _)| *theme)
        .collect()
}

/// Run the full classification pipeline on a feedback text
///
/// This is the single classification path used by both manual entry and bulk
/// import.
#[must_use]
pub fn classify(text: &str) -> Classification {
    Classification {
        sentiment: analyze_sentiment(text),
        tags: extract_themes(text),
    }
}
