//! Static lexicon tables for sentiment and theme classification
//!
//! All tables are process-wide immutable constants. Indicators and keywords
//! are matched as case-insensitive substrings, not whole-word tokens; the
//! resulting quirks ("late" matches inside other words) are part of the
//! classification contract.

use crate::models::Theme;

/// Positive polarity indicator substrings
pub const POSITIVE_INDICATORS: &[&str] = &[
    "excellent",
    "great",
    "amazing",
    "outstanding",
    "fantastic",
    "wonderful",
    "love",
    "polite",
    "helpful",
    "fast",
    "fresh",
    "delicious",
    "competitive",
    "perfect",
    "good",
    "best",
    "friendly",
    "on time",
    "quality",
];

/// Negative polarity indicator substrings
pub const NEGATIVE_INDICATORS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disappointing",
    "late",
    "delay",
    "rude",
    "cold",
    "mediocre",
    "expensive",
    "slow",
    "disappointed",
    "frustrating",
    "frustrated",
    "wait",
    "worst",
    "poor",
    "unfriendly",
];

/// Keyword substrings associated with each theme
///
/// A word may appear under several themes, and some lists carry duplicate
/// entries; presence testing makes the duplicates harmless.
pub const THEME_KEYWORDS: &[(Theme, &[&str])] = &[
    (
        Theme::Delivery,
        &["delivery", "delivery", "on time", "late", "delay", "late", "fast"],
    ),
    (
        Theme::Service,
        &["staff", "service", "polite", "rude", "friendly", "helpful"],
    ),
    (
        Theme::Taste,
        &["taste", "taste", "delicious", "food", "flavor", "mediocre"],
    ),
    (
        Theme::Pricing,
        &["price", "pricing", "expensive", "competitive", "value", "cost"],
    ),
    (Theme::Quality, &["quality", "fresh", "cold", "condition"]),
    (Theme::WaitTime, &["wait", "waiting", "long", "slow"]),
];

/// Get the recommended remediation for a negative theme
#[must_use]
pub const fn action_suggestion(theme: Theme) -> &'static str {
    match theme {
        Theme::Delivery => {
            "Improve delivery speed — focus on logistics and route optimization"
        }
        Theme::Service => {
            "Enhance staff training — implement customer service excellence program"
        }
        Theme::WaitTime => {
            "Reduce wait times — consider additional capacity during peak hours"
        }
        Theme::Quality => {
            "Improve product quality — review production standards and QA processes"
        }
        Theme::Taste => {
            "Improve taste/flavor — gather detailed feedback on recipe improvements"
        }
        Theme::Pricing => {
            "Review pricing strategy — consider value-based pricing adjustments"
        }
    }
}
