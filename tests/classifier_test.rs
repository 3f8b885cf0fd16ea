use feedback_dashboard_rust::classifier::{analyze_sentiment, classify, extract_themes};
use feedback_dashboard_rust::models::{Sentiment, Theme};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_positive_scenario() {
    let text = "Excellent service and fast delivery!";
    assert_eq!(analyze_sentiment(text), Sentiment::Positive);
    let themes = extract_themes(text);
    assert!(themes.contains(&Theme::Service));
    assert!(themes.contains(&Theme::Delivery));
}

#[test]
fn test_negative_scenario() {
    let text = "The staff was rude and we had to wait way too long.";
    assert_eq!(analyze_sentiment(text), Sentiment::Negative);
    let themes = extract_themes(text);
    assert!(themes.contains(&Theme::Service));
    assert!(themes.contains(&Theme::WaitTime));
}

#[test]
fn test_neutral_scenario() {
    // No polarity indicator matches, so the score stays at zero
    assert_eq!(analyze_sentiment("Food was okay."), Sentiment::Neutral);
    // "food" is a taste keyword, so the theme set is not empty here
    assert_eq!(extract_themes("Food was okay."), vec![Theme::Taste]);

    // A text with no lexicon hits at all
    assert_eq!(analyze_sentiment("It was okay."), Sentiment::Neutral);
    assert!(extract_themes("It was okay.").is_empty());
}

#[test]
fn test_empty_string() {
    assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
    assert!(extract_themes("").is_empty());
}

#[test]
fn test_case_insensitive() {
    assert_eq!(analyze_sentiment("EXCELLENT"), Sentiment::Positive);
    assert_eq!(extract_themes("DELIVERY"), vec![Theme::Delivery]);
}

#[test]
fn test_multi_word_indicator() {
    // "on time" is a positive substring; "time" alone is not an indicator
    assert_eq!(analyze_sentiment("arrived on time"), Sentiment::Positive);
    assert_eq!(analyze_sentiment("what a time"), Sentiment::Neutral);
}

#[test]
fn test_substring_quirks_preserved() {
    // "late" fires inside "chocolate"; substring matching is the contract
    assert_eq!(analyze_sentiment("chocolate cake"), Sentiment::Negative);
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(text in ".*") {
        prop_assert_eq!(analyze_sentiment(&text), analyze_sentiment(&text));
        prop_assert_eq!(extract_themes(&text), extract_themes(&text));
    }

    #[test]
    fn prop_themes_never_duplicate(text in ".*") {
        let themes = extract_themes(&text);
        let unique: HashSet<_> = themes.iter().copied().collect();
        prop_assert_eq!(unique.len(), themes.len());
    }

    #[test]
    fn prop_classify_agrees_with_parts(text in ".*") {
        let classification = classify(&text);
        prop_assert_eq!(classification.sentiment, analyze_sentiment(&text));
        prop_assert_eq!(classification.tags, extract_themes(&text));
    }

    #[test]
    fn prop_indicator_free_text_is_neutral(text in "[0-9 ]*") {
        prop_assert_eq!(analyze_sentiment(&text), Sentiment::Neutral);
        prop_assert!(extract_themes(&text).is_empty());
    }
}
