//! Aggregation of classified feedback into derived views
//!
//! Pure functions over an ordered slice of feedback items. Every call
//! recomputes fully; there is no cached state. Collections are small and
//! human-entered, so full recomputation is cheap.

use crate::error::{FeedbackError, Result};
use crate::lexicon::action_suggestion;
use crate::models::{ActionItem, FeedbackItem, KpiSummary, Sentiment, SentimentStats, ThemeCount};

/// Maximum number of entries in a theme ranking
const TOP_THEME_LIMIT: usize = 5;

/// Round a ratio to a percentage with one decimal place
fn percent(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Compute the sentiment distribution over a non-empty collection
///
/// Percentages are `(count / total) * 100` rounded to one decimal place.
/// The headline is "Mostly Positive" when positive outnumbers negative,
/// "Needs Attention" for the reverse, and "Mixed" on ties (including the
/// all-neutral case).
///
/// Returns `FeedbackError::EmptyCollection` for an empty slice, since the
/// percentage computation is undefined there.
pub fn calculate_sentiment_stats(items: &[FeedbackItem]) -> Result<SentimentStats> {
    let total = items.len();
    if total == 0 {
        return Err(FeedbackError::EmptyCollection);
    }

    let positive = items
        .iter()
        .filter(|i| i.sentiment == Sentiment::Positive)
        .count();
    let negative = items
        .iter()
        .filter(|i| i.sentiment == Sentiment::Negative)
        .count();
    let neutral = items
        .iter()
        .filter(|i| i.sentiment == Sentiment::Neutral)
        .count();

    let headline = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => "Mostly Positive",
        std::cmp::Ordering::Less => "Needs Attention",
        std::cmp::Ordering::Equal => "Mixed",
    };

    Ok(SentimentStats {
        total,
        positive,
        negative,
        neutral,
        positive_percent: percent(positive, total),
        negative_percent: percent(negative, total),
        neutral_percent: percent(neutral, total),
        headline: headline.to_string(),
    })
}

/// Rank the most frequent themes, optionally restricted to one sentiment
///
/// Tags are tallied in first-seen order across the (filtered) items and
/// ranked with a stable descending sort, so themes with equal counts keep
/// their first-seen order. Returns at most five entries; an empty input or
/// filter match yields an empty ranking.
#[must_use]
pub fn extract_top_themes(
    items: &[FeedbackItem],
    sentiment_filter: Option<Sentiment>,
) -> Vec<ThemeCount> {
    // Linear-scan tally keeps first-seen order; the theme vocabulary is tiny
    let mut counts: Vec<ThemeCount> = Vec::new();

    for item in items {
        if sentiment_filter.is_some_and(|s| item.sentiment != s) {
            continue;
        }
        for tag in &item.tags {
            match counts.iter_mut().find(|entry| entry.theme == *tag) {
                Some(entry) => entry.count += 1,
                None => counts.push(ThemeCount {
                    theme: *tag,
                    count: 1,
                }),
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_THEME_LIMIT);
    counts
}

/// Compute the key performance indicators for a collection
///
/// Average rating is the arithmetic mean of all present ratings formatted to
/// one decimal place, or "N/A" when no item carries a rating. Top complaint
/// and top praise come from the negative and positive theme rankings, with a
/// "None" sentinel when the ranking is empty. Total over empty input.
#[must_use]
pub fn calculate_kpis(items: &[FeedbackItem]) -> KpiSummary {
    let ratings: Vec<u8> = items.iter().filter_map(|i| i.rating).collect();
    let avg_rating = if ratings.is_empty() {
        "N/A".to_string()
    } else {
        let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
        format!("{:.1}", f64::from(sum) / ratings.len() as f64)
    };

    let negative_themes = extract_top_themes(items, Some(Sentiment::Negative));
    let positive_themes = extract_top_themes(items, Some(Sentiment::Positive));

    let most_common_complaint = negative_themes
        .first()
        .map_or_else(|| "None".to_string(), |t| t.theme.as_str().to_string());
    let most_praised_aspect = positive_themes
        .first()
        .map_or_else(|| "None".to_string(), |t| t.theme.as_str().to_string());

    KpiSummary {
        avg_rating,
        most_common_complaint,
        most_praised_aspect,
        total_feedback: items.len(),
    }
}

/// Build the ranked list of recommended remediation actions
///
/// One action per top negative theme, with the suggestion looked up from the
/// fixed advice table. Empty when the collection has no negative themes.
#[must_use]
pub fn get_action_items(items: &[FeedbackItem]) -> Vec<ActionItem> {
    extract_top_themes(items, Some(Sentiment::Negative))
        .into_iter()
        .map(|entry| ActionItem {
            theme: entry.theme,
            count: entry.count,
            suggestion: action_suggestion(entry.theme).to_string(),
        })
        .collect()
}
