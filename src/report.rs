//! Report rendering and feedback export
//!
//! This module renders the plain-text analysis report and writes the raw
//! collection to files in TXT, CSV, or JSON format with consistent
//! formatting.

use crate::aggregator::{
    calculate_kpis, calculate_sentiment_stats, extract_top_themes, get_action_items,
};
use crate::error::Result;
use crate::models::{FeedbackItem, OutputFormat, Sentiment, ThemeCount};
use csv::Writer;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn theme_lines(themes: &[ThemeCount]) -> String {
    themes
        .iter()
        .map(|t| format!("- {}: {} mentions", t.theme.display_name(), t.count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full plain-text analysis report
///
/// Sections: sentiment overview, KPIs, top positive/negative themes,
/// recommended actions, and the detailed feedback listing. Errors with
/// `EmptyCollection` when there is nothing to report on.
pub fn render_report(items: &[FeedbackItem]) -> Result<String> {
    let stats = calculate_sentiment_stats(items)?;
    let kpis = calculate_kpis(items);
    let positive_themes = extract_top_themes(items, Some(Sentiment::Positive));
    let negative_themes = extract_top_themes(items, Some(Sentiment::Negative));
    let actions = get_action_items(items);

    let mut report = String::new();
    let _ = writeln!(report, "FEEDBACK SENTIMENT ANALYSIS REPORT");
    let _ = writeln!(
        report,
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d")
    );
    let _ = writeln!(report, "================================================");
    let _ = writeln!(report);
    let _ = writeln!(report, "SENTIMENT OVERVIEW");
    let _ = writeln!(report, "Total Feedback Items: {}", stats.total);
    let _ = writeln!(
        report,
        "Positive: {} ({:.1}%)",
        stats.positive, stats.positive_percent
    );
    let _ = writeln!(
        report,
        "Neutral: {} ({:.1}%)",
        stats.neutral, stats.neutral_percent
    );
    let _ = writeln!(
        report,
        "Negative: {} ({:.1}%)",
        stats.negative, stats.negative_percent
    );
    let _ = writeln!(report, "Overall: {}", stats.headline);
    let _ = writeln!(report);
    let _ = writeln!(report, "KEY PERFORMANCE INDICATORS");
    let _ = writeln!(report, "Average Rating: {} / 5", kpis.avg_rating);
    let _ = writeln!(report, "Most Common Complaint: {}", kpis.most_common_complaint);
    let _ = writeln!(report, "Most Praised Aspect: {}", kpis.most_praised_aspect);
    let _ = writeln!(report);
    let _ = writeln!(report, "TOP POSITIVE THEMES");
    let _ = writeln!(report, "{}", theme_lines(&positive_themes));
    let _ = writeln!(report);
    let _ = writeln!(report, "TOP NEGATIVE THEMES");
    let _ = writeln!(report, "{}", theme_lines(&negative_themes));
    let _ = writeln!(report);
    let _ = writeln!(report, "RECOMMENDED ACTIONS");
    for action in &actions {
        let _ = writeln!(
            report,
            "- [{} mentions] {}",
            action.count, action.suggestion
        );
    }
    let _ = writeln!(report);
    let _ = writeln!(report, "DETAILED FEEDBACK");
    for item in items {
        let _ = writeln!(
            report,
            "[{}] {} - Rating: {}",
            item.sentiment.as_str().to_uppercase(),
            item.customer,
            item.rating
                .map_or_else(|| "N/A".to_string(), |r| r.to_string())
        );
        let _ = writeln!(report, "{}", item.text);
        let _ = writeln!(report, "Date: {}", item.date.format("%Y-%m-%d"));
        let _ = writeln!(report);
    }

    Ok(report.trim_end().to_string())
}

/// Write feedback items to a file in the specified format.
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn write_feedback_to_file(
    items: &[FeedbackItem],
    format: OutputFormat,
    file_path: &Path,
) -> Result<()> {
    match format {
        OutputFormat::Txt => write_txt_file(items, file_path),
        OutputFormat::Csv => write_csv_file(items, file_path),
        OutputFormat::Json => write_json_file(items, file_path),
    }
}

/// Format: `customer, date, [SENTIMENT] text` (blank line between items)
fn write_txt_file(items: &[FeedbackItem], file_path: &Path) -> Result<()> {
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);

    for item in items {
        writeln!(
            writer,
            "{}, {}, [{}] {}",
            item.customer,
            item.date.format("%b %d, %Y %r"),
            item.sentiment.as_str().to_uppercase(),
            item.text
        )?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Includes header row: `ID, Customer, Rating, Sentiment, Tags, Date, Text`
fn write_csv_file(items: &[FeedbackItem], file_path: &Path) -> Result<()> {
    let file = File::create(file_path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["ID", "Customer", "Rating", "Sentiment", "Tags", "Date", "Text"])?;

    for item in items {
        writer.write_record([
            item.id.as_str(),
            item.customer.as_str(),
            &item
                .rating
                .map_or_else(String::new, |r| r.to_string()),
            item.sentiment.as_str(),
            &item
                .tags
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(","),
            &item.date.format("%b %d, %Y %r").to_string(),
            item.text.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Outputs a pretty-printed JSON array of feedback items
fn write_json_file(items: &[FeedbackItem], file_path: &Path) -> Result<()> {
    let file = File::create(file_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, items)?;
    Ok(())
}
