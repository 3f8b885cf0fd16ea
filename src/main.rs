//! Command-line dashboard over the feedback analytics engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use tracing::info;

use feedback_dashboard_rust::config::AppConfig;
use feedback_dashboard_rust::logging::{init_logging, OperationTimer};
use feedback_dashboard_rust::metrics::MetricsCollector;
use feedback_dashboard_rust::models::{NewFeedback, OutputFormat, Sentiment};
use feedback_dashboard_rust::report::{render_report, write_feedback_to_file};
use feedback_dashboard_rust::{FeedbackService, SledStore};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a single feedback item
    Add {
        /// Feedback text
        #[arg(short, long)]
        text: String,

        /// Star rating (1-5)
        #[arg(short, long)]
        rating: Option<u8>,

        /// Customer name
        #[arg(short, long)]
        customer: Option<String>,
    },
    /// Bulk-import feedback from a CSV file (text,rating,customer)
    Import {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Show sentiment distribution and KPIs
    Summary,
    /// Show the top themes, optionally filtered by sentiment
    Themes {
        /// Restrict to one sentiment (positive, negative, neutral)
        #[arg(short, long)]
        sentiment: Option<String>,
    },
    /// Show recommended remediation actions
    Actions,
    /// Render the full analysis report
    Report {
        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the raw feedback collection
    Export {
        /// Output format (txt, csv, or json)
        #[arg(short, long)]
        format: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<String>,
    },
    /// Remove all feedback items
    Clear {
        /// Also reset the store so demo data reappears on next run
        #[arg(long)]
        purge: bool,
    },
}

fn parse_sentiment(value: &str) -> Result<Sentiment> {
    match value.to_lowercase().as_str() {
        "positive" => Ok(Sentiment::Positive),
        "negative" => Ok(Sentiment::Negative),
        "neutral" => Ok(Sentiment::Neutral),
        other => Err(anyhow::anyhow!(
            "Unknown sentiment '{other}' (expected positive, negative, or neutral)"
        )),
    }
}

#[allow(clippy::print_stdout)]
fn print_summary(service: &FeedbackService) -> Result<()> {
    if service.items().is_empty() {
        println!("No feedback yet.");
        return Ok(());
    }

    let stats = service.sentiment_stats()?;
    let kpis = service.kpis();

    println!("Sentiment Overview ({})", stats.headline);
    println!(
        "  Positive: {} ({:.1}%)",
        stats.positive, stats.positive_percent
    );
    println!(
        "  Neutral:  {} ({:.1}%)",
        stats.neutral, stats.neutral_percent
    );
    println!(
        "  Negative: {} ({:.1}%)",
        stats.negative, stats.negative_percent
    );
    println!();
    println!("KPIs");
    println!("  Average Rating:        {} / 5", kpis.avg_rating);
    println!("  Most Common Complaint: {}", kpis.most_common_complaint);
    println!("  Most Praised Aspect:   {}", kpis.most_praised_aspect);
    println!("  Total Feedback:        {}", kpis.total_feedback);

    Ok(())
}

#[allow(clippy::print_stdout)]
fn main() -> Result<()> {
    let config = AppConfig::load()?;
    let _guard = init_logging(
        Some(&config.get_log_level()),
        config.logging.file_path.as_deref().map(Path::new),
    )?;
    MetricsCollector::init()?;

    info!("Starting feedback-dashboard-rust application");

    let cli = Cli::parse();

    let store = SledStore::open(Path::new(&config.get_store_path()))
        .context("Failed to open feedback store")?;
    let mut service = FeedbackService::new(Box::new(store))?;

    match cli.command {
        Commands::Add {
            text,
            rating,
            customer,
        } => {
            let item = service.add_feedback(NewFeedback {
                text,
                rating,
                customer,
                date: None,
            })?;
            println!(
                "Added feedback {} [{}] tags: {}",
                item.id,
                item.sentiment,
                item.tags
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Commands::Import { file } => {
            let timer = OperationTimer::new("import_csv");
            let reader = File::open(&file)
                .with_context(|| format!("Failed to open CSV file {}", file.display()))?;
            let added = service.import_csv(reader)?;
            timer.finish();
            println!("Imported {added} feedback items from {}", file.display());
        }
        Commands::Summary => print_summary(&service)?,
        Commands::Themes { sentiment } => {
            let filter = sentiment.as_deref().map(parse_sentiment).transpose()?;
            let themes = service.top_themes(filter);
            if themes.is_empty() {
                println!("No themes found.");
            }
            for entry in themes {
                println!("{:>3}  {}", entry.count, entry.theme.display_name());
            }
        }
        Commands::Actions => {
            let actions = service.action_items();
            if actions.is_empty() {
                println!("No negative themes, nothing to fix.");
            }
            for action in actions {
                println!("[{} mentions] {}", action.count, action.suggestion);
            }
        }
        Commands::Report { output } => {
            let report = render_report(service.items())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &report)
                        .with_context(|| format!("Failed to write report to {}", path.display()))?;
                    println!("Report written to {}", path.display());
                }
                None => println!("{report}"),
            }
        }
        Commands::Export { format, output_dir } => {
            let timer = OperationTimer::new("export");
            let format: OutputFormat = format
                .as_deref()
                .unwrap_or(&config.export.default_format)
                .parse()?;
            let dir = output_dir.unwrap_or_else(|| config.export.output_directory.clone());
            create_dir_all(&dir)?;

            let file_name = format!(
                "feedback-{}.{}",
                chrono::Local::now().format("%Y-%m-%d_%H-%M-%S"),
                format.extension()
            );
            let path = Path::new(&dir).join(file_name);
            write_feedback_to_file(service.items(), format, &path)?;
            MetricsCollector::default().record_export(format.extension());
            timer.finish();
            println!("Exported {} items to {}", service.items().len(), path.display());
        }
        Commands::Clear { purge } => {
            if purge {
                service.purge()?;
                println!("Feedback store purged.");
            } else {
                service.clear_all()?;
                println!("All feedback cleared.");
            }
        }
    }

    Ok(())
}
