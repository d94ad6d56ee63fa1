use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

use histfetch::config::Config;
use histfetch::output;
use histfetch::{fetch, FetchRequest, Interval, Resource, SessionContext};

/// Fetch Investing.com historical data into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "histfetch")]
struct Cli {
    /// daily | weekly | monthly
    #[arg(long)]
    interval: Option<String>,

    /// Start date, YYYY-MM-DD (default: 1900-01-01)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// End date, YYYY-MM-DD (default: today)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Output path (.csv); defaults to history_<cadence>.csv
    #[arg(long)]
    out: Option<PathBuf>,

    /// Historical-data page URL
    #[arg(long)]
    resource_url: Option<String>,

    /// Header text sent to the AJAX endpoint (should match the page)
    #[arg(long)]
    header: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::default();

    let interval: Interval = cli
        .interval
        .as_deref()
        .unwrap_or(&config.interval)
        .parse()?;
    let start = cli.start.unwrap_or_else(FetchRequest::default_start);
    let end = cli.end.unwrap_or_else(|| Local::now().date_naive());
    let request = FetchRequest::new(start, end, interval)?;

    let resource = Resource::new(
        cli.resource_url.unwrap_or(config.resource_url),
        cli.header.unwrap_or(config.header_text),
    )?;
    let ctx = SessionContext::new();

    println!(
        "Fetching {} history for {} ⌛️",
        interval.cadence(),
        resource.page_url()
    );
    let dataset = fetch(&ctx, &resource, &request).await?;

    let out = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format!("history_{}.csv", interval.cadence())));
    output::save(&dataset, &out)?;
    println!("✅ Saved {} rows -> {}", dataset.len(), out.display());

    // Tail preview, newest rows last.
    for row in dataset.rows().iter().rev().take(5).rev() {
        println!(
            "{}  price {:.2}  change {}",
            row.date,
            row.price,
            row.change
                .map(|c| format!("{:+.2}%", c * 100.0))
                .unwrap_or_else(|| "n/a".to_string()),
        );
    }

    Ok(())
}
