//! Entry point for the scraper binary.

use std::time::Duration;

use lnpprep_common::ScraperClient;
use lnpprep_scrape::{persist, scrape, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lnpprep=info,warn")),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Could not load lnpprep.toml: {e}. Using defaults.");
            Config::default()
        }
    };
    let scraper = config.scraper;
    info!(
        "Scraping {} entries from {}",
        scraper.entries, scraper.base_url
    );

    let client = ScraperClient::new(Duration::from_secs(scraper.timeout_secs))?;
    let records = scrape::run(&client, &scraper).await;

    persist::write_json(&scraper.json_path(), &records)?;
    persist::write_csv(&scraper.csv_path(), &records)?;
    info!(
        "Wrote {} records to {} and {}",
        records.len(),
        scraper.json_path().display(),
        scraper.csv_path().display()
    );

    Ok(())
}
