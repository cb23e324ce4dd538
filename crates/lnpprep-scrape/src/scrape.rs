//! Sequential crawl over the numeric entry ID space.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use lnpprep_common::ScraperClient;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::ScraperConfig;

/// Outcome of a single entry fetch.
enum Fetch {
    Record(Value),
    Skipped(u16),
}

async fn fetch_entry(
    client: &ScraperClient,
    config: &ScraperConfig,
    id: u32,
) -> Result<Fetch, String> {
    let url = config.entry_url(id);
    let response = client
        .get(&url)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Ok(Fetch::Skipped(status.as_u16()));
    }

    let record: Value = response.json().await.map_err(|e| e.to_string())?;
    Ok(Fetch::Record(record))
}

/// Walk IDs `1..=entries` strictly in order, one GET per ID. Per-ID failures
/// are reported and skipped; the returned vector holds only successes, in
/// ascending ID order. There is no checkpointing: a crash mid-run loses the
/// collected records.
pub async fn run(client: &ScraperClient, config: &ScraperConfig) -> Vec<Value> {
    let bar = ProgressBar::new(config.entries as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar.set_message("scraping entries");

    let delay = Duration::from_millis(config.delay_ms);
    let mut records = Vec::new();

    for id in 1..=config.entries {
        match fetch_entry(client, config, id).await {
            Ok(Fetch::Record(record)) => records.push(record),
            // suspend the bar so diagnostics do not garble its redraws
            Ok(Fetch::Skipped(code)) => {
                bar.suspend(|| warn!("Skipped ID {} — status {}", id, code))
            }
            Err(message) => bar.suspend(|| warn!("Error with ID {}: {}", id, message)),
        }
        bar.inc(1);
        tokio::time::sleep(delay).await;
    }

    bar.finish_with_message(format!("collected {} records", records.len()));
    info!(
        "Scrape complete: {} of {} entries collected",
        records.len(),
        config.entries
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ScraperClient {
        ScraperClient::new(Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn test_unlisted_host_is_reported_not_fatal() {
        let mut config = ScraperConfig::default();
        config.base_url = "https://not-allowed.example.com/api".to_string();
        config.entries = 2;
        config.delay_ms = 0;
        // every ID fails the allowlist check; run still completes
        let records = run(&client(), &config).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_entry_refuses_unlisted_host() {
        let mut config = ScraperConfig::default();
        config.base_url = "https://example.com/api".to_string();
        let result = fetch_entry(&client(), &config, 1).await;
        assert!(result.is_err());
    }
}
