//! Configuration loading for the scraper.
//! Reads lnpprep.toml from the current directory or path in LNPPREP_CONFIG
//! env var; an absent file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    #[serde(default = "default_entries")]
    pub entries: u32,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_entries() -> u32 { 17_385 }
fn default_base_url() -> String {
    "https://lnpdb.molcube.com:8000/search/textsearch".to_string()
}
fn default_delay_ms() -> u64 { 200 }
fn default_timeout_secs() -> u64 { 10 }
fn default_output_dir() -> PathBuf { PathBuf::from(".") }

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            entries: default_entries(),
            base_url: default_base_url(),
            delay_ms: default_delay_ms(),
            timeout_secs: default_timeout_secs(),
            output_dir: default_output_dir(),
        }
    }
}

impl ScraperConfig {
    /// Endpoint URL for one database entry.
    pub fn entry_url(&self, id: u32) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), id)
    }

    /// Output paths are templated by the entry count so runs against
    /// different database sizes never clobber each other.
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("scraped_data_{}.json", self.entries))
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(format!("scraped_data_{}.csv", self.entries))
    }
}

impl Config {
    /// Load configuration from lnpprep.toml.
    /// Checks LNPPREP_CONFIG env var first, then current directory. A missing
    /// file is not an error; defaults apply.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("LNPPREP_CONFIG").unwrap_or_else(|_| "lnpprep.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.entries, 17_385);
        assert_eq!(config.delay_ms, 200);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_entry_url() {
        let config = ScraperConfig::default();
        assert_eq!(
            config.entry_url(7),
            "https://lnpdb.molcube.com:8000/search/textsearch/7/"
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[scraper]\nentries = 10\n").unwrap();
        assert_eq!(config.scraper.entries, 10);
        assert_eq!(config.scraper.delay_ms, 200);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scraper.entries, 17_385);
    }

    #[test]
    fn test_output_paths_templated_by_entries() {
        let mut config = ScraperConfig::default();
        config.entries = 42;
        config.output_dir = PathBuf::from("/tmp/out");
        assert_eq!(config.json_path(), PathBuf::from("/tmp/out/scraped_data_42.json"));
        assert_eq!(config.csv_path(), PathBuf::from("/tmp/out/scraped_data_42.csv"));
    }
}
