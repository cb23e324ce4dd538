//! lnpprep-scrape — sequential LNP database crawler.
//!
//! Walks the numeric entry ID space of the LNP database one request at a
//! time, collects the JSON records that resolve, and persists the run as a
//! pretty-printed JSON dump plus a flattened CSV. Per-entry failures are
//! logged and skipped; only end-of-run file writes can fail the program.

pub mod config;
pub mod persist;
pub mod scrape;

pub use config::{Config, ScraperConfig};
