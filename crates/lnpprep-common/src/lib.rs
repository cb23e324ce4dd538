//! lnpprep-common — Shared error type and HTTP client used across the lnpprep crates.

pub mod client;
pub mod error;

pub use client::ScraperClient;
pub use error::{LnpError, Result};
