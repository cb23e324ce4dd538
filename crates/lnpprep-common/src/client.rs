use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::error::LnpError;

/// An allowlist-capped HTTP client: requests to hostnames outside the
/// allowlist are refused before anything goes on the wire.
#[derive(Debug, Clone)]
pub struct ScraperClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl ScraperClient {
    /// Creates a client with the default allowlist of dataset hosts and a
    /// fixed per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, LnpError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "lnpdb.molcube.com", // LNP database
            "localhost",
            "127.0.0.1",
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| LnpError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current allowlist.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern safely for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, LnpError> {
        if !self.is_allowed(url) {
            return Err(LnpError::Security(format!(
                "Domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ScraperClient {
        ScraperClient::new(Duration::from_secs(10)).unwrap()
    }

    #[test]
    fn test_default_allowlist() {
        let c = client();
        assert!(c.is_allowed("https://lnpdb.molcube.com:8000/search/textsearch/1/"));
        assert!(!c.is_allowed("https://example.com/"));
    }

    #[test]
    fn test_allow_domain() {
        let mut c = client();
        assert!(!c.is_allowed("https://data.example.org/x"));
        c.allow_domain("example.org");
        assert!(c.is_allowed("https://data.example.org/x"));
    }

    #[test]
    fn test_get_refuses_unlisted_host() {
        let c = client();
        assert!(c.get("https://example.com/").is_err());
        assert!(c.get("https://lnpdb.molcube.com:8000/search/textsearch/1/").is_ok());
    }
}
