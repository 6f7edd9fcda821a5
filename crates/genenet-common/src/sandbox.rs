use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use tracing::warn;
use url::Url;
use crate::error::GenenetError;

/// Hosts the dashboard is allowed to call by default.
const DEFAULT_ALLOWLIST: &[&str] = &[
    "string-db.org", // STRING interaction network API
    "localhost",     // local mirrors / test servers
    "127.0.0.1",
];

/// An HTTP client capped to an allowlist of hosts.
/// Everything outbound from the fetch layer goes through this.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client with the default allowlist and the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, GenenetError> {
        let allowlist = DEFAULT_ALLOWLIST.iter().map(|d| d.to_string()).collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("genenet/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenenetError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Allows the host of `url`, e.g. a configured API mirror.
    pub fn allow_url_host(&mut self, url: &str) -> Result<(), GenenetError> {
        let parsed = Url::parse(url)
            .map_err(|e| GenenetError::Config(format!("Invalid URL {}: {}", url, e)))?;
        match parsed.host_str() {
            Some(host) => {
                self.allow_domain(host);
                Ok(())
            }
            None => Err(GenenetError::Config(format!("URL has no host: {}", url))),
        }
    }

    /// Validates if a URL is permitted under the current policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// GET request builder for an allowed URL.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, GenenetError> {
        if !self.is_allowed(url) {
            warn!(url, "Blocked request to host outside allowlist");
            return Err(GenenetError::Security(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
