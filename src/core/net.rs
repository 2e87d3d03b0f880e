// src/core/net.rs
//
// Single unauthenticated GET per listing page. No retries, no extra
// headers; whatever reqwest does by default is the policy.

use reqwest::blocking::Client;
use url::Url;

use crate::error::CollectError;

/// Page transport. The collector only needs "URL in, body text out",
/// so tests can feed it fixture pages instead of the network.
pub trait Fetch {
    fn get(&self, url: &Url) -> Result<String, CollectError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, CollectError> {
        let client = Client::builder()
            .build()
            .map_err(|e| CollectError::transport("<client init>", e))?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (timeouts, proxy settings).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &Url) -> Result<String, CollectError> {
        let transport = |e: reqwest::Error| CollectError::transport(url.as_str(), e);

        let resp = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;

        logd!(status = %resp.status(), "GET {url}");
        resp.text().map_err(transport)
    }
}
