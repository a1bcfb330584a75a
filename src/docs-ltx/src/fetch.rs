//! HTTP fetching of documentation pages.

use url::Url;

use crate::config::GeneratorOptions;
use crate::errors::Result;

/// Outcome of fetching one page.
///
/// Fetching never fails from the caller's point of view: transport errors and
/// non-success statuses are logged and reported as [`Fetched::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// The response body, never empty.
    Content(String),
    /// Nothing usable came back.
    Empty,
}

impl Fetched {
    fn from_body(body: String) -> Self {
        if body.is_empty() { Fetched::Empty } else { Fetched::Content(body) }
    }

    /// The body, if there is one.
    pub fn content(&self) -> Option<&str> {
        match self {
            Fetched::Content(body) => Some(body),
            Fetched::Empty => None,
        }
    }
}

/// Builds the HTTP client shared by every page fetch.
pub fn build_client(options: &GeneratorOptions) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Fetches a page's HTML. Any failure is logged and yields [`Fetched::Empty`].
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Fetched {
    let response = match client.get(url.as_str()).send().await.and_then(|r| r.error_for_status()) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Error fetching {}: {}", url, e);
            return Fetched::Empty;
        }
    };

    match response.text().await {
        Ok(body) => {
            tracing::debug!("Fetched {} ({} bytes)", url, body.len());
            Fetched::from_body(body)
        }
        Err(e) => {
            tracing::warn!("Error reading body of {}: {}", url, e);
            Fetched::Empty
        }
    }
}
