use crate::models::{NamedResource, PeopleIndex, RawPerson};
use anyhow::{Context, Result};

/// HTTP client for the SWAPI REST API.
///
/// One underlying `reqwest::Client` is created per run and shared across all
/// fetch and resolve calls; cloning is cheap (the inner client is an `Arc`).
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Total number of people reported by the paginated listing endpoint.
    pub async fn people_count(&self) -> Result<u64> {
        let url = format!("{}/people/", self.base_url);
        let index: PeopleIndex = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to query people count at {url}"))?
            .json()
            .await
            .with_context(|| format!("Invalid people index payload from {url}"))?;
        Ok(index.count)
    }

    /// Fetch one person record by id. No retries; transport and decode
    /// errors propagate to the caller.
    pub async fn fetch_person(&self, id: u64) -> Result<RawPerson> {
        let url = format!("{}/people/{id}/", self.base_url);
        self.http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch person {id}"))?
            .json()
            .await
            .with_context(|| format!("Invalid person payload from {url}"))
    }

    /// Dereference a cross-reference URL into its display name or title.
    pub async fn fetch_display_name(&self, url: &str) -> Result<String> {
        let resource: NamedResource = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to resolve cross-reference {url}"))?
            .json()
            .await
            .with_context(|| format!("Invalid resource payload from {url}"))?;
        Ok(resource.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = SwapiClient::new("http://localhost:9999/api/");
        assert_eq!(client.base_url(), "http://localhost:9999/api");
    }
}
