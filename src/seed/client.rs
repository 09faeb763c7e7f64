//! Random user API client

use crate::error::{Error, Result};
use crate::store::{DocumentWriter, WriteBatch};
use crate::types::JsonValue;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the random user client
#[derive(Debug, Clone)]
pub struct RandomUserConfig {
    /// API base URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for RandomUserConfig {
    fn default() -> Self {
        Self {
            base_url: "https://randomuser.me".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("scroll-pager/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RandomUserConfig {
    /// Use a different base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<JsonValue>,
}

/// Client for a randomuser.me compatible API
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    client: Client,
    config: RandomUserConfig,
}

impl RandomUserClient {
    /// Create a client for randomuser.me
    pub fn new() -> Result<Self> {
        Self::with_config(RandomUserConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: RandomUserConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch `count` random users
    pub async fn fetch(&self, count: usize) -> Result<Vec<JsonValue>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/", self.config.base_url.trim_end_matches('/'));
        debug!("Fetching {count} users from {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("results", count.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body: RandomUserResponse = response.json().await?;
        Ok(body.results)
    }
}

/// Fetch one user and add it to `path`
pub async fn add_one<W>(client: &RandomUserClient, writer: &W, path: &str) -> Result<String>
where
    W: DocumentWriter + ?Sized,
{
    let user = client
        .fetch(1)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| Error::Other("random user API returned no results".to_string()))?;
    let id = writer.add(path, user).await?;
    info!("Added user {id} to '{path}'");
    Ok(id)
}

/// Fetch `count` users and commit them to `path` in one batch
pub async fn add_many<W>(
    client: &RandomUserClient,
    writer: &W,
    path: &str,
    count: usize,
) -> Result<Vec<String>>
where
    W: DocumentWriter + ?Sized,
{
    let users = client.fetch(count).await?;
    let mut batch = WriteBatch::new();
    for user in users {
        batch.set(path, user);
    }

    let ids = writer.commit(batch).await?;
    info!("Committed {} users to '{path}'", ids.len());
    Ok(ids)
}
