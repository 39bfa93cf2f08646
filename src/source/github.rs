//! GitHub implementation of the project source.
//!
//! One GET against the REST v3 repository-listing endpoint for a fixed
//! account. First page only; no retry, no pagination traversal.
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

use super::{ProjectSource, SourceError, SourceRecord};

/// Identifying request header. GitHub rejects requests without one.
const APP_USER_AGENT: &str = concat!("vitrine/", env!("CARGO_PKG_VERSION"));
/// Seconds before an outbound request is abandoned. Also the upper bound on
/// how long a sync request may legitimately block on the upstream.
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

/// GitHub repository-listing client for one account.
#[derive(Debug, Clone)]
pub struct GithubSource {
    /// Underlying HTTP client.
    client: Client,
    /// Base URL of the API, overridable for local testing.
    api_base: String,
    /// Account whose repositories are showcased.
    account: String,
}

impl GithubSource {
    /// Build a client for the given account.
    ///
    /// # Errors
    /// Errors if the underlying HTTP client cannot be constructed.
    pub fn new(account: &str) -> anyhow::Result<Self> {
        Self::with_api_base(account, "https://api.github.com")
    }

    /// Build a client against a non-default API base.
    ///
    /// # Errors
    /// Errors if the underlying HTTP client cannot be constructed.
    pub fn with_api_base(account: &str, api_base: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.to_owned(),
            account: account.to_owned(),
        })
    }

    /// Headers sent with every listing request.
    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers
    }
}

#[async_trait]
impl ProjectSource for GithubSource {
    #[instrument(level = "info", skip(self), fields(account = %self.account))]
    async fn fetch_projects(&self) -> Result<Vec<SourceRecord>, SourceError> {
        let url = format!("{}/users/{}/repos", self.api_base, self.account);
        let response = self
            .client
            .get(&url)
            .headers(Self::headers())
            .send()
            .await
            .map_err(|err| SourceError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!(
                "{url} returned {status}"
            )));
        }

        let records = response
            .json::<Vec<SourceRecord>>()
            .await
            .map_err(|err| SourceError::Malformed(err.to_string()))?;
        tracing::debug!(count = records.len(), "Fetched repository list");
        Ok(records)
    }
}
