//! HTTP client for the backend status endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every fetch returns a `Result` so the page can fold failures into its
//! `Failed` state instead of panicking; transport errors, non-2xx statuses,
//! and body decode failures all surface as [`ClientError`].

#[cfg(test)]
#[path = "net_test.rs"]
mod net_test;

use api::{HEALTH_PATH, HealthInfo, IntegrationMessage, MESSAGE_PATH};

/// Error produced by a failed status fetch.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or response body decode failure.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status code.
    #[error("unexpected status {status} from {path}")]
    UnexpectedStatus {
        path: &'static str,
        status: reqwest::StatusCode,
    },
}

/// Thin reqwest wrapper bound to a backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, http: reqwest::Client::new() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `GET /api/health`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the status is not 2xx,
    /// or the body is not a valid [`HealthInfo`].
    pub async fn fetch_health(&self) -> Result<HealthInfo, ClientError> {
        self.get_json(HEALTH_PATH).await
    }

    /// Fetch `GET /api/message`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the status is not 2xx,
    /// or the body is not a valid [`IntegrationMessage`].
    pub async fn fetch_message(&self) -> Result<IntegrationMessage, ClientError> {
        self.get_json(MESSAGE_PATH).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &'static str,
    ) -> Result<T, ClientError> {
        let resp = self.http.get(format!("{}{path}", self.base_url)).send().await?;
        if !resp.status().is_success() {
            return Err(ClientError::UnexpectedStatus { path, status: resp.status() });
        }
        Ok(resp.json::<T>().await?)
    }
}
