//! REST API client module.
//!
//! One `ApiClient` is shared by every screen. Resource-specific calls live
//! in sibling files as separate impl blocks following the API contract.

mod comments;
mod incidents;
mod posts;
mod users;

pub use incidents::IncidentForm;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::ApiError;

/// Typed client for the Publica REST API.
///
/// The API attaches no authentication header; it trusts client-supplied
/// user ids verbatim.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("HTTP client build error: {}", e)))?;

        Ok(Self::with_base_url(http, config.api_url.clone()))
    }

    /// Create a client against an explicit base URL (used by tests against
    /// a fixture server).
    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        decode_json(path, response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        decode_json(path, response).await
    }

    pub(crate) async fn put_json<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!("PUT {}", path);
        let response = self.http.put(self.url(path)).json(body).send().await?;
        check_status(path, response).await.map(|_| ())
    }
}

/// Map a response to a decoded body, turning 404 and other non-2xx statuses
/// into typed errors.
async fn decode_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let response = check_status(path, response).await?;
    Ok(response.json::<T>().await?)
}

async fn check_status(path: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(format!("{} not found", path)));
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        tracing::warn!("Request to {} failed with HTTP {}", path, status);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}
