//! Image upload client.
//!
//! Posts carry a public image URL obtained by uploading the photo to the
//! external image host before the post record is created.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::ApiError;

/// Host response; only the public URL matters to the client.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: Option<String>,
}

/// Client for the image host's unsigned upload endpoint.
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl UploadClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("HTTP client build error: {}", e)))?;

        Ok(Self::with_url(
            http,
            config.upload_url.clone(),
            config.upload_preset.clone(),
        ))
    }

    /// Create a client against an explicit endpoint (used by tests).
    pub fn with_url(
        http: reqwest::Client,
        upload_url: impl Into<String>,
        upload_preset: impl Into<String>,
    ) -> Self {
        Self {
            http,
            upload_url: upload_url.into(),
            upload_preset: upload_preset.into(),
        }
    }

    /// Upload an image and return its public URL.
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<String, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::Validation("Image data is empty".to_string()));
        }

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")
            .map_err(|e| ApiError::Upload(format!("Invalid upload part: {}", e)))?;

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self.http.post(&self.upload_url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("Image upload failed with HTTP {}", status);
            return Err(ApiError::Upload(format!("HTTP {}: {}", status, message)));
        }

        let body: UploadResponse = response.json().await?;
        body.secure_url
            .ok_or_else(|| ApiError::Upload("No secure_url in upload response".to_string()))
    }
}
