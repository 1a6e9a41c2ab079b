//! Native HTTP transport
//!
//! reqwest-backed [`Transport`] used by the CLI and the end-to-end tests.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::{ClientError, ClientResult};
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::ApiConfig;

/// reqwest transport bound to one API base URL
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport from API configuration
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("failed to read body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
