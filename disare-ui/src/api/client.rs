//! HTTP API Client
//!
//! gloo-net [`Transport`] for the Disare REST API.

use async_trait::async_trait;
use disare::client::{ApiRequest, ApiResponse, ClientError, ClientResult, Method, Transport};
use disare::config::{normalize_base_url, DEFAULT_API_URL};
use gloo_net::http::Request;

/// Local storage key overriding the API base URL
pub const API_URL_KEY: &str = "disare_api_url";

/// Get the API base URL: local storage, then the build-time value, then default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    resolve_api_base(stored, option_env!("DISARE_API_URL"))
}

fn resolve_api_base(stored: Option<String>, built_in: Option<&str>) -> String {
    let url = stored
        .filter(|url| !url.trim().is_empty())
        .or_else(|| built_in.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    normalize_base_url(&url)
}

/// Fetch-backed transport bound to one base URL
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
        }
    }
}

fn network_error(e: gloo_net::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        let response = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ClientError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        Ok(ApiResponse::new(status, body))
    }
}
