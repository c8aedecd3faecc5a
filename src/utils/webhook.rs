use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Failed to reach webhook: {0}")]
    Transport(reqwest::Error),
    #[error("Webhook returned {0}")]
    Status(StatusCode),
    #[error("Webhook response was not JSON: {0}")]
    Decode(reqwest::Error),
}

/// Thin JSON client for the workflow-automation webhooks.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
}

impl WebhookClient {
    pub fn new(timeout: Duration) -> Result<Self, WebhookError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(WebhookError::Transport)?;
        Ok(Self { http })
    }

    pub async fn post_json(&self, url: &str, payload: &Value) -> Result<Value, WebhookError> {
        let url = Url::parse(url)?;
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(WebhookError::Transport)?;
        read_json(response).await
    }

    /// GET with `key=value` set on the URL's query, replacing any existing
    /// pair with that key.
    pub async fn get_with_query(&self, url: &str, key: &str, value: &str) -> Result<Value, WebhookError> {
        let url = with_query_param(url, key, value)?;
        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(WebhookError::Transport)?;
        read_json(response).await
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, WebhookError> {
    let status = response.status();
    if !status.is_success() {
        return Err(WebhookError::Status(status));
    }
    response.json::<Value>().await.map_err(WebhookError::Decode)
}

pub fn with_query_param(url: &str, key: &str, value: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(url)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut().clear().extend_pairs(kept).append_pair(key, value);
    Ok(url)
}
