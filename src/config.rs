use std::env;
use std::time::Duration;

use anyhow::Context;
use axum::http::HeaderValue;

pub const REGISTER_WEBHOOK_VAR: &str = "N8N_REGISTER_WEBHOOK_URL";
pub const STATUS_WEBHOOK_VAR: &str = "N8N_STATUS_WEBHOOK_URL";
pub const WAITLIST_WEBHOOK_VAR: &str = "N8N_WAITLIST_WEBHOOK_URL";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Upstream automation webhooks. Each one is optional: a missing URL only
/// fails the endpoint that needs it, at request time.
#[derive(Debug, Clone, Default)]
pub struct WebhookConfig {
    pub register_url: Option<String>,
    pub status_url: Option<String>,
    pub waitlist_url: Option<String>,
}

impl WebhookConfig {
    pub fn from_env() -> Self {
        Self {
            register_url: non_empty_var(REGISTER_WEBHOOK_VAR),
            status_url: non_empty_var(STATUS_WEBHOOK_VAR),
            waitlist_url: non_empty_var(WAITLIST_WEBHOOK_VAR),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_url: String,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw.parse().with_context(|| format!("PORT is not a valid port: {}", raw))?,
            None => DEFAULT_PORT,
        };
        let upstream_timeout_secs = match non_empty_var("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("UPSTREAM_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        Ok(Self {
            port,
            frontend_url: non_empty_var("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }

    pub fn cors_origin(&self) -> anyhow::Result<HeaderValue> {
        self.frontend_url
            .parse()
            .with_context(|| format!("Invalid FRONTEND_URL: {}", self.frontend_url))
    }
}

/// Logs every webhook variable that is not set. The server still starts.
pub fn validate_env() {
    for var in [REGISTER_WEBHOOK_VAR, STATUS_WEBHOOK_VAR, WAITLIST_WEBHOOK_VAR] {
        if non_empty_var(var).is_none() {
            tracing::warn!("{} is not set, its endpoint will answer 500", var);
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
