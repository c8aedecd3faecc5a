use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::utils::webhook::WebhookError;

pub const CONFIGURATION_ERROR_MESSAGE: &str = "Server configuration error";

/// Failures at the proxy boundary. The client only ever sees the public
/// message; details stay in the server log.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0} not configured")]
    Configuration(&'static str),
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: WebhookError,
    },
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) => StatusCode::BAD_REQUEST,
            ProxyError::Configuration(_) | ProxyError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ProxyError::Validation(message) => *message,
            ProxyError::Configuration(_) => CONFIGURATION_ERROR_MESSAGE,
            ProxyError::Upstream { message, .. } => *message,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            ProxyError::Validation(message) => tracing::debug!("Rejected request: {}", message),
            ProxyError::Configuration(var) => tracing::error!("{} not configured", var),
            ProxyError::Upstream { source, .. } => tracing::error!("Error calling webhook: {}", source),
        }
        (self.status(), Json(json!({"error": self.public_message()}))).into_response()
    }
}

pub async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(json!({"error": "Method not allowed"})))
}
