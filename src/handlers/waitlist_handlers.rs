use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::config::{REGISTER_WEBHOOK_VAR, STATUS_WEBHOOK_VAR, WAITLIST_WEBHOOK_VAR};
use crate::error::ProxyError;
use crate::handlers::waitlist_dtos::{is_truthy, StatusQuery, WaitlistAction, WaitlistQuery};
use crate::AppState;

const REGISTER_FAILED: &str = "Failed to process registration";
const STATUS_FAILED: &str = "Failed to get status";
const WAITLIST_FAILED: &str = "Failed to process request";

fn webhook_url<'a>(url: &'a Option<String>, var: &'static str) -> Result<&'a str, ProxyError> {
    url.as_deref().ok_or(ProxyError::Configuration(var))
}

/// Bodies that are not JSON are treated like an empty body so the caller
/// gets the usual 400 instead of an extractor rejection.
fn lenient_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let body = lenient_json(&body);
    let email = match body.get("email") {
        Some(Value::String(email)) if !email.is_empty() => email.clone(),
        _ => return Err(ProxyError::Validation("Email is required")),
    };

    let url = webhook_url(&state.webhooks.register_url, REGISTER_WEBHOOK_VAR)?;
    tracing::info!("Forwarding registration to webhook");

    let data = state
        .webhook_client
        .post_json(url, &json!({ "email": email }))
        .await
        .map_err(|source| ProxyError::Upstream { message: REGISTER_FAILED, source })?;
    Ok(Json(data))
}

pub async fn status(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Value>, ProxyError> {
    let email = query
        .email
        .filter(|email| !email.is_empty())
        .ok_or(ProxyError::Validation("Email is required"))?;

    let url = webhook_url(&state.webhooks.status_url, STATUS_WEBHOOK_VAR)?;
    tracing::info!("Checking registration status");

    let data = state
        .webhook_client
        .get_with_query(url, "email", &email)
        .await
        .map_err(|source| ProxyError::Upstream { message: STATUS_FAILED, source })?;
    Ok(Json(data))
}

pub async fn waitlist_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WaitlistQuery>,
) -> Result<Json<Value>, ProxyError> {
    forward_waitlist(&state, query.into_payload()).await
}

pub async fn waitlist_post(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    forward_waitlist(&state, lenient_json(&body)).await
}

/// Checks the per-action required field, then forwards the payload as-is.
/// Unknown actions pass through without field checks.
async fn forward_waitlist(state: &AppState, payload: Value) -> Result<Json<Value>, ProxyError> {
    let action = payload.get("action");
    if !is_truthy(action) {
        return Err(ProxyError::Validation("Action is required"));
    }

    if let Some(known) = action.and_then(WaitlistAction::from_value) {
        let (field, message) = known.required_field();
        if !is_truthy(payload.get(field)) {
            return Err(ProxyError::Validation(message));
        }
    }

    let url = webhook_url(&state.webhooks.waitlist_url, WAITLIST_WEBHOOK_VAR)?;
    let action_name = action.and_then(Value::as_str).unwrap_or_default();
    tracing::info!("Forwarding waitlist action {} to webhook", action_name);

    let data = state
        .webhook_client
        .post_json(url, &payload)
        .await
        .map_err(|source| ProxyError::Upstream { message: WAITLIST_FAILED, source })?;
    Ok(Json(data))
}
