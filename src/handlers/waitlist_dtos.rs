use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ACTION_REGISTRATION_NEW: &str = "waitlist_registrations.new";
pub const ACTION_EMAIL_CONFIRM: &str = "email_validations.confirm";
pub const ACTION_EMAIL_STATUS: &str = "email_validations.status";

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WaitlistQuery {
    pub action: Option<String>,
    pub email: Option<String>,
}

impl WaitlistQuery {
    /// Same shape a POST body would have; absent params are left out.
    pub fn into_payload(self) -> Value {
        let mut payload = Map::new();
        if let Some(action) = self.action {
            payload.insert("action".to_string(), Value::String(action));
        }
        if let Some(email) = self.email {
            payload.insert("email".to_string(), Value::String(email));
        }
        Value::Object(payload)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The actions the proxy checks fields for. Anything else is forwarded
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistAction {
    RegistrationNew,
    EmailConfirm,
    EmailStatus,
}

impl WaitlistAction {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value.as_str()? {
            ACTION_REGISTRATION_NEW => Some(WaitlistAction::RegistrationNew),
            ACTION_EMAIL_CONFIRM => Some(WaitlistAction::EmailConfirm),
            ACTION_EMAIL_STATUS => Some(WaitlistAction::EmailStatus),
            _ => None,
        }
    }

    /// The payload field this action cannot go without, and the message
    /// returned when it is missing.
    pub fn required_field(self) -> (&'static str, &'static str) {
        match self {
            WaitlistAction::RegistrationNew => ("email", "Email is required for registration"),
            WaitlistAction::EmailConfirm => ("token", "Token is required for confirmation"),
            WaitlistAction::EmailStatus => ("email", "Email is required for status check"),
        }
    }
}

/// JavaScript truthiness, which is what the signup pages were written
/// against: missing, null, false, 0 and "" all count as absent.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
