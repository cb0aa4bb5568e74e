//! Backend JSON shapes and their mapping onto client types.
//!
//! Everything here works on response text so it can be tested without a
//! server.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{Message, DEFAULT_SUBJECT};

/// Shown when a 2xx body is not what the client expects.
pub const INVALID_RESPONSE: &str = "Invalid response from server";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageList {
    #[serde(default)]
    data: Value,
}

/// A message record as the backend stores it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMessage {
    #[serde(rename = "_id")]
    backend_id: Option<String>,
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
    #[serde(default)]
    read: Value,
    #[serde(default)]
    created_at: Value,
}

impl RawMessage {
    fn into_message(self) -> Option<Message> {
        let id = self.backend_id.or(self.id)?;
        let subject = self
            .subject
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
        let created_at = self.created_at.as_str().and_then(parse_timestamp);

        Some(Message {
            id,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            subject,
            body: self.message.unwrap_or_default(),
            read: is_truthy(&self.read),
            created_at,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Which error field wins when a body carries both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorField {
    /// Login reports `error` first
    Error,
    /// Dashboard operations report `message` first
    Message,
}

/// Extract the bearer token from a successful login body.
pub fn login_token(body: &str) -> PortfolioResult<String> {
    let parsed: LoginResponse = serde_json::from_str(body)
        .map_err(|_| PortfolioError::InvalidResponse(INVALID_RESPONSE.to_string()))?;

    match parsed.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(PortfolioError::InvalidResponse(INVALID_RESPONSE.to_string())),
    }
}

/// Map a successful message-list body onto client messages.
///
/// A missing or non-array `data` field is an empty list. Records with
/// neither `_id` nor `id` cannot be acted on and are skipped, as are records
/// whose fields have the wrong shape; one bad record never hides the rest.
pub fn message_list(body: &str) -> PortfolioResult<Vec<Message>> {
    let parsed: MessageList = serde_json::from_str(body)
        .map_err(|_| PortfolioError::InvalidResponse(INVALID_RESPONSE.to_string()))?;

    let Value::Array(items) = parsed.data else {
        return Ok(Vec::new());
    };

    let mut messages = Vec::with_capacity(items.len());
    for item in items {
        let raw: RawMessage = match serde_json::from_value(item) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Skipping malformed message record: {}", e);
                continue;
            }
        };
        match raw.into_message() {
            Some(message) => messages.push(message),
            None => tracing::warn!("Skipping message without an id"),
        }
    }
    Ok(messages)
}

/// User-facing text for a failed request.
pub fn error_message(body: &str, prefer: ErrorField, fallback: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let (first, second) = match prefer {
        ErrorField::Error => (parsed.error, parsed.message),
        ErrorField::Message => (parsed.message, parsed.error),
    };
    first
        .or(second)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Loose truthiness for flags the backend may send as bool, number or string.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
