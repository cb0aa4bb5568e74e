//! Core types for the admin console

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Subject shown when a message arrives without one.
pub const DEFAULT_SUBJECT: &str = "Contact Message";

/// A contact-form message, as held in the dashboard cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    /// Whether the sender has been contacted
    pub read: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Creation time formatted for display in local time.
    ///
    /// Messages without a timestamp show the current time, as the site
    /// always did.
    pub fn display_time(&self) -> String {
        let at = self.created_at.unwrap_or_else(Utc::now);
        at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields non-empty; the form blocks submission otherwise.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// Dashboard status line. Each action replaces the previous banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_completeness() {
        assert!(Credentials::new("admin", "pw").is_complete());
        assert!(!Credentials::new("", "pw").is_complete());
        assert!(!Credentials::new("admin", "").is_complete());
    }

    #[test]
    fn banner_kind_serializes_lowercase() {
        let json = serde_json::to_string(&Banner::error("nope")).unwrap();
        assert_eq!(json, r#"{"kind":"error","text":"nope"}"#);
        assert!(Banner::error("x").is_error());
        assert!(!Banner::success("x").is_error());
    }

    #[test]
    fn display_time_uses_timestamp() {
        let msg = Message {
            id: "m1".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            subject: DEFAULT_SUBJECT.into(),
            body: "hi".into(),
            read: false,
            created_at: Some("2025-03-01T10:00:00Z".parse().unwrap()),
        };
        assert!(msg.display_time().starts_with("2025-0"));
    }
}
