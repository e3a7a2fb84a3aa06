use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Error,
    Warning,
    Success,
    Info,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Error => write!(f, "error"),
            NotificationLevel::Warning => write!(f, "warning"),
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Info => write!(f, "info"),
        }
    }
}

/// An operator-facing alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppNotification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub level: NotificationLevel,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub read: bool,
}

impl AppNotification {
    /// Builds an unread notification stamped with the current time.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        level: NotificationLevel,
    ) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        Self {
            id: format!("notif-{timestamp}"),
            title: title.into(),
            message: message.into(),
            level,
            timestamp,
            read: false,
        }
    }
}
