use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ENTER_ANIMATION, ERROR_COLOR, INFO_COLOR, SUCCESS_COLOR};

pub const KEYFRAMES_CSS: &str = r#"
    @keyframes slideIn {
        from {
            transform: translateX(400px);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    @keyframes slideOut {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(400px);
            opacity: 0;
        }
    }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Unknown tags fall back to `Info`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => INFO_COLOR,
            Severity::Success => SUCCESS_COLOR,
            Severity::Error => ERROR_COLOR,
        }
    }
}

impl From<&str> for Severity {
    fn from(tag: &str) -> Self {
        Severity::from_tag(tag)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub(crate) u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn class_name(&self) -> String {
        format!("notification {}", self.severity)
    }

    /// Inline style for the entering toast.
    pub fn style(&self) -> String {
        format!(
            "position: fixed; \
             top: 20px; \
             right: 20px; \
             padding: 15px 20px; \
             background: {}; \
             color: white; \
             border-radius: 8px; \
             box-shadow: 0 4px 12px rgba(0,0,0,0.2); \
             z-index: 10000; \
             animation: {};",
            self.severity.color(),
            ENTER_ANIMATION
        )
    }
}
