use serde::Serialize;

/// Delivery-log entry kind, stored as text in the `email_logs.type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailKind {
    Notification,
    Reminder,
}

impl EmailKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailKind::Notification => "notification",
            EmailKind::Reminder => "reminder",
        }
    }
}
