#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A short-lived message, dismissed automatically once its lifetime is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationKind {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-600",
            Self::Error => "bg-red-600",
        }
    }
}
