//! Notification surface state

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A short-lived status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Increases with every message; a hide timer only hides its own message
    pub seq: u64,
}

impl Notification {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "notification success show",
            NotificationKind::Error => "notification error show",
        }
    }

    #[cfg(test)]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
