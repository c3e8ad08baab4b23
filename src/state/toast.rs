//! Success toast shown after a submission goes through

use std::time::{Duration, Instant};

/// Message shown when the collector accepts a submission
pub const SUBMITTED_MESSAGE: &str = "Data submitted successfully";

/// A transient notification that hides itself after a while
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    /// How long a toast stays on screen (6 seconds)
    pub const AUTO_HIDE: Duration = Duration::from_millis(6000);

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn submitted() -> Self {
        Self::new(SUBMITTED_MESSAGE)
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::AUTO_HIDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_is_not_expired() {
        let toast = Toast::submitted();
        assert_eq!(toast.message, SUBMITTED_MESSAGE);
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_old_toast_is_expired() {
        let Some(shown_at) = Instant::now().checked_sub(Toast::AUTO_HIDE) else {
            return;
        };
        let toast = Toast {
            message: "done".to_string(),
            shown_at,
        };
        assert!(toast.is_expired());
    }
}
