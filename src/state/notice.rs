//! Transient submission notices

use std::time::{Duration, Instant};

/// How long a notice stays on screen before the event loop removes it
pub const NOTICE_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A dismissible banner reporting the submission outcome.
///
/// At most one exists per form; constructing a replacement restarts the
/// clock, so a stale deadline can never fire against a newer notice.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    shown_at: Instant,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTICE_TTL
    }

    /// Shift the notice into the past, as if shown `by` ago
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.shown_at -= by;
    }
}
