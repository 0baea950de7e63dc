//! User-visible notifications.
//!
//! Every error a page catches is logged and pushed here; the `Notices`
//! component renders the queue in a corner stack with dismiss buttons.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use api::ApiError;

/// Most notices kept at once; older ones drop off the front.
pub const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notice { id: self.next_id, kind, message: message.into() });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    /// Log `err` with `context` and queue its user-facing message.
    /// Cancellations are expected and stay silent.
    pub fn error(&mut self, context: &str, err: &ApiError, fallback: &str) -> Option<u64> {
        if err.is_cancelled() {
            return None;
        }
        log::error!("{context}: {err}");
        Some(self.push(NoticeKind::Error, err.user_message(fallback)))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
