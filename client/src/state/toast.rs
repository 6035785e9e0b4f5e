//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Toasts are non-blocking: pushing one never affects the view or form state.
//! The host component schedules auto-dismissal; a dismiss for an id that is
//! already gone is a no-op, so manual and timed dismissal can race safely.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// Maximum toasts visible at once; the oldest is evicted first.
pub const TOAST_LIMIT: usize = 3;

/// How long a toast stays up before auto-dismissal.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.toasts.len() >= TOAST_LIMIT {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast { id, title: title.into(), description: description.into(), variant });
        id
    }

    /// Remove toast `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
