//! Process-wide queue of ephemeral user-facing messages.
//!
//! Toasts appear in insertion order, are never deduplicated, and
//! self-expire after a fixed delay. Expiry is deadline-based so tests
//! can drive it with a fake clock instead of sleeping.

use std::fmt;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a toast stays visible.
pub const TOAST_TTL: Duration = Duration::from_millis(4200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Warning,
    Error,
    Info,
}

impl fmt::Display for ToastTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastTone::Success => write!(f, "success"),
            ToastTone::Warning => write!(f, "warning"),
            ToastTone::Error => write!(f, "error"),
            ToastTone::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub tone: ToastTone,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            ttl: TOAST_TTL,
        }
    }

    #[cfg(test)]
    fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    /// Appends a toast with a generated id and schedules its expiry.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        tone: ToastTone,
    ) -> Uuid {
        self.push_at(Instant::now(), title, description, tone)
    }

    pub fn push_at(
        &mut self,
        now: Instant,
        title: impl Into<String>,
        description: Option<String>,
        tone: ToastTone,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description,
            tone,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Drops every toast whose deadline has passed.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Removes and returns all queued toasts; used by the CLI to print
    /// them once at the end of a command.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_generates_unique_ids() {
        let mut queue = ToastQueue::new();
        let a = queue.push("Primeiro", None, ToastTone::Info);
        let b = queue.push("Segundo", None, ToastTone::Info);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut queue = ToastQueue::new();
        queue.push("a", None, ToastTone::Success);
        queue.push("b", None, ToastTone::Warning);
        queue.push("a", None, ToastTone::Success); // no dedup

        let titles: Vec<&str> = queue.active().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "a"]);
    }

    #[test]
    fn test_expiry_returns_queue_to_prior_length() {
        let mut queue = ToastQueue::with_ttl(Duration::from_millis(4200));
        let now = Instant::now();
        let before = queue.len();

        queue.push_at(now, "Diário sincronizado", None, ToastTone::Success);
        assert_eq!(queue.len(), before + 1);

        // Just before the deadline the toast is still visible.
        queue.prune(now + Duration::from_millis(4199));
        assert_eq!(queue.len(), before + 1);

        queue.prune(now + Duration::from_millis(4201));
        assert_eq!(queue.len(), before);
    }

    #[test]
    fn test_prune_only_drops_expired() {
        let mut queue = ToastQueue::with_ttl(Duration::from_secs(1));
        let now = Instant::now();
        queue.push_at(now, "old", None, ToastTone::Info);
        queue.push_at(now + Duration::from_secs(5), "new", None, ToastTone::Info);

        queue.prune(now + Duration::from_secs(2));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.active()[0].title, "new");
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = ToastQueue::new();
        queue.push("a", Some("detalhe".to_string()), ToastTone::Error);
        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].description.as_deref(), Some("detalhe"));
        assert!(queue.is_empty());
    }
}
