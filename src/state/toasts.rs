//! Transient toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Maximum toasts shown at once; the oldest is evicted beyond this
pub const TOAST_LIMIT: usize = 3;

/// One notification with its expiry deadline
#[derive(Debug, Clone)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub expires_at: Instant,
}

/// FIFO queue of live toasts, pruned by the event loop each tick
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<ToastMessage>,
}

impl ToastQueue {
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push_at(Instant::now(), title.into(), description.into());
    }

    fn push_at(&mut self, now: Instant, title: String, description: String) {
        // A repeat of the newest toast extends its lifetime instead of stacking
        if let Some(last) = self.toasts.back_mut() {
            if last.title == title && last.description == description {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }

        self.toasts.push_back(ToastMessage {
            title,
            description,
            expires_at: now + TOAST_TTL,
        });

        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    /// Drop every toast whose TTL has elapsed
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToastMessage> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_prune_respect_ttl() {
        let mut queue = ToastQueue::default();
        let t0 = Instant::now();

        queue.push_at(t0, "Auto-saved".into(), "done".into());
        assert_eq!(queue.iter().count(), 1);

        queue.prune(t0 + TOAST_TTL / 2);
        assert_eq!(queue.iter().count(), 1);

        queue.prune(t0 + TOAST_TTL + Duration::from_millis(1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_duplicate_push_extends_instead_of_stacking() {
        let mut queue = ToastQueue::default();
        let t0 = Instant::now();

        queue.push_at(t0, "Auto-saved".into(), "done".into());
        queue.push_at(t0 + Duration::from_secs(2), "Auto-saved".into(), "done".into());

        assert_eq!(queue.iter().count(), 1);
        // Still alive past the original expiry because the repeat renewed it
        queue.prune(t0 + TOAST_TTL + Duration::from_secs(1));
        assert_eq!(queue.iter().count(), 1);
    }

    #[test]
    fn test_distinct_toasts_stack_up_to_the_limit() {
        let mut queue = ToastQueue::default();
        let t0 = Instant::now();

        for i in 0..(TOAST_LIMIT + 2) {
            queue.push_at(t0, format!("toast {i}"), String::new());
        }

        // Oldest evicted first
        let titles: Vec<_> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["toast 2", "toast 3", "toast 4"]);
    }
}
