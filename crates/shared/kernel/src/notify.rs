//! Transient user-facing notifications ("toasts").
//!
//! Every terminal [`SubmissionOutcome`] is turned into exactly one
//! [`Notification`]. The [`Notifier`] fans them out over a broadcast channel
//! for live renderers and keeps a bounded queue of the ones still on screen.

use gway_domain::config::NotificationConfig;
use gway_domain::outcome::{FormKind, SubmissionOutcome};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: Cow<'static, str>,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Copy shown for a classified submission.
#[must_use]
pub fn copy_for(kind: FormKind, outcome: &SubmissionOutcome) -> (NotificationLevel, Cow<'static, str>) {
    use NotificationLevel::{Error, Success};

    match (kind, outcome) {
        (FormKind::AttorneyApplication, SubmissionOutcome::Success) => {
            (Success, "Thank you for your interest! We will contact you soon.".into())
        },
        (FormKind::Contact, SubmissionOutcome::Success) => {
            (Success, "Message sent successfully! We will contact you soon.".into())
        },
        (FormKind::Newsletter, SubmissionOutcome::Success) => {
            (Success, "Successfully subscribed to our newsletter!".into())
        },
        (FormKind::AttorneyApplication | FormKind::Contact, SubmissionOutcome::Conflict) => {
            (Error, "We already have a request with these details. We will be in touch soon.".into())
        },
        (FormKind::Newsletter, SubmissionOutcome::Conflict) => {
            (Error, "This email is already subscribed".into())
        },
        (FormKind::Newsletter, SubmissionOutcome::Failure(_)) => {
            (Error, "Failed to subscribe. Please try again later.".into())
        },
        (_, SubmissionOutcome::Failure(message)) => (Error, Cow::Owned(message.clone())),
    }
}

/// Generic failure copy handed to the transport when the API gives no message.
#[must_use]
pub const fn fallback_failure(kind: FormKind) -> &'static str {
    match kind {
        FormKind::AttorneyApplication => {
            "Failed to submit. Please check your connection and try again."
        },
        FormKind::Contact => "Failed to send message. Please check your connection and try again.",
        FormKind::Newsletter => "Failed to subscribe. Please try again later.",
    }
}

#[derive(Debug)]
struct NotifierInner {
    duration: Duration,
    capacity: usize,
    next_id: AtomicU64,
    queue: Mutex<VecDeque<Arc<Notification>>>,
    sender: broadcast::Sender<Arc<Notification>>,
}

/// Presenter for transient notifications. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(&NotificationConfig::default())
    }
}

impl Notifier {
    #[must_use]
    pub fn new(config: &NotificationConfig) -> Self {
        let capacity = config.capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);

        Self {
            inner: Arc::new(NotifierInner {
                duration: config.duration(),
                capacity,
                next_id: AtomicU64::new(1),
                queue: Mutex::new(VecDeque::with_capacity(capacity)),
                sender,
            }),
        }
    }

    /// Live feed of new notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Notification>> {
        self.inner.sender.subscribe()
    }

    /// Presents the outcome of a form submission.
    pub fn present(&self, kind: FormKind, outcome: &SubmissionOutcome) -> Arc<Notification> {
        let (level, message) = copy_for(kind, outcome);
        debug!(form = %kind, ?level, "Presenting submission outcome");
        self.push(level, message)
    }

    pub fn success(&self, message: impl Into<Cow<'static, str>>) -> Arc<Notification> {
        self.push(NotificationLevel::Success, message.into())
    }

    pub fn error(&self, message: impl Into<Cow<'static, str>>) -> Arc<Notification> {
        self.push(NotificationLevel::Error, message.into())
    }

    /// Notifications still on screen, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Arc<Notification>> {
        self.active_at(Instant::now())
    }

    /// Same as [`Self::active`], evaluated at `now`. Expired entries are dropped.
    #[must_use]
    pub fn active_at(&self, now: Instant) -> Vec<Arc<Notification>> {
        let mut queue = self.inner.queue.lock();
        queue.retain(|n| !n.is_expired_at(now));
        queue.iter().cloned().collect()
    }

    /// Removes a notification before its duration elapses.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut queue = self.inner.queue.lock();
        let before = queue.len();
        queue.retain(|n| n.id != id);
        before != queue.len()
    }

    fn push(&self, level: NotificationLevel, message: Cow<'static, str>) -> Arc<Notification> {
        let notification = Arc::new(Notification {
            id: self.inner.next_id.fetch_add(1, Ordering::Relaxed),
            level,
            message,
            created_at: Instant::now(),
            duration: self.inner.duration,
        });

        {
            let mut queue = self.inner.queue.lock();
            queue.retain(|n| !n.is_expired_at(notification.created_at));
            while queue.len() >= self.inner.capacity {
                queue.pop_front();
            }
            queue.push_back(Arc::clone(&notification));
        }

        // No live receivers is fine; the queue still holds it.
        if self.inner.sender.send(Arc::clone(&notification)).is_err() {
            trace!(id = notification.id, "No live notification subscribers");
        }

        notification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier(duration_ms: u64, capacity: usize) -> Notifier {
        Notifier::new(&NotificationConfig { duration_ms, capacity })
    }

    #[test]
    fn newsletter_conflict_says_already_subscribed() {
        let (level, message) = copy_for(FormKind::Newsletter, &SubmissionOutcome::Conflict);
        assert_eq!(level, NotificationLevel::Error);
        assert_eq!(message, "This email is already subscribed");
    }

    #[test]
    fn lead_failure_surfaces_server_message() {
        let outcome = SubmissionOutcome::Failure("Phone number already registered".into());
        let (level, message) = copy_for(FormKind::AttorneyApplication, &outcome);
        assert_eq!(level, NotificationLevel::Error);
        assert_eq!(message, "Phone number already registered");
    }

    #[test]
    fn queue_is_bounded_and_drops_oldest() {
        let n = notifier(60_000, 2);
        let first = n.success("one");
        n.success("two");
        n.error("three");

        let active = n.active();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|a| a.id != first.id));
        assert_eq!(active[1].message, "three");
    }

    #[test]
    fn expired_notifications_are_pruned() {
        let n = notifier(4000, 8);
        let shown = n.present(FormKind::Contact, &SubmissionOutcome::Success);

        assert_eq!(n.active_at(shown.created_at + Duration::from_millis(3999)).len(), 1);
        assert!(n.active_at(shown.created_at + Duration::from_millis(4000)).is_empty());
    }

    #[test]
    fn dismiss_removes_by_id() {
        let n = Notifier::default();
        let shown = n.error("boom");
        assert!(n.dismiss(shown.id));
        assert!(!n.dismiss(shown.id));
        assert!(n.active().is_empty());
    }

    #[tokio::test]
    async fn subscribers_receive_presented_notifications() {
        let n = Notifier::default();
        let mut rx = n.subscribe();

        n.present(FormKind::Newsletter, &SubmissionOutcome::Success);

        let received = rx.recv().await.expect("notification");
        assert_eq!(received.level, NotificationLevel::Success);
        assert_eq!(received.message, "Successfully subscribed to our newsletter!");
        assert_eq!(received.duration, Duration::from_millis(4000));
    }
}
