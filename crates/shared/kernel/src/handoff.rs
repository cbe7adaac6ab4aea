//! Read-once hand-off of a legal service selection between page sections.
//!
//! A service card stores the choice; the next form that opens consumes it.

use gway_domain::service::LegalService;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, trace};

const CHANNEL_CAPACITY: usize = 8;

#[derive(Debug)]
struct HandoffInner {
    slot: Mutex<Option<LegalService>>,
    sender: broadcast::Sender<LegalService>,
}

#[derive(Debug, Clone)]
pub struct ServiceHandoff {
    inner: Arc<HandoffInner>,
}

impl Default for ServiceHandoff {
    fn default() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { inner: Arc::new(HandoffInner { slot: Mutex::new(None), sender }) }
    }
}

impl ServiceHandoff {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection, replacing any unconsumed one, and notifies listeners.
    ///
    /// Returns how many listeners were notified.
    pub fn select(&self, service: LegalService) -> usize {
        debug!(service = %service, "Service selected for hand-off");
        *self.inner.slot.lock() = Some(service);

        // The slot still holds the selection for the next form.
        self.inner.sender.send(service).unwrap_or_else(|_| {
            trace!(service = %service, "No live hand-off subscribers");
            0
        })
    }

    /// Consumes the pending selection. A second call returns `None`.
    #[must_use]
    pub fn take(&self) -> Option<LegalService> {
        self.inner.slot.lock().take()
    }

    #[must_use]
    pub fn peek(&self) -> Option<LegalService> {
        *self.inner.slot.lock()
    }

    /// Listens for selections made after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LegalService> {
        self.inner.sender.subscribe()
    }
}
