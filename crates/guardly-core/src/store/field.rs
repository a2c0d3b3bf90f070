// ── Single observable field ──
//
// One optional entity behind a `watch` channel. Replacement is a single
// `send_replace`, so a subscriber never observes a half-built value.

use std::sync::Arc;

use tokio::sync::watch;

pub(crate) struct ObservableField<T: Send + Sync + 'static> {
    value: watch::Sender<Option<Arc<T>>>,
}

impl<T: Send + Sync + 'static> ObservableField<T> {
    pub(crate) fn new() -> Self {
        let (value, _) = watch::channel(None);
        Self { value }
    }

    /// Current value (cheap `Arc` clone).
    pub(crate) fn get(&self) -> Option<Arc<T>> {
        self.value.borrow().clone()
    }

    /// Replace the value and notify subscribers.
    pub(crate) fn replace(&self, entity: T) -> Arc<T> {
        let entity = Arc::new(entity);
        // `send_replace` updates unconditionally, even with zero receivers.
        self.value.send_replace(Some(Arc::clone(&entity)));
        entity
    }

    /// Drop the value back to unset.
    pub(crate) fn clear(&self) {
        self.value.send_replace(None);
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Option<Arc<T>>> {
        self.value.subscribe()
    }
}
