// ── Reactive field streams ──
//
// Subscription type for consuming field changes from the DashboardStore.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A subscription to one dashboard field.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via [`changed()`](Self::changed) or by converting to a
/// `Stream`.
pub struct FieldStream<V: Clone + Send + Sync + 'static> {
    current: V,
    receiver: watch::Receiver<V>,
}

impl<V: Clone + Send + Sync + 'static> FieldStream<V> {
    pub(crate) fn new(receiver: watch::Receiver<V>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The value captured at creation time or by the last `changed()`.
    pub fn current(&self) -> &V {
        &self.current
    }

    /// The latest value (may have changed since creation).
    pub fn latest(&self) -> V {
        self.receiver.borrow().clone()
    }

    /// Wait for the next replacement, returning the new value.
    /// Returns `None` if the store has been dropped.
    pub async fn changed(&mut self) -> Option<V> {
        self.receiver.changed().await.ok()?;
        let value = self.receiver.borrow_and_update().clone();
        self.current = value.clone();
        Some(value)
    }

    /// Wait until the value satisfies `predicate` (checked immediately
    /// against the latest value first).
    pub async fn wait_for(&mut self, predicate: impl FnMut(&V) -> bool) -> Option<V> {
        let value = self.receiver.wait_for(predicate).await.ok()?.clone();
        self.current = value.clone();
        Some(value)
    }

    /// Convert into a `Stream` yielding the current value, then every
    /// replacement.
    pub fn into_stream(self) -> FieldWatchStream<V> {
        FieldWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct FieldWatchStream<V: Clone + Send + Sync + 'static> {
    inner: WatchStream<V>,
}

impl<V: Clone + Send + Sync + 'static> Stream for FieldWatchStream<V> {
    type Item = V;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream boxes its inner future, so it is Unpin for any V.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures_util::StreamExt;

    use super::*;

    #[tokio::test]
    async fn changed_tracks_latest_value() {
        let (tx, rx) = watch::channel(1u32);
        let mut stream = FieldStream::new(rx);
        assert_eq!(*stream.current(), 1);

        tx.send_replace(2);
        assert_eq!(stream.latest(), 2);
        assert_eq!(stream.changed().await, Some(2));
        assert_eq!(*stream.current(), 2);
    }

    #[tokio::test]
    async fn changed_ends_when_sender_dropped() {
        let (tx, rx) = watch::channel(0u32);
        let mut stream = FieldStream::new(rx);
        drop(tx);
        assert_eq!(stream.changed().await, None);
    }

    #[tokio::test]
    async fn wait_for_returns_matching_value() {
        let (tx, rx) = watch::channel(false);
        let mut stream = FieldStream::new(rx);

        let waiter = tokio::spawn(async move { stream.wait_for(|v| *v).await });
        tx.send_replace(true);
        assert_eq!(waiter.await.unwrap(), Some(true));
    }

    #[tokio::test]
    async fn into_stream_yields_initial_then_updates() {
        let (tx, rx) = watch::channel("a".to_string());
        let mut stream = FieldStream::new(rx).into_stream();

        assert_eq!(stream.next().await.as_deref(), Some("a"));
        tx.send_replace("b".into());
        assert_eq!(stream.next().await.as_deref(), Some("b"));
    }
}
