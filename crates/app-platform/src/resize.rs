//! Debounced viewport resize watcher
//!
//! Raw resize notifications are coalesced: every new notification restarts the
//! debounce timer, and only the last viewport seen when the timer finally
//! elapses is published to subscribers.

use crate::context::Viewport;
use crate::{PlatformError, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default quiet period before a resize is published
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Watches viewport resizes and publishes debounced updates
#[derive(Debug)]
pub struct ViewportWatcher {
    events: mpsc::UnboundedSender<Viewport>,
    published: watch::Receiver<Viewport>,
    pending: Arc<RwLock<Option<Viewport>>>,
    task: JoinHandle<()>,
}

impl ViewportWatcher {
    /// Spawn a watcher on the current tokio runtime
    pub fn spawn(initial: Viewport, debounce: Duration) -> Result<Self> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| PlatformError::NoRuntime(e.to_string()))?;

        let (events, rx) = mpsc::unbounded_channel();
        let (publisher, published) = watch::channel(initial);
        let pending = Arc::new(RwLock::new(None));

        let task = handle.spawn(debounce_loop(rx, publisher, Arc::clone(&pending), debounce));

        Ok(Self {
            events,
            published,
            pending,
            task,
        })
    }

    /// Record a raw resize event
    pub fn notify_resize(&self, viewport: Viewport) -> Result<()> {
        *self.pending.write() = Some(viewport);
        self.events.send(viewport).map_err(|_| {
            tracing::warn!("Resize listener is gone, dropping {}x{}", viewport.width, viewport.height);
            PlatformError::Closed
        })
    }

    /// Last published (debounced) viewport
    pub fn current(&self) -> Viewport {
        *self.published.borrow()
    }

    /// Latest raw viewport still waiting for the debounce window to elapse
    pub fn pending(&self) -> Option<Viewport> {
        *self.pending.read()
    }

    /// Subscribe to debounced viewport updates
    pub fn subscribe(&self) -> watch::Receiver<Viewport> {
        self.published.clone()
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn debounce_loop(
    mut events: mpsc::UnboundedReceiver<Viewport>,
    publisher: watch::Sender<Viewport>,
    pending: Arc<RwLock<Option<Viewport>>>,
    debounce: Duration,
) {
    while let Some(mut latest) = events.recv().await {
        loop {
            tokio::select! {
                next = events.recv() => match next {
                    Some(viewport) => latest = viewport,
                    None => break,
                },
                _ = tokio::time::sleep(debounce) => break,
            }
        }

        // A newer notification may have landed after the loop exited
        {
            let mut slot = pending.write();
            if *slot == Some(latest) {
                *slot = None;
            }
        }

        let changed = publisher.send_if_modified(|current| {
            if *current == latest {
                false
            } else {
                *current = latest;
                true
            }
        });

        if changed {
            tracing::debug!("Viewport resized to {}x{}", latest.width, latest.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_resize_is_debounced() {
        let watcher = ViewportWatcher::spawn(Viewport::new(1024, 768), DEFAULT_RESIZE_DEBOUNCE).unwrap();
        let mut rx = watcher.subscribe();

        watcher.notify_resize(Viewport::new(800, 600)).unwrap();
        assert_eq!(watcher.pending(), Some(Viewport::new(800, 600)));

        // Nothing is published before the quiet period ends
        let early = tokio::time::timeout(Duration::from_millis(100), rx.changed()).await;
        assert!(early.is_err());
        assert_eq!(watcher.current(), Viewport::new(1024, 768));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Viewport::new(800, 600));
        assert_eq!(watcher.pending(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bursts_coalesce_into_one_update() {
        let watcher = ViewportWatcher::spawn(Viewport::new(1024, 768), DEFAULT_RESIZE_DEBOUNCE).unwrap();
        let mut rx = watcher.subscribe();

        for width in [900, 800, 700, 600] {
            watcher.notify_resize(Viewport::new(width, 768)).unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Viewport::new(600, 768));
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_size_does_not_notify() {
        let watcher = ViewportWatcher::spawn(Viewport::new(1024, 768), DEFAULT_RESIZE_DEBOUNCE).unwrap();
        let mut rx = watcher.subscribe();

        watcher.notify_resize(Viewport::new(1024, 768)).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(1), rx.changed()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_pending_survives_publish() {
        let (events, rx) = mpsc::unbounded_channel();
        let (publisher, mut published) = watch::channel(Viewport::new(1024, 768));
        let pending = Arc::new(RwLock::new(None));
        let task = tokio::spawn(debounce_loop(rx, publisher, Arc::clone(&pending), DEFAULT_RESIZE_DEBOUNCE));

        events.send(Viewport::new(800, 600)).unwrap();
        // Recorded but not yet queued when the first window closes
        *pending.write() = Some(Viewport::new(640, 480));

        published.changed().await.unwrap();
        assert_eq!(*published.borrow_and_update(), Viewport::new(800, 600));
        assert_eq!(*pending.read(), Some(Viewport::new(640, 480)));

        events.send(Viewport::new(640, 480)).unwrap();
        published.changed().await.unwrap();
        assert_eq!(*published.borrow_and_update(), Viewport::new(640, 480));
        assert_eq!(*pending.read(), None);

        task.abort();
    }

    #[test]
    fn test_spawn_without_runtime_fails() {
        let result = ViewportWatcher::spawn(Viewport::default(), DEFAULT_RESIZE_DEBOUNCE);
        assert!(matches!(result, Err(PlatformError::NoRuntime(_))));
    }
}
