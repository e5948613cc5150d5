//! Timer-refreshed views.
//!
//! A [`LiveFeed`] holds the latest value produced by a generator and
//! publishes replacements through a `watch` channel. Values are never patched;
//! every refresh swaps in a freshly generated one.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::schedule::{spawn_periodic, TaskHandle};

type Generator<T> = Box<dyn Fn() -> T + Send + Sync>;

struct Shared<T> {
    name: String,
    generate: Generator<T>,
    tx: watch::Sender<T>,
    refreshing: AtomicBool,
    refreshes: AtomicU64,
}

impl<T> Shared<T> {
    fn publish(&self) {
        self.tx.send_replace((self.generate)());
        let count = self.refreshes.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(feed = %self.name, refreshes = count, "Published refresh");
    }
}

/// Clears the refreshing flag however the refresh ends.
struct RefreshGuard<'a>(&'a AtomicBool);

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// A value that is regenerated on a timer and on demand.
pub struct LiveFeed<T> {
    shared: Arc<Shared<T>>,
    refresh_delay: Duration,
    task: Mutex<Option<TaskHandle>>,
}

impl<T> std::fmt::Debug for LiveFeed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveFeed")
            .field("name", &self.shared.name)
            .field("refresh_delay", &self.refresh_delay)
            .field("refreshes", &self.refresh_count())
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

impl<T> LiveFeed<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a feed, generating its first value immediately.
    ///
    /// `refresh_delay` is the simulated latency of a manual [`refresh`](Self::refresh).
    pub fn new<F>(name: impl Into<String>, refresh_delay: Duration, generate: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let (tx, _) = watch::channel(generate());
        Self {
            shared: Arc::new(Shared {
                name: name.into(),
                generate: Box::new(generate),
                tx,
                refreshing: AtomicBool::new(false),
                refreshes: AtomicU64::new(0),
            }),
            refresh_delay,
            task: Mutex::new(None),
        }
    }

    /// Create a feed and start its refresh timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<F>(
        name: impl Into<String>,
        period: Duration,
        refresh_delay: Duration,
        generate: F,
    ) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let feed = Self::new(name, refresh_delay, generate);
        feed.start(period);
        feed
    }

    /// Start (or restart) the refresh timer.
    pub fn start(&self, period: Duration) {
        let shared = Arc::clone(&self.shared);
        let handle = spawn_periodic(self.shared.name.clone(), period, move || shared.publish());
        let previous = self.lock_task().replace(handle);
        drop(previous);
    }

    /// The latest value.
    #[must_use]
    pub fn current(&self) -> T {
        self.shared.tx.borrow().clone()
    }

    /// A receiver notified on every replacement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.shared.tx.subscribe()
    }

    /// Regenerate now, after the simulated delay.
    pub async fn refresh(&self) {
        self.shared.refreshing.store(true, Ordering::SeqCst);
        let _guard = RefreshGuard(&self.shared.refreshing);
        tokio::time::sleep(self.refresh_delay).await;
        self.shared.publish();
    }
}

impl<T> LiveFeed<T> {
    /// Stop the refresh timer. The last value stays readable.
    pub fn unmount(&self) {
        if let Some(handle) = self.lock_task().take() {
            handle.stop();
        }
    }

    /// Whether the refresh timer is running.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lock_task()
            .as_ref()
            .is_some_and(TaskHandle::is_running)
    }

    /// Feed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Whether a manual refresh is waiting on its simulated delay.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.shared.refreshing.load(Ordering::SeqCst)
    }

    /// Number of refreshes since creation, timer and manual combined.
    #[must_use]
    pub fn refresh_count(&self) -> u64 {
        self.shared.refreshes.load(Ordering::SeqCst)
    }

    fn lock_task(&self) -> std::sync::MutexGuard<'_, Option<TaskHandle>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;

    use tokio::time::sleep;

    use super::*;

    const PERIOD: Duration = Duration::from_secs(120);
    const DELAY: Duration = Duration::from_secs(1);

    fn counting() -> impl Fn() -> u32 + Send + Sync + 'static {
        let next = AtomicU32::new(0);
        move || next.fetch_add(1, Ordering::SeqCst)
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_value_is_generated_on_creation() {
        let feed = LiveFeed::new("flights", DELAY, counting());
        assert_eq!(feed.current(), 0);
        assert_eq!(feed.refresh_count(), 0);
        assert!(!feed.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_replaces_value() {
        let feed = LiveFeed::mount("flights", PERIOD, DELAY, counting());
        let mut rx = feed.subscribe();
        assert!(feed.is_mounted());

        sleep(PERIOD - DELAY).await;
        assert_eq!(feed.current(), 0);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
        assert_eq!(feed.refresh_count(), 1);

        sleep(PERIOD * 2 + DELAY).await;
        assert_eq!(feed.current(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_refresh_waits_for_delay() {
        let feed = Arc::new(LiveFeed::new("analytics", DELAY, counting()));
        let background = Arc::clone(&feed);
        let refresh = tokio::spawn(async move { background.refresh().await });

        sleep(DELAY / 2).await;
        assert!(feed.is_refreshing());
        assert_eq!(feed.current(), 0);

        refresh.await.unwrap();
        assert!(!feed.is_refreshing());
        assert_eq!(feed.current(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_refreshing() {
        let feed = LiveFeed::mount("analytics", PERIOD, DELAY, counting());
        sleep(PERIOD + DELAY).await;
        assert_eq!(feed.current(), 1);

        feed.unmount();
        assert!(!feed.is_mounted());
        sleep(PERIOD * 3).await;
        assert_eq!(feed.current(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debug_output() {
        let feed = LiveFeed::mount("flight-board", PERIOD, DELAY, counting());
        let debug = format!("{feed:?}");
        assert!(debug.contains("LiveFeed"));
        assert!(debug.contains("flight-board"));
        assert!(debug.contains("refreshes: 0"));
        assert!(debug.contains("mounted: true"));

        feed.unmount();
        assert!(format!("{feed:?}").contains("mounted: false"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_feed_stops_timer() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let feed = LiveFeed::mount("flights", PERIOD, DELAY, move || {
            counter.fetch_add(1, Ordering::SeqCst)
        });
        drop(feed);
        sleep(PERIOD * 3).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
