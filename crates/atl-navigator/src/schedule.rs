//! Periodic background tasks with an explicit, cancellable lifecycle.
//!
//! Every timer-driven view (flight board refresh, analytics refresh,
//! carousel auto-advance) runs as a tokio task owned by a [`TaskHandle`].
//! The first tick happens one full period after spawning. Stopping a handle,
//! or dropping it, ends the task; a tick that is in flight when the stop
//! arrives is abandoned.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Smallest period a task may run at.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A handle to a running periodic task.
///
/// The task stops when the handle is stopped or dropped.
#[derive(Debug)]
pub struct TaskHandle {
    name: String,
    period: Duration,
    stop_tx: watch::Sender<bool>,
    running: Arc<AtomicBool>,
    ticks: Arc<AtomicU64>,
}

impl TaskHandle {
    /// The task's name, used in log events.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time between ticks.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Signal the task to stop. Calling this more than once is harmless.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            debug!(task = %self.name, "Stopping task");
        }
        self.stop_tx.send_replace(true);
    }

    /// Whether the task has not been stopped and has not exited.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn a task that calls `tick` every `period`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_periodic<F>(name: impl Into<String>, period: Duration, mut tick: F) -> TaskHandle
where
    F: FnMut() + Send + 'static,
{
    spawn_periodic_async(name, period, move || {
        tick();
        std::future::ready(())
    })
}

/// Spawn a task that runs the future returned by `tick` every `period`.
///
/// A tick that takes longer than `period` delays the following ticks rather
/// than bunching them up.
pub fn spawn_periodic_async<F, Fut>(
    name: impl Into<String>,
    period: Duration,
    mut tick: F,
) -> TaskHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let name = name.into();
    let period = period.max(MIN_PERIOD);
    let (stop_tx, mut stop_rx) = watch::channel(false);
    let running = Arc::new(AtomicBool::new(true));
    let ticks = Arc::new(AtomicU64::new(0));

    let task_name = name.clone();
    let task_running = Arc::clone(&running);
    let task_ticks = Arc::clone(&ticks);

    info!(task = %name, period_ms = period.as_millis(), "Starting task");

    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = stop_rx.changed() => break,
                _ = ticker.tick() => {
                    tokio::select! {
                        biased;
                        _ = stop_rx.changed() => break,
                        () = tick() => {
                            task_ticks.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                }
            }
        }

        task_running.store(false, Ordering::SeqCst);
        info!(
            task = %task_name,
            ticks = task_ticks.load(Ordering::SeqCst),
            "Task stopped"
        );
    });

    TaskHandle {
        name,
        period,
        stop_tx,
        running,
        ticks,
    }
}

/// A set of tasks that are torn down together.
#[derive(Debug, Default)]
pub struct TaskGroup {
    handles: Vec<TaskHandle>,
}

impl TaskGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a task.
    pub fn add(&mut self, handle: TaskHandle) {
        self.handles.push(handle);
    }

    /// Stop every task in the group.
    pub fn stop_all(&self) {
        for handle in &self.handles {
            handle.stop();
        }
    }

    /// Number of tasks in the group.
    #[must_use]
    pub fn count(&self) -> usize {
        self.handles.len()
    }

    /// Whether any task is still running.
    #[must_use]
    pub fn any_running(&self) -> bool {
        self.handles.iter().any(TaskHandle::is_running)
    }

    /// Look a task up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TaskHandle> {
        self.handles.iter().find(|h| h.name() == name)
    }
}
