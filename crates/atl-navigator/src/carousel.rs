//! Rotating carousels.
//!
//! The index of a carousel is shared between its owner and its auto-advance
//! timer, so it lives in an atomic and every move is a single
//! read-modify-write.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::debug;

use crate::schedule::{spawn_periodic, TaskHandle};

/// A fixed-length ring of slides with a current position.
///
/// The index is always in `[0, len - 1]`; an empty carousel stays at 0.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    index: AtomicUsize,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: AtomicUsize::new(0),
        }
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slide index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Move forward one slide, wrapping from the last to the first.
    pub fn advance(&self) -> usize {
        self.update(|i, len| (i + 1) % len)
    }

    /// Move back one slide, wrapping from the first to the last.
    pub fn retreat(&self) -> usize {
        self.update(|i, len| (i + len - 1) % len)
    }

    /// Jump to `index`, clamped to the last slide.
    pub fn jump_to(&self, index: usize) -> usize {
        self.update(|_, len| index.min(len - 1))
    }

    /// One-based position, e.g. `2 / 4`.
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current() + 1, self.len)
    }

    fn update(&self, step: impl Fn(usize, usize) -> usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        let len = self.len;
        let previous = self
            .index
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |i| Some(step(i, len)))
            .unwrap_or_else(|i| i);
        step(previous, len)
    }
}

/// A carousel that advances on a timer until the user navigates manually.
///
/// Any manual move (`next`, `prev`, `jump_to`) cancels auto-advance for
/// good.
#[derive(Debug)]
pub struct AutoCarousel {
    name: String,
    carousel: Arc<Carousel>,
    autoplay: Mutex<Option<TaskHandle>>,
}

impl AutoCarousel {
    /// Create a carousel and start auto-advancing it every `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(name: impl Into<String>, len: usize, period: Duration) -> Self {
        let name = name.into();
        let carousel = Arc::new(Carousel::new(len));
        let timer_carousel = Arc::clone(&carousel);
        let handle = spawn_periodic(name.clone(), period, move || {
            timer_carousel.advance();
        });
        Self {
            name,
            carousel,
            autoplay: Mutex::new(Some(handle)),
        }
    }

    /// The underlying carousel.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Current slide index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.carousel.current()
    }

    /// Whether the timer is still advancing slides.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.lock_autoplay()
            .as_ref()
            .is_some_and(TaskHandle::is_running)
    }

    /// Manual forward navigation.
    pub fn next(&self) -> usize {
        self.cancel_autoplay();
        self.carousel.advance()
    }

    /// Manual backward navigation.
    pub fn prev(&self) -> usize {
        self.cancel_autoplay();
        self.carousel.retreat()
    }

    /// Manual jump to a slide, clamped to the last one.
    pub fn jump_to(&self, index: usize) -> usize {
        self.cancel_autoplay();
        self.carousel.jump_to(index)
    }

    /// Stop auto-advance without moving.
    pub fn cancel_autoplay(&self) {
        if let Some(handle) = self.lock_autoplay().take() {
            debug!(carousel = %self.name, "Autoplay cancelled by manual navigation");
            handle.stop();
        }
    }

    fn lock_autoplay(&self) -> std::sync::MutexGuard<'_, Option<TaskHandle>> {
        self.autoplay.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
