//! Viewport collaborators: scroll position, section visibility and the clock.
//!
//! Views never query a rendering environment directly; they take a
//! [`Viewport`] so the same logic runs against a terminal, a test double or
//! anything else that can answer these questions.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};

/// Scroll offset beyond which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// What a view needs to know about where it is being shown.
pub trait Viewport: Send + Sync {
    /// Vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;

    /// Whether `section` is currently on screen.
    fn is_visible(&self, section: &str) -> bool;

    /// Wall-clock time.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Whether the header should render in its scrolled style.
#[must_use]
pub fn header_is_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

/// A one-way visibility latch: once a section has been seen, its reveal
/// animation never plays in reverse.
#[derive(Debug, Default)]
pub struct Reveal {
    section: String,
    visible: AtomicBool,
}

impl Reveal {
    /// A latch for `section`, initially hidden.
    #[must_use]
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            visible: AtomicBool::new(false),
        }
    }

    /// The watched section.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Check the viewport; returns the (possibly newly latched) state.
    pub fn observe(&self, viewport: &dyn Viewport) -> bool {
        if self.is_visible() {
            return true;
        }
        if viewport.is_visible(&self.section) {
            self.visible.store(true, Ordering::SeqCst);
            tracing::trace!(section = %self.section, "Section revealed");
            return true;
        }
        false
    }

    /// Whether the section has been revealed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

/// A viewport for non-interactive output: unscrolled, everything visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticViewport;

impl Viewport for StaticViewport {
    fn scroll_offset(&self) -> f64 {
        0.0
    }

    fn is_visible(&self, _section: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct FakeViewport {
        offset: f64,
        visible: Mutex<Vec<String>>,
    }

    impl FakeViewport {
        fn show(&self, section: &str) {
            self.visible.lock().unwrap().push(section.to_string());
        }

        fn hide_all(&self) {
            self.visible.lock().unwrap().clear();
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn is_visible(&self, section: &str) -> bool {
            self.visible.lock().unwrap().iter().any(|s| s == section)
        }
    }

    #[test]
    fn test_header_threshold() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(50.5));
        let viewport = FakeViewport {
            offset: 120.0,
            ..FakeViewport::default()
        };
        assert!(header_is_scrolled(viewport.scroll_offset()));
    }

    #[test]
    fn test_reveal_latches() {
        let viewport = FakeViewport::default();
        let reveal = Reveal::new("analytics");
        assert!(!reveal.observe(&viewport));

        viewport.show("analytics");
        assert!(reveal.observe(&viewport));

        viewport.hide_all();
        assert!(reveal.observe(&viewport));
        assert!(reveal.is_visible());
        assert_eq!(reveal.section(), "analytics");
    }

    #[test]
    fn test_static_viewport() {
        let viewport = StaticViewport;
        assert!(viewport.is_visible("flights"));
        assert!(!header_is_scrolled(viewport.scroll_offset()));
        assert!(viewport.now() <= Utc::now());
    }
}
