use alloc::sync::Arc;

use crate::carousel::Carousel;

/// A callback fired when a carousel state update occurs.
///
/// The second argument is `is_dragging`.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel, bool) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: the callback is stored in an `Arc`
/// so adapters can update a few fields and call `Carousel::set_options` without
/// reallocating closures.
pub struct CarouselOptions {
    /// How many items share one page. Values below 1 are treated as 1.
    pub items_per_page: usize,

    /// Autoplay period in milliseconds. `0` disables autoplay entirely.
    pub autoplay_interval_ms: u64,

    /// Wrap-around pagination instead of saturating at the first/last page.
    pub loop_enabled: bool,

    /// Fraction of the container width a drag must cover to commit a page
    /// change on release. Below this, the drag snaps back.
    pub drag_commit_ratio: f64,

    /// The page shown after initialization (clamped to the page range).
    pub initial_page: usize,

    /// Enables/disables the carousel. When disabled, navigation and autoplay
    /// are no-ops and the rendered offset stays at the initial page.
    pub enabled: bool,

    /// Optional callback fired when the carousel's internal state changes.
    ///
    /// The `is_dragging` argument indicates whether a drag session is active.
    pub on_change: Option<OnChangeCallback>,
}

/// Fraction of the container width that commits a drag, from the original
/// widget's release threshold.
pub(crate) const DEFAULT_DRAG_COMMIT_RATIO: f64 = 0.12;

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            items_per_page: 1,
            autoplay_interval_ms: 0,
            loop_enabled: true,
            drag_commit_ratio: DEFAULT_DRAG_COMMIT_RATIO,
            initial_page: 0,
            enabled: true,
            on_change: None,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from the widget's declarative string attributes
    /// (`data-per-view`, `data-autoplay`, `data-loop` in the reference markup).
    ///
    /// Malformed values degrade to documented defaults instead of erroring:
    /// - non-numeric or missing per-view → 1 (and anything below 1 becomes 1)
    /// - non-numeric or missing autoplay → 0 (disabled)
    /// - loop is the literal string comparison `== "true"`, defaulting to true
    pub fn from_attrs(
        per_view: Option<&str>,
        autoplay: Option<&str>,
        loop_enabled: Option<&str>,
    ) -> Self {
        let items_per_page = per_view
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        let autoplay_interval_ms = autoplay
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(0);
        let loop_enabled = loop_enabled.map_or(true, |s| s.trim() == "true");
        Self {
            items_per_page,
            autoplay_interval_ms,
            loop_enabled,
            ..Self::default()
        }
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_loop_enabled(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    pub fn with_drag_commit_ratio(mut self, ratio: f64) -> Self {
        self.drag_commit_ratio = ratio;
        self
    }

    pub fn with_initial_page(mut self, initial_page: usize) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            items_per_page: self.items_per_page,
            autoplay_interval_ms: self.autoplay_interval_ms,
            loop_enabled: self.loop_enabled,
            drag_commit_ratio: self.drag_commit_ratio,
            initial_page: self.initial_page,
            enabled: self.enabled,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("items_per_page", &self.items_per_page)
            .field("autoplay_interval_ms", &self.autoplay_interval_ms)
            .field("loop_enabled", &self.loop_enabled)
            .field("drag_commit_ratio", &self.drag_commit_ratio)
            .field("initial_page", &self.initial_page)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
