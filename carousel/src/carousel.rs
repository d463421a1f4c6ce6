use alloc::sync::Arc;
use core::cell::Cell;

use crate::autoplay::Autoplay;
use crate::gesture::{self, CommitDecision, GestureContext, GestureEffects, GestureEvent};
use crate::paginator::{Paginator, page_count};
use crate::state::{AutoplayState, PageState, WidgetState};
use crate::{ArrowKey, CarouselOptions};

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by forwarding events and a millisecond clock.
/// - Rendering is exposed as an offset in percent of one item width
///   ([`Carousel::offset_percent`]) plus the active page index for dots.
///
/// One instance exists per widget container. The item set is fixed at
/// construction; a container without items yields a disabled instance whose
/// operations are all no-ops (other instances on the page are unaffected).
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    item_count: usize,
    paginator: Paginator,
    autoplay: Autoplay,
    gesture: gesture::GestureState,
    container_width: f64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a new carousel over `item_count` items.
    ///
    /// `initial_page` is clamped into the derived page range. With
    /// `item_count == 0` the instance comes up disabled.
    pub fn new(options: CarouselOptions, item_count: usize) -> Self {
        cdebug!(
            item_count,
            items_per_page = options.items_per_page,
            autoplay_interval_ms = options.autoplay_interval_ms,
            loop_enabled = options.loop_enabled,
            "Carousel::new"
        );
        let pages = page_count(item_count, options.items_per_page);
        let mut paginator = Paginator::new(pages, options.loop_enabled);
        paginator.go_to(options.initial_page as i64);
        let autoplay = Autoplay::new(options.autoplay_interval_ms);
        Self {
            item_count,
            paginator,
            autoplay,
            gesture: gesture::GestureState::Idle,
            container_width: 0.0,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count()
    }

    pub fn current_index(&self) -> usize {
        self.paginator.index()
    }

    /// `false` when the container had no items or the options disable the
    /// widget. Disabled instances absorb every operation silently.
    pub fn is_enabled(&self) -> bool {
        self.options.enabled && self.item_count > 0
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Updates the container width the host measured. Drag thresholds and
    /// previews are computed against this.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_dragging());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for adapters: committing a drag touches the index, the
    /// autoplay deadline, and the drag flag together; without batching each
    /// setter may trigger `on_change`, which can be expensive if the callback
    /// drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Replaces the options, rebuilding what the change invalidates: the page
    /// count and index when the page geometry changed, the autoplay timer when
    /// the interval changed, everything when enablement toggled.
    pub fn set_options(&mut self, options: CarouselOptions) {
        let prev_per = self.options.items_per_page;
        let prev_loop = self.options.loop_enabled;
        let prev_interval = self.options.autoplay_interval_ms;
        let was_enabled = self.options.enabled;
        self.options = options;
        ctrace!(
            items_per_page = self.options.items_per_page,
            autoplay_interval_ms = self.options.autoplay_interval_ms,
            loop_enabled = self.options.loop_enabled,
            enabled = self.options.enabled,
            "Carousel::set_options"
        );

        if !self.options.enabled {
            self.reset_to_initial();
        } else if !was_enabled {
            self.reset_to_initial();
        } else {
            if self.options.items_per_page != prev_per || self.options.loop_enabled != prev_loop {
                self.rebuild_paginator();
            }
            if self.options.autoplay_interval_ms != prev_interval {
                self.autoplay = Autoplay::new(self.options.autoplay_interval_ms);
            }
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    fn reset_to_initial(&mut self) {
        let pages = page_count(self.item_count, self.options.items_per_page);
        self.paginator = Paginator::new(pages, self.options.loop_enabled);
        self.paginator.go_to(self.options.initial_page as i64);
        self.autoplay = Autoplay::new(self.options.autoplay_interval_ms);
        self.gesture = gesture::GestureState::Idle;
    }

    fn rebuild_paginator(&mut self) {
        let kept = self.paginator.index();
        let pages = page_count(self.item_count, self.options.items_per_page);
        self.paginator = Paginator::new(pages, self.options.loop_enabled);
        // Keep the visual position where possible; a smaller page count
        // saturates rather than wraps.
        self.paginator.go_to(kept.min(pages - 1) as i64);
    }

    /// Navigates to a page. Out-of-range targets wrap (looping) or saturate.
    ///
    /// Returns the index actually landed on.
    pub fn go_to(&mut self, target: i64) -> usize {
        if !self.is_enabled() {
            return self.paginator.index();
        }
        let index = self.paginator.go_to(target);
        ctrace!(requested = target, index, "Carousel::go_to");
        self.notify();
        index
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.paginator.index() as i64 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.paginator.index() as i64 - 1)
    }

    /// User-initiated navigation (prev/next button, dot click): navigates and
    /// resets the autoplay countdown from `now_ms`.
    pub fn go_to_user(&mut self, target: i64, now_ms: u64) -> usize {
        if !self.is_enabled() {
            return self.paginator.index();
        }
        let mut index = self.paginator.index();
        self.batch_update(|c| {
            index = c.go_to(target);
            c.autoplay.restart(now_ms);
        });
        index
    }

    pub fn next_user(&mut self, now_ms: u64) -> usize {
        self.go_to_user(self.paginator.index() as i64 + 1, now_ms)
    }

    pub fn prev_user(&mut self, now_ms: u64) -> usize {
        self.go_to_user(self.paginator.index() as i64 - 1, now_ms)
    }

    /// Arrow-key navigation while focus is inside the container.
    ///
    /// Returns `true` when the key was consumed (the host should suppress the
    /// browser's default scroll).
    pub fn handle_key(&mut self, key: ArrowKey, now_ms: u64) -> bool {
        if !self.is_enabled() {
            return false;
        }
        match key {
            ArrowKey::Left => self.prev_user(now_ms),
            ArrowKey::Right => self.next_user(now_ms),
        };
        true
    }

    /// The committed translation offset, in percent of one item width:
    /// `-(100 / items_per_page) * current_index`.
    pub fn offset_percent(&self) -> f64 {
        self.offset_percent_for_pages(self.paginator.index() as f64)
    }

    /// Offset for a fractional page position (drag previews).
    pub fn offset_percent_for_pages(&self, pages: f64) -> f64 {
        let per = self.options.items_per_page.max(1) as f64;
        -(100.0 / per) * pages
    }

    /// Schedules autoplay. No-op when the interval is 0, a deadline is already
    /// pending, or the instance is disabled.
    pub fn start_autoplay(&mut self, now_ms: u64) {
        if !self.is_enabled() {
            return;
        }
        self.autoplay.start(now_ms);
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    pub fn restart_autoplay(&mut self, now_ms: u64) {
        if !self.is_enabled() {
            return;
        }
        self.autoplay.restart(now_ms);
    }

    /// Advances the clock. When the autoplay deadline has elapsed this fires a
    /// single `next()` (wrapping per the loop policy) and reschedules from
    /// `now_ms`; returns whether it fired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_enabled() {
            return false;
        }
        if !self.autoplay.tick(now_ms) {
            return false;
        }
        ctrace!(now_ms, "autoplay fired");
        self.next();
        true
    }

    pub fn gesture_state(&self) -> gesture::GestureState {
        self.gesture
    }

    /// Feeds a pointer/touch event through the gesture state machine.
    ///
    /// Internal effects (autoplay stop/restart, index commits) are applied
    /// here; the returned record carries what the render surface still needs
    /// (drag hint, transition suppression, fractional previews). The drag
    /// session fully owns index updates until it commits.
    pub fn handle_gesture(&mut self, event: GestureEvent, now_ms: u64) -> GestureEffects {
        if !self.is_enabled() {
            return GestureEffects::default();
        }
        let ctx = GestureContext {
            current_index: self.paginator.index(),
            container_width: self.container_width,
            commit_ratio: self.options.drag_commit_ratio,
        };
        let (next, fx) = gesture::transition(self.gesture, event, ctx);
        self.batch_update(|c| {
            c.gesture = next;
            if fx.stop_autoplay {
                c.autoplay.stop();
            }
            match fx.commit {
                Some(CommitDecision::Prev) => {
                    c.prev();
                }
                Some(CommitDecision::Next) => {
                    c.next();
                }
                Some(CommitDecision::Stay(origin)) => {
                    c.go_to(origin as i64);
                }
                None => {}
            }
            if fx.restart_autoplay {
                c.autoplay.restart(now_ms);
            }
            if fx.preview_pages.is_some() || fx.drag_hint.is_some() {
                c.notify();
            }
        });
        fx
    }

    /// Returns a lightweight snapshot of the current page position.
    pub fn page_state(&self) -> PageState {
        PageState {
            index: self.paginator.index(),
        }
    }

    /// Returns a lightweight snapshot of the autoplay timer.
    pub fn autoplay_state(&self) -> AutoplayState {
        AutoplayState {
            deadline_ms: self.autoplay.deadline_ms(),
        }
    }

    /// Returns a combined snapshot of page + autoplay state.
    pub fn widget_state(&self) -> WidgetState {
        WidgetState {
            page: self.page_state(),
            autoplay: self.autoplay_state(),
        }
    }

    /// Restores a page snapshot, re-clamping against the current page count.
    pub fn restore_page_state(&mut self, page: PageState) {
        if !self.is_enabled() {
            return;
        }
        self.paginator.go_to(page.index as i64);
        self.notify();
    }

    /// Restores page + autoplay state.
    ///
    /// A snapshot with a pending deadline resumes counting from `now_ms`
    /// rather than replaying a stale deadline.
    pub fn restore_widget_state(&mut self, state: WidgetState, now_ms: u64) {
        if !self.is_enabled() {
            return;
        }
        self.batch_update(|c| {
            c.restore_page_state(state.page);
            if state.autoplay.deadline_ms.is_some() {
                c.autoplay.restart(now_ms);
            } else {
                c.autoplay.stop();
            }
        });
    }
}
