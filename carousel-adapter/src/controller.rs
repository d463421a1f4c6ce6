use alloc::vec::Vec;

use carousel::{ArrowKey, Carousel, CarouselOptions, GestureEvent};

use crate::Transport;

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and a
/// [`Transport`], turning host events into engine calls and render updates.
///
/// Adapters drive it by calling:
/// - the `on_*` handlers when UI events occur
/// - `on_resize` when the container is (re)measured
/// - `tick(now_ms)` each frame/timer tick (for autoplay)
///
/// After every committed change the controller re-renders: it applies the
/// committed offset and keeps the active dot in sync with the current index.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    c: Carousel,
    transport: T,
    last_offset: Option<f64>,
}

impl<T: Transport> Controller<T> {
    /// Initializes a controller for one container.
    ///
    /// Returns `None` when the container has no items — that instance is
    /// silently disabled, exactly like the original widget's early-exit init;
    /// other containers on the page are unaffected. Otherwise this renders the
    /// initial page and starts autoplay.
    pub fn init(
        options: CarouselOptions,
        item_count: usize,
        container_width: f64,
        transport: T,
        now_ms: u64,
    ) -> Option<Self> {
        if item_count == 0 {
            return None;
        }
        let mut c = Carousel::new(options, item_count);
        c.set_container_width(container_width);
        c.start_autoplay(now_ms);
        let mut this = Self {
            c,
            transport,
            last_offset: None,
        };
        this.render();
        Some(this)
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.c
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_parts(self) -> (Carousel, T) {
        (self.c, self.transport)
    }

    /// Applies the committed offset and active dot to the transport.
    ///
    /// Redundant offsets are skipped so calling this twice for the same index
    /// stays a visual no-op.
    pub fn render(&mut self) {
        let offset = self.c.offset_percent();
        if self.last_offset != Some(offset) {
            self.transport.apply_offset(offset);
            self.last_offset = Some(offset);
        }
        self.transport.set_active_dot(self.c.current_index());
    }

    pub fn on_prev_click(&mut self, now_ms: u64) {
        self.c.prev_user(now_ms);
        self.render();
    }

    pub fn on_next_click(&mut self, now_ms: u64) {
        self.c.next_user(now_ms);
        self.render();
    }

    pub fn on_dot_click(&mut self, index: usize, now_ms: u64) {
        self.c.go_to_user(index as i64, now_ms);
        self.render();
    }

    /// Arrow-key handling. Returns `true` when consumed, in which case the
    /// host should suppress the default scroll behavior.
    pub fn on_key(&mut self, key: ArrowKey, now_ms: u64) -> bool {
        let handled = self.c.handle_key(key, now_ms);
        if handled {
            self.render();
        }
        handled
    }

    pub fn on_hover_enter(&mut self) {
        self.c.stop_autoplay();
    }

    pub fn on_hover_leave(&mut self, now_ms: u64) {
        self.c.start_autoplay(now_ms);
    }

    pub fn on_focus_in(&mut self) {
        self.c.stop_autoplay();
    }

    pub fn on_focus_out(&mut self, now_ms: u64) {
        self.c.start_autoplay(now_ms);
    }

    pub fn on_pointer_down(&mut self, x: f64, now_ms: u64) {
        let fx = self.c.handle_gesture(GestureEvent::Down { x }, now_ms);
        self.apply_effects(&fx);
    }

    pub fn on_pointer_move(&mut self, x: f64, now_ms: u64) {
        let fx = self.c.handle_gesture(GestureEvent::Move { x }, now_ms);
        self.apply_effects(&fx);
    }

    pub fn on_pointer_up(&mut self, x: f64, now_ms: u64) {
        let fx = self.c.handle_gesture(GestureEvent::Up { x }, now_ms);
        self.apply_effects(&fx);
    }

    pub fn on_pointer_cancel(&mut self, now_ms: u64) {
        let fx = self.c.handle_gesture(GestureEvent::Cancel, now_ms);
        self.apply_effects(&fx);
    }

    fn apply_effects(&mut self, fx: &carousel::GestureEffects) {
        if let Some(dragging) = fx.drag_hint {
            self.transport.set_drag_hint(dragging);
        }
        if let Some(enabled) = fx.transition_enabled {
            self.transport.set_transition_enabled(enabled);
        }
        if let Some(pages) = fx.preview_pages {
            // Preview renders bypass the redundancy guard: the committed
            // offset is unchanged while the strip tracks the pointer.
            self.transport
                .apply_offset(self.c.offset_percent_for_pages(pages));
            self.last_offset = None;
        }
        if fx.commit.is_some() {
            self.render();
        }
    }

    pub fn on_resize(&mut self, container_width: f64) {
        self.c.set_container_width(container_width);
    }

    /// Advances the autoplay clock; renders and returns `true` when a page
    /// advance fired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let fired = self.c.tick(now_ms);
        if fired {
            self.render();
        }
        fired
    }
}

/// One-shot page scan: builds a controller for every container description,
/// skipping containers without items. Each container gets exactly one
/// controller; call this once at load time.
pub fn initialize_all<T: Transport>(
    containers: impl IntoIterator<Item = (CarouselOptions, usize, f64, T)>,
    now_ms: u64,
) -> Vec<Controller<T>> {
    containers
        .into_iter()
        .filter_map(|(options, item_count, width, transport)| {
            Controller::init(options, item_count, width, transport, now_ms)
        })
        .collect()
}
