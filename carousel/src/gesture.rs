//! The drag gesture state machine.
//!
//! This is written as a pure transition function over an explicit state enum so
//! it can be unit-tested without a live event loop: the engine feeds it
//! `(state, event, context)` and applies the returned effect record.

/// The gesture tracker's state. A drag session is ephemeral: created on
/// pointer-down, destroyed on pointer-up/cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureState {
    Idle,
    Dragging {
        /// clientX captured at pointer-down.
        origin_x: f64,
        /// The committed page index when the session began.
        origin_index: usize,
    },
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// A pointer/touch event, reduced to the horizontal coordinate the gesture
/// tracker cares about.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureEvent {
    Down { x: f64 },
    Move { x: f64 },
    Up { x: f64 },
    Cancel,
}

/// How a released drag resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitDecision {
    /// Dragged rightward past the threshold: go to the previous page.
    Prev,
    /// Dragged leftward past the threshold: go to the next page.
    Next,
    /// Below the threshold: snap back to the page the session started on.
    Stay(usize),
}

/// Inputs a transition needs beyond the event itself.
#[derive(Clone, Copy, Debug)]
pub struct GestureContext {
    pub current_index: usize,
    pub container_width: f64,
    pub commit_ratio: f64,
}

/// Everything a transition asks the caller to do, as a fixed-size record.
///
/// `preview_pages` is a fractional page position to render immediately (with
/// the transition suppressed) — a preview, not a commit. `commit` is the only
/// field that may change the committed index.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureEffects {
    pub stop_autoplay: bool,
    pub restart_autoplay: bool,
    pub drag_hint: Option<bool>,
    pub transition_enabled: Option<bool>,
    pub preview_pages: Option<f64>,
    pub commit: Option<CommitDecision>,
}

/// Pure transition function: `(state, event) -> (state, effects)`.
///
/// Redundant event paths (mouse + touch emulation) must not corrupt a session:
/// an `Up`/`Move` while `Idle` is a no-op, and a `Down` while already
/// `Dragging` re-initializes the session (last writer wins) instead of
/// stacking.
pub fn transition(
    state: GestureState,
    event: GestureEvent,
    ctx: GestureContext,
) -> (GestureState, GestureEffects) {
    let mut fx = GestureEffects::default();
    let width = if ctx.container_width > 0.0 {
        ctx.container_width
    } else {
        1.0
    };

    let next = match (state, event) {
        (_, GestureEvent::Down { x }) => {
            fx.stop_autoplay = true;
            fx.drag_hint = Some(true);
            GestureState::Dragging {
                origin_x: x,
                origin_index: ctx.current_index,
            }
        }
        (
            GestureState::Dragging {
                origin_x,
                origin_index,
            },
            GestureEvent::Move { x },
        ) => {
            let delta_pages = (x - origin_x) / width;
            fx.transition_enabled = Some(false);
            fx.preview_pages = Some(origin_index as f64 - delta_pages);
            state
        }
        (
            GestureState::Dragging {
                origin_x,
                origin_index,
            },
            GestureEvent::Up { x },
        ) => {
            let dx = x - origin_x;
            let threshold = width * ctx.commit_ratio;
            fx.commit = Some(if dx > threshold {
                CommitDecision::Prev
            } else if dx < -threshold {
                CommitDecision::Next
            } else {
                CommitDecision::Stay(origin_index)
            });
            fx.drag_hint = Some(false);
            fx.transition_enabled = Some(true);
            fx.restart_autoplay = true;
            GestureState::Idle
        }
        (GestureState::Dragging { origin_index, .. }, GestureEvent::Cancel) => {
            fx.commit = Some(CommitDecision::Stay(origin_index));
            fx.drag_hint = Some(false);
            fx.transition_enabled = Some(true);
            fx.restart_autoplay = true;
            GestureState::Idle
        }
        // Move/Up/Cancel while idle.
        (GestureState::Idle, _) => GestureState::Idle,
    };

    (next, fx)
}
