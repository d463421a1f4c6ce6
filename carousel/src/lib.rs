//! A headless, accessible carousel/slider engine.
//!
//! For adapter-level utilities (transports, controllers, dot indicators), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the core state machine behind a content slider widget:
//! page-index clamping and looping, an autoplay timer lifecycle, and
//! drag-to-commit gesture resolution. It is UI-agnostic. A DOM/TUI/GUI layer is
//! expected to provide:
//! - container width (for drag thresholds)
//! - pointer/keyboard/hover events
//! - a monotonic clock in milliseconds (for autoplay deadlines)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod carousel;
mod gesture;
mod options;
mod paginator;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use autoplay::Autoplay;
pub use carousel::Carousel;
pub use gesture::{
    CommitDecision, GestureContext, GestureEffects, GestureEvent, GestureState, transition,
};
pub use options::{CarouselOptions, OnChangeCallback};
pub use paginator::{Paginator, page_count};
pub use state::{AutoplayState, PageState, WidgetState};
pub use types::ArrowKey;
