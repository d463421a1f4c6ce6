//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core state machine.
//! This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - A [`Transport`] capability trait for the rendering surface (offset,
//!   transition suppression, drag hint, dot highlighting)
//! - A [`Controller`] that wires host events (pointer, keyboard, hover/focus,
//!   clock ticks) into the engine and renders through a `Transport`
//! - Dot-indicator helpers with the widget's accessible labels
//! - The page-chrome oddments the widget ships alongside (mobile nav toggle,
//!   header solidify-on-scroll, anchor fragments, footer year)
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod chrome;
mod controller;
mod dots;
mod transport;


pub use chrome::{NavToggle, anchor_fragment, footer_year_text, header_is_solid};
pub use controller::{Controller, initialize_all};
pub use dots::{Dot, aria_pressed, dot_label, for_each_dot};
pub use transport::Transport;
