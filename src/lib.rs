//! Clock-face dial widget and time picker.
//!
//! This library contains everything that is independent of the display
//! backend. All drawing is generic over `DrawTarget<Color = Rgb565>`, so the
//! same code renders into the desktop simulator window (see `main.rs`) or a
//! panel driver on a microcontroller.
//!
//! - [`dial`]: The [`ClockDial`](dial::ClockDial) widget (state, touch, rendering)
//! - [`geometry`]: Angle model shared by rendering and hit testing
//! - [`config`]: Dial configuration, attribute parsing and layout constants
//! - [`listeners`]: Identity-keyed listener set for value-changed callbacks
//! - [`picker`]: Time picker screen composing labels with the dial
//! - [`widgets`]: Low-level drawing primitives and label widgets
//! - [`screens`]: Full-screen pages (log viewer)
//! - [`pages`]: Picker / log page toggle
//! - [`log_buffer`]: Leveled ring buffer shown on the log page
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), the library itself is `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod dial;
pub mod geometry;
pub mod listeners;
pub mod log_buffer;
pub mod pages;
pub mod picker;
pub mod screens;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use config::{ConfigError, DialConfig};
pub use dial::{ClockDial, TouchEvent, TouchOutcome};
pub use geometry::PointerKind;
pub use listeners::{ListenerError, TimeListener};
pub use pages::Page;
pub use picker::{TimeLabels, TimePicker};

#[cfg(test)]
pub(crate) mod test_support;
