//! Time picker screen: hour and minute labels next to a clock dial.
//!
//! # Layout (320x240)
//!
//! ```text
//! +--------+------------------------+
//! |        |                        |
//! |  HOUR  |                        |
//! |   3    |          dial          |
//! |  ====  |      (240x240 view)    |
//! |  MIN   |                        |
//! |   45   |                        |
//! |        |                        |
//! +--------+------------------------+
//! ```
//!
//! # Selection
//!
//! Exactly one pointer is selected at a time. Selecting a pointer makes it the
//! only visible (and draggable) one, moves the selector bar under its label
//! and refreshes the dial so the labels pick up the current values.
//!
//! # Touch Routing
//!
//! | Phase | Where | Action |
//! |-------|-------|--------|
//! | Press | hour label | select hour |
//! | Press | minute label | select minute |
//! | Press | dial viewport | start drag, forward to dial |
//! | Drag / Release | anywhere, while dragging | forward to dial |
//! | anything else | | ignored |
//!
//! Once a press lands on the dial, the drag stays with the dial until release
//! even if the pointer leaves the viewport.

use core::cell::Cell;
use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::colors::BLACK;
use crate::config::{DIAL_VIEWPORT, DialConfig, HOUR_LABEL_AREA, MINUTE_LABEL_AREA};
use crate::dial::{ClockDial, TouchEvent, TouchOutcome};
use crate::geometry::PointerKind;
use crate::listeners::{ListenerError, TimeListener};
use crate::log_buffer::LogBuffer;
use crate::widgets::draw_time_label;

/// Width of a formatted hour or minute.
pub const LABEL_TEXT_LEN: usize = 2;

/// Hour as shown on the label: `12` for hour 0, otherwise the number.
pub fn format_hour(hour: u8) -> String<LABEL_TEXT_LEN> {
    let mut text = String::new();
    let shown = if hour == 0 { 12 } else { hour };
    write!(text, "{shown}").ok();
    text
}

/// Minute as shown on the label, without padding.
pub fn format_minute(minute: u8) -> String<LABEL_TEXT_LEN> {
    let mut text = String::new();
    write!(text, "{minute}").ok();
    text
}

/// Label values, kept in sync with the dial as a [`TimeListener`].
#[derive(Default)]
pub struct TimeLabels {
    hour: Cell<u8>,
    minute: Cell<u8>,
    changed: Cell<bool>,
}

impl TimeLabels {
    /// Labels showing `12:00` until the first notification.
    pub const fn new() -> Self {
        Self {
            hour: Cell::new(0),
            minute: Cell::new(0),
            changed: Cell::new(false),
        }
    }

    /// Last hour received.
    #[inline]
    pub fn hour(&self) -> u8 { self.hour.get() }

    /// Last minute received.
    #[inline]
    pub fn minute(&self) -> u8 { self.minute.get() }

    /// Hour label text.
    pub fn hour_text(&self) -> String<LABEL_TEXT_LEN> { format_hour(self.hour.get()) }

    /// Minute label text.
    pub fn minute_text(&self) -> String<LABEL_TEXT_LEN> { format_minute(self.minute.get()) }

    /// Returns `true` once after any notification.
    pub fn take_changed(&self) -> bool { self.changed.replace(false) }
}

impl TimeListener for TimeLabels {
    fn on_hour_changed(
        &self,
        hour: u8,
    ) {
        self.hour.set(hour);
        self.changed.set(true);
    }

    fn on_minute_changed(
        &self,
        minute: u8,
    ) {
        self.minute.set(minute);
        self.changed.set(true);
    }
}

/// Picker screen state.
pub struct TimePicker<'a> {
    dial: ClockDial<'a>,
    labels: &'a TimeLabels,
    selected: PointerKind,
    dragging: bool,
    dirty: bool,
    log: LogBuffer,
}

impl<'a> TimePicker<'a> {
    /// Build the picker, lay the dial out in its viewport, subscribe the labels
    /// and select the hour pointer.
    pub fn new(
        config: DialConfig,
        labels: &'a TimeLabels,
    ) -> Result<Self, ListenerError> {
        let mut dial = ClockDial::new(config);
        dial.layout(DIAL_VIEWPORT.size);
        dial.subscribe(labels)?;

        let mut picker = Self {
            dial,
            labels,
            selected: PointerKind::Hour,
            dragging: false,
            dirty: true,
            log: LogBuffer::new(),
        };
        crate::log_info!(
            picker.log,
            "dial r={} at {}:{:02}",
            config.radius,
            picker.dial.hour(),
            picker.dial.minute()
        );
        picker.select(PointerKind::Hour);
        Ok(picker)
    }

    /// Make `kind` the only visible pointer and refresh the dial.
    pub fn select(
        &mut self,
        kind: PointerKind,
    ) {
        self.selected = kind;
        self.dial.set_hour_visible(kind == PointerKind::Hour);
        self.dial.set_minute_visible(kind == PointerKind::Minute);
        self.dirty = true;
        self.dial.refresh();
        crate::log_info!(self.log, "selected {}", kind.label());
    }

    /// Route a screen-space touch.
    pub fn handle_touch(
        &mut self,
        event: TouchEvent,
    ) {
        let point = event.point();
        match event {
            TouchEvent::Press(_) if HOUR_LABEL_AREA.contains(point) => self.select(PointerKind::Hour),
            TouchEvent::Press(_) if MINUTE_LABEL_AREA.contains(point) => self.select(PointerKind::Minute),
            TouchEvent::Press(_) if DIAL_VIEWPORT.contains(point) => {
                self.dragging = true;
                self.forward(event);
            }
            TouchEvent::Drag(_) if self.dragging => self.forward(event),
            TouchEvent::Release(_) if self.dragging => {
                self.forward(event);
                self.dragging = false;
            }
            TouchEvent::Press(_) => crate::log_debug!(self.log, "press ignored at {},{}", point.x, point.y),
            TouchEvent::Drag(_) | TouchEvent::Release(_) => {}
        }
    }

    fn forward(
        &mut self,
        event: TouchEvent,
    ) {
        let (hour, minute) = (self.dial.hour(), self.dial.minute());
        match self.dial.handle_touch(event.translate(-DIAL_VIEWPORT.top_left)) {
            TouchOutcome::NotLaidOut => crate::log_warn!(self.log, "touch before layout"),
            TouchOutcome::Handled { hour: h, minute: m } => {
                if h != hour {
                    crate::log_info!(self.log, "hour {} -> {}", hour, h);
                }
                if m != minute {
                    crate::log_info!(self.log, "minute {} -> {}", minute, m);
                }
            }
        }
    }

    /// Unsubscribe the labels from the dial. The labels keep their last values.
    pub fn shutdown(&mut self) {
        if self.dial.unsubscribe(self.labels) {
            crate::log_info!(self.log, "labels unsubscribed");
        }
    }

    /// Returns `true` once after anything on the picker changed.
    pub fn take_redraw_request(&mut self) -> bool {
        let dial = self.dial.take_redraw_request();
        let labels = self.labels.take_changed();
        let picker = core::mem::take(&mut self.dirty);
        dial || labels || picker
    }

    /// The dial.
    #[inline]
    pub const fn dial(&self) -> &ClockDial<'a> { &self.dial }

    /// Currently selected pointer.
    #[inline]
    pub const fn selected(&self) -> PointerKind { self.selected }

    /// Picker log.
    #[inline]
    pub const fn log(&self) -> &LogBuffer { &self.log }

    /// Draw the whole picker screen.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(BLACK)?;
        let config = self.dial.config();
        draw_time_label(
            display,
            HOUR_LABEL_AREA,
            "HOUR",
            &self.labels.hour_text(),
            self.selected == PointerKind::Hour,
            config.hour_fill_color,
        )?;
        draw_time_label(
            display,
            MINUTE_LABEL_AREA,
            "MIN",
            &self.labels.minute_text(),
            self.selected == PointerKind::Minute,
            config.minute_fill_color,
        )?;
        self.dial.draw(&mut display.translated(DIAL_VIEWPORT.top_left))
    }
}
