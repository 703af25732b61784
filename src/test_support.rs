//! Test doubles shared by unit tests.

use core::cell::Cell;
use core::convert::Infallible;
use std::collections::HashMap;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::listeners::TimeListener;

/// Listener that counts callbacks and remembers the last values.
#[derive(Default)]
pub struct RecordingListener {
    hour_calls: Cell<usize>,
    minute_calls: Cell<usize>,
    last_hour: Cell<Option<u8>>,
    last_minute: Cell<Option<u8>>,
}

impl RecordingListener {
    pub fn new() -> Self { Self::default() }

    pub fn hour_calls(&self) -> usize { self.hour_calls.get() }

    pub fn minute_calls(&self) -> usize { self.minute_calls.get() }

    pub fn last_hour(&self) -> Option<u8> { self.last_hour.get() }

    pub fn last_minute(&self) -> Option<u8> { self.last_minute.get() }
}

impl TimeListener for RecordingListener {
    fn on_hour_changed(
        &self,
        hour: u8,
    ) {
        self.hour_calls.set(self.hour_calls.get() + 1);
        self.last_hour.set(Some(hour));
    }

    fn on_minute_changed(
        &self,
        minute: u8,
    ) {
        self.minute_calls.set(self.minute_calls.get() + 1);
        self.last_minute.set(Some(minute));
    }
}

/// Draw target that records the last color written to each pixel.
///
/// Pixels outside `size` are dropped, like on a real panel.
pub struct RecordingTarget {
    size: Size,
    pixels: HashMap<(i32, i32), Rgb565>,
}

impl RecordingTarget {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: HashMap::new(),
        }
    }

    /// Color at `point`, or `None` if nothing was drawn there.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.pixels.get(&(point.x, point.y)).copied()
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool { self.pixels.is_empty() }

    /// Number of distinct pixels drawn with `color`.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.values().filter(|c| **c == color).count()
    }
}

impl OriginDimensions for RecordingTarget {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for RecordingTarget {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.pixels.insert((point.x, point.y), color);
            }
        }
        Ok(())
    }
}
