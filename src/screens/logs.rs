//! Logs page for on-screen log viewing.
//!
//! Displays recent picker log entries with color-coded levels and sequence
//! numbers. Shows up to 14 entries on a 320x240 display.
//!
//! # Layout
//!
//! ```text
//! LOGS                              (header)
//! [I] 0000 selected hour            (entries)
//! [I] 0001 hour 3 -> 6
//! [D] 0002 press ignored at 10,5
//! ...
//! Press L for Picker                (footer)
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::BLACK;
use crate::log_buffer::{LogBuffer, LogEntry};
use crate::styles::{LABEL_FONT, LABEL_STYLE_GREEN, LABEL_STYLE_WHITE};

/// Maximum entries that fit between header and footer.
pub const VISIBLE_ENTRIES: usize = 14;

const HEADER_POS: Point = Point::new(4, 12);
const FOOTER_POS: Point = Point::new(4, 226);
const EMPTY_POS: Point = Point::new(4, 120);
const FIRST_LINE_Y: i32 = 28;
const LINE_HEIGHT: i32 = 14;
const MESSAGE_X: i32 = 64;

/// Draw the logs page, newest entries last.
///
/// When the buffer holds more than [`VISIBLE_ENTRIES`], the oldest ones are
/// skipped so the latest entry is always on screen.
pub fn draw_logs_page<D>(
    display: &mut D,
    buffer: &LogBuffer,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK)?;
    Text::new("LOGS", HEADER_POS, LABEL_STYLE_GREEN).draw(display)?;

    if buffer.is_empty() {
        Text::new("No log entries", EMPTY_POS, LABEL_STYLE_WHITE).draw(display)?;
    }

    let skip = buffer.len().saturating_sub(VISIBLE_ENTRIES);
    let mut y = FIRST_LINE_Y;
    for entry in buffer.iter().skip(skip) {
        draw_log_entry(display, entry, y)?;
        y += LINE_HEIGHT;
    }

    Text::new("Press L for Picker", FOOTER_POS, LABEL_STYLE_GREEN).draw(display)?;
    Ok(())
}

/// Draw a single entry: `[L] SSSS message`, prefix in the level color.
fn draw_log_entry<D>(
    display: &mut D,
    entry: &LogEntry,
    y: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut prefix: String<16> = String::new();
    write!(prefix, "[{}] {:04}", entry.level.prefix(), entry.seq % 10_000).ok();

    let level_style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
    Text::new(&prefix, Point::new(4, y), level_style).draw(display)?;
    Text::new(entry.message.as_str(), Point::new(MESSAGE_X, y), LABEL_STYLE_WHITE).draw(display)?;
    Ok(())
}
