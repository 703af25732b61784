//! Hour and minute labels shown next to the dial.
//!
//! Each label occupies a fixed click target from [`config`](crate::config):
//!
//! ```text
//! +----------+
//! |   HOUR   |  caption (6x10)
//! |    03    |  value (ProFont 24pt)
//! |  ======  |  selector bar, only when selected
//! +----------+
//! ```
//!
//! The whole area is cleared first, so a label can be redrawn on its own
//! without clearing the screen.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::{
    colors::{BLACK, GRAY, WHITE},
    config::SELECTOR_HEIGHT,
    styles::{CENTERED, LABEL_STYLE_WHITE, VALUE_FONT},
};

/// Caption baseline, relative to the top of the label area.
const CAPTION_BASELINE: i32 = 10;

/// Value baseline, relative to the top of the label area.
const VALUE_BASELINE: i32 = 38;

/// Selector bar inset from the label edges.
const SELECTOR_INSET: u32 = 12;

/// Draw one time label.
///
/// The value is white when selected and gray otherwise. A selected label also
/// gets a selector bar in `accent` along its bottom edge.
pub fn draw_time_label<D>(
    display: &mut D,
    area: Rectangle,
    caption: &str,
    value: &str,
    selected: bool,
    accent: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(display)?;

    let center_x = area.top_left.x + (area.size.width / 2) as i32;
    Text::with_text_style(
        caption,
        Point::new(center_x, area.top_left.y + CAPTION_BASELINE),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)?;

    let value_color = if selected { WHITE } else { GRAY };
    Text::with_text_style(
        value,
        Point::new(center_x, area.top_left.y + VALUE_BASELINE),
        MonoTextStyle::new(VALUE_FONT, value_color),
        CENTERED,
    )
    .draw(display)?;

    if selected && area.size.width > SELECTOR_INSET * 2 {
        let bar = Rectangle::new(
            Point::new(
                area.top_left.x + SELECTOR_INSET as i32,
                area.top_left.y + (area.size.height - SELECTOR_HEIGHT) as i32,
            ),
            Size::new(area.size.width - SELECTOR_INSET * 2, SELECTOR_HEIGHT),
        );
        bar.into_styled(PrimitiveStyle::with_fill(accent)).draw(display)?;
    }
    Ok(())
}
