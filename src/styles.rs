//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible in
//! embedded-graphics 0.8, so every fixed style lives here and is referenced
//! directly by the draw functions instead of being rebuilt each frame.
//!
//! Styles whose color depends on state (selected label, log level) are built
//! from the exposed font references: `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{GREEN, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for the time labels and their captions.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small font (6x10 pixels) for captions and log lines.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Large font (`ProFont` 24pt) for the hour and minute values.
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for captions and log messages.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small green text for page headers and footers.
pub const LABEL_STYLE_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);
