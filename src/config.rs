//! Application configuration.
//!
//! Two kinds of configuration live here:
//!
//! - Compile-time layout constants for the 320x240 picker screen. Positions
//!   like the dial viewport are `const` so nothing is recomputed per frame.
//! - [`DialConfig`], the runtime styling of a [`ClockDial`](crate::dial::ClockDial),
//!   built from defaults or from `name=value` attributes supplied by the host.
//!
//! # Attributes
//!
//! | name | value | default |
//! |------|-------|---------|
//! | `stroke_color` | `#RRGGBB` / `#AARRGGBB` | red |
//! | `hour_fill_color` | color | green |
//! | `minute_fill_color` | color | blue |
//! | `radius` | px | 100 |
//! | `stroke_width` | px | 5 |
//! | `hour_pointer_radius` | px | 20 |
//! | `minute_pointer_radius` | px | 10 |
//! | `anti_alias` | bool | false |
//! | `hour` | 0-11 | 3 |
//! | `minute` | 0-59 | 45 |
//! | `hour_visible` | bool | true |
//! | `minute_visible` | bool | true |
//!
//! Values are not range checked. A negative radius is accepted and simply
//! draws nothing useful.

use core::fmt;
use core::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLUE, GREEN, RED, rgb565_from_hex};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (simulator window and target panel: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Target frame time for the simulator loop (50 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(20);

// =============================================================================
// Picker Layout
// =============================================================================

/// Width of the label column on the left of the dial.
pub const LABEL_COLUMN_WIDTH: u32 = SCREEN_WIDTH - DIAL_VIEWPORT_SIZE;

/// Side of the square dial viewport (right side of the screen).
pub const DIAL_VIEWPORT_SIZE: u32 = SCREEN_HEIGHT;

/// Dial viewport in screen coordinates. Touches inside it are forwarded to the
/// dial in viewport-local coordinates.
pub const DIAL_VIEWPORT: Rectangle = Rectangle::new(
    Point::new(LABEL_COLUMN_WIDTH as i32, 0),
    Size::new(DIAL_VIEWPORT_SIZE, DIAL_VIEWPORT_SIZE),
);

/// Height of one label click target.
pub const LABEL_HEIGHT: u32 = 56;

/// Hour label click target.
pub const HOUR_LABEL_AREA: Rectangle = Rectangle::new(
    Point::new(0, 56),
    Size::new(LABEL_COLUMN_WIDTH, LABEL_HEIGHT),
);

/// Minute label click target.
pub const MINUTE_LABEL_AREA: Rectangle = Rectangle::new(
    Point::new(0, 128),
    Size::new(LABEL_COLUMN_WIDTH, LABEL_HEIGHT),
);

/// Height of the selector bar drawn under the active label.
pub const SELECTOR_HEIGHT: u32 = 3;

// =============================================================================
// Dial Defaults
// =============================================================================

/// Default dial outline color.
pub const DEFAULT_STROKE_COLOR: Rgb565 = RED;

/// Default hour pointer and hour sweep color.
pub const DEFAULT_HOUR_FILL_COLOR: Rgb565 = GREEN;

/// Default minute pointer and minute sweep color.
pub const DEFAULT_MINUTE_FILL_COLOR: Rgb565 = BLUE;

/// Default dial radius in pixels.
pub const DEFAULT_RADIUS: i32 = 100;

/// Default stroke width of the dial outline and sweep arcs.
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Default hour pointer disc radius.
pub const DEFAULT_HOUR_POINTER_RADIUS: i32 = 20;

/// Default minute pointer disc radius.
pub const DEFAULT_MINUTE_POINTER_RADIUS: i32 = 10;

/// Default initial hour.
pub const DEFAULT_HOUR: u8 = 3;

/// Default initial minute.
pub const DEFAULT_MINUTE: u8 = 45;

// =============================================================================
// Dial Configuration
// =============================================================================

/// Styling and initial values for a dial. Fixed once the dial is built.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DialConfig {
    /// Dial outline color.
    pub stroke_color: Rgb565,
    /// Hour pointer disc and sweep color.
    pub hour_fill_color: Rgb565,
    /// Minute pointer disc and sweep color.
    pub minute_fill_color: Rgb565,
    /// Dial radius in pixels.
    pub radius: i32,
    /// Stroke width for the outline and both sweeps.
    pub stroke_width: u32,
    /// Hour pointer disc radius.
    pub hour_pointer_radius: i32,
    /// Minute pointer disc radius.
    pub minute_pointer_radius: i32,
    /// Anti-aliasing request, passed through for targets that support it.
    pub anti_alias: bool,
    /// Initial hour.
    pub hour: u8,
    /// Initial minute.
    pub minute: u8,
    /// Whether the hour pointer starts visible (and draggable).
    pub hour_visible: bool,
    /// Whether the minute pointer starts visible (and draggable).
    pub minute_visible: bool,
}

impl DialConfig {
    /// Configuration with every field at its default.
    pub const fn new() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR,
            hour_fill_color: DEFAULT_HOUR_FILL_COLOR,
            minute_fill_color: DEFAULT_MINUTE_FILL_COLOR,
            radius: DEFAULT_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            hour_pointer_radius: DEFAULT_HOUR_POINTER_RADIUS,
            minute_pointer_radius: DEFAULT_MINUTE_POINTER_RADIUS,
            anti_alias: false,
            hour: DEFAULT_HOUR,
            minute: DEFAULT_MINUTE,
            hour_visible: true,
            minute_visible: true,
        }
    }

    /// Build a configuration from `(name, value)` attribute pairs.
    ///
    /// Absent attributes keep their defaults. Later pairs override earlier
    /// ones. The first unknown name or unparsable value aborts with an error.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, ConfigError<'a>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::new();
        for (name, value) in attributes {
            config.apply(name.trim(), value.trim())?;
        }
        Ok(config)
    }

    /// Apply a single attribute.
    pub fn apply<'a>(
        &mut self,
        name: &'a str,
        value: &'a str,
    ) -> Result<(), ConfigError<'a>> {
        match name {
            "stroke_color" => self.stroke_color = parse_color(name, value)?,
            "hour_fill_color" => self.hour_fill_color = parse_color(name, value)?,
            "minute_fill_color" => self.minute_fill_color = parse_color(name, value)?,
            "radius" => self.radius = parse_number(name, value)?,
            "stroke_width" => self.stroke_width = parse_number(name, value)?,
            "hour_pointer_radius" => self.hour_pointer_radius = parse_number(name, value)?,
            "minute_pointer_radius" => self.minute_pointer_radius = parse_number(name, value)?,
            "anti_alias" => self.anti_alias = parse_bool(name, value)?,
            "hour" => self.hour = parse_number(name, value)?,
            "minute" => self.minute = parse_number(name, value)?,
            "hour_visible" => self.hour_visible = parse_bool(name, value)?,
            "minute_visible" => self.minute_visible = parse_bool(name, value)?,
            _ => return Err(ConfigError::UnknownAttribute(name)),
        }
        Ok(())
    }
}

impl Default for DialConfig {
    fn default() -> Self { Self::new() }
}

/// Split a `name=value` argument into an attribute pair.
///
/// Returns `None` when there is no `=`.
pub fn split_attribute(arg: &str) -> Option<(&str, &str)> { arg.split_once('=') }

// =============================================================================
// Errors
// =============================================================================

/// Attribute parsing errors. Each variant borrows the offending text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError<'a> {
    /// Attribute name is not part of the dial configuration.
    UnknownAttribute(&'a str),
    /// Color is not `#RRGGBB` or `#AARRGGBB`.
    InvalidColor {
        /// Attribute name.
        name: &'a str,
        /// Rejected value.
        value: &'a str,
    },
    /// Value is not an integer of the expected width.
    InvalidNumber {
        /// Attribute name.
        name: &'a str,
        /// Rejected value.
        value: &'a str,
    },
    /// Value is not `true`/`false`.
    InvalidBool {
        /// Attribute name.
        name: &'a str,
        /// Rejected value.
        value: &'a str,
    },
}

impl fmt::Display for ConfigError<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::UnknownAttribute(name) => write!(f, "unknown attribute '{name}'"),
            Self::InvalidColor { name, value } => write!(f, "{name}: '{value}' is not a #RRGGBB color"),
            Self::InvalidNumber { name, value } => write!(f, "{name}: '{value}' is not a valid number"),
            Self::InvalidBool { name, value } => write!(f, "{name}: '{value}' is not true/false"),
        }
    }
}

impl core::error::Error for ConfigError<'_> {}

fn parse_color<'a>(
    name: &'a str,
    value: &'a str,
) -> Result<Rgb565, ConfigError<'a>> {
    let err = ConfigError::InvalidColor { name, value };
    let hex = value.strip_prefix('#').ok_or(err)?;
    if hex.len() != 6 && hex.len() != 8 {
        return Err(err);
    }
    let packed = u32::from_str_radix(hex, 16).map_err(|_| err)?;
    Ok(rgb565_from_hex(packed))
}

fn parse_number<'a, T>(
    name: &'a str,
    value: &'a str,
) -> Result<T, ConfigError<'a>>
where
    T: core::str::FromStr,
{
    value.parse().map_err(|_| ConfigError::InvalidNumber { name, value })
}

fn parse_bool<'a>(
    name: &'a str,
    value: &'a str,
) -> Result<bool, ConfigError<'a>> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value }),
    }
}
