//! Angle model for the dial.
//!
//! Dial angles are measured in radians, clockwise from 12 o'clock, which is
//! how a clock face is read. The screen (and `atan2`) measures clockwise from
//! 3 o'clock because the y axis points down, so the two frames differ by a
//! fixed quarter turn:
//!
//! ```text
//! screen_angle = dial_angle - PI / 2
//! ```
//!
//! The correction is applied in [`pointer_offset`] and [`touch_angle`] and
//! nowhere else. Rendering and hit testing therefore agree: a touch placed on
//! the drawn pointer for index `n` resolves back to `n`.

use core::f32::consts::{FRAC_PI_2, PI, TAU};

use embedded_graphics::prelude::Point;

/// Number of hour positions on the dial.
pub const MAX_HOURS: u8 = 12;

/// Number of minute positions on the dial.
pub const MAX_MINUTES: u8 = 60;

/// Angle between two adjacent hour positions (30 degrees).
pub const HOUR_ANGLE_UNIT: f32 = TAU / MAX_HOURS as f32;

/// Angle between two adjacent minute positions (6 degrees).
pub const MINUTE_ANGLE_UNIT: f32 = TAU / MAX_MINUTES as f32;

/// Rotation between the screen frame and the dial frame, in degrees.
/// Index 0 points to the top of the dial rather than to the right.
pub const DEGREE_CORRECTION: f32 = -90.0;

/// [`DEGREE_CORRECTION`] in radians. Kept as an exact constant so that
/// cardinal touches land exactly on multiples of a quarter turn.
const RADIAN_CORRECTION: f32 = -FRAC_PI_2;

/// Which pointer a value or drawing belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerKind {
    /// Hour pointer, 12 positions.
    Hour,
    /// Minute pointer, 60 positions.
    Minute,
}

impl PointerKind {
    /// Number of discrete positions around the dial.
    #[inline]
    pub const fn positions(self) -> u8 {
        match self {
            Self::Hour => MAX_HOURS,
            Self::Minute => MAX_MINUTES,
        }
    }

    /// Angle between two adjacent positions, in radians.
    #[inline]
    pub const fn angle_unit(self) -> f32 {
        match self {
            Self::Hour => HOUR_ANGLE_UNIT,
            Self::Minute => MINUTE_ANGLE_UNIT,
        }
    }

    /// Short label used in log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }
}

/// Dial angle of a pointer at `index`, in radians.
#[inline]
pub fn pointer_angle(
    kind: PointerKind,
    index: u8,
) -> f32 {
    f32::from(index) * kind.angle_unit()
}

/// Angle swept from 12 o'clock to the pointer at `index`, in degrees.
#[inline]
pub fn sweep_degrees(
    kind: PointerKind,
    index: u8,
) -> f32 {
    f32::from(index) * (360.0 / f32::from(kind.positions()))
}

/// Exact offset of the pointer at `index` from the dial center.
///
/// Returns `(dx, dy)` in pixels for a pointer sitting on a circle of `radius`.
pub fn pointer_offset(
    kind: PointerKind,
    index: u8,
    radius: i32,
) -> (f32, f32) {
    let screen_angle = pointer_angle(kind, index) + RADIAN_CORRECTION;
    let r = radius as f32;
    (r * libm::cosf(screen_angle), r * libm::sinf(screen_angle))
}

/// Pixel position of the pointer at `index`, rounded to the nearest pixel.
pub fn pointer_position(
    center: Point,
    kind: PointerKind,
    index: u8,
    radius: i32,
) -> Point {
    let (dx, dy) = pointer_offset(kind, index, radius);
    Point::new(
        center.x.saturating_add(libm::roundf(dx) as i32),
        center.y.saturating_add(libm::roundf(dy) as i32),
    )
}

/// Dial angle of a touch relative to the dial center.
///
/// Result is in `(-PI, PI]`: 0 at 12 o'clock, positive clockwise, `PI` at
/// 6 o'clock and negative on the left half of the dial.
pub fn touch_angle(
    center: Point,
    touch: Point,
) -> f32 {
    let dx = touch.x as f32 - center.x as f32;
    let dy = touch.y as f32 - center.y as f32;
    normalize_angle(libm::atan2f(dy, dx) - RADIAN_CORRECTION)
}

/// Wrap an angle into `(-PI, PI]`.
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle;
    while a > PI {
        a -= TAU;
    }
    while a <= -PI {
        a += TAU;
    }
    a
}

/// Map a dial angle to the nearest position index.
///
/// Rounds half up, then wraps negative results (left half of the dial) by
/// adding the number of positions. For angles in `(-PI, PI]` the result is
/// always in `0..positions`.
pub fn index_for_angle(
    kind: PointerKind,
    angle: f32,
) -> u8 {
    let positions = i32::from(kind.positions());
    let mut index = libm::floorf(angle / kind.angle_unit() + 0.5) as i32;
    if index < 0 {
        index += positions;
    }
    index.rem_euclid(positions) as u8
}
