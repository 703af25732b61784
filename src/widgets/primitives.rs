//! Low-level drawing primitives for the dial.
//!
//! All functions are generic over the draw target and propagate its error, so
//! the dial's `Drawable` impl can forward failures to the caller.
//!
//! # Arc Angles
//!
//! embedded-graphics measures arc angles in degrees, clockwise from 3 o'clock.
//! Sweeps here start at 12 o'clock, so the start angle is
//! [`DEGREE_CORRECTION`](crate::geometry::DEGREE_CORRECTION).
//!
//! # Round Caps
//!
//! Stroked arcs end flat. Each end of a sweep gets a filled disc with the
//! stroke width as diameter, which gives the same silhouette as a round cap.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle, PrimitiveStyleBuilder};

use crate::geometry::DEGREE_CORRECTION;

/// Largest radius or stroke width that is rasterized. Radii above it draw
/// nothing and stroke widths are clamped to it.
pub const MAX_DRAW_EXTENT: i32 = 1024;

/// Shapes centered farther than this from the origin, on either axis, draw nothing.
pub const MAX_DRAW_OFFSET: i32 = 1 << 20;

/// Diameter of a circle with `radius`, or `None` if nothing would be drawn.
#[inline]
fn diameter(radius: i32) -> Option<u32> {
    if radius <= 0 || radius > MAX_DRAW_EXTENT {
        return None;
    }
    Some(radius as u32 * 2)
}

#[inline]
fn on_canvas(center: Point) -> bool {
    center.x.unsigned_abs() <= MAX_DRAW_OFFSET as u32 && center.y.unsigned_abs() <= MAX_DRAW_OFFSET as u32
}

#[inline]
fn clamp_stroke(stroke_width: u32) -> u32 { stroke_width.min(MAX_DRAW_EXTENT as u32) }

/// Draw an unfilled circle of `radius` around `center`.
///
/// The stroke is centered on the radius. Non-positive or oversized radii draw nothing.
pub fn draw_ring<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    stroke_width: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(diameter) = diameter(radius).filter(|_| on_canvas(center)) else {
        return Ok(());
    };
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(clamp_stroke(stroke_width))
        .build();
    Circle::with_center(center, diameter).into_styled(style).draw(display)
}

/// Draw a filled disc of `radius` around `center`.
pub fn draw_disc<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(diameter) = diameter(radius).filter(|_| on_canvas(center)) else {
        return Ok(());
    };
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Draw a clockwise arc from 12 o'clock spanning `sweep` degrees, with round caps.
///
/// A zero sweep draws nothing.
pub fn draw_sweep_arc<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    sweep: f32,
    stroke_width: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(diameter) = diameter(radius).filter(|_| on_canvas(center)) else {
        return Ok(());
    };
    if sweep <= 0.0 || stroke_width == 0 {
        return Ok(());
    }
    let stroke_width = clamp_stroke(stroke_width);

    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(stroke_width)
        .build();
    Arc::with_center(
        center,
        diameter,
        Angle::from_degrees(DEGREE_CORRECTION),
        Angle::from_degrees(sweep),
    )
    .into_styled(style)
    .draw(display)?;

    let cap = PrimitiveStyle::with_fill(color);
    for degrees in [DEGREE_CORRECTION, DEGREE_CORRECTION + sweep] {
        let radians = degrees.to_radians();
        let end = Point::new(
            center.x.saturating_add(libm::roundf(radius as f32 * libm::cosf(radians)) as i32),
            center.y.saturating_add(libm::roundf(radius as f32 * libm::sinf(radians)) as i32),
        );
        Circle::with_center(end, stroke_width).into_styled(cap).draw(display)?;
    }
    Ok(())
}
