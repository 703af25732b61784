//! Clock-face dial widget.
//!
//! [`ClockDial`] owns the dial state (current hour and minute, pointer
//! visibility, viewport center) and turns touches into values:
//!
//! 1. The host delivers the viewport size once with [`ClockDial::layout`].
//!    Until then the center is unknown and touches are ignored.
//! 2. Each touch is converted to a dial angle around the center, and every
//!    visible pointer snaps to the nearest position for that angle.
//! 3. The dial requests a redraw and notifies every listener with both the
//!    current hour and minute.
//!
//! Rendering goes through [`embedded_graphics::Drawable`] and reads state only.
//!
//! # Drawing Order
//!
//! | Step | Shape | Color |
//! |------|-------|-------|
//! | 1 | Dial outline (stroked circle) | `stroke_color` |
//! | 2 | Hour disc + hour sweep | `hour_fill_color` |
//! | 3 | Minute disc + minute sweep | `minute_fill_color` |
//!
//! Steps 2 and 3 only run for visible pointers.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::DialConfig;
use crate::geometry::{self, MAX_HOURS, MAX_MINUTES, PointerKind};
use crate::listeners::{DEFAULT_LISTENER_CAPACITY, ListenerError, ListenerSet, TimeListener};
use crate::widgets::{draw_disc, draw_ring, draw_sweep_arc};

/// A touch input in dial-local coordinates.
///
/// All three phases are handled the same way: wherever the finger is, the
/// visible pointers follow.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TouchEvent {
    /// Finger down.
    Press(Point),
    /// Finger moved while down.
    Drag(Point),
    /// Finger lifted.
    Release(Point),
}

impl TouchEvent {
    /// Position of the touch.
    #[inline]
    pub const fn point(self) -> Point {
        match self {
            Self::Press(p) | Self::Drag(p) | Self::Release(p) => p,
        }
    }

    /// Same phase, position moved by `by`. Coordinates saturate at the `i32` range.
    pub fn translate(
        self,
        by: Point,
    ) -> Self {
        let shift = |p: Point| Point::new(p.x.saturating_add(by.x), p.y.saturating_add(by.y));
        match self {
            Self::Press(p) => Self::Press(shift(p)),
            Self::Drag(p) => Self::Drag(shift(p)),
            Self::Release(p) => Self::Release(shift(p)),
        }
    }
}

/// Result of feeding a touch to the dial.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TouchOutcome {
    /// The dial has not been laid out yet. Nothing changed, nobody was notified.
    NotLaidOut,
    /// The touch was applied and listeners were notified with these values.
    Handled {
        /// Hour after the touch.
        hour: u8,
        /// Minute after the touch.
        minute: u8,
    },
}

/// Mutable dial state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DialState {
    /// Current hour, 0-11.
    pub hour: u8,
    /// Current minute, 0-59.
    pub minute: u8,
    /// Viewport center, known after the first non-empty layout.
    pub center: Option<Point>,
    /// Whether the hour pointer is drawn and follows touches.
    pub hour_visible: bool,
    /// Whether the minute pointer is drawn and follows touches.
    pub minute_visible: bool,
}

/// Clock-face dial with an hour and a minute pointer.
pub struct ClockDial<'a, const N: usize = DEFAULT_LISTENER_CAPACITY> {
    config: DialConfig,
    state: DialState,
    listeners: ListenerSet<'a, N>,
    redraw_requested: bool,
}

impl<'a, const N: usize> ClockDial<'a, N> {
    /// Create a dial from its configuration.
    ///
    /// Initial values are wrapped into `0..12` and `0..60`.
    pub fn new(config: DialConfig) -> Self {
        Self {
            config,
            state: DialState {
                hour: config.hour % MAX_HOURS,
                minute: config.minute % MAX_MINUTES,
                center: None,
                hour_visible: config.hour_visible,
                minute_visible: config.minute_visible,
            },
            listeners: ListenerSet::new(),
            redraw_requested: true,
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Deliver the viewport size.
    ///
    /// Only the first call with a non-empty size has an effect: it fixes the
    /// center at `(width / 2, height / 2)`. Returns `true` on that call.
    pub fn layout(
        &mut self,
        size: Size,
    ) -> bool {
        if self.state.center.is_some() || size.width == 0 || size.height == 0 {
            return false;
        }
        self.state.center = Some(Point::new((size.width / 2) as i32, (size.height / 2) as i32));
        self.redraw_requested = true;
        true
    }

    /// Whether the center is known.
    #[inline]
    pub const fn is_laid_out(&self) -> bool { self.state.center.is_some() }

    /// Viewport center, if laid out.
    #[inline]
    pub const fn center(&self) -> Option<Point> { self.state.center }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Current hour (0-11).
    #[inline]
    pub const fn hour(&self) -> u8 { self.state.hour }

    /// Current minute (0-59).
    #[inline]
    pub const fn minute(&self) -> u8 { self.state.minute }

    /// Set the hour programmatically. Wraps modulo 12.
    ///
    /// Requests a redraw but does not notify; call [`refresh`](Self::refresh).
    pub fn set_hour(
        &mut self,
        hour: u8,
    ) {
        self.state.hour = hour % MAX_HOURS;
        self.redraw_requested = true;
    }

    /// Set the minute programmatically. Wraps modulo 60.
    ///
    /// Requests a redraw but does not notify; call [`refresh`](Self::refresh).
    pub fn set_minute(
        &mut self,
        minute: u8,
    ) {
        self.state.minute = minute % MAX_MINUTES;
        self.redraw_requested = true;
    }

    /// Snapshot of the current state.
    #[inline]
    pub const fn state(&self) -> DialState { self.state }

    /// Configuration the dial was built with.
    #[inline]
    pub const fn config(&self) -> &DialConfig { &self.config }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Show or hide the hour pointer. Hidden pointers ignore touches.
    #[inline]
    pub fn set_hour_visible(
        &mut self,
        visible: bool,
    ) {
        self.state.hour_visible = visible;
    }

    /// Show or hide the minute pointer. Hidden pointers ignore touches.
    #[inline]
    pub fn set_minute_visible(
        &mut self,
        visible: bool,
    ) {
        self.state.minute_visible = visible;
    }

    /// Whether the hour pointer is visible.
    #[inline]
    pub const fn is_hour_visible(&self) -> bool { self.state.hour_visible }

    /// Whether the minute pointer is visible.
    #[inline]
    pub const fn is_minute_visible(&self) -> bool { self.state.minute_visible }

    /// Visibility of either pointer.
    pub const fn is_visible(
        &self,
        kind: PointerKind,
    ) -> bool {
        match kind {
            PointerKind::Hour => self.state.hour_visible,
            PointerKind::Minute => self.state.minute_visible,
        }
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Register a listener. Registering the same listener twice is a no-op.
    pub fn subscribe(
        &mut self,
        listener: &'a dyn TimeListener,
    ) -> Result<(), ListenerError> {
        self.listeners.insert(listener)
    }

    /// Unregister a listener. Unregistering an absent listener is a no-op.
    pub fn unsubscribe(
        &mut self,
        listener: &dyn TimeListener,
    ) -> bool {
        self.listeners.remove(listener)
    }

    /// Number of registered listeners.
    #[inline]
    pub fn listener_count(&self) -> usize { self.listeners.len() }

    /// Request a redraw and notify every listener with both current values,
    /// whether or not they changed.
    pub fn refresh(&mut self) {
        self.redraw_requested = true;
        self.listeners.notify(self.state.hour, self.state.minute);
    }

    /// Returns `true` once after any change that needs the dial redrawn.
    pub fn take_redraw_request(&mut self) -> bool { core::mem::take(&mut self.redraw_requested) }

    // -------------------------------------------------------------------------
    // Touch
    // -------------------------------------------------------------------------

    /// Apply a touch in dial-local coordinates.
    ///
    /// Every visible pointer snaps to the position nearest to the touch angle,
    /// then the dial refreshes. Touches before layout are ignored.
    pub fn handle_touch(
        &mut self,
        event: TouchEvent,
    ) -> TouchOutcome {
        let Some(center) = self.state.center else {
            return TouchOutcome::NotLaidOut;
        };
        let angle = geometry::touch_angle(center, event.point());
        if self.state.hour_visible {
            self.state.hour = geometry::index_for_angle(PointerKind::Hour, angle);
        }
        if self.state.minute_visible {
            self.state.minute = geometry::index_for_angle(PointerKind::Minute, angle);
        }
        self.refresh();
        TouchOutcome::Handled {
            hour: self.state.hour,
            minute: self.state.minute,
        }
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Pixel position of a pointer's disc center, if laid out.
    pub fn pointer_position(
        &self,
        kind: PointerKind,
    ) -> Option<Point> {
        let center = self.state.center?;
        let index = match kind {
            PointerKind::Hour => self.state.hour,
            PointerKind::Minute => self.state.minute,
        };
        Some(geometry::pointer_position(center, kind, index, self.config.radius))
    }

    fn draw_pointer<D>(
        &self,
        target: &mut D,
        center: Point,
        kind: PointerKind,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (index, color, disc_radius) = match kind {
            PointerKind::Hour => (self.state.hour, self.config.hour_fill_color, self.config.hour_pointer_radius),
            PointerKind::Minute => (
                self.state.minute,
                self.config.minute_fill_color,
                self.config.minute_pointer_radius,
            ),
        };
        let position = geometry::pointer_position(center, kind, index, self.config.radius);
        draw_disc(target, position, disc_radius, color)?;
        draw_sweep_arc(
            target,
            center,
            self.config.radius,
            geometry::sweep_degrees(kind, index),
            self.config.stroke_width,
            color,
        )
    }
}

impl<const N: usize> Drawable for ClockDial<'_, N> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let Some(center) = self.state.center else {
            return Ok(());
        };
        draw_ring(
            target,
            center,
            self.config.radius,
            self.config.stroke_width,
            self.config.stroke_color,
        )?;
        if self.state.hour_visible {
            self.draw_pointer(target, center, PointerKind::Hour)?;
        }
        if self.state.minute_visible {
            self.draw_pointer(target, center, PointerKind::Minute)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::{Point, Size};

    use super::*;
    use crate::colors::{BLUE, GREEN, RED};
    use crate::test_support::{RecordingListener, RecordingTarget};

    const VIEWPORT: Size = Size::new(120, 120);
    const CENTER: Point = Point::new(60, 60);

    /// Small dial that fits the test viewport.
    fn small_config() -> DialConfig {
        DialConfig {
            radius: 40,
            hour_pointer_radius: 6,
            minute_pointer_radius: 4,
            ..DialConfig::new()
        }
    }

    fn laid_out(config: DialConfig) -> ClockDial<'static> {
        let mut dial: ClockDial<'_> = ClockDial::new(config);
        assert!(dial.layout(VIEWPORT));
        dial
    }

    fn only(kind: PointerKind) -> DialConfig {
        DialConfig {
            hour_visible: kind == PointerKind::Hour,
            minute_visible: kind == PointerKind::Minute,
            ..small_config()
        }
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    #[test]
    fn test_defaults_before_touch() {
        let dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        assert_eq!(dial.hour(), 3);
        assert_eq!(dial.minute(), 45);
        assert!(dial.is_hour_visible());
        assert!(dial.is_minute_visible());
        assert!(!dial.is_laid_out(), "Center is unknown until layout");
        assert_eq!(dial.center(), None);
    }

    #[test]
    fn test_initial_values_wrap() {
        let config = DialConfig {
            hour: 15,
            minute: 125,
            ..DialConfig::new()
        };
        let dial: ClockDial<'_> = ClockDial::new(config);
        assert_eq!(dial.hour(), 3);
        assert_eq!(dial.minute(), 5);
    }

    #[test]
    fn test_setters_wrap_and_request_redraw() {
        let mut dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        dial.take_redraw_request();

        dial.set_hour(12);
        dial.set_minute(61);
        assert_eq!(dial.hour(), 0);
        assert_eq!(dial.minute(), 1);
        assert!(dial.take_redraw_request());
        assert!(!dial.take_redraw_request(), "Redraw request is consumed");
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    #[test]
    fn test_layout_sets_center_once() {
        let mut dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        assert!(dial.layout(Size::new(240, 200)));
        assert_eq!(dial.center(), Some(Point::new(120, 100)));

        assert!(!dial.layout(Size::new(100, 100)), "Second layout is ignored");
        assert_eq!(dial.center(), Some(Point::new(120, 100)));
    }

    #[test]
    fn test_layout_ignores_empty_size() {
        let mut dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        assert!(!dial.layout(Size::new(0, 100)));
        assert!(!dial.layout(Size::zero()));
        assert!(!dial.is_laid_out());

        assert!(dial.layout(Size::new(11, 11)), "First real size still counts");
        assert_eq!(dial.center(), Some(Point::new(5, 5)));
    }

    // -------------------------------------------------------------------------
    // Touch
    // -------------------------------------------------------------------------

    #[test]
    fn test_touch_before_layout_is_ignored() {
        let listener = RecordingListener::new();
        let mut dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        dial.subscribe(&listener).unwrap();

        let outcome = dial.handle_touch(TouchEvent::Press(Point::new(10, 10)));
        assert_eq!(outcome, TouchOutcome::NotLaidOut);
        assert_eq!(dial.hour(), 3);
        assert_eq!(dial.minute(), 45);
        assert_eq!(listener.hour_calls(), 0, "No notification before layout");
    }

    #[test]
    fn test_touch_half_turn_minute_only() {
        let mut dial = laid_out(only(PointerKind::Minute));
        let outcome = dial.handle_touch(TouchEvent::Press(Point::new(60, 100)));
        assert_eq!(outcome, TouchOutcome::Handled { hour: 3, minute: 30 });
        assert_eq!(dial.hour(), 3, "Hidden hour pointer is untouched");
    }

    #[test]
    fn test_touch_half_turn_hour_only() {
        let mut dial = laid_out(only(PointerKind::Hour));
        dial.handle_touch(TouchEvent::Drag(Point::new(60, 100)));
        assert_eq!(dial.hour(), 6);
        assert_eq!(dial.minute(), 45, "Hidden minute pointer is untouched");
    }

    #[test]
    fn test_touch_updates_both_visible_pointers() {
        let mut dial = laid_out(small_config());
        // 9 o'clock
        dial.handle_touch(TouchEvent::Release(Point::new(20, 60)));
        assert_eq!(dial.hour(), 9);
        assert_eq!(dial.minute(), 45);
        // 3 o'clock
        dial.handle_touch(TouchEvent::Press(Point::new(100, 60)));
        assert_eq!(dial.hour(), 3);
        assert_eq!(dial.minute(), 15);
    }

    #[test]
    fn test_touch_with_no_visible_pointer_still_notifies() {
        let listener = RecordingListener::new();
        let config = DialConfig {
            hour_visible: false,
            minute_visible: false,
            ..small_config()
        };
        let mut dial: ClockDial<'_> = ClockDial::new(config);
        dial.layout(VIEWPORT);
        dial.subscribe(&listener).unwrap();

        dial.handle_touch(TouchEvent::Press(Point::new(60, 100)));
        assert_eq!(dial.hour(), 3);
        assert_eq!(dial.minute(), 45);
        assert_eq!(listener.hour_calls(), 1);
        assert_eq!(listener.minute_calls(), 1);
    }

    #[test]
    fn test_touch_left_of_top_wraps() {
        let mut dial = laid_out(only(PointerKind::Hour));
        // One hour left of 12 o'clock
        let touch = geometry::pointer_position(CENTER, PointerKind::Hour, 11, 40);
        dial.handle_touch(TouchEvent::Press(touch));
        assert_eq!(dial.hour(), 11, "Negative index must wrap to 11");

        let mut dial = laid_out(only(PointerKind::Minute));
        let touch = geometry::pointer_position(CENTER, PointerKind::Minute, 59, 40);
        dial.handle_touch(TouchEvent::Press(touch));
        assert_eq!(dial.minute(), 59, "Negative index must wrap to 59");
    }

    #[test]
    fn test_touch_on_center_maps_to_quarter() {
        // atan2(0, 0) is 0, i.e. 3 o'clock in screen terms
        let mut dial = laid_out(small_config());
        dial.handle_touch(TouchEvent::Press(CENTER));
        assert_eq!(dial.hour(), 3);
        assert_eq!(dial.minute(), 15);
    }

    #[test]
    fn test_round_trip_every_hour_and_minute() {
        let mut dial = laid_out(only(PointerKind::Hour));
        for hour in 0..MAX_HOURS {
            dial.set_hour(hour);
            let position = dial.pointer_position(PointerKind::Hour).unwrap();
            dial.set_hour((hour + 5) % MAX_HOURS);
            dial.handle_touch(TouchEvent::Press(position));
            assert_eq!(dial.hour(), hour, "Touch on hour {hour} pointer should select it");
        }

        let mut dial = laid_out(DialConfig {
            radius: 55,
            ..only(PointerKind::Minute)
        });
        for minute in 0..MAX_MINUTES {
            dial.set_minute(minute);
            let position = dial.pointer_position(PointerKind::Minute).unwrap();
            dial.handle_touch(TouchEvent::Press(position));
            assert_eq!(dial.minute(), minute, "Touch on minute {minute} pointer should select it");
        }
    }

    #[test]
    fn test_touch_at_extreme_coordinates() {
        let mut dial = laid_out(small_config());
        dial.handle_touch(TouchEvent::Press(Point::new(i32::MIN, 60)));
        assert_eq!(dial.hour(), 9);
        assert_eq!(dial.minute(), 45);

        dial.handle_touch(TouchEvent::Drag(Point::new(60, i32::MIN)));
        assert_eq!(dial.hour(), 0);
        assert_eq!(dial.minute(), 0);

        dial.handle_touch(TouchEvent::Release(Point::new(i32::MAX, 60)));
        assert_eq!(dial.hour(), 3);
        assert_eq!(dial.minute(), 15);
    }

    #[test]
    fn test_translate_saturates() {
        let by = Point::new(-10, 3);
        assert_eq!(TouchEvent::Press(Point::new(i32::MIN, 5)).translate(by), TouchEvent::Press(Point::new(i32::MIN, 8)));
        assert_eq!(
            TouchEvent::Drag(Point::new(0, i32::MAX)).translate(by),
            TouchEvent::Drag(Point::new(-10, i32::MAX))
        );
        assert_eq!(TouchEvent::Release(Point::new(4, 4)).translate(by), TouchEvent::Release(Point::new(-6, 7)));
    }

    #[test]
    fn test_touch_requests_redraw() {
        let mut dial = laid_out(small_config());
        dial.take_redraw_request();
        dial.handle_touch(TouchEvent::Press(Point::new(60, 20)));
        assert!(dial.take_redraw_request());
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    #[test]
    fn test_refresh_notifies_both_values() {
        let a = RecordingListener::new();
        let b = RecordingListener::new();
        let mut dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        dial.subscribe(&a).unwrap();
        dial.subscribe(&b).unwrap();

        dial.refresh();
        dial.refresh();
        for listener in [&a, &b] {
            assert_eq!(listener.hour_calls(), 2, "Hour callback fires on every refresh");
            assert_eq!(listener.minute_calls(), 2, "Minute callback fires on every refresh");
            assert_eq!(listener.last_hour(), Some(3));
            assert_eq!(listener.last_minute(), Some(45));
        }
    }

    #[test]
    fn test_refresh_works_before_layout() {
        let listener = RecordingListener::new();
        let mut dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        dial.subscribe(&listener).unwrap();
        dial.refresh();
        assert_eq!(listener.hour_calls(), 1);
    }

    #[test]
    fn test_double_subscribe_notifies_once() {
        let listener = RecordingListener::new();
        let mut dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        dial.subscribe(&listener).unwrap();
        dial.subscribe(&listener).unwrap();
        assert_eq!(dial.listener_count(), 1);

        dial.refresh();
        assert_eq!(listener.hour_calls(), 1);
        assert_eq!(listener.minute_calls(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let listener = RecordingListener::new();
        let stranger = RecordingListener::new();
        let mut dial: ClockDial<'_> = ClockDial::new(DialConfig::default());
        dial.subscribe(&listener).unwrap();

        assert!(!dial.unsubscribe(&stranger), "Unknown listener is a no-op");
        assert!(dial.unsubscribe(&listener));
        dial.refresh();
        assert_eq!(listener.hour_calls(), 0);
    }

    #[test]
    fn test_listeners_are_per_dial() {
        let listener = RecordingListener::new();
        let mut first: ClockDial<'_> = ClockDial::new(DialConfig::default());
        let mut second: ClockDial<'_> = ClockDial::new(DialConfig::default());
        first.subscribe(&listener).unwrap();

        second.refresh();
        assert_eq!(listener.hour_calls(), 0, "Other dial must not notify this listener");
        first.refresh();
        assert_eq!(listener.hour_calls(), 1);
    }

    #[test]
    fn test_listener_capacity() {
        let a = RecordingListener::new();
        let b = RecordingListener::new();
        let mut dial: ClockDial<'_, 1> = ClockDial::new(DialConfig::default());
        dial.subscribe(&a).unwrap();
        assert_eq!(dial.subscribe(&b), Err(ListenerError::Full));
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_before_layout_draws_nothing() {
        let dial: ClockDial<'_> = ClockDial::new(small_config());
        let mut target = RecordingTarget::new(VIEWPORT);
        dial.draw(&mut target).unwrap();
        assert!(target.is_empty());
    }

    #[test]
    fn test_draw_ring_only() {
        let dial = laid_out(DialConfig {
            hour_visible: false,
            minute_visible: false,
            ..small_config()
        });
        let mut target = RecordingTarget::new(VIEWPORT);
        dial.draw(&mut target).unwrap();

        for p in [Point::new(60, 20), Point::new(100, 60), Point::new(60, 100), Point::new(20, 60)] {
            assert_eq!(target.pixel(p), Some(RED), "Ring should cover {p:?}");
        }
        assert_eq!(target.pixel(CENTER), None, "Ring is not filled");
    }

    #[test]
    fn test_draw_hour_pointer_and_sweep() {
        let dial = laid_out(only(PointerKind::Hour));
        let mut target = RecordingTarget::new(VIEWPORT);
        dial.draw(&mut target).unwrap();

        // Disc at 3 o'clock, filled through its center
        assert_eq!(target.pixel(Point::new(100, 60)), Some(GREEN));
        assert_eq!(target.pixel(Point::new(100, 64)), Some(GREEN));
        // Sweep from 12 to 3 o'clock
        assert_eq!(target.pixel(Point::new(88, 32)), Some(GREEN), "Sweep should cover 1:30");
        // Outside the sweep the plain ring shows
        assert_eq!(target.pixel(Point::new(60, 100)), Some(RED));
        assert_eq!(target.pixel(Point::new(20, 60)), Some(RED));
    }

    #[test]
    fn test_draw_minute_pointer_and_sweep() {
        let config = DialConfig {
            minute: 30,
            ..only(PointerKind::Minute)
        };
        let dial = laid_out(config);
        let mut target = RecordingTarget::new(VIEWPORT);
        dial.draw(&mut target).unwrap();

        assert_eq!(target.pixel(Point::new(60, 100)), Some(BLUE), "Disc at 6 o'clock");
        assert_eq!(target.pixel(Point::new(100, 60)), Some(BLUE), "Sweep passes 3 o'clock");
        assert_eq!(target.pixel(Point::new(20, 60)), Some(RED), "9 o'clock is past the sweep");
    }

    #[test]
    fn test_draw_zero_sweep_has_no_arc() {
        let config = DialConfig {
            hour: 0,
            ..only(PointerKind::Hour)
        };
        let dial = laid_out(config);
        let mut target = RecordingTarget::new(VIEWPORT);
        dial.draw(&mut target).unwrap();

        assert_eq!(target.pixel(Point::new(60, 20)), Some(GREEN), "Disc sits at 12 o'clock");
        assert_eq!(target.pixel(Point::new(100, 60)), Some(RED), "No sweep at hour 0");
    }

    #[test]
    fn test_draw_huge_radius_does_not_panic() {
        for radius in [40_000, i32::MAX] {
            let config = DialConfig {
                radius,
                hour_pointer_radius: radius,
                minute_pointer_radius: radius,
                ..small_config()
            };
            let dial = laid_out(config);
            let mut target = RecordingTarget::new(VIEWPORT);
            dial.draw(&mut target).unwrap();
            assert!(dial.pointer_position(PointerKind::Hour).is_some());
        }
    }

    #[test]
    fn test_draw_huge_stroke_width_does_not_panic() {
        let config = DialConfig {
            stroke_width: u32::MAX,
            ..small_config()
        };
        let dial = laid_out(config);
        let mut target = RecordingTarget::new(VIEWPORT);
        dial.draw(&mut target).unwrap();
        assert!(!target.is_empty(), "Clamped stroke is still drawn");
    }

    #[test]
    fn test_draw_negative_radius_does_not_panic() {
        let config = DialConfig {
            radius: -10,
            hour_pointer_radius: -3,
            ..small_config()
        };
        let dial = laid_out(config);
        let mut target = RecordingTarget::new(VIEWPORT);
        dial.draw(&mut target).unwrap();
    }
}
