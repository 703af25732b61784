//! Value-changed listeners for the dial.
//!
//! Listeners are borrowed trait objects, so the host keeps ownership of its
//! own state and the dial only holds references. Callbacks take `&self`;
//! listeners that need to record values use interior mutability (`Cell`).
//!
//! Membership is keyed by identity: two registrations of the same object are
//! one entry, regardless of the listener's contents. Each dial owns its own
//! set, so notifications never leak between dials.

use core::fmt;

use heapless::Vec;

/// Default number of listeners a dial can hold.
pub const DEFAULT_LISTENER_CAPACITY: usize = 4;

/// Receiver of dial value changes.
///
/// Both methods are called on every refresh, even when only one of the two
/// values changed, so implementations must tolerate repeated values.
pub trait TimeListener {
    /// Called with the current hour (0-11).
    fn on_hour_changed(
        &self,
        hour: u8,
    );

    /// Called with the current minute (0-59).
    fn on_minute_changed(
        &self,
        minute: u8,
    );
}

/// Listener registration errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListenerError {
    /// The set is at capacity and the listener is not already a member.
    Full,
}

impl fmt::Display for ListenerError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Full => write!(f, "listener set is full"),
        }
    }
}

impl core::error::Error for ListenerError {}

/// Fixed-capacity set of listener references.
pub struct ListenerSet<'a, const N: usize> {
    entries: Vec<&'a dyn TimeListener, N>,
}

impl<'a, const N: usize> ListenerSet<'a, N> {
    /// Create an empty set.
    pub const fn new() -> Self { Self { entries: Vec::new() } }

    /// Add a listener. Adding a listener that is already present is a no-op.
    pub fn insert(
        &mut self,
        listener: &'a dyn TimeListener,
    ) -> Result<(), ListenerError> {
        if self.contains(listener) {
            return Ok(());
        }
        self.entries.push(listener).map_err(|_| ListenerError::Full)
    }

    /// Remove a listener. Removing an absent listener is a no-op.
    ///
    /// Returns `true` if the listener was a member.
    pub fn remove(
        &mut self,
        listener: &dyn TimeListener,
    ) -> bool {
        match self.position(listener) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `listener` (by identity) is a member.
    #[inline]
    pub fn contains(
        &self,
        listener: &dyn TimeListener,
    ) -> bool {
        self.position(listener).is_some()
    }

    /// Number of registered listeners.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Check if no listeners are registered.
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Call both callbacks on every listener, in registration order.
    pub fn notify(
        &self,
        hour: u8,
        minute: u8,
    ) {
        for listener in self.entries.iter() {
            listener.on_hour_changed(hour);
            listener.on_minute_changed(minute);
        }
    }

    fn position(
        &self,
        listener: &dyn TimeListener,
    ) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| core::ptr::addr_eq(*entry, listener))
    }
}

impl<const N: usize> Default for ListenerSet<'_, N> {
    fn default() -> Self { Self::new() }
}
