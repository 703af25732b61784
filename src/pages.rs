//! Page navigation for the simulator.
//!
//! Press `L` to toggle between the picker and the log viewer.
//!
//! # Pages
//!
//! - [`Page::Picker`]: Time labels on the left, clock dial on the right
//! - [`Page::Logs`]: Recent picker log entries

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Time picker with hour/minute labels and the dial.
    #[default]
    Picker,

    /// Log viewer.
    Logs,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Picker => Self::Logs,
            Self::Logs => Self::Picker,
        }
    }
}
