//! Leveled log buffer for on-screen log viewing.
//!
//! Provides a circular buffer of log entries displayed on the Logs page.
//! Each entry has a level, a message and a sequence number. The buffer is
//! owned by whoever logs (the picker), so several pickers never share lines.
//!
//! # Log Levels
//!
//! - `Debug`: Gray - per-touch details
//! - `Info`: Green - selection changes, subscriptions
//! - `Warn`: Yellow - ignored input
//!
//! # Usage
//!
//! ```ignore
//! crate::log_info!(self.log, "selected {}", kind.label());
//! crate::log_warn!(self.log, "touch before layout");
//! ```

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, GREEN, YELLOW};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Debug information (gray)
    Debug = 0,
    /// Normal operation (green)
    #[default]
    Info = 1,
    /// Warnings (yellow)
    Warn = 2,
}

impl LogLevel {
    /// Display color for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
        }
    }
}

/// A single log entry.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Severity level.
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN - 1` characters.
    pub message: String<LOG_MSG_LEN>,
    /// Position of this entry in the buffer's lifetime, starting at 0.
    pub seq: u32,
}

impl LogEntry {
    /// Create a log entry, truncating the message on a character boundary.
    pub fn new(
        level: LogLevel,
        message: &str,
        seq: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars().take(LOG_MSG_LEN - 1) {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self { level, message: msg, seq }
    }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
    next_seq: u32,
}

impl LogBuffer {
    /// Create an empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    seq: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
            next_seq: 0,
        }
    }

    /// Append a message. The oldest entry is dropped when full.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        self.entries[self.head] = LogEntry::new(level, message, self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Number of entries in the buffer.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if the buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        if self.count == 0 {
            return None;
        }
        Some(&self.entries[(self.head + LOG_ENTRIES - 1) % LOG_ENTRIES])
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl ExactSizeIterator for LogBufferIter<'_> {}

/// Formatting sink that keeps the first `LOG_MSG_LEN - 1` characters and
/// silently drops the rest.
#[derive(Default)]
pub struct LogLine {
    text: String<LOG_MSG_LEN>,
}

impl LogLine {
    /// Create an empty line.
    pub const fn new() -> Self { Self { text: String::new() } }

    /// Formatted text so far.
    #[inline]
    pub fn as_str(&self) -> &str { self.text.as_str() }
}

impl fmt::Write for LogLine {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.text.len() + c.len_utf8() > LOG_MSG_LEN - 1 || self.text.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format a message into a `LogBuffer` at the given level.
///
/// Messages longer than [`LOG_MSG_LEN`] are truncated.
#[macro_export]
macro_rules! log_at {
    ($buf:expr, $level:expr, $($arg:tt)*) => {{
        use core::fmt::Write;
        let mut line = $crate::log_buffer::LogLine::new();
        let _ = write!(line, $($arg)*);
        $buf.push($level, line.as_str());
    }};
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($buf:expr, $($arg:tt)*) => {
        $crate::log_at!($buf, $crate::log_buffer::LogLevel::Info, $($arg)*)
    };
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($buf:expr, $($arg:tt)*) => {
        $crate::log_at!($buf, $crate::log_buffer::LogLevel::Warn, $($arg)*)
    };
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($buf:expr, $($arg:tt)*) => {
        $crate::log_at!($buf, $crate::log_buffer::LogLevel::Debug, $($arg)*)
    };
}
