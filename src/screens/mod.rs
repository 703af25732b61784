//! Full-screen pages other than the picker.
//!
//! - **Logs Page** ([`logs`]): Recent picker log entries (toggled with `L`)
//!
//! The picker itself draws through [`TimePicker::draw`](crate::picker::TimePicker::draw).

mod logs;

pub use logs::{VISIBLE_ENTRIES, draw_logs_page};
