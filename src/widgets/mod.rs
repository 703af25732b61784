//! Widget components for the time picker.
//!
//! - [`primitives`]: Ring, disc and capped sweep arc used by the dial
//! - [`labels`]: Hour and minute labels with the selector bar
//!
//! All draw functions are generic over `DrawTarget<Color = Rgb565>` and return
//! the target's error instead of swallowing it. Callers that cannot act on a
//! draw error (the simulator loop) discard it with `.ok()`.

mod labels;
mod primitives;

pub use labels::draw_time_label;
pub use primitives::{draw_disc, draw_ring, draw_sweep_arc};
