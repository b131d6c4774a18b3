//! Starfield simulation module
//!
//! All motion logic lives here. This module stays free of rendering and
//! platform code:
//! - Seeded RNG only (injected, never global)
//! - Stable iteration order (stars keep their slots for the whole session)
//! - Input mutates the drift target, never the stars

pub mod input;
pub mod recycle;
pub mod state;
pub mod tick;

pub use input::{InputMode, PointerTracker};
pub use recycle::{Axis, Entry, choose_axis, choose_entry, recycle_star};
pub use state::{Star, Starfield, Velocity, Viewport};
pub use tick::tick;
