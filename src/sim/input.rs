//! Pointer and touch input mapping
//!
//! Input only nudges the drift target; stars are never touched here.

use glam::Vec2;
use rand::Rng;

use super::state::Starfield;

/// Where a pointer event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Mouse pushes the view away from the cursor motion
    #[default]
    Mouse,
    /// Touch drags the view along with the finger
    Touch,
}

impl InputMode {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            InputMode::Mouse => -1.0,
            InputMode::Touch => 1.0,
        }
    }
}

/// Last seen pointer position and input mode
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    pub last: Option<Vec2>,
    pub mode: InputMode,
}

impl PointerTracker {
    /// Record a new position; returns the delta from the previous one, if any
    pub fn track(&mut self, pos: Vec2, mode: InputMode) -> Option<Vec2> {
        self.mode = mode;
        let delta = self.last.map(|prev| pos - prev);
        self.last = Some(pos);
        delta
    }

    /// Forget the baseline; the next move only records a position
    pub fn leave(&mut self) {
        self.last = None;
    }
}

impl<R: Rng> Starfield<R> {
    /// Feed a pointer or touch move at viewport coordinates `(x, y)`
    pub fn pointer_move(&mut self, x: f32, y: f32, mode: InputMode) {
        if let Some(delta) = self.pointer.track(Vec2::new(x, y), mode) {
            let gain = self.viewport.scale * mode.sign() / self.tuning.pointer_divisor;
            self.velocity.target += delta * gain;
        }
    }

    /// Pointer left the surface (or the touch ended)
    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }
}
