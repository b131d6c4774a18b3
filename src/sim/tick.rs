//! Per-frame simulation update
//!
//! Eases the drift velocity, advances every star and recycles the ones that
//! left the screen. Rendering is a separate pass (see `renderer`).

use rand::Rng;

use super::recycle::recycle_star;
use super::state::Starfield;

/// Advance the starfield by one frame
///
/// Returns how many stars were recycled.
pub fn tick<R: Rng>(field: &mut Starfield<R>) -> usize {
    let tuning = &field.tuning;
    field.velocity.ease(tuning.target_decay, tuning.easing);

    let velocity = field.velocity;
    let viewport = field.viewport;
    let center = viewport.center();
    let mut recycled = 0;

    for star in &mut field.stars {
        star.advance(&velocity, center);

        if viewport.is_outside(star.pos, tuning.overflow) {
            recycle_star(star, velocity.current, &viewport, tuning, &mut field.rng);
            recycled += 1;
        }
    }

    field.frame += 1;
    recycled
}
