//! Star factory

use rand::Rng;

use super::state::Star;
use crate::consts::STAR_SPAWN_MARGIN;
use crate::tuning::Tuning;

/// Create a star just above the top edge at a random column.
///
/// `x` is uniform in `[margin, canvas_width - margin)` and the fall speed is
/// the current baseline plus a uniform offset in `[0, jitter)`.
pub fn create_star<R: Rng + ?Sized>(
    rng: &mut R,
    star_speed: f32,
    canvas_width: f32,
    tuning: &Tuning,
) -> Star {
    let span = (canvas_width - 2.0 * STAR_SPAWN_MARGIN).max(0.0);
    let x = STAR_SPAWN_MARGIN + rng.random::<f32>() * span;
    let speed = star_speed + rng.random::<f32>() * tuning.star_speed_jitter;
    Star::new(x, speed)
}
