//! Per-frame simulation step
//!
//! Advances the round by exactly one frame. Sub-steps run in a fixed order
//! because each one reads state written by the one before it:
//! basket, stars, spawn, difficulty.

use rand::Rng;

use super::collision::star_caught;
use super::input::TickInput;
use super::spawn::create_star;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Advance the game state by one frame
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.running {
        return events;
    }

    update_basket(state, input, tuning);
    update_stars(state, &mut events);
    spawn_stars(state, tuning, rng, &mut events);
    update_difficulty(state, tuning, &mut events);

    events
}

/// Move the basket one step per held key. Both directions are evaluated
/// independently, so holding both keys cancels out.
pub fn update_basket(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    if input.left {
        state.basket.nudge_left(tuning.basket_step);
    }
    if input.right {
        state.basket.nudge_right(tuning.basket_step, state.canvas.x);
    }
}

/// Drop every star one frame, then remove caught and off-screen stars.
///
/// Walks indices in reverse so removal never skips an element and surviving
/// stars keep their spawn order.
pub fn update_stars(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for i in (0..state.stars.len()).rev() {
        let star = &mut state.stars[i];
        star.fall();

        if star_caught(star, &state.basket) {
            state.score += 1;
            state.stars.remove(i);
            events.push(GameEvent::StarCaught { score: state.score });
        } else if star.is_offscreen(state.canvas) {
            state.stars.remove(i);
        }
    }
}

/// Roll for a new star this frame
pub fn spawn_stars<R: Rng + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    if rng.random_bool(tuning.spawn_chance) {
        let star = create_star(rng, state.star_speed, state.canvas.x, tuning);
        state.stars.push(star);
        events.push(GameEvent::StarSpawned);
    }
}

/// Bump the baseline fall speed once at every interval boundary.
///
/// `elapsed` stays on a boundary value for a whole second worth of frames;
/// `last_speed_increase` keeps the bump from firing more than once there.
pub fn update_difficulty(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let elapsed = state.elapsed(tuning);
    if elapsed > 0
        && elapsed % tuning.speed_bump_interval_secs == 0
        && elapsed != state.last_speed_increase
    {
        state.star_speed += tuning.speed_bump;
        state.last_speed_increase = elapsed;
        log::debug!("Star speed up to {} at {}s", state.star_speed, elapsed);
        events.push(GameEvent::SpeedIncreased {
            speed: state.star_speed,
        });
    }
}
