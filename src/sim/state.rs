//! Game state and core simulation types
//!
//! One `GameState` per round. It is replaced wholesale when a new round starts.

use glam::Vec2;

use crate::consts::*;
use crate::tuning::Tuning;

/// Something the simulation wants the outside world to know about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A star landed in the basket; carries the new score
    StarCaught { score: u32 },
    /// A new star entered at the top edge
    StarSpawned,
    /// Baseline fall speed went up
    SpeedIncreased { speed: f32 },
}

/// A falling star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Half-extent used for both drawing radius and collision
    pub size: f32,
    /// Fall speed in pixels per frame, fixed at spawn
    pub speed: f32,
}

impl Star {
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, STAR_SPAWN_Y),
            size: STAR_SIZE,
            speed,
        }
    }

    /// Advance one frame of linear fall
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the star is past the cull line below the canvas
    pub fn is_offscreen(&self, canvas: Vec2) -> bool {
        self.pos.y > canvas.y + OFFSCREEN_MARGIN
    }
}

/// The player's basket; `pos` is its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basket {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Default for Basket {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BASKET_START_X, BASKET_Y),
            width: BASKET_WIDTH,
            height: BASKET_HEIGHT,
        }
    }
}

impl Basket {
    /// Step left if not already at the left edge
    pub fn nudge_left(&mut self, step: f32) {
        if self.pos.x > 0.0 {
            self.pos.x -= step;
        }
    }

    /// Step right if not already at the right edge
    pub fn nudge_right(&mut self, step: f32, canvas_width: f32) {
        if self.pos.x < canvas_width - self.width {
            self.pos.x += step;
        }
    }
}

/// Complete state of one round
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Stars caught this round
    pub score: u32,
    /// Seconds remaining on the countdown
    pub time_left: u32,
    /// True between start and countdown expiry
    pub running: bool,
    /// Live stars in spawn order
    pub stars: Vec<Star>,
    pub basket: Basket,
    /// Baseline speed for newly spawned stars
    pub star_speed: f32,
    /// Elapsed second at which the last speed bump fired (0 = none yet)
    pub last_speed_increase: u32,
    /// Playfield size
    pub canvas: Vec2,
}

impl GameState {
    /// Fresh, not yet running round on the default canvas
    pub fn new(tuning: &Tuning) -> Self {
        Self::with_canvas(tuning, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT))
    }

    pub fn with_canvas(tuning: &Tuning, canvas: Vec2) -> Self {
        Self {
            score: 0,
            time_left: tuning.round_secs,
            running: false,
            stars: Vec::new(),
            basket: Basket::default(),
            star_speed: tuning.base_star_speed,
            last_speed_increase: 0,
            canvas,
        }
    }

    /// Seconds since the round started
    pub fn elapsed(&self, tuning: &Tuning) -> u32 {
        tuning.round_secs.saturating_sub(self.time_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(&Tuning::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, 60);
        assert!(!state.running);
        assert!(state.stars.is_empty());
        assert_eq!(state.star_speed, 2.0);
        assert_eq!(state.last_speed_increase, 0);
        assert_eq!(state.basket.pos, Vec2::new(375.0, 550.0));
    }

    #[test]
    fn test_basket_stops_at_edges() {
        let mut basket = Basket::default();
        basket.pos.x = 0.0;
        basket.nudge_left(5.0);
        assert_eq!(basket.pos.x, 0.0);

        basket.pos.x = CANVAS_WIDTH - BASKET_WIDTH;
        basket.nudge_right(5.0, CANVAS_WIDTH);
        assert_eq!(basket.pos.x, CANVAS_WIDTH - BASKET_WIDTH);
    }

    #[test]
    fn test_star_offscreen_threshold() {
        let canvas = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let mut star = Star::new(100.0, 3.0);
        star.pos.y = CANVAS_HEIGHT + OFFSCREEN_MARGIN;
        assert!(!star.is_offscreen(canvas));
        star.fall();
        assert!(star.is_offscreen(canvas));
    }
}
