//! Star Catch - catch falling stars in a basket before the clock runs out
//!
//! Core modules:
//! - `sim`: Deterministic simulation (basket, stars, collisions, difficulty)
//! - `renderer`: Draw-list generation for a 2D canvas
//! - `controller`: Game lifecycle and loop orchestration
//! - `clock`: Fixed timestep driving the frame and countdown cadences
//! - `platform`: Browser bindings (LocalStorage, DOM HUD, canvas painter)
//! - `persistence`: Key-value storage abstraction
//! - `tuning`: Data-driven game balance

pub mod clock;
pub mod controller;
pub mod highscore;
pub mod hud;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use controller::{GameController, Phase};
pub use highscore::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the paint cadence the game was balanced for)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest real-time gap a single animation frame may account for
    pub const MAX_FRAME_GAP: f32 = 0.1;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Basket defaults
    pub const BASKET_WIDTH: f32 = 50.0;
    pub const BASKET_HEIGHT: f32 = 30.0;
    pub const BASKET_START_X: f32 = 375.0;
    pub const BASKET_Y: f32 = 550.0;

    /// Star defaults
    pub const STAR_SIZE: f32 = 15.0;
    /// Stars appear just above the top edge
    pub const STAR_SPAWN_Y: f32 = -20.0;
    /// Horizontal margin kept clear on both sides when spawning
    pub const STAR_SPAWN_MARGIN: f32 = 10.0;
    /// Stars are culled once this far below the bottom edge
    pub const OFFSCREEN_MARGIN: f32 = 20.0;

    /// Key identifiers for the two directional controls
    pub const KEY_LEFT: &str = "ArrowLeft";
    pub const KEY_RIGHT: &str = "ArrowRight";
}
