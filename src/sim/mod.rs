//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame
//! - Seeded RNG only, passed in by the caller
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::star_caught;
pub use input::{InputTracker, TickInput};
pub use spawn::create_star;
pub use state::{Basket, GameEvent, GameState, Star};
pub use tick::{spawn_stars, tick, update_basket, update_difficulty, update_stars};
