//! Data-driven game balance
//!
//! Defaults reproduce the classic 60 second round. Any subset of fields can be
//! overridden from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Balance knobs for a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Round length in seconds
    pub round_secs: u32,
    /// Basket movement per frame while a direction key is held (pixels)
    pub basket_step: f32,
    /// Probability of spawning a star on any given frame
    pub spawn_chance: f64,
    /// Baseline fall speed at the start of a round (pixels/frame)
    pub base_star_speed: f32,
    /// Upper bound (exclusive) of the random speed added to each new star
    pub star_speed_jitter: f32,
    /// Baseline speed increase applied at each interval boundary
    pub speed_bump: f32,
    /// Elapsed seconds between speed bumps
    pub speed_bump_interval_secs: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            round_secs: 60,
            basket_step: 5.0,
            spawn_chance: 0.03,
            base_star_speed: 2.0,
            star_speed_jitter: 2.0,
            speed_bump: 0.5,
            speed_bump_interval_secs: 15,
        }
    }
}

impl Tuning {
    /// LocalStorage key for tuning overrides
    pub const STORAGE_KEY: &'static str = "catchStarsTuning";

    /// Parse tuning overrides, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Tuning>(json) {
            Ok(tuning) => tuning.sanitized(),
            Err(e) => {
                log::warn!("Ignoring malformed tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load tuning overrides from a key-value store
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Some(json) => {
                log::info!("Loaded tuning overrides");
                Self::from_json(&json)
            }
            None => Self::default(),
        }
    }

    /// Clamp values that would break round invariants
    pub(crate) fn sanitized(mut self) -> Self {
        self.round_secs = self.round_secs.max(1);
        self.speed_bump_interval_secs = self.speed_bump_interval_secs.max(1);
        self.spawn_chance = self.spawn_chance.clamp(0.0, 1.0);
        self.star_speed_jitter = self.star_speed_jitter.max(0.0);
        self.speed_bump = self.speed_bump.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_match_classic_round() {
        let tuning = Tuning::default();
        assert_eq!(tuning.round_secs, 60);
        assert_eq!(tuning.basket_step, 5.0);
        assert_eq!(tuning.spawn_chance, 0.03);
        assert_eq!(tuning.base_star_speed, 2.0);
        assert_eq!(tuning.speed_bump_interval_secs, 15);
    }

    #[test]
    fn test_partial_override() {
        let tuning = Tuning::from_json(r#"{"round_secs": 30, "speed_bump": 1.0}"#);
        assert_eq!(tuning.round_secs, 30);
        assert_eq!(tuning.speed_bump, 1.0);
        assert_eq!(tuning.basket_step, 5.0);
    }

    #[test]
    fn test_malformed_falls_back() {
        assert_eq!(Tuning::from_json("not json"), Tuning::default());
    }

    #[test]
    fn test_degenerate_values_clamped() {
        let tuning = Tuning::from_json(
            r#"{"round_secs": 0, "speed_bump_interval_secs": 0, "spawn_chance": 4.0}"#,
        );
        assert_eq!(tuning.round_secs, 1);
        assert_eq!(tuning.speed_bump_interval_secs, 1);
        assert_eq!(tuning.spawn_chance, 1.0);
    }

    #[test]
    fn test_load_from_store() {
        let mut store = MemoryStore::new();
        assert_eq!(Tuning::load(&store), Tuning::default());

        store.set(Tuning::STORAGE_KEY, r#"{"basket_step": 8.0}"#);
        assert_eq!(Tuning::load(&store).basket_step, 8.0);
    }
}
