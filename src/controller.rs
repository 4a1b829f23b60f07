//! Game lifecycle and loop orchestration
//!
//! Owns the round state and drives two cadences against it: the per-frame
//! simulation step and the once-per-second countdown. Both stop on their own
//! once `running` goes false; nothing has to be cancelled.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clock::{ClockSteps, FrameClock};
use crate::highscore::HighScore;
use crate::hud::Hud;
use crate::persistence::KeyValueStore;
use crate::renderer::{self, Frame};
use crate::sim::{GameEvent, GameState, InputTracker, tick};
use crate::tuning::Tuning;

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Page loaded, waiting for the first key press
    Idle,
    /// Round in progress
    Running,
    /// Countdown expired, game over panel showing
    Ended,
}

pub struct GameController<S: KeyValueStore, H: Hud> {
    state: GameState,
    phase: Phase,
    input: InputTracker,
    tuning: Tuning,
    rng: Pcg32,
    clock: FrameClock,
    store: S,
    hud: H,
    high_score: HighScore,
    new_high_score: bool,
}

impl<S: KeyValueStore, H: Hud> GameController<S, H> {
    /// Page-load setup: show the stored high score and wait in `Idle`
    pub fn new(store: S, mut hud: H, tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        let high_score = HighScore::load(&store);
        hud.set_high_score(high_score.best());
        log::info!(
            "Controller ready (seed {}, high score {})",
            seed,
            high_score.best()
        );

        Self {
            state: GameState::new(&tuning),
            phase: Phase::Idle,
            input: InputTracker::new(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            clock: FrameClock::new(),
            store,
            hud,
            high_score,
            new_high_score: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    /// Whether the last finished round set a new high score
    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    /// Key pressed. The first press while idle starts the round.
    pub fn key_down(&mut self, key: &str) {
        self.input.press(key);
        if self.phase == Phase::Idle {
            self.start_game();
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.release(key);
    }

    /// Reset everything and begin a round
    pub fn start_game(&mut self) {
        self.state = GameState::with_canvas(&self.tuning, self.state.canvas);
        self.state.running = true;
        self.phase = Phase::Running;
        self.new_high_score = false;
        self.clock.reset();

        self.hud.set_score(self.state.score);
        self.hud.set_time_left(self.state.time_left);
        self.hud.show_game_over(false);
        self.hud.show_new_high_score(false);

        log::info!("Game started ({}s round)", self.tuning.round_secs);
    }

    /// Start over after a finished round
    pub fn restart_game(&mut self) {
        log::info!("Restarting game");
        self.phase = Phase::Idle;
        self.start_game();
    }

    /// Stop the round, settle the high score and show the results
    pub fn end_game(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.state.running = false;
        self.phase = Phase::Ended;

        let score = self.state.score;
        self.new_high_score = self.high_score.submit(&mut self.store, score);
        self.hud.set_high_score(self.high_score.best());
        self.hud.show_new_high_score(self.new_high_score);
        self.hud.set_final_score(score);
        self.hud.show_game_over(true);

        log::info!("Game over: score {} (best {})", score, self.high_score.best());
    }

    /// One simulation frame. Returns whether the frame loop should continue.
    pub fn frame(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        let input = self.input.tick_input();
        let events = tick(&mut self.state, &input, &self.tuning, &mut self.rng);
        for event in events {
            match event {
                GameEvent::StarCaught { score } => self.hud.set_score(score),
                GameEvent::SpeedIncreased { speed } => {
                    log::info!("Difficulty up: star speed {}", speed);
                }
                GameEvent::StarSpawned => {}
            }
        }
        true
    }

    /// One countdown second. Returns whether the timer loop should continue.
    pub fn timer_tick(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        if self.state.time_left > 0 {
            self.state.time_left -= 1;
            self.hud.set_time_left(self.state.time_left);
            if self.state.time_left == 0 {
                self.end_game();
            }
        }
        self.state.running
    }

    /// Drive both cadences from `dt` seconds of real time
    pub fn advance(&mut self, dt: f32) -> ClockSteps {
        if !self.state.running {
            return ClockSteps::default();
        }

        let steps = self.clock.advance(dt);
        for _ in 0..steps.frames {
            if !self.frame() {
                break;
            }
        }
        for _ in 0..steps.seconds {
            if !self.timer_tick() {
                break;
            }
        }
        steps
    }

    /// Draw list for the current state
    pub fn render(&self) -> Frame {
        renderer::render(&self.state)
    }
}
