//! HUD sink
//!
//! Text labels (score, time, high score, final score) and the two panels shown
//! at the end of a round. On the web this is the DOM (`platform::web::DomHud`).

/// Receiver for HUD updates
pub trait Hud {
    fn set_score(&mut self, score: u32);
    fn set_time_left(&mut self, secs: u32);
    fn set_high_score(&mut self, score: u32);
    fn set_final_score(&mut self, score: u32);
    fn show_game_over(&mut self, visible: bool);
    fn show_new_high_score(&mut self, visible: bool);
}

/// HUD that writes to the log; used for headless native runs
#[derive(Debug, Default)]
pub struct LogHud;

impl Hud for LogHud {
    fn set_score(&mut self, score: u32) {
        log::debug!("score: {}", score);
    }

    fn set_time_left(&mut self, secs: u32) {
        if secs % 10 == 0 {
            log::info!("time left: {}s", secs);
        }
    }

    fn set_high_score(&mut self, score: u32) {
        log::info!("high score: {}", score);
    }

    fn set_final_score(&mut self, score: u32) {
        log::info!("final score: {}", score);
    }

    fn show_game_over(&mut self, visible: bool) {
        if visible {
            log::info!("GAME OVER");
        }
    }

    fn show_new_high_score(&mut self, visible: bool) {
        if visible {
            log::info!("NEW HIGH SCORE!");
        }
    }
}
