//! Fixed timestep clock
//!
//! The browser hands us one animation-frame callback per paint, at whatever
//! rate the display runs. The game is balanced per frame at 60 Hz and per
//! second for the countdown, so real elapsed time is split into whole frame
//! steps and whole countdown seconds here. Frames may be dropped under load;
//! countdown seconds never are.

use crate::consts::{FRAME_DT, MAX_FRAME_GAP, MAX_SUBSTEPS};

/// Steps owed after advancing the clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockSteps {
    /// Simulation frames to run
    pub frames: u32,
    /// Countdown seconds to tick
    pub seconds: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame_accumulator: f32,
    second_accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for `dt` seconds of real time.
    ///
    /// Simulation time is clamped to `MAX_FRAME_GAP` per call (tab in
    /// background, debugger) so the world never jumps. The countdown follows
    /// real time unclamped.
    pub fn advance(&mut self, dt: f32) -> ClockSteps {
        let dt = dt.max(0.0);
        self.frame_accumulator += dt.min(MAX_FRAME_GAP);
        self.second_accumulator += dt;

        let mut steps = ClockSteps::default();
        while self.frame_accumulator >= FRAME_DT && steps.frames < MAX_SUBSTEPS {
            self.frame_accumulator -= FRAME_DT;
            steps.frames += 1;
        }
        while self.second_accumulator >= 1.0 {
            self.second_accumulator -= 1.0;
            steps.seconds += 1;
        }
        steps
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frame_per_sixtieth() {
        let mut clock = FrameClock::new();
        let mut frames = 0;
        for _ in 0..60 {
            frames += clock.advance(FRAME_DT * 1.001).frames;
        }
        assert_eq!(frames, 60);
    }

    #[test]
    fn test_slow_display_catches_up() {
        // 30 Hz display still yields ~60 sim frames per second
        let mut clock = FrameClock::new();
        let mut steps = ClockSteps::default();
        for _ in 0..30 {
            let s = clock.advance(1.0 / 30.0 + 1e-5);
            steps.frames += s.frames;
            steps.seconds += s.seconds;
        }
        assert!((59..=61).contains(&steps.frames), "frames {}", steps.frames);
        assert_eq!(steps.seconds, 1);
    }

    #[test]
    fn test_long_gap_clamps_frames_not_seconds() {
        let mut clock = FrameClock::new();
        let steps = clock.advance(5.0);
        assert!(steps.frames <= MAX_SUBSTEPS);
        assert_eq!(steps.seconds, 5);
    }

    #[test]
    fn test_low_frame_rate_keeps_real_seconds() {
        // 5 fps for 10 seconds
        let mut clock = FrameClock::new();
        let mut seconds = 0;
        for _ in 0..50 {
            seconds += clock.advance(0.2 + 1e-5).seconds;
        }
        assert_eq!(seconds, 10);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(-3.0), ClockSteps::default());
    }

    #[test]
    fn test_reset_drops_partial_time() {
        let mut clock = FrameClock::new();
        clock.advance(0.09);
        clock.advance(0.09);
        clock.reset();
        let steps = clock.advance(0.005);
        assert_eq!(steps, ClockSteps::default());
    }
}
