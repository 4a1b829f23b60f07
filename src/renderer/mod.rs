//! Canvas rendering module
//!
//! Turns a `GameState` into a `Frame` of 2D draw commands. Read-only.

pub mod draw;
pub mod shapes;

pub use draw::{Color, DrawCommand, Frame};

use glam::Vec2;

use crate::sim::GameState;

/// Build the draw list for the current state: sky, stars, basket
pub fn render(state: &GameState) -> Frame {
    let mut frame = Frame::with_capacity(state.stars.len() + 4);

    frame.push(DrawCommand::VerticalGradient {
        min: Vec2::ZERO,
        size: state.canvas,
        top: draw::colors::SKY_TOP,
        bottom: draw::colors::SKY_BOTTOM,
    });
    frame.extend(state.stars.iter().map(shapes::star));
    frame.extend(shapes::basket(&state.basket));

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Star;
    use crate::tuning::Tuning;

    #[test]
    fn test_empty_state_draws_sky_and_basket() {
        let state = GameState::new(&Tuning::default());
        let frame = render(&state);
        assert_eq!(frame.commands.len(), 4);
        assert!(matches!(
            frame.commands[0],
            DrawCommand::VerticalGradient { .. }
        ));
    }

    #[test]
    fn test_one_polygon_per_star() {
        let mut state = GameState::new(&Tuning::default());
        state.stars.push(Star::new(100.0, 2.0));
        state.stars.push(Star::new(300.0, 2.0));
        let frame = render(&state);

        let polygons = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count();
        assert_eq!(polygons, 2);
        // Basket is painted last, over any star
        assert!(matches!(
            frame.commands.last(),
            Some(DrawCommand::StrokeRect { .. })
        ));
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut state = GameState::new(&Tuning::default());
        state.basket.pos.x = 0.0;
        let before = state.clone();
        let _ = render(&state);
        assert_eq!(state, before);
    }
}
