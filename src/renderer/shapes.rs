//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::draw::{DrawCommand, colors};
use crate::sim::{Basket, Star};

/// Number of points on a star
const STAR_POINTS: usize = 5;
/// Inner vertex radius relative to the outer radius
const STAR_INNER_RATIO: f32 = 0.4;
/// Height of the lighter rim strip along the basket's top edge
const BASKET_RIM_HEIGHT: f32 = 5.0;
const OUTLINE_WIDTH: f32 = 2.0;

/// Outline of a five-point star centered at `center`.
///
/// Alternates outer vertices (at multiples of 4π/5) with inner vertices
/// offset by a further 2π/5, giving ten points in path order.
pub fn star_outline(center: Vec2, radius: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(STAR_POINTS * 2);

    for i in 0..STAR_POINTS {
        let outer_angle = (i * 4) as f32 * PI / STAR_POINTS as f32;
        let inner_angle = (i * 4 + 2) as f32 * PI / STAR_POINTS as f32;

        points.push(center + Vec2::from_angle(outer_angle) * radius);
        points.push(center + Vec2::from_angle(inner_angle) * radius * STAR_INNER_RATIO);
    }

    points
}

/// Draw command for one star
pub fn star(star: &Star) -> DrawCommand {
    DrawCommand::Polygon {
        points: star_outline(star.pos, star.size),
        fill: colors::STAR_FILL,
        stroke: colors::STAR_STROKE,
        line_width: OUTLINE_WIDTH,
    }
}

/// Draw commands for the basket: body, rim strip, outline
pub fn basket(basket: &Basket) -> [DrawCommand; 3] {
    let size = Vec2::new(basket.width, basket.height);
    [
        DrawCommand::FillRect {
            min: basket.pos,
            size,
            color: colors::BASKET_BODY,
        },
        DrawCommand::FillRect {
            min: basket.pos,
            size: Vec2::new(basket.width, BASKET_RIM_HEIGHT),
            color: colors::BASKET_RIM,
        },
        DrawCommand::StrokeRect {
            min: basket.pos,
            size,
            color: colors::BASKET_OUTLINE,
            line_width: OUTLINE_WIDTH,
        },
    ]
}
