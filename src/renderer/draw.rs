//! Draw commands for a 2D canvas
//!
//! The renderer never touches a real surface. It emits a flat list of
//! primitives that a painter (see `platform::web::CanvasPainter`) replays.

use glam::Vec2;

/// CSS color string
pub type Color = &'static str;

/// A single 2D drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle with a vertical linear gradient
    VerticalGradient {
        min: Vec2,
        size: Vec2,
        top: Color,
        bottom: Color,
    },
    /// Fill a rectangle with a solid color
    FillRect { min: Vec2, size: Vec2, color: Color },
    /// Outline a rectangle
    StrokeRect {
        min: Vec2,
        size: Vec2,
        color: Color,
        line_width: f32,
    },
    /// Closed polygon, filled then stroked
    Polygon {
        points: Vec<Vec2>,
        fill: Color,
        stroke: Color,
        line_width: f32,
    },
}

/// One frame worth of draw commands, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(commands);
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SKY_TOP: Color = "#001122";
    pub const SKY_BOTTOM: Color = "#003366";
    pub const STAR_FILL: Color = "#ffd700";
    pub const STAR_STROKE: Color = "#ffed4e";
    pub const BASKET_BODY: Color = "#8B4513";
    pub const BASKET_RIM: Color = "#A0522D";
    pub const BASKET_OUTLINE: Color = "#654321";
}
