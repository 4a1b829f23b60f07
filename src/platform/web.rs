//! Browser platform: LocalStorage, DOM HUD and a Canvas 2D painter

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Storage};

use crate::hud::Hud;
use crate::persistence::KeyValueStore;
use crate::renderer::{DrawCommand, Frame};

/// `window.localStorage`, or nothing if the browser refuses access
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, high scores will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read {} from LocalStorage: {:?}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to write {} to LocalStorage", key);
            }
        }
    }
}

/// Element ids the HUD writes to
mod ids {
    pub const SCORE: &str = "currentScore";
    pub const TIME_LEFT: &str = "timeLeft";
    pub const HIGH_SCORE: &str = "highScore";
    pub const FINAL_SCORE: &str = "finalScore";
    pub const GAME_OVER: &str = "gameOver";
    pub const NEW_HIGH_SCORE: &str = "newHighScore";
}

/// HUD backed by DOM elements; missing elements are skipped
pub struct DomHud {
    document: Document,
}

impl DomHud {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_text(&self, id: &str, value: u32) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        let Some(el) = self
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let display = if visible { "block" } else { "none" };
        if el.style().set_property("display", display).is_err() {
            log::warn!("Could not toggle #{}", id);
        }
    }
}

impl Hud for DomHud {
    fn set_score(&mut self, score: u32) {
        self.set_text(ids::SCORE, score);
    }

    fn set_time_left(&mut self, secs: u32) {
        self.set_text(ids::TIME_LEFT, secs);
    }

    fn set_high_score(&mut self, score: u32) {
        self.set_text(ids::HIGH_SCORE, score);
    }

    fn set_final_score(&mut self, score: u32) {
        self.set_text(ids::FINAL_SCORE, score);
    }

    fn show_game_over(&mut self, visible: bool) {
        self.set_visible(ids::GAME_OVER, visible);
    }

    fn show_new_high_score(&mut self, visible: bool) {
        self.set_visible(ids::NEW_HIGH_SCORE, visible);
    }
}

/// Replays a `Frame` onto a 2D canvas context
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    pub fn paint(&self, frame: &Frame) {
        for command in &frame.commands {
            self.draw(command);
        }
    }

    fn draw(&self, command: &DrawCommand) {
        let ctx = &self.ctx;
        match command {
            DrawCommand::VerticalGradient {
                min,
                size,
                top,
                bottom,
            } => {
                let gradient = ctx.create_linear_gradient(
                    min.x as f64,
                    min.y as f64,
                    min.x as f64,
                    (min.y + size.y) as f64,
                );
                for (offset, color) in [(0.0, top), (1.0, bottom)] {
                    if let Err(e) = gradient.add_color_stop(offset, color) {
                        log::warn!("Bad gradient stop {}: {:?}", color, e);
                    }
                }
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::FillRect { min, size, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::StrokeRect {
                min,
                size,
                color,
                line_width,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width as f64);
                ctx.stroke_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::Polygon {
                points,
                fill,
                stroke,
                line_width,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return;
                };
                ctx.set_fill_style_str(fill);
                ctx.set_stroke_style_str(stroke);
                ctx.set_line_width(*line_width as f64);
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.close_path();
                ctx.fill();
                ctx.stroke();
            }
        }
    }
}
