//! Canvas-2D renderer
//!
//! Draws a `GameState` snapshot to an HTML canvas. Strictly read-only with
//! respect to the simulation; all gameplay math stays in `sim`.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::PARTICLE_ALPHA_SCALE;
use crate::sim::{Direction, GameState};

const GRID_LINE_COLOR: &str = "#2A2A2A";
const OBSTACLE_COLOR: &str = "#777777";
const SNAKE_HEAD_COLOR: &str = "#4CAF50";
const SNAKE_BODY_COLOR: &str = "#81C784";
const SNAKE_BORDER_COLOR: &str = "#1E1E1E";
const BOOST_BORDER_COLOR: &str = "#00FF00";

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    canvas_px: f64,
    cell_px: f64,
}

impl Renderer {
    /// Wrap a canvas element. Fails if the 2D context is unavailable.
    pub fn new(canvas: &HtmlCanvasElement, canvas_px: u32, cell_px: u32) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "failed to get 2d context".to_string())?
            .ok_or_else(|| "canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "context is not CanvasRenderingContext2d".to_string())?;
        Ok(Self {
            ctx,
            canvas_px: canvas_px as f64,
            cell_px: cell_px as f64,
        })
    }

    /// Draw one full frame from a state snapshot.
    pub fn draw(&self, state: &GameState, now_ms: f64) {
        self.ctx.clear_rect(0.0, 0.0, self.canvas_px, self.canvas_px);
        self.draw_grid();
        self.draw_obstacles(state);
        self.draw_fruits(state);
        self.draw_snake(state, now_ms);
        self.draw_particles(state);
        self.draw_hud(state, now_ms);
    }

    fn draw_grid(&self) {
        self.ctx.set_stroke_style_str(GRID_LINE_COLOR);
        self.ctx.set_line_width(1.0);
        let mut i = 0.0;
        while i < self.canvas_px {
            self.ctx.begin_path();
            self.ctx.move_to(i, 0.0);
            self.ctx.line_to(i, self.canvas_px);
            self.ctx.stroke();

            self.ctx.begin_path();
            self.ctx.move_to(0.0, i);
            self.ctx.line_to(self.canvas_px, i);
            self.ctx.stroke();
            i += self.cell_px;
        }
    }

    fn draw_obstacles(&self, state: &GameState) {
        self.ctx.set_fill_style_str(OBSTACLE_COLOR);
        for obs in &state.obstacles {
            self.ctx.fill_rect(
                obs.x as f64 * self.cell_px,
                obs.y as f64 * self.cell_px,
                self.cell_px,
                self.cell_px,
            );
        }
    }

    fn draw_fruits(&self, state: &GameState) {
        let size = self.cell_px * 0.8;
        let offset = (self.cell_px - size) / 2.0;
        for fruit in &state.fruits {
            let kind = &state.config.fruits[fruit.kind];
            let x = fruit.cell.x as f64 * self.cell_px + offset;
            let y = fruit.cell.y as f64 * self.cell_px + offset;

            self.ctx.set_fill_style_str(&kind.color);
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(x + size / 2.0, y + size / 2.0, size / 2.0, 0.0, PI * 2.0);
            self.ctx.fill();

            // Sparkle diamond on the special fruit
            if kind.points >= 5 {
                self.ctx.set_fill_style_str("rgba(255, 255, 255, 0.7)");
                self.ctx.begin_path();
                self.ctx.move_to(x + size / 2.0, y);
                self.ctx.line_to(x + size, y + size / 2.0);
                self.ctx.line_to(x + size / 2.0, y + size);
                self.ctx.line_to(x, y + size / 2.0);
                self.ctx.close_path();
                self.ctx.fill();
            }
        }
    }

    fn draw_snake(&self, state: &GameState, now_ms: f64) {
        let boost = state.power_up_active(now_ms);
        for (index, segment) in state.snake.iter().enumerate() {
            let is_head = index == 0;
            let x = segment.x as f64 * self.cell_px;
            let y = segment.y as f64 * self.cell_px;

            self.ctx.set_fill_style_str(if is_head {
                SNAKE_HEAD_COLOR
            } else {
                SNAKE_BODY_COLOR
            });
            self.ctx.fill_rect(x, y, self.cell_px, self.cell_px);

            self.ctx.set_stroke_style_str(if boost {
                BOOST_BORDER_COLOR
            } else {
                SNAKE_BORDER_COLOR
            });
            self.ctx.set_line_width(2.0);
            self.ctx.stroke_rect(x, y, self.cell_px, self.cell_px);

            if is_head && state.direction.is_some() {
                self.draw_eyes(x, y, state.direction);
            }
        }
    }

    fn draw_eyes(&self, x: f64, y: f64, direction: Option<Direction>) {
        let eye = self.cell_px / 5.0;
        let left = (x + self.cell_px / 3.0, y + self.cell_px / 3.0);
        let right = (x + self.cell_px * 2.0 / 3.0, y + self.cell_px / 3.0);

        self.ctx.set_fill_style_str("white");
        self.ctx.begin_path();
        let _ = self.ctx.arc(left.0, left.1, eye, 0.0, PI * 2.0);
        let _ = self.ctx.arc(right.0, right.1, eye, 0.0, PI * 2.0);
        self.ctx.fill();

        self.ctx.set_fill_style_str("black");
        self.ctx.begin_path();
        let _ = self.ctx.arc(left.0, left.1, eye / 2.0, 0.0, PI * 2.0);
        let _ = self.ctx.arc(right.0, right.1, eye / 2.0, 0.0, PI * 2.0);
        self.ctx.fill();

        // Tongue flicks out when moving horizontally
        if let Some(dir @ (Direction::Left | Direction::Right)) = direction {
            let (from_x, to_x) = if dir == Direction::Right {
                (x + self.cell_px, x + self.cell_px + 5.0)
            } else {
                (x, x - 5.0)
            };
            self.ctx.set_stroke_style_str("red");
            self.ctx.set_line_width(2.0);
            self.ctx.begin_path();
            self.ctx.move_to(from_x, y + self.cell_px / 2.0);
            self.ctx.line_to(to_x, y + self.cell_px / 2.0);
            self.ctx.stroke();
        }
    }

    fn draw_particles(&self, state: &GameState) {
        for p in &state.particles {
            self.ctx.set_fill_style_str(&p.color);
            self.ctx
                .set_global_alpha((p.life / PARTICLE_ALPHA_SCALE).clamp(0.0, 1.0) as f64);
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, PI * 2.0);
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_hud(&self, state: &GameState, now_ms: f64) {
        self.ctx.set_fill_style_str("white");
        self.ctx.set_font("16px Arial");
        self.ctx.set_text_align("left");
        let _ = self
            .ctx
            .fill_text(&format!("Score: {}", state.score), 10.0, 20.0);
        let _ = self
            .ctx
            .fill_text(&format!("Level: {}", state.level + 1), 10.0, 40.0);

        if state.multiplier > 1 {
            self.ctx.set_fill_style_str("#FFD700");
            let _ = self
                .ctx
                .fill_text(&format!("x{}", state.multiplier), 10.0, 60.0);
        }

        if state.power_up_active(now_ms) {
            let remaining = state.power_up_remaining_ms(now_ms) / 1000.0;
            self.ctx.set_fill_style_str(BOOST_BORDER_COLOR);
            let _ = self.ctx.fill_text(
                &format!("Speed Boost: {remaining:.1}s"),
                self.canvas_px - 150.0,
                20.0,
            );
        }
    }
}
