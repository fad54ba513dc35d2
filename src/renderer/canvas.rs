//! Canvas 2D scene renderer
//!
//! Draw order per frame: clear, blocks, particles, trail, ball (gradient +
//! glow), paddle. Overlay text ("PAUSED", start prompt) is drawn once on
//! state entry, not every frame.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::state::{GameState, Paddle};

const PADDLE_COLOR: &str = "#00FFFF";
const BLOCK_OUTLINE: &str = "#000000";
const OVERLAY_FONT: &str = "30px 'Courier New'";
const OVERLAY_COLOR: &str = "#FFFF00";
const GLOW_COLOR: &str = "#FF6600";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width as f64;
        self.height = height as f64;
    }

    /// Full frame while the game is running
    pub fn draw_frame(&self, state: &GameState, settings: &Settings) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.draw_blocks(state);
        if settings.particles {
            self.draw_particles(state)?;
        }
        if settings.trails {
            self.draw_trail(state)?;
        }
        self.draw_ball(state)?;
        self.draw_paddle(state);
        Ok(())
    }

    /// Static scene for Idle/Paused (after boot, reset, or resize)
    pub fn draw_static_scene(&self, state: &GameState) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.draw_blocks(state);
        self.draw_ball(state)?;
        self.draw_paddle(state);
        Ok(())
    }

    /// Centered overlay text, drawn once on state entry
    pub fn draw_overlay(&self, text: &str) -> Result<(), JsValue> {
        self.ctx.set_font(OVERLAY_FONT);
        self.ctx.set_fill_style_str(OVERLAY_COLOR);
        self.ctx.set_text_align("center");
        self.ctx.fill_text(text, self.width / 2.0, self.height / 2.0)
    }

    fn draw_blocks(&self, state: &GameState) {
        self.ctx.set_line_width(1.0);
        self.ctx.set_stroke_style_str(BLOCK_OUTLINE);
        for block in state.blocks.iter().filter(|b| b.alive) {
            self.ctx.set_fill_style_str(block.color.css());
            self.ctx.fill_rect(
                block.x as f64,
                block.y as f64,
                block.width as f64,
                block.height as f64,
            );
            self.ctx.stroke_rect(
                block.x as f64,
                block.y as f64,
                block.width as f64,
                block.height as f64,
            );
        }
    }

    fn draw_particles(&self, state: &GameState) -> Result<(), JsValue> {
        for p in &state.particles {
            self.ctx.save();
            self.ctx.set_global_alpha(p.alpha.clamp(0.0, 1.0) as f64);
            self.ctx.begin_path();
            self.ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU)?;
            self.ctx.set_fill_style_str(p.color.css());
            self.ctx.fill();
            self.ctx.restore();
        }
        Ok(())
    }

    fn draw_trail(&self, state: &GameState) -> Result<(), JsValue> {
        let len = state.trail.len();
        for (i, point) in state.trail.iter().enumerate() {
            let t = i as f64 / len as f64;
            let radius = BALL_RADIUS as f64 * t;
            if radius <= 0.0 {
                continue;
            }
            self.ctx.save();
            self.ctx.set_global_alpha(t * 0.5);
            self.ctx.begin_path();
            self.ctx.arc(point.x as f64, point.y as f64, radius, 0.0, TAU)?;
            let gradient = self.fire_gradient(point.x as f64, point.y as f64, radius)?;
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
            self.ctx.restore();
        }
        Ok(())
    }

    fn draw_ball(&self, state: &GameState) -> Result<(), JsValue> {
        let x = state.ball.pos.x as f64;
        let y = state.ball.pos.y as f64;
        let r = BALL_RADIUS as f64;

        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU)?;
        let gradient = self.fire_gradient(x, y, r)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();

        // Soft glow pass on top
        self.ctx.save();
        self.ctx.set_shadow_blur(20.0);
        self.ctx.set_shadow_color(GLOW_COLOR);
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU)?;
        self.ctx.set_fill_style_str("rgba(255, 255, 255, 0.1)");
        self.ctx.fill();
        self.ctx.restore();
        Ok(())
    }

    fn draw_paddle(&self, state: &GameState) {
        self.ctx.set_fill_style_str(PADDLE_COLOR);
        self.ctx.fill_rect(
            state.paddle.x as f64,
            Paddle::top(state.height) as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
        );
    }

    /// White core fading through yellow and orange to red
    fn fire_gradient(&self, x: f64, y: f64, r: f64) -> Result<CanvasGradient, JsValue> {
        let gradient = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
        gradient.add_color_stop(0.0, "#FFFFFF")?;
        gradient.add_color_stop(0.3, "#FFFF00")?;
        gradient.add_color_stop(0.7, "#FF6600")?;
        gradient.add_color_stop(1.0, "#FF0000")?;
        Ok(gradient)
    }
}
