use std::f64::consts::TAU;
use std::time::Duration;

use casteljau::draw::Canvas;
use casteljau::palette::Color;
use casteljau::visualizer::{Input, MouseButton};
use casteljau::Settings;
use nalgebra::Vector2;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Canvas drawing onto a 2d rendering context
struct Context<'c>(&'c CanvasRenderingContext2d);

impl Canvas for Context<'_> {
    fn line(&mut self, from: &Vector2<f64>, to: &Vector2<f64>, color: Color) {
        self.0.begin_path();
        self.0.move_to(from.x, from.y);
        self.0.line_to(to.x, to.y);
        self.0.set_stroke_style(&JsValue::from_str(&color.to_string()));
        self.0.stroke();
    }

    fn circle(&mut self, center: &Vector2<f64>, radius: f64, color: Color) {
        self.0.begin_path();
        if self.0.arc(center.x, center.y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.0.set_stroke_style(&JsValue::from_str(&color.to_string()));
        self.0.stroke();
    }

    fn polyline(&mut self, points: &[Vector2<f64>], color: Color) {
        let (first, rest) = match points {
            [first, rest @ ..] if !rest.is_empty() => (first, rest),
            _ => return,
        };
        self.0.begin_path();
        self.0.move_to(first.x, first.y);
        for p in rest {
            self.0.line_to(p.x, p.y);
        }
        self.0.set_stroke_style(&JsValue::from_str(&color.to_string()));
        self.0.stroke();
    }

    fn text(&mut self, text: &str, at: &Vector2<f64>, color: Color) {
        self.0.set_fill_style(&JsValue::from_str(&color.to_string()));
        let _ = self.0.fill_text(text, at.x, at.y);
    }
}

#[wasm_bindgen]
pub struct Visualizer(casteljau::Visualizer);

#[wasm_bindgen]
impl Visualizer {
    /// `settings` may be any subset of the settings' fields, missing ones use their defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<Visualizer, JsValue> {
        let settings = if settings.is_undefined() || settings.is_null() {
            Settings::default()
        } else {
            settings
                .into_serde::<Settings>()
                .map_err(|err| JsValue::from_str(&err.to_string()))?
        };
        Ok(Visualizer(casteljau::Visualizer::new(settings)))
    }

    /// Forward a `MouseEvent`'s `button`, `offsetX` and `offsetY`
    pub fn click(&mut self, button: i16, x: f64, y: f64) {
        let button = match button {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            _ => return,
        };
        self.0.handle(Input::Click {
            button,
            position: Vector2::new(x, y),
        });
    }

    /// Forward a `MouseEvent`'s `offsetX` and `offsetY` on move
    pub fn cursor(&mut self, x: f64, y: f64) {
        self.0.handle(Input::CursorMoved(Vector2::new(x, y)));
    }

    /// Forward a `KeyboardEvent`'s `key`
    pub fn key(&mut self, key: &str) {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            self.0.handle(Input::Key(c));
        }
    }

    /// Clear the canvas and draw the frame for `time_ms` since the animation started
    pub fn draw(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64, time_ms: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        let elapsed = Duration::try_from_secs_f64(time_ms / 1000.0).unwrap_or(Duration::ZERO);
        self.0.frame(&mut Context(ctx), width, elapsed);
    }
}
