//! The interactive part: turning input into curve edits and curves into frames.
//!
//! Front ends own the window, the event loop and the frame timer. They translate their
//! events into [`Input`]s and hand a [`Canvas`] to [`Visualizer::frame`] whenever they repaint.

use std::time::Duration;

use log::{info, trace};
use nalgebra::Vector2;

use crate::curve::Curve;
use crate::draw::{self, Canvas};
use crate::palette::{Color, Palette};
use crate::sampling;
use crate::settings::Settings;

/// Mouse buttons the visualizer reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Places the curve's end
    Left,
    /// Appends an interior point
    Middle,
    /// Places the curve's start
    Right,
}

/// Events a front end forwards
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// A mouse button was clicked at `position`
    Click {
        /// The button
        button: MouseButton,
        /// Where on the canvas
        position: Vector2<f64>,
    },

    /// The cursor moved to a new position on the canvas
    CursorMoved(Vector2<f64>),

    /// A key producing the given character was pressed
    Key(char),
}

/// State of the visualizer: the curve being built and how to show it.
#[derive(Clone, Debug)]
pub struct Visualizer {
    curve: Curve,
    show_construction: bool,
    cursor: Option<Vector2<f64>>,
    settings: Settings,
    palette: Palette,
}

impl Default for Visualizer {
    fn default() -> Self {
        Visualizer::new(Settings::default())
    }
}

impl Visualizer {
    /// Start with an empty curve
    pub fn new(settings: Settings) -> Self {
        Visualizer {
            curve: Curve::new(),
            show_construction: settings.show_construction,
            cursor: None,
            settings,
            palette: Palette::default(),
        }
    }

    /// The curve built so far
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Whether the construction is currently drawn
    pub fn show_construction(&self) -> bool {
        self.show_construction
    }

    /// The last known cursor position
    pub fn cursor(&self) -> Option<&Vector2<f64>> {
        self.cursor.as_ref()
    }

    /// The settings the visualizer was created with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply an input event
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Click { button, position } => match button {
                MouseButton::Right => self.curve.set_start(position),
                MouseButton::Left => self.curve.set_end(position),
                MouseButton::Middle => self.curve.push(position),
            },
            Input::CursorMoved(position) => self.cursor = Some(position),
            Input::Key(key) => self.key(key),
        }
    }

    fn key(&mut self, key: char) {
        let key = key.to_ascii_lowercase();
        if key == self.settings.reset_key.to_ascii_lowercase() {
            info!(
                "Discarding curve with {} interior points",
                self.curve.interior().len()
            );
            self.curve = Curve::new();
        } else if key == self.settings.toggle_construction_key.to_ascii_lowercase() {
            self.show_construction = !self.show_construction;
            info!(
                "Construction {}",
                if self.show_construction { "shown" } else { "hidden" }
            );
        }
    }

    /// Draw the current state.
    ///
    /// `width` is the canvas' width, `elapsed` the time since the animation started.
    pub fn frame<C: Canvas + ?Sized>(&self, canvas: &mut C, width: f64, elapsed: Duration) {
        let radius = self.settings.point_radius;

        draw::control_polygon(canvas, &self.curve, radius);
        if let Some(cursor) = &self.cursor {
            draw::alignment_guide(
                canvas,
                &self.curve,
                cursor,
                width,
                self.settings.guide_distance,
            );
            draw::height_measure(canvas, &self.curve, cursor, radius);
        }

        let points = match sampling::polyline(&self.curve, self.settings.resolution) {
            Ok(points) => points,
            Err(err) => {
                trace!("Skipping curve: {}", err);
                return;
            }
        };
        canvas.polyline(&points, Color::BLACK);

        let t = self.settings.animation_clock().parameter(elapsed);
        let point = if self.show_construction {
            self.curve
                .construction(t)
                .ok()
                .and_then(|construction| draw::construction(canvas, construction, &self.palette))
        } else {
            self.curve.evaluate(t).ok()
        };
        if let Some(point) = point {
            canvas.circle(&point, radius, Color::BLUE);
            draw::timeline(canvas, &self.curve, &point, self.settings.timeline_y, radius);
        }
    }
}
