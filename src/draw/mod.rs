//! Defines the [`Canvas`] trait front ends implement and the painters composing a frame on it.
//!
//! Every painter only issues lines, circles and text, so a new front end only needs those
//! three primitives to show everything the visualizer shows.

use nalgebra::Vector2;

use crate::construction::Construction;
use crate::curve::{lerp, Curve};
use crate::palette::{Color, Palette};

/// A drawing context
pub trait Canvas {
    /// Draw a straight line
    fn line(&mut self, from: &Vector2<f64>, to: &Vector2<f64>, color: Color);

    /// Draw the outline of a circle
    fn circle(&mut self, center: &Vector2<f64>, radius: f64, color: Color);

    /// Draw lines connecting consecutive points
    fn polyline(&mut self, points: &[Vector2<f64>], color: Color) {
        for pair in points.windows(2) {
            self.line(&pair[0], &pair[1], color);
        }
    }

    /// Draw a label starting at `at`
    fn text(&mut self, text: &str, at: &Vector2<f64>, color: Color);
}

/// Draw every placed point and the lines between them.
///
/// The points are connected in the order evaluation uses them.
pub fn control_polygon<C: Canvas + ?Sized>(canvas: &mut C, curve: &Curve, radius: f64) {
    let points: Vec<&Vector2<f64>> = curve
        .start()
        .into_iter()
        .chain(curve.interior().iter().rev())
        .chain(curve.end())
        .collect();

    for (i, point) in points.iter().enumerate() {
        canvas.circle(point, radius, Color::BLUE);
        if i > 0 {
            canvas.line(points[i - 1], point, Color::RED);
        }
    }
}

/// Draw every interpolated level of a construction and return the curve's point.
///
/// The control polygon (depth 0) is skipped, [`control_polygon`] already draws it.
pub fn construction<C: Canvas + ?Sized>(
    canvas: &mut C,
    construction: Construction<f64>,
    palette: &Palette,
) -> Option<Vector2<f64>> {
    let t = construction.parameter();
    let mut last = None;
    for level in construction {
        if level.depth > 0 {
            let color = palette.color(level.depth - 1);
            for edge in level.edges.iter() {
                canvas.line(&edge.from, &edge.to, color);
            }
        }
        last = level.edges.into_iter().next();
    }
    last.map(|edge| edge.lerp(t))
}

/// Project the animated point and the endpoints onto a horizontal timeline at height `y`.
pub fn timeline<C: Canvas + ?Sized>(
    canvas: &mut C,
    curve: &Curve,
    point: &Vector2<f64>,
    y: f64,
    radius: f64,
) {
    canvas.circle(&Vector2::new(point.x, y), radius, Color::BLACK);
    for endpoint in curve.start().into_iter().chain(curve.end()) {
        canvas.circle(&Vector2::new(endpoint.x, y), radius, Color::BLACK);
    }
    if let (Some(start), Some(end)) = (curve.start(), curve.end()) {
        canvas.line(
            &Vector2::new(start.x - radius, y),
            &Vector2::new(end.x + radius, y),
            Color::BLACK,
        );
    }
}

/// Draw a horizontal line across the canvas when the cursor is level with an endpoint.
///
/// The start is preferred over the end; without either nothing is drawn.
pub fn alignment_guide<C: Canvas + ?Sized>(
    canvas: &mut C,
    curve: &Curve,
    cursor: &Vector2<f64>,
    width: f64,
    distance: f64,
) {
    let Some(anchor) = curve.start().or(curve.end()) else {
        return;
    };
    if (cursor.y - anchor.y).abs() < distance {
        canvas.line(
            &Vector2::new(0.0, anchor.y),
            &Vector2::new(width, anchor.y),
            Color::BLACK,
        );
    }
}

/// Measure the vertical distance between the cursor and the straight line from start to end.
///
/// Only drawn while the cursor is horizontally between the end (left) and the start (right).
pub fn height_measure<C: Canvas + ?Sized>(
    canvas: &mut C,
    curve: &Curve,
    cursor: &Vector2<f64>,
    radius: f64,
) {
    let (Some(start), Some(end)) = (curve.start(), curve.end()) else {
        return;
    };
    if !(end.x <= cursor.x && cursor.x <= start.x) {
        return;
    }

    let length = end.x - start.x;
    let t = if length == 0.0 {
        0.0
    } else {
        (cursor.x - start.x) / length
    };
    let chord = lerp(start, end, t);

    canvas.circle(&chord, radius, Color::BLACK);
    canvas.circle(cursor, radius, Color::BLACK);
    canvas.line(&chord, cursor, Color::BLACK);

    let height = (chord.y - cursor.y).floor().abs();
    let label = Vector2::new(cursor.x, chord.y + (cursor.y - chord.y) / 2.0);
    canvas.text(&format!("Height: {}", height), &label, Color::BLACK);
}

#[cfg(feature = "draw-svg")]
pub mod svg;
