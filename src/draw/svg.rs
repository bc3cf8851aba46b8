//! Draw a frame into a svg document

use std::fmt::{Display, Formatter};

use nalgebra::Vector2;

use crate::draw::Canvas;
use crate::palette::Color;

type Rect = (f64, f64, f64, f64);

/// Svg document collecting everything drawn onto it.
///
/// ```
/// # use casteljau::Vector2;
/// use casteljau::draw::Canvas;
/// use casteljau::draw::svg::SvgCanvas;
/// use casteljau::palette::Color;
///
/// let mut svg = SvgCanvas::new(10.0, 10.0);
/// svg.line(&Vector2::new(0.0, 0.0), &Vector2::new(10.0, 5.0), Color::RED);
/// assert!(svg.to_string().contains("<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"5\" stroke=\"#ff0000\"/>"));
/// ```
pub struct SvgCanvas {
    /// Visible area as `(x, y, width, height)`
    pub view_box: Rect,
    /// Elements in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl SvgCanvas {
    /// Empty document showing `(0, 0)` to `(width, height)`
    pub fn new(width: f64, height: f64) -> Self {
        SvgCanvas {
            view_box: (0.0, 0.0, width, height),
            elements: Vec::new(),
        }
    }

    /// Append an element
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for SvgCanvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")
    }
}

impl Canvas for SvgCanvas {
    fn line(&mut self, from: &Vector2<f64>, to: &Vector2<f64>, color: Color) {
        self.add_elem(Line {
            from: *from,
            to: *to,
            width: None,
            color,
        });
    }

    fn circle(&mut self, center: &Vector2<f64>, radius: f64, color: Color) {
        self.add_elem(Circle {
            center: *center,
            radius,
            color,
        });
    }

    fn polyline(&mut self, points: &[Vector2<f64>], color: Color) {
        if points.len() < 2 {
            return;
        }
        self.add_elem(Path {
            stroke_color: color,
            points: points.to_vec(),
            ..Default::default()
        });
    }

    fn text(&mut self, text: &str, at: &Vector2<f64>, color: Color) {
        self.add_elem(Text {
            at: *at,
            text: text.to_string(),
            color,
        });
    }
}

/// `<line>` element
pub struct Line {
    /// First point
    pub from: Vector2<f64>,
    /// Second point
    pub to: Vector2<f64>,
    /// Stroke width, the viewer's default if `None`
    pub width: Option<f64>,
    /// Stroke color
    pub color: Color,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"",
            self.from[0], self.from[1], self.to[0], self.to[1], self.color
        )?;
        if let Some(width) = self.width {
            write!(f, " stroke-width=\"{}\"", width)?;
        }
        writeln!(f, "/>")
    }
}

/// Unfilled `<circle>` element
pub struct Circle {
    /// Center
    pub center: Vector2<f64>,
    /// Radius
    pub radius: f64,
    /// Stroke color
    pub color: Color,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{}\" fill=\"none\"/>",
            self.center[0], self.center[1], self.radius, self.color
        )
    }
}

/// `<path>` element made of straight segments
pub struct Path {
    /// Stroke color
    pub stroke_color: Color,
    /// Stroke width
    pub width: f64,
    /// Points connected in order
    pub points: Vec<Vector2<f64>>,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            stroke_color: Color::BLACK,
            width: 1.0,
            points: Vec::with_capacity(2),
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<path stroke=\"{}\" fill=\"none\" stroke-width=\"{}\" d=\"",
            self.stroke_color, self.width
        )?;
        for (i, p) in self.points.iter().enumerate() {
            write!(f, "{} {} {} ", if i == 0 { "M" } else { "L" }, p[0], p[1])?;
        }
        writeln!(f, "\"/>")
    }
}

/// `<text>` element
pub struct Text {
    /// Position of the text's baseline start
    pub at: Vector2<f64>,
    /// Content, escaped when written
    pub text: String,
    /// Fill color
    pub color: Color,
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<text x=\"{}\" y=\"{}\" fill=\"{}\">",
            self.at[0], self.at[1], self.color
        )?;
        for c in self.text.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                c => write!(f, "{}", c)?,
            }
        }
        writeln!(f, "</text>")
    }
}
