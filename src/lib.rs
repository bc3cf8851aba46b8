#![warn(missing_docs)]
//! Build bezier curves point by point and watch de castlejau's algorithm construct them.
//!
//! [`Curve`] holds a control polygon of arbitrary degree and evaluates it by recursively
//! interpolating its edges. [`Curve::construction`] exposes every intermediate level of that
//! recursion, which the [`visualizer`] draws as an animation on any [`draw::Canvas`].
//!
//! ```
//! use casteljau::{Curve, Vector2};
//!
//! let mut curve = Curve::new();
//! curve.set_start(Vector2::new(0.0, 0.0));
//! curve.set_end(Vector2::new(100.0, 0.0));
//! curve.push(Vector2::new(50.0, 100.0));
//! assert_eq!(curve.evaluate(0.5), Ok(Vector2::new(50.0, 50.0)));
//! ```

pub mod bounding_box;
pub mod construction;
pub mod curve;
pub mod draw;
pub mod error;
pub mod palette;
pub mod sampling;
pub mod settings;
pub mod visualizer;

pub use nalgebra::Vector2;

pub use crate::curve::{lerp, Curve, Edge};
pub use crate::error::CurveError;
pub use crate::settings::Settings;
pub use crate::visualizer::Visualizer;
