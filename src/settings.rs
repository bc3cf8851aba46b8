//! Runtime configuration of the visualizer.

use std::time::Duration;

use crate::sampling::AnimationClock;

/// Everything about the visualizer which isn't the curve itself.
///
/// With the `serde` feature missing fields fall back to their defaults when deserializing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Settings {
    /// Number of segments the curve's polyline is made of
    pub resolution: usize,

    /// Seconds the animated point needs to travel along the whole curve
    pub animation_period_secs: f64,

    /// Radius of the circles marking points
    pub point_radius: f64,

    /// How close the cursor has to get to an endpoint's height to show the alignment guide
    pub guide_distance: f64,

    /// Height of the timeline at the top of the canvas
    pub timeline_y: f64,

    /// Key discarding the current curve
    pub reset_key: char,

    /// Key toggling the construction's animation
    pub toggle_construction_key: char,

    /// Whether the construction is animated initially
    pub show_construction: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            resolution: 100,
            animation_period_secs: 2.0,
            point_radius: 5.0,
            guide_distance: 15.0,
            timeline_y: 15.0,
            reset_key: 'z',
            toggle_construction_key: 'x',
            show_construction: true,
        }
    }
}

impl Settings {
    /// Clock driving the animated point.
    ///
    /// Invalid periods (negative, NaN or infinite) stop the animation.
    pub fn animation_clock(&self) -> AnimationClock {
        let period =
            Duration::try_from_secs_f64(self.animation_period_secs).unwrap_or(Duration::ZERO);
        AnimationClock::new(period)
    }
}
