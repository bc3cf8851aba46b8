use casteljau::{Curve, Vector2};
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    ( 0.0,      0.0    ),
    (-0.29734,  0.44984),
    (-0.52560,  0.42885),
    ( 1.42777, -0.02652),
    ( 1.98032, -0.67824),
    ( 0.44863, -0.91328),
    (-2.51139, -0.79100),
    (-3.10479, -0.59318),
    (-1.16022, -2.95591),
    (-1.07946,  0.78888),
];

/// Curves from quadratic up to degree 9, built the way clicks would build them
pub static CURVES: Lazy<Vec<Curve>> = Lazy::new(|| {
    (1..=8)
        .map(|interior| {
            let point = |i: usize| Vector2::new(POINTS[i].0, POINTS[i].1);
            let mut curve = Curve::new();
            curve.set_start(point(0));
            curve.set_end(point(9));
            for i in 1..=interior {
                curve.push(point(i));
            }
            curve
        })
        .collect()
});
