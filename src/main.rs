use std::error::Error;
use std::time::Duration;

use casteljau::draw::svg::SvgCanvas;
use casteljau::visualizer::{Input, MouseButton};
use casteljau::{Settings, Vector2, Visualizer};
use log::{info, LevelFilter};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;

/// Renders a single frame of a demo curve as svg.
///
/// The optional argument is the animation time in seconds.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let elapsed = match std::env::args().nth(1) {
        Some(arg) => Duration::try_from_secs_f64(arg.parse()?)?,
        None => Duration::from_millis(500),
    };

    let mut visualizer = Visualizer::new(Settings::default());
    let clicks = [
        (MouseButton::Right, 560.0, 400.0),
        (MouseButton::Left, 80.0, 400.0),
        (MouseButton::Middle, 320.0, 60.0),
        (MouseButton::Middle, 120.0, 120.0),
        (MouseButton::Middle, 500.0, 200.0),
    ];
    for (button, x, y) in clicks {
        visualizer.handle(Input::Click {
            button,
            position: Vector2::new(x, y),
        });
    }
    visualizer.handle(Input::CursorMoved(Vector2::new(300.0, 330.0)));

    info!(
        "Rendering degree {} curve at {:?}",
        visualizer.curve().degree(),
        elapsed
    );
    let mut svg = SvgCanvas::new(WIDTH, HEIGHT);
    visualizer.frame(&mut svg, WIDTH, elapsed);
    print!("{}", svg);
    Ok(())
}
