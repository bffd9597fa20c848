//! Routes a few fixed connector layouts and prints the resulting polylines.
//!
//! Usage:
//! ```text
//! cargo run --example route
//! RUST_LOG=elbow=debug cargo run --example route
//! ```

use elbow::geometry::{Direction, Rectangle};
use elbow::math::Vec2d;
use elbow::{ConnectionRouter, EndpointConfig, Result, RoutingParams};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for elbow.
    // Override with RUST_LOG env var (e.g. RUST_LOG=elbow=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("elbow=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let left = Rectangle::try_new(0.0, 0.0, 40.0, 40.0)?;
    let right = Rectangle::try_new(200.0, 0.0, 40.0, 40.0)?;
    let wall = Rectangle::try_new(100.0, -10.0, 20.0, 60.0)?;

    let source = EndpointConfig::outside(Vec2d::new(40.0, 20.0), Direction::Right, left);
    let target = EndpointConfig::outside(Vec2d::new(200.0, 20.0), Direction::Left, right);

    print_route("direct", &ConnectionRouter::new(source, target));
    print_route(
        "around wall",
        &ConnectionRouter::new(source, target).with_obstacles([wall]),
    );

    let params = RoutingParams::new(20.0, 20.0, 0.9)?.with_obstacle_margins(true);
    print_route(
        "free points, tight margins",
        &ConnectionRouter::new(
            EndpointConfig::free(Vec2d::new(0.0, 100.0)),
            EndpointConfig::free(Vec2d::new(300.0, 20.0)),
        )
        .with_obstacles([wall])
        .with_params(params),
    );

    Ok(())
}

fn print_route(name: &str, router: &ConnectionRouter) {
    match router.execute() {
        Some(points) => {
            let formatted: Vec<String> = points
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect();
            println!("{name}: {}", formatted.join(" -> "));
        }
        None => println!("{name}: no route"),
    }
}
