//! This example constructs a few points, mutates them through the checked
//! accessors and renders the results to the log.
//!
//! ```shell
//! cargo run --example render_points
//! ```

use anyhow::Result;
use punto::{point, Point, Point2};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut position = point!(1.0, 2.0, 3.0);
    log::info!("Initial position: {position}");

    position.set(0, 4.0)?;
    position.set(2, position.get(2)? * 2.0)?;
    log::info!("Updated position: {position}");

    // An out of range index is an ordinary error, not a crash.
    if let Err(error) = position.get(10) {
        log::warn!("Invalid access: {error}");
    }

    let origin = Point::<f64, 3>::origin();
    log::info!(
        "Distance from the origin {origin}: {}",
        origin.distance(&position)
    );

    let mut corner = Point2::new([0.0, 0.0]);
    corner.set_x(3.0);
    corner.set_y(4.0);
    log::info!(
        "Corner {corner} is {} units away from the origin",
        corner.distance(&Point2::origin())
    );

    Ok(())
}
