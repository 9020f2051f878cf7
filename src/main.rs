//! Headless demo driver: runs the default warehouse scenario to completion
//! and charts the travelled path in the terminal.

use std::time::Duration;

use textplots::{Chart, Plot, Shape};
use tracing::{info, warn};

use warehouse_rover::{Environment, InvalidConfiguration, MotionController, Robot, RobotConfig};

const TICK: Duration = Duration::from_millis(100);
const MAX_TICKS: u64 = 1_000_000;

fn main() -> Result<(), InvalidConfiguration> {
    tracing_subscriber::fmt::init();

    let mut robot = Robot::new(RobotConfig::default())?;
    let environment = Environment::default();
    let controller = MotionController::default();

    let mut ticks: u64 = 0;
    while !controller.step(&mut robot, &environment, TICK) {
        ticks += 1;
        if ticks >= MAX_TICKS {
            warn!(ticks, "target not reached, giving up");
            break;
        }
    }
    info!(ticks, position = ?robot.position(), "simulation finished");

    let points = robot
        .path_history()
        .iter()
        .map(|p| (*p).into())
        .collect::<Vec<(f32, f32)>>();
    Chart::new_with_y_range(
        180,
        60,
        -1.0,
        environment.boundaries().width() as f32 + 1.0,
        -1.0,
        environment.boundaries().height() as f32 + 1.0,
    )
    .lineplot(&Shape::Points(&points))
    .display();

    Ok(())
}
