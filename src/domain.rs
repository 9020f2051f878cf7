//! Core entities of the simulation: the `Robot`, the `Environment` it
//! navigates, and the basic geometry they are built from. Everything here is
//! driver-agnostic; the motion controller composes these pieces per tick.

mod basis;
mod environment;
mod robot;

pub use basis::{Angle, InvalidConfiguration, Position};
pub use environment::{Boundaries, Environment, Obstacle};
pub use robot::{DutyCycle, Phase, Robot, RobotConfig};
