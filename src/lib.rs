//! Step-wise 2D point-robot simulation: a robot moves toward a target inside
//! a bounded arena, dodging circular obstacles and alternating between
//! moving and resting phases.
//!
//! The crate exposes the state update only. A driver owns timing: it calls
//! [`MotionController::step`] once per tick and reads the robot back for
//! display (see `src/main.rs` for a headless example).

mod controller;
mod domain;

pub use controller::{
    Avoidance, FixedAngleDeflection, IncrementalAngleSearch, MotionController, NoAvoidance,
};
pub use domain::{
    Angle, Boundaries, DutyCycle, Environment, InvalidConfiguration, Obstacle, Phase, Position,
    Robot, RobotConfig,
};
