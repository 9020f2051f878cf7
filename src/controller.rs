//! Motion controller stepping the robot toward the environment's target.
//!
//! The controller is a pure sequential state transition: the external driver
//! owns timing and calls [`MotionController::step`] once per tick, then reads
//! the robot's position, phase and path history back for display. Obstacle
//! avoidance is delegated to a pluggable [`Avoidance`] strategy.

use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{Angle, Environment, Phase, Position, Robot};

/// Obstacle avoidance strategy, consulted when the tentative position of a
/// step lands inside an obstacle.
///
/// Implementations return the replacement position to commit, or `None` to
/// keep the robot where it is for this tick. The controller commits the
/// returned position as-is, so any boundary or collision validation of the
/// result is the strategy's own responsibility.
pub trait Avoidance {
    fn deflect(
        &self,
        origin: Position,
        direction: Position,
        step_distance: f64,
        environment: &Environment,
    ) -> Option<Position>;
}

/// Rotate the travel direction by a fixed angle and take the same step from
/// the pre-collision position.
///
/// The deflected position is intentionally not re-checked against obstacles
/// or boundaries, so a single nudge can land inside another obstacle or
/// outside the arena. [`IncrementalAngleSearch`] validates its candidates
/// instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAngleDeflection {
    pub angle: Angle,
}

impl Default for FixedAngleDeflection {
    fn default() -> Self {
        Self {
            angle: Angle::from_deg(45.0),
        }
    }
}

impl Avoidance for FixedAngleDeflection {
    fn deflect(
        &self,
        origin: Position,
        direction: Position,
        step_distance: f64,
        _environment: &Environment,
    ) -> Option<Position> {
        Some(origin + direction.rotate_vector(self.angle) * step_distance)
    }
}

/// Try successive counter-clockwise rotations of the travel direction and
/// return the first candidate position that is in-bounds and collision-free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IncrementalAngleSearch {
    pub increment: Angle,
    pub max_attempts: u32,
}

impl Default for IncrementalAngleSearch {
    fn default() -> Self {
        // Seven 45-degree attempts sweep every remaining direction.
        Self {
            increment: Angle::from_deg(45.0),
            max_attempts: 7,
        }
    }
}

impl Avoidance for IncrementalAngleSearch {
    fn deflect(
        &self,
        origin: Position,
        direction: Position,
        step_distance: f64,
        environment: &Environment,
    ) -> Option<Position> {
        (1..=self.max_attempts).find_map(|attempt| {
            let rotated = direction.rotate_vector(self.increment * attempt as f64);
            let candidate = origin + rotated * step_distance;
            (environment.contains(candidate) && !environment.has_collision(candidate))
                .then_some(candidate)
        })
    }
}

/// Never deflect; the robot holds position on collision until the obstacle
/// check clears (which, for a static environment, it never does).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NoAvoidance;

impl Avoidance for NoAvoidance {
    fn deflect(
        &self,
        _origin: Position,
        _direction: Position,
        _step_distance: f64,
        _environment: &Environment,
    ) -> Option<Position> {
        None
    }
}

pub struct MotionController {
    avoidance: Box<dyn Avoidance>,
}

impl MotionController {
    pub fn new(avoidance: Box<dyn Avoidance>) -> Self {
        Self { avoidance }
    }

    /// Advance the simulation by one tick of `delta_time`, mutating the
    /// robot in place. Returns true once the target is reached.
    ///
    /// A resting robot only accumulates phase time. A moving robot takes a
    /// step of `speed * delta_time` toward the target, clamped into the
    /// boundaries and checked against the obstacles. When the remaining
    /// distance is shorter than one step the robot snaps exactly onto the
    /// target; afterwards every call keeps returning true without mutating
    /// any state.
    pub fn step(&self, robot: &mut Robot, environment: &Environment, delta_time: Duration) -> bool {
        if robot.phase() == Phase::Resting {
            robot.advance_phase(delta_time);
            return false;
        }

        let target = environment.target();
        let distance = robot.position().distance(target);
        let max_step = robot.speed() * delta_time.as_secs_f64();
        if distance == 0.0 || distance < max_step {
            robot.move_to(target);
            info!(position = ?robot.position(), "target reached");
            return true;
        }

        let direction = (target - robot.position()).normalized();
        let step_distance = max_step.min(distance);
        let tentative = environment
            .boundaries()
            .clamp(robot.position() + direction * step_distance);

        if environment.has_collision(tentative) {
            match self
                .avoidance
                .deflect(robot.position(), direction, step_distance, environment)
            {
                Some(deflected) => {
                    debug!(from = ?tentative, to = ?deflected, "deflected around obstacle");
                    robot.move_to(deflected);
                }
                None => debug!(blocked = ?tentative, "no deflection, holding position"),
            }
        } else {
            robot.move_to(tentative);
        }

        robot.advance_phase(delta_time);
        false
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(Box::<FixedAngleDeflection>::default())
    }
}
