//! Point robot with a moving/resting duty cycle.

use std::time::Duration;

use tracing::debug;

use super::{InvalidConfiguration, Position};

/// Kinematic point robot. Position updates are driven externally by the
/// motion controller; the robot itself only keeps state and the phase
/// bookkeeping of its duty cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Robot {
    position: Position,
    speed: f64,
    duty_cycle: Option<DutyCycle>,
    phase: Phase,
    phase_elapsed: Duration,
    path_history: Vec<Position>,
}

impl Robot {
    pub fn new(config: RobotConfig) -> Result<Self, InvalidConfiguration> {
        if !(config.speed >= 0.0) || !config.speed.is_finite() {
            return Err(InvalidConfiguration::InvalidSpeed(config.speed));
        }
        if let Some(duty_cycle) = &config.duty_cycle {
            if duty_cycle.move_time.is_zero() {
                return Err(InvalidConfiguration::ZeroDuration(
                    "move_time",
                    duty_cycle.move_time,
                ));
            }
            if duty_cycle.rest_time.is_zero() {
                return Err(InvalidConfiguration::ZeroDuration(
                    "rest_time",
                    duty_cycle.rest_time,
                ));
            }
        }
        Ok(Self {
            position: config.initial_position,
            speed: config.speed,
            duty_cycle: config.duty_cycle,
            phase: Phase::Moving,
            phase_elapsed: Duration::ZERO,
            path_history: vec![config.initial_position],
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_elapsed(&self) -> Duration {
        self.phase_elapsed
    }

    /// Every position the robot has occupied, oldest first, starting with
    /// the initial position. Kept for display; consumers that render a
    /// fading trace prune their own copy.
    pub fn path_history(&self) -> &[Position] {
        &self.path_history
    }

    /// Commit a new position and record it in the path history. A no-op
    /// when the position is unchanged, so stationary ticks (zero speed, a
    /// zero tick, repeated arrivals) do not grow the history.
    pub(crate) fn move_to(&mut self, position: Position) {
        if self.position != position {
            self.position = position;
            self.path_history.push(position);
        }
    }

    /// Accumulate time in the current phase and flip it when the phase
    /// duration is reached. `phase_elapsed` resets in the same call, so it
    /// always stays below the running phase's duration. Without a duty
    /// cycle the robot is permanently moving.
    pub(crate) fn advance_phase(&mut self, delta_time: Duration) {
        let Some(duty_cycle) = &self.duty_cycle else {
            return;
        };
        self.phase_elapsed += delta_time;
        let phase_duration = match self.phase {
            Phase::Moving => duty_cycle.move_time,
            Phase::Resting => duty_cycle.rest_time,
        };
        if self.phase_elapsed >= phase_duration {
            self.phase = match self.phase {
                Phase::Moving => Phase::Resting,
                Phase::Resting => Phase::Moving,
            };
            self.phase_elapsed = Duration::ZERO;
            debug!(phase = ?self.phase, "phase transition");
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Moving,
    Resting,
}

/// Durations of the robot's duty cycle: move for `move_time`, then rest for
/// `rest_time`, repeating.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DutyCycle {
    pub move_time: Duration,
    pub rest_time: Duration,
}

impl Default for DutyCycle {
    fn default() -> Self {
        Self {
            move_time: Duration::from_millis(100),
            rest_time: Duration::from_secs(2),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobotConfig {
    pub initial_position: Position,
    /// Distance units per second, non-negative.
    pub speed: f64,
    /// `None` disables the duty cycle; the robot then never rests.
    pub duty_cycle: Option<DutyCycle>,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            initial_position: Position::new(0.0, 0.0),
            speed: 0.1,
            duty_cycle: Some(DutyCycle::default()),
        }
    }
}
