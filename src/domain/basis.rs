//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, Mul, Sub},
    time::Duration,
};

use nalgebra::{Rotation2, Vector2};
use thiserror::Error;

/// A point in the plane, also used as a displacement vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    coords: Vector2<f64>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        (self.coords - position.coords).norm()
    }

    pub fn norm(&self) -> f64 {
        self.coords.norm()
    }

    /// Unit vector with the same direction. The caller guarantees a nonzero norm.
    pub fn normalized(&self) -> Position {
        Position {
            coords: self.coords.normalize(),
        }
    }

    pub fn rotate_vector(&self, angle: Angle) -> Position {
        Position {
            coords: Rotation2::new(angle.0) * self.coords,
        }
    }

    /// Component-wise clamp into `[0, x_max] × [0, y_max]`.
    pub fn clamp(&self, x_max: f64, y_max: f64) -> Position {
        Position::new(self.coords.x.clamp(0.0, x_max), self.coords.y.clamp(0.0, y_max))
    }
}

impl From<Position> for (f32, f32) {
    fn from(value: Position) -> Self {
        (value.coords.x as f32, value.coords.y as f32)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            coords: self.coords + rhs.coords,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            coords: self.coords - rhs.coords,
        }
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            coords: self.coords * rhs,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

/// Rejected configuration values, raised at construction time only. The
/// update step itself never fails.
#[derive(Error, Debug)]
pub enum InvalidConfiguration {
    #[error("speed must be a non-negative finite number, got {0}")]
    InvalidSpeed(f64),
    #[error("{0} must be a nonzero duration, got {1:?}")]
    ZeroDuration(&'static str, Duration),
    #[error("boundaries must have a positive area, got {width} x {height}")]
    DegenerateBoundaries { width: f64, height: f64 },
    #[error("obstacle radius must be a non-negative finite number, got {0}")]
    InvalidRadius(f64),
}
