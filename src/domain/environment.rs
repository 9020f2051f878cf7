//! Environment with boundaries, a target and circular obstacles.

use super::{InvalidConfiguration, Position};

/// The arena the robot navigates. Read-only during a tick: obstacles and
/// target do not move once the simulation has started.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    boundaries: Boundaries,
    target: Position,
    obstacles: Vec<Obstacle>,
}

impl Environment {
    pub fn new(boundaries: Boundaries, target: Position, obstacles: Vec<Obstacle>) -> Self {
        Self {
            boundaries,
            target,
            obstacles,
        }
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Whether the given point lies strictly inside any obstacle. Stops at
    /// the first hit; an empty obstacle list never collides.
    pub fn has_collision(&self, position: Position) -> bool {
        self.obstacles.iter().any(|o| o.contains(position))
    }

    pub fn contains(&self, position: Position) -> bool {
        self.boundaries.contains(position)
    }
}

/// The warehouse scenario the simulator was built around: a 10 x 10 arena,
/// target at (7, 9) and two unit-diameter obstacles.
impl Default for Environment {
    fn default() -> Self {
        Self {
            boundaries: Boundaries {
                width: 10.0,
                height: 10.0,
            },
            target: Position::new(7.0, 9.0),
            obstacles: vec![
                Obstacle {
                    center: Position::new(3.0, 3.0),
                    radius: 0.5,
                },
                Obstacle {
                    center: Position::new(6.0, 5.0),
                    radius: 0.5,
                },
            ],
        }
    }
}

/// Axis-aligned rectangle `[0, 0] × [width, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundaries {
    width: f64,
    height: f64,
}

impl Boundaries {
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidConfiguration> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(InvalidConfiguration::DegenerateBoundaries { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn clamp(&self, position: Position) -> Position {
        position.clamp(self.width, self.height)
    }

    /// Touching an edge counts as inside.
    pub fn contains(&self, position: Position) -> bool {
        position.x() >= 0.0
            && position.x() <= self.width
            && position.y() >= 0.0
            && position.y() <= self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    center: Position,
    radius: f64,
}

impl Obstacle {
    pub fn new(center: Position, radius: f64) -> Result<Self, InvalidConfiguration> {
        if !(radius >= 0.0) || !radius.is_finite() {
            return Err(InvalidConfiguration::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strict containment: a point exactly on the rim is not inside.
    pub fn contains(&self, position: Position) -> bool {
        position.distance(self.center) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::well_inside(Position::new(3.1, 3.1), true)]
    #[case::at_center(Position::new(3.0, 3.0), true)]
    #[case::just_inside_rim(Position::new(3.0, 3.0 + 0.5 - 1e-9), true)]
    #[case::exactly_on_rim(Position::new(3.0, 3.5), false)]
    #[case::outside(Position::new(4.0, 4.0), false)]
    fn test_obstacle_contains(#[case] position: Position, #[case] expected: bool) {
        let obstacle = Obstacle::new(Position::new(3.0, 3.0), 0.5).unwrap();
        assert_eq!(obstacle.contains(position), expected);
    }

    #[test]
    fn test_environment_has_collision_short_circuits_to_first_hit() {
        let environment = Environment::default();
        assert!(environment.has_collision(Position::new(3.2, 3.2)));
        assert!(environment.has_collision(Position::new(6.0, 5.4)));
        assert!(!environment.has_collision(Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_environment_without_obstacles_never_collides() {
        let environment = Environment::new(
            Boundaries::new(10.0, 10.0).unwrap(),
            Position::new(7.0, 9.0),
            vec![],
        );
        assert!(!environment.has_collision(Position::new(5.0, 5.0)));
    }

    #[rstest]
    #[case::inside(Position::new(5.0, 5.0), true)]
    #[case::on_corner(Position::new(0.0, 0.0), true)]
    #[case::on_far_edge(Position::new(10.0, 10.0), true)]
    #[case::left_of(Position::new(-0.1, 5.0), false)]
    #[case::above(Position::new(5.0, 10.1), false)]
    fn test_boundaries_contains(#[case] position: Position, #[case] expected: bool) {
        let boundaries = Boundaries::new(10.0, 10.0).unwrap();
        assert_eq!(boundaries.contains(position), expected);
    }

    #[test]
    fn test_boundaries_clamp() {
        let boundaries = Boundaries::new(10.0, 8.0).unwrap();
        assert_abs_diff_eq!(
            boundaries.clamp(Position::new(12.0, -3.0)),
            Position::new(10.0, 0.0)
        );
    }

    #[rstest]
    #[case::zero_width(0.0, 10.0)]
    #[case::negative_height(10.0, -1.0)]
    #[case::nan_width(f64::NAN, 10.0)]
    fn test_degenerate_boundaries_are_rejected(#[case] width: f64, #[case] height: f64) {
        assert!(matches!(
            Boundaries::new(width, height),
            Err(InvalidConfiguration::DegenerateBoundaries { .. })
        ));
    }

    #[rstest]
    #[case::negative(-0.5)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_invalid_obstacle_radius_is_rejected(#[case] radius: f64) {
        assert!(matches!(
            Obstacle::new(Position::new(1.0, 1.0), radius),
            Err(InvalidConfiguration::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_zero_radius_obstacle_is_valid_and_harmless() {
        let obstacle = Obstacle::new(Position::new(1.0, 1.0), 0.0).unwrap();
        assert!(!obstacle.contains(Position::new(1.0, 1.0)));
    }
}
