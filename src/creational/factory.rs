//! Factory methods for `Point`.
//!
//! A single constructor taking `(a, b, system)` forces callers to remember
//! what `a` and `b` mean. Named constructors make that explicit, and can
//! live on the type itself or on a separate factory.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    Cartesian,
    Polar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// `(a, b)` is `(x, y)` for Cartesian, `(rho, theta)` for polar.
    pub fn new(a: f64, b: f64, system: CoordinateSystem) -> Self {
        match system {
            CoordinateSystem::Cartesian => Point { x: a, y: b },
            CoordinateSystem::Polar => Point {
                x: a * b.cos(),
                y: a * b.sin(),
            },
        }
    }

    pub fn new_cartesian(x: f64, y: f64) -> Self {
        Point::new(x, y, CoordinateSystem::Cartesian)
    }

    pub fn new_polar(rho: f64, theta: f64) -> Self {
        Point::new(rho, theta, CoordinateSystem::Polar)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

/// Construction moved out of `Point` into a dedicated type.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointFactory;

impl PointFactory {
    pub fn new_cartesian(x: f64, y: f64) -> Point {
        Point::new(x, y, CoordinateSystem::Cartesian)
    }

    pub fn new_polar(rho: f64, theta: f64) -> Point {
        Point::new(rho, theta, CoordinateSystem::Polar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_cartesian_is_taken_as_is() {
        assert_eq!(Point::new_cartesian(3.0, 4.0), Point { x: 3.0, y: 4.0 });
        assert_eq!(Point::new_cartesian(1.0, 2.0).to_string(), "x: 1, y: 2");
    }

    #[test]
    fn test_polar_converts_to_cartesian() {
        let p = Point::new_polar(5.0, FRAC_PI_2);
        assert!(close(p, Point { x: 0.0, y: 5.0 }));
    }

    #[test]
    fn test_factory_matches_factory_methods() {
        assert_eq!(
            PointFactory::new_cartesian(9.0, 10.0),
            Point::new_cartesian(9.0, 10.0)
        );
        assert!(close(
            PointFactory::new_polar(6.0, 1.57),
            Point::new_polar(6.0, 1.57)
        ));
    }
}
