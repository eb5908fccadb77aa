//! Area-of-effect hit tests

use glam::Vec2;

/// Trapezoid anchored at `origin`, extending `length` units along `angle`.
///
/// The edge at the origin is `near_width` wide and the far edge is
/// `far_width` wide; either may be the wider one. Containment is inclusive on
/// every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    pub origin: Vec2,
    /// Forward direction in radians
    pub angle: f32,
    pub near_width: f32,
    pub far_width: f32,
    pub length: f32,
}

impl Trapezoid {
    /// Whether `point` lies inside (boundary inclusive).
    ///
    /// Precondition: `length > 0`.
    pub fn contains(&self, point: Vec2) -> bool {
        let offset = point - self.origin;
        let (sin, cos) = self.angle.sin_cos();
        let forward = offset.x * cos + offset.y * sin;
        let right = -offset.x * sin + offset.y * cos;

        if forward < 0.0 || forward > self.length {
            return false;
        }

        let near_half = self.near_width * 0.5;
        let far_half = self.far_width * 0.5;
        let half_width = near_half + (far_half - near_half) * (forward / self.length);
        right.abs() <= half_width
    }
}

/// Whether `point` is within `radius` of `center` (inclusive)
pub fn within_radius(center: Vec2, point: Vec2, radius: f32) -> bool {
    center.distance_squared(point) <= radius * radius
}

/// Angle in radians from `from` toward `to`
pub fn direction_angle(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn widening() -> Trapezoid {
        Trapezoid {
            origin: Vec2::ZERO,
            angle: 0.0,
            near_width: 40.0,
            far_width: 80.0,
            length: 100.0,
        }
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let t = widening();
        assert!(t.contains(Vec2::new(0.0, 0.0))); // forward = 0
        assert!(t.contains(Vec2::new(0.0, 20.0))); // forward = 0, |right| = near half
        assert!(t.contains(Vec2::new(100.0, 0.0))); // forward = L
        assert!(t.contains(Vec2::new(100.0, -40.0))); // forward = L, |right| = far half
        assert!(t.contains(Vec2::new(50.0, 30.0))); // interpolated half width
    }

    #[test]
    fn test_outside_points() {
        let t = widening();
        assert!(!t.contains(Vec2::new(-0.01, 0.0)));
        assert!(!t.contains(Vec2::new(100.01, 0.0)));
        assert!(!t.contains(Vec2::new(50.0, 30.01)));
        assert!(!t.contains(Vec2::new(0.0, 20.01)));
    }

    #[test]
    fn test_narrowing_shape() {
        let t = Trapezoid {
            near_width: 80.0,
            far_width: 20.0,
            ..widening()
        };
        assert!(t.contains(Vec2::new(0.0, 40.0)));
        assert!(t.contains(Vec2::new(100.0, 10.0)));
        assert!(!t.contains(Vec2::new(100.0, 11.0)));
    }

    #[test]
    fn test_rotated_shape() {
        let t = Trapezoid {
            origin: Vec2::new(10.0, 10.0),
            angle: FRAC_PI_2,
            ..widening()
        };
        assert!(t.contains(Vec2::new(10.0, 60.0)));
        assert!(!t.contains(Vec2::new(60.0, 10.0)));
        assert!(!t.contains(Vec2::new(10.0, -5.0)));
    }

    #[test]
    fn test_within_radius() {
        assert!(within_radius(Vec2::ZERO, Vec2::new(3.0, 4.0), 5.0));
        assert!(!within_radius(Vec2::ZERO, Vec2::new(3.0, 4.1), 5.0));
    }

    #[test]
    fn test_direction_angle() {
        assert_eq!(direction_angle(Vec2::ZERO, Vec2::new(5.0, 0.0)), 0.0);
        let up = direction_angle(Vec2::ZERO, Vec2::new(0.0, 5.0));
        assert!((up - FRAC_PI_2).abs() < 1e-6);
    }
}
