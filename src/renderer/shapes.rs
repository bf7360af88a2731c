//! Shape generation for 2D primitives
//!
//! Geometry only, in each entity's local frame (origin at its center,
//! +x pointing where it faces).

use glam::Vec2;

use crate::sim::ShapePoint;

/// Hull triangle: nose at +x, tail corners at one third of size either side
pub fn ship_hull(size: f32) -> [Vec2; 3] {
    let half = size / 2.0;
    [
        Vec2::new(half, 0.0),
        Vec2::new(-half, size / 3.0),
        Vec2::new(-half, -size / 3.0),
    ]
}

/// Cockpit ellipse radii
pub fn ship_cockpit(size: f32) -> Vec2 {
    Vec2::new(size / 5.0, size / 6.0)
}

/// Wing struts sweeping back from the hull's tail corners
pub fn ship_wings(size: f32) -> [(Vec2, Vec2); 2] {
    let tail = -size / 2.0;
    [
        (
            Vec2::new(tail + 5.0, size / 3.0),
            Vec2::new(tail + 15.0, size / 1.7),
        ),
        (
            Vec2::new(tail + 5.0, -size / 3.0),
            Vec2::new(tail + 15.0, -size / 1.7),
        ),
    ]
}

/// Exhaust flame behind the tail
pub fn ship_thruster(size: f32) -> [Vec2; 3] {
    let tail = -size / 2.0;
    [
        Vec2::new(tail, size / 10.0),
        Vec2::new(tail - size / 6.0, 0.0),
        Vec2::new(tail, -size / 10.0),
    ]
}

/// Asteroid outline vertices, in order
pub fn asteroid_outline(shape: &[ShapePoint]) -> Vec<Vec2> {
    shape.iter().map(ShapePoint::local).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hull_points_forward() {
        let hull = ship_hull(40.0);
        assert_eq!(hull[0], Vec2::new(20.0, 0.0));
        assert!(hull[1..].iter().all(|p| p.x == -20.0));
    }

    #[test]
    fn test_thruster_behind_tail() {
        let flame = ship_thruster(40.0);
        assert!(flame[1].x < -20.0);
    }

    #[test]
    fn test_asteroid_outline() {
        let shape = [
            ShapePoint {
                angle: 0.0,
                radius: 10.0,
            },
            ShapePoint {
                angle: std::f32::consts::FRAC_PI_2,
                radius: 12.0,
            },
        ];
        let outline = asteroid_outline(&shape);
        assert!((outline[0] - Vec2::new(10.0, 0.0)).length() < 1e-5);
        assert!((outline[1] - Vec2::new(0.0, 12.0)).length() < 1e-5);
    }
}
