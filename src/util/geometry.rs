// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Leaf math helpers shared by the editor and viewer: angle conversion,
//! Euclidean distance, point-on-circle computation and the angle between
//! two points.

/// Convert degrees to radians.
pub fn deg2rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees.
pub fn rad2deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let a = x1 - x2;
    let b = y1 - y2;
    (a * a + b * b).sqrt()
}

/// Point on the edge of a circle at the given rotation (radians).
pub fn point_on_circle_edge(x: f64, y: f64, radius: f64, rotation: f64) -> (f64, f64) {
    (x + radius * rotation.cos(), y + radius * rotation.sin())
}

/// Angle (radians) of the segment from `(x1, y1)` to `(x2, y2)`.
pub fn rotation_between(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (y2 - y1).atan2(x2 - x1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg2rad_rad2deg_roundtrip() {
        for deg in [-720.0, -90.0, 0.0, 45.0, 180.0, 359.5] {
            assert!((rad2deg(deg2rad(deg)) - deg).abs() < 1e-9);
        }
        assert!((deg2rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_point_on_circle_edge() {
        let (x, y) = point_on_circle_edge(10.0, 20.0, 5.0, 0.0);
        assert!((x - 15.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);

        // Rotation 0 degrees points up after the -90 degree indicator offset.
        let (x, y) = point_on_circle_edge(10.0, 20.0, 5.0, deg2rad(-90.0));
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_between() {
        assert!((rotation_between(0.0, 0.0, 1.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((rotation_between(0.0, 0.0, 0.0, 1.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        assert!((rotation_between(0.0, 0.0, -1.0, 0.0).abs() - std::f64::consts::PI).abs() < 1e-9);
    }
}
