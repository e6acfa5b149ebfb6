// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Marker data structures.
//!
//! This module defines the persisted annotation record: a normalized
//! position plus a radius and rotation describing a circular marker
//! placed over a flag image.

use serde::{Deserialize, Serialize};

/// A 2D point with normalized coordinates (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One marker record per flag.
///
/// `position` is normalized to the rendered image width/height so the record
/// is resolution independent. `radius` is in pixels at the reference canvas
/// width. `rotation` is in degrees; records written before rotation support
/// existed omit the field, so it defaults to zero on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Point,
    pub radius: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl Marker {
    /// Create a new marker at the given normalized position.
    pub fn new(position: Point, radius: f64, rotation: f64) -> Self {
        Self {
            position,
            radius,
            rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_defaults_to_zero() {
        let json = r#"{"position":{"x":0.5,"y":0.25},"radius":72.0}"#;
        let marker: Marker = serde_json::from_str(json).unwrap();
        assert_eq!(marker.position, Point::new(0.5, 0.25));
        assert_eq!(marker.radius, 72.0);
        assert_eq!(marker.rotation, 0.0);
    }

    #[test]
    fn test_serde_roundtrip_is_exact() {
        let marker = Marker::new(Point::new(0.123456789, 0.987654321), 37.4, -15.5);
        let json = serde_json::to_string(&marker).unwrap();
        let back: Marker = serde_json::from_str(&json).unwrap();
        assert_eq!(marker, back);
    }
}
