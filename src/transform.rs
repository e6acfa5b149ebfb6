// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinate/transform model.
//!
//! Three coordinate spaces are linked here:
//!
//! - raw pointer pixels on the rendered canvas,
//! - normalized flag-relative coordinates in [0,1] x [0,1] (what gets
//!   persisted),
//! - the re-projected position used when rendering at a possibly different
//!   canvas size, scale and rotation.
//!
//! Both programs draw the flag at the full canvas width with the height
//! derived from the image aspect ratio, so normalization divides x by the
//! canvas width and y by that fitted height. Because the aspect ratio is
//! reconstructed from the same image every time, normalize-then-project
//! reproduces the original pixel position at any canvas width.

use crate::models::marker::{Marker, Point};
use crate::util::geometry::deg2rad;

/// Baseline canvas width against which stored radii are interpreted.
pub const REFERENCE_WIDTH: f64 = 800.0;

/// Height of the image when drawn at `canvas_width`, preserving aspect.
pub fn fitted_height(canvas_width: f64, img_width: u32, img_height: u32) -> f64 {
    canvas_width * (img_height as f64 / img_width as f64)
}

/// Forward transform: canvas-local pointer pixels to a normalized position.
pub fn normalize(
    pixel_x: f64,
    pixel_y: f64,
    canvas_width: f64,
    img_width: u32,
    img_height: u32,
) -> Point {
    let height = fitted_height(canvas_width, img_width, img_height);
    Point {
        x: pixel_x / canvas_width,
        y: pixel_y / height,
    }
}

/// Reverse transform (editor): normalized position to canvas pixels.
pub fn project(
    point: &Point,
    canvas_width: f64,
    img_width: u32,
    img_height: u32,
) -> (f64, f64) {
    let height = fitted_height(canvas_width, img_width, img_height);
    (canvas_width * point.x, height * point.y)
}

/// Zoom factor implied by a stored radius: a small marker produces a large
/// zoom and vice versa. The inverse relationship is exact.
pub fn radius_zoom(radius: f64) -> f64 {
    (REFERENCE_WIDTH / radius) / 100.0
}

/// Everything the viewer needs to paint one replay frame: an image quad in
/// pre-rotation space, the rotation to apply about the origin, and the
/// canvas-center translation applied last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayFrame {
    /// Top-left of the scaled image quad, relative to the rotation origin.
    pub offset: (f64, f64),
    /// Size of the scaled image quad.
    pub size: (f64, f64),
    /// Rotation in radians, applied about the origin after scaling.
    pub rotation: f64,
    /// Final translation: the canvas center.
    pub center: (f64, f64),
}

/// Reverse transform (viewer): full affine replay of a stored marker.
///
/// The stored rotation is applied sign-inverted (a feature annotated while
/// rotated clockwise is un-rotated on replay); the free-running user
/// rotation adds on top. Scale combines the user zoom with the inverse
/// radius factor. The quad is offset so the normalized point lands exactly
/// on the canvas center.
pub fn replay_frame(
    canvas_width: f64,
    canvas_height: f64,
    img_width: u32,
    img_height: u32,
    marker: &Marker,
    user_scale: f64,
    user_rotation: f64,
) -> ReplayFrame {
    let scale = user_scale * radius_zoom(marker.radius);

    let draw_width = canvas_width;
    let draw_height = fitted_height(canvas_width, img_width, img_height);
    let star_x = draw_width * marker.position.x;
    let star_y = draw_height * marker.position.y;

    ReplayFrame {
        offset: (-star_x * scale, -star_y * scale),
        size: (draw_width * scale, draw_height * scale),
        rotation: deg2rad(user_rotation - marker.rotation),
        center: (canvas_width / 2.0, canvas_height / 2.0),
    }
}
