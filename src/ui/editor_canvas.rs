// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor canvas painting.
//!
//! Draws the current flag image at the full canvas width and circular
//! markers with their rotation indicator.

use crate::util::geometry::{deg2rad, point_on_circle_edge};

/// Draw the flag image anchored at the canvas top-left, scaled to the
/// canvas width with the height following the image aspect ratio.
pub fn draw_flag(
    painter: &egui::Painter,
    texture: &egui::TextureHandle,
    canvas: egui::Rect,
    img_width: u32,
    img_height: u32,
) {
    let display_width = canvas.width();
    let display_height = display_width * (img_height as f32 / img_width as f32);

    let image_rect = egui::Rect::from_min_size(
        canvas.min,
        egui::vec2(display_width, display_height),
    );

    painter.image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Draw a marker circle plus its rotation indicator segment.
///
/// `center` is canvas-local; `rotation` is in degrees, with 0 pointing up
/// (the indicator angle is offset by -90 degrees).
pub fn draw_marker(
    painter: &egui::Painter,
    canvas: egui::Rect,
    center: (f64, f64),
    radius: f64,
    rotation: f64,
    color: egui::Color32,
) {
    let center_pos = egui::pos2(
        canvas.min.x + center.0 as f32,
        canvas.min.y + center.1 as f32,
    );
    let stroke = egui::Stroke::new(1.5, color);

    painter.circle_stroke(center_pos, radius as f32, stroke);

    let (tip_x, tip_y) = point_on_circle_edge(
        center_pos.x as f64,
        center_pos.y as f64,
        radius,
        deg2rad(rotation - 90.0),
    );
    painter.line_segment(
        [center_pos, egui::pos2(tip_x as f32, tip_y as f32)],
        stroke,
    );
}
