// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer canvas painting.
//!
//! Replays a stored marker by drawing the flag image as a textured quad
//! that has been scaled, rotated about the canvas center and offset so the
//! annotated feature lands exactly on the center. An optional crosshair
//! gives an alignment reference.

use crate::transform::ReplayFrame;

/// Draw one replay frame of the current flag.
pub fn draw_replay(
    painter: &egui::Painter,
    texture: &egui::TextureHandle,
    frame: &ReplayFrame,
    canvas: egui::Rect,
) {
    let origin = egui::pos2(
        canvas.min.x + frame.center.0 as f32,
        canvas.min.y + frame.center.1 as f32,
    );
    let quad = egui::Rect::from_min_size(
        egui::pos2(
            origin.x + frame.offset.0 as f32,
            origin.y + frame.offset.1 as f32,
        ),
        egui::vec2(frame.size.0 as f32, frame.size.1 as f32),
    );

    let mut mesh = egui::Mesh::with_texture(texture.id());
    mesh.add_rect_with_uv(
        quad,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
    mesh.rotate(egui::emath::Rot2::from_angle(frame.rotation as f32), origin);

    painter.add(egui::Shape::mesh(mesh));
}

/// Draw centerlines through the canvas center.
pub fn draw_crosshair(painter: &egui::Painter, canvas: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(200));
    let center = canvas.center();

    painter.line_segment(
        [
            egui::pos2(center.x, canvas.min.y),
            egui::pos2(center.x, canvas.max.y),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(canvas.min.x, center.y),
            egui::pos2(canvas.max.x, center.y),
        ],
        stroke,
    );
}
