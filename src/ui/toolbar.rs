// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor toolbar.
//!
//! Shows which parameter the adjustment keys currently affect, the live
//! marker values and the key bindings.

use crate::editor::AdjustMode;

/// Display the toolbar with the adjust-mode selection.
pub fn show(ui: &mut egui::Ui, mode: &mut AdjustMode, radius: f64, rotation: f64) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Adjust:");

        ui.separator();

        if ui.selectable_label(*mode == AdjustMode::Scale, "⭕ Scale").clicked() {
            *mode = AdjustMode::Scale;
        }

        if ui.selectable_label(*mode == AdjustMode::Rotate, "↻ Rotate").clicked() {
            *mode = AdjustMode::Rotate;
        }

        ui.separator();

        ui.label(format!("radius {:.1}px", radius));
        ui.label(format!("rotation {:.1}°", rotation));

        ui.separator();

        ui.label(
            egui::RichText::new(
                "Space save · Backspace delete · A/D flag · Q/E adjust · T mode · X reset",
            )
            .italics()
            .weak(),
        );
    });
}
