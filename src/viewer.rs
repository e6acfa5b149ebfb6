// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer application state and egui App implementation.
//!
//! The viewer eagerly loads every annotated flag at startup, then replays
//! the stored markers: the current flag is drawn translated, rotated and
//! scaled so the annotated feature sits at the canvas center regardless of
//! canvas size.

use crate::input::Keyboard;
use crate::io::media::{self, LoadedImage};
use crate::io::store::MarkerStore;
use crate::models::catalog::FlagCatalog;
use crate::models::marker::Marker;
use crate::transform;
use crate::ui::viewer_canvas;

pub const DEFAULT_SCALE: f64 = 8.0;
pub const SCALE_STEP: f64 = 0.1;
pub const ROTATION_STEP: f64 = 0.5;

/// A flag image paired with its marker record, decoded but not yet
/// uploaded to the GPU.
pub struct LoadedFlag {
    pub id: String,
    pub image: LoadedImage,
    pub marker: Marker,
}

/// A replay-ready flag: texture plus marker.
struct ReplaySlot {
    id: String,
    texture: egui::TextureHandle,
    image_size: (u32, u32),
    marker: Marker,
}

/// Load the image of every catalog entry that has a stored marker.
///
/// Sequential on purpose: this is a one-time startup step over a small
/// catalog. A flag whose image fails to load is logged and skipped; there
/// is no retry.
pub fn load_annotated_flags(catalog: &FlagCatalog, store: &MarkerStore) -> Vec<LoadedFlag> {
    let mut flags = Vec::new();

    for entry in catalog.entries() {
        let Some(marker) = store.get(&entry.id) else {
            continue;
        };

        match media::load_image(&entry.path) {
            Ok(image) => {
                log::info!("Loaded flag image '{}'", entry.id);
                flags.push(LoadedFlag {
                    id: entry.id.clone(),
                    image,
                    marker: marker.clone(),
                });
            }
            Err(e) => log::error!("Skipping '{}': {}", entry.id, e),
        }
    }

    flags
}

/// Global replay controls, independent of any per-flag stored values.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Current slot index, cyclic over the loaded flags.
    pub index: usize,
    pub user_scale: f64,
    /// Free-running rotation in degrees, added on top of each flag's
    /// (negated) stored rotation.
    pub user_rotation: f64,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            index: 0,
            user_scale: DEFAULT_SCALE,
            user_rotation: 0.0,
        }
    }

    /// Move to the next flag with wraparound.
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    /// Move to the previous flag with wraparound.
    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main viewer application.
pub struct ViewerApp {
    slots: Vec<ReplaySlot>,
    state: ViewerState,
    keyboard: Keyboard,
}

impl ViewerApp {
    /// Create the viewer, uploading every pre-loaded flag as a texture.
    pub fn new(cc: &eframe::CreationContext<'_>, flags: Vec<LoadedFlag>) -> Self {
        let slots = flags
            .into_iter()
            .map(|flag| {
                let size = [flag.image.width as usize, flag.image.height as usize];
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied(size, &flag.image.pixels);
                let texture = cc.egui_ctx.load_texture(
                    flag.id.clone(),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );

                ReplaySlot {
                    id: flag.id,
                    texture,
                    image_size: (flag.image.width, flag.image.height),
                    marker: flag.marker,
                }
            })
            .collect();

        Self {
            slots,
            state: ViewerState::new(),
            keyboard: Keyboard::new(),
        }
    }

    fn handle_keys(&mut self) {
        if self.keyboard.pressed(egui::Key::A) == Some(true) {
            self.state.prev(self.slots.len());
        }

        if self.keyboard.pressed(egui::Key::D) == Some(true) {
            self.state.next(self.slots.len());
        }

        if self.keyboard.down(egui::Key::Q) {
            self.state.user_rotation -= ROTATION_STEP;
        }

        if self.keyboard.down(egui::Key::E) {
            self.state.user_rotation += ROTATION_STEP;
        }

        if self.keyboard.down(egui::Key::OpenBracket) {
            self.state.user_scale -= SCALE_STEP;
        }

        if self.keyboard.down(egui::Key::CloseBracket) {
            self.state.user_scale += SCALE_STEP;
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.keyboard.update_from_egui(ctx);
        self.handle_keys();

        // Status strip
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(slot) = self.slots.get(self.state.index) {
                    ui.label(format!(
                        "{} ({}/{})",
                        slot.id,
                        self.state.index + 1,
                        self.slots.len()
                    ));
                    ui.separator();
                }
                ui.label(format!("scale {:.1}", self.state.user_scale));
                ui.label(format!("rotation {:.1}°", self.state.user_rotation));
                ui.separator();
                ui.label(
                    egui::RichText::new("A/D flag · Q/E rotate · [/] scale · - crosshair")
                        .italics()
                        .weak(),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

            let available_size = ui.available_size();
            let (rect, _response) = ui.allocate_exact_size(available_size, egui::Sense::hover());
            let painter = ui.painter_at(rect);

            if let Some(slot) = self.slots.get(self.state.index) {
                let frame = transform::replay_frame(
                    rect.width() as f64,
                    rect.height() as f64,
                    slot.image_size.0,
                    slot.image_size.1,
                    &slot.marker,
                    self.state.user_scale,
                    self.state.user_rotation,
                );
                viewer_canvas::draw_replay(&painter, &slot.texture, &frame, rect);
            } else {
                ui.put(
                    rect,
                    egui::Label::new(
                        egui::RichText::new("No annotated flags to replay")
                            .color(egui::Color32::from_gray(180)),
                    ),
                );
            }

            // Crosshair while the dash key is held.
            if self.keyboard.down(egui::Key::Minus) {
                viewer_canvas::draw_crosshair(&painter, rect);
            }
        });

        // Run every frame so level-sensitive keys keep adjusting while held.
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut state = ViewerState::new();
        state.prev(4);
        assert_eq!(state.index, 3);
        state.next(4);
        assert_eq!(state.index, 0);

        state.index = 3;
        state.next(4);
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_navigation_on_empty_slots_is_a_noop() {
        let mut state = ViewerState::new();
        state.next(0);
        state.prev(0);
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_defaults() {
        let state = ViewerState::new();
        assert_eq!(state.user_scale, DEFAULT_SCALE);
        assert_eq!(state.user_rotation, 0.0);
    }
}
