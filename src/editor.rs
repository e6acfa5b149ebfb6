// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor application state and egui App implementation.
//!
//! The editor cycles through the flag catalog, lets the user position,
//! scale and rotate a circular marker over the current flag, and persists
//! one marker record per flag through the write-through store.

use crate::input::Keyboard;
use crate::io::media::LoadedImage;
use crate::io::store::MarkerStore;
use crate::models::catalog::FlagCatalog;
use crate::models::marker::Marker;
use crate::transform;
use crate::ui::{editor_canvas, toolbar};
use std::sync::mpsc::{channel, Receiver};

pub const DEFAULT_RADIUS: f64 = 50.0;
pub const MIN_RADIUS: f64 = 1.0;
pub const MAX_RADIUS: f64 = 400.0;
pub const RADIUS_STEP: f64 = 0.2;
pub const ROTATION_STEP: f64 = 0.5;

/// What the adjustment keys (Q/E) currently affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustMode {
    Scale,
    Rotate,
}

/// Interaction state of the editor, independent of any UI plumbing.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Current flag index, cyclic over the catalog length.
    pub index: usize,
    /// Marker radius in pixels, clamped to [MIN_RADIUS, MAX_RADIUS].
    pub radius: f64,
    /// Marker rotation in degrees, free-running.
    pub rotation: f64,
    pub mode: AdjustMode,
}

impl EditorState {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            radius: DEFAULT_RADIUS,
            rotation: 0.0,
            mode: AdjustMode::Scale,
        }
    }

    /// Apply one tick of the "decrease" adjustment key.
    pub fn decrease(&mut self) {
        match self.mode {
            AdjustMode::Scale => self.radius = (self.radius - RADIUS_STEP).max(MIN_RADIUS),
            AdjustMode::Rotate => self.rotation -= ROTATION_STEP,
        }
    }

    /// Apply one tick of the "increase" adjustment key.
    pub fn increase(&mut self) {
        match self.mode {
            AdjustMode::Scale => self.radius = (self.radius + RADIUS_STEP).min(MAX_RADIUS),
            AdjustMode::Rotate => self.rotation += ROTATION_STEP,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AdjustMode::Scale => AdjustMode::Rotate,
            AdjustMode::Rotate => AdjustMode::Scale,
        };
    }

    /// Restore the default radius and zero rotation. Not persisted until
    /// the next save.
    pub fn reset(&mut self) {
        self.radius = DEFAULT_RADIUS;
        self.rotation = 0.0;
    }
}

/// Main editor application.
pub struct EditorApp {
    catalog: FlagCatalog,
    store: MarkerStore,
    state: EditorState,
    keyboard: Keyboard,

    /// Last known pointer position, canvas-local pixels.
    pointer: (f64, f64),

    /// Loaded image texture for the current flag
    image_texture: Option<egui::TextureHandle>,

    /// Image dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImage, String>>>,
}

impl EditorApp {
    /// Create the editor, restoring the last viewed flag from the store.
    pub fn new(catalog: FlagCatalog, store: MarkerStore) -> Self {
        // Wrap into range in case the catalog shrank since last session.
        let index = store
            .last_index()
            .map(|i| i % catalog.len())
            .unwrap_or(0);

        let mut app = Self {
            catalog,
            store,
            state: EditorState::new(index),
            keyboard: Keyboard::new(),
            pointer: (0.0, 0.0),
            image_texture: None,
            image_size: None,
            image_loader: None,
        };
        app.load_current_flag();
        app
    }

    /// Identifier of the flag currently being edited.
    fn current_id(&self) -> Option<&str> {
        self.catalog.get(self.state.index).map(|e| e.id.as_str())
    }

    /// Load the current flag's image on a background thread.
    fn load_current_flag(&mut self) {
        let Some(entry) = self.catalog.get(self.state.index) else {
            return;
        };
        let path = entry.path.clone();

        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.image_texture = None;
        self.image_size = None;

        std::thread::spawn(move || {
            let result = crate::io::media::load_image(&path)
                .map_err(|e| format!("Failed to load image: {}", e));
            let _ = sender.send(result);
        });
    }

    /// Check for a completed background load and create the texture.
    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        if let Some(ref receiver) = self.image_loader {
            if let Ok(result) = receiver.try_recv() {
                self.image_loader = None;

                match result {
                    Ok(loaded) => {
                        let size = [loaded.width as usize, loaded.height as usize];
                        let color_image =
                            egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                        let texture = ctx.load_texture(
                            "current_flag",
                            color_image,
                            egui::TextureOptions::LINEAR,
                        );

                        self.image_texture = Some(texture);
                        self.image_size = Some((loaded.width, loaded.height));
                        log::info!("Loaded flag image ({}x{})", loaded.width, loaded.height);
                    }
                    Err(e) => {
                        // No retry path: the slot simply never renders.
                        log::error!("{}", e);
                    }
                }
            }
        }
    }

    /// Save a marker for the current flag at the pointer position.
    fn save_marker(&mut self, canvas_width: f64) {
        let Some((img_w, img_h)) = self.image_size else {
            return;
        };

        let position =
            transform::normalize(self.pointer.0, self.pointer.1, canvas_width, img_w, img_h);
        let marker = Marker::new(position, self.state.radius, self.state.rotation);

        let Some(id) = self.current_id().map(str::to_string) else {
            return;
        };
        match self.store.set(&id, marker) {
            Ok(_) => log::info!("Saved marker for '{}'", id),
            Err(e) => log::error!("Failed to save marker for '{}': {}", id, e),
        }
    }

    /// Delete the current flag's marker, if any.
    fn delete_marker(&mut self) {
        let Some(id) = self.current_id().map(str::to_string) else {
            return;
        };
        match self.store.delete(&id) {
            Ok(true) => log::info!("Deleted marker for '{}'", id),
            Ok(false) => log::warn!("No marker to delete for '{}'", id),
            Err(e) => log::error!("Failed to delete marker for '{}': {}", id, e),
        }
    }

    /// Move to an adjacent flag, persist the index and reload the image.
    fn navigate(&mut self, forward: bool) {
        self.state.index = if forward {
            self.catalog.next_index(self.state.index)
        } else {
            self.catalog.prev_index(self.state.index)
        };

        if let Err(e) = self.store.set_last_index(self.state.index) {
            log::error!("Failed to persist flag index: {}", e);
        }
        if let Some(id) = self.current_id() {
            log::info!("Switched to flag '{}'", id);
        }
        self.load_current_flag();
    }

    /// Run the per-frame key bindings against the edge detector.
    fn handle_keys(&mut self, canvas_width: f64) {
        if self.keyboard.pressed(egui::Key::Space) == Some(true) {
            self.save_marker(canvas_width);
        }

        if self.keyboard.pressed(egui::Key::Backspace) == Some(true) {
            self.delete_marker();
        }

        if self.keyboard.pressed(egui::Key::A) == Some(true) {
            self.navigate(false);
        }

        if self.keyboard.pressed(egui::Key::D) == Some(true) {
            self.navigate(true);
        }

        if self.keyboard.down(egui::Key::Q) {
            self.state.decrease();
        }

        if self.keyboard.down(egui::Key::E) {
            self.state.increase();
        }

        if self.keyboard.pressed(egui::Key::T) == Some(true) {
            self.state.toggle_mode();
        }

        if self.keyboard.pressed(egui::Key::X) == Some(true) {
            self.state.reset();
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.keyboard.update_from_egui(ctx);
        self.poll_image_loader(ctx);

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::show(ui, &mut self.state.mode, self.state.radius, self.state.rotation);
        });

        // Main canvas (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

            let available_size = ui.available_size();
            let (rect, response) =
                ui.allocate_exact_size(available_size, egui::Sense::hover());

            if let Some(pos) = response.hover_pos() {
                self.pointer = ((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
            }

            let painter = ui.painter_at(rect);
            let canvas_width = rect.width() as f64;

            if let (Some(texture), Some((img_w, img_h))) =
                (&self.image_texture, self.image_size)
            {
                editor_canvas::draw_flag(&painter, texture, rect, img_w, img_h);
            }

            self.handle_keys(canvas_width);

            // Saved marker, re-projected from its normalized position.
            if let (Some((img_w, img_h)), Some(id)) = (self.image_size, self.current_id()) {
                if let Some(marker) = self.store.get(id) {
                    let (cx, cy) =
                        transform::project(&marker.position, canvas_width, img_w, img_h);
                    editor_canvas::draw_marker(
                        &painter,
                        rect,
                        (cx, cy),
                        marker.radius,
                        marker.rotation,
                        egui::Color32::WHITE,
                    );
                }
            }

            // Cursor marker under the pointer.
            editor_canvas::draw_marker(
                &painter,
                rect,
                self.pointer,
                self.state.radius,
                self.state.rotation,
                egui::Color32::BLACK,
            );
        });

        // Run every frame so level-sensitive keys keep adjusting while held.
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_caps_at_max() {
        let mut state = EditorState::new(0);
        for _ in 0..3000 {
            state.increase();
        }
        assert_eq!(state.radius, MAX_RADIUS);
    }

    #[test]
    fn test_radius_floors_at_min() {
        let mut state = EditorState::new(0);
        for _ in 0..3000 {
            state.decrease();
        }
        assert_eq!(state.radius, MIN_RADIUS);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = EditorState::new(0);
        state.toggle_mode();
        for _ in 0..10 {
            state.increase();
        }
        state.toggle_mode();
        for _ in 0..10 {
            state.increase();
        }
        assert_ne!(state.radius, DEFAULT_RADIUS);
        assert_ne!(state.rotation, 0.0);

        state.reset();
        assert_eq!(state.radius, DEFAULT_RADIUS);
        assert_eq!(state.rotation, 0.0);
    }

    #[test]
    fn test_rotation_is_free_running() {
        let mut state = EditorState::new(0);
        state.toggle_mode();
        assert_eq!(state.mode, AdjustMode::Rotate);
        for _ in 0..1000 {
            state.increase();
        }
        assert_eq!(state.rotation, 500.0);
        for _ in 0..2000 {
            state.decrease();
        }
        assert_eq!(state.rotation, -500.0);
    }

    #[test]
    fn test_toggle_mode_roundtrip() {
        let mut state = EditorState::new(0);
        assert_eq!(state.mode, AdjustMode::Scale);
        state.toggle_mode();
        assert_eq!(state.mode, AdjustMode::Rotate);
        state.toggle_mode();
        assert_eq!(state.mode, AdjustMode::Scale);
    }
}
