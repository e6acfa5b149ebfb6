// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FLAGMARK editor.
//!
//! Cycle through the flag catalog and place one circular marker per flag;
//! markers are persisted to the JSON store as they are saved.
//!
//! Usage: flagmark-edit [CATALOG] [STORE]
//! Falls back to a native file picker for the catalog; the store defaults
//! to `flags_data.json` and is created on first save.

use anyhow::{Context, Result};
use flagmark::editor::EditorApp;
use flagmark::io::store::MarkerStore;
use flagmark::models::catalog::FlagCatalog;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let catalog_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => rfd::FileDialog::new()
            .add_filter("Catalog", &["json", "yaml", "yml"])
            .pick_file()
            .context("No catalog file selected")?,
    };
    let store_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("flags_data.json"));

    let catalog = FlagCatalog::load(&catalog_path)?;
    let store = MarkerStore::load(&store_path)?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("FLAGMARK - Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "FLAGMARK Editor",
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(catalog, store)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
