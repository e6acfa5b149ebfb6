// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FLAGMARK viewer.
//!
//! Replays the stored markers: each annotated flag is drawn translated,
//! rotated and scaled so the marked feature sits at the canvas center.
//!
//! Usage: flagmark-view [CATALOG] [STORE]

use anyhow::{Context, Result};
use flagmark::io::store::MarkerStore;
use flagmark::models::catalog::FlagCatalog;
use flagmark::viewer::{self, ViewerApp};
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

    // One-time sequential load of every annotated flag
    let flags = viewer::load_annotated_flags(&catalog, &store);
    log::info!("Replaying {} annotated flags", flags.len());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("FLAGMARK - Viewer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "FLAGMARK Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, flags)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
