// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FLAGMARK - flag feature annotator.
//!
//! A pair of desktop applications for marking a circular feature (e.g. a
//! star) on flag images and replaying the stored markers: the editor places
//! and persists one marker per flag, the viewer re-renders each flag
//! translated, rotated and scaled so the marked feature is centered.

pub mod editor;
pub mod input;
pub mod io;
pub mod models;
pub mod transform;
pub mod ui;
pub mod util;
pub mod viewer;
