// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the FLAGMARK applications.

pub mod editor_canvas;
pub mod toolbar;
pub mod viewer_canvas;
