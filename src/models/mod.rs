// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the FLAGMARK applications.

pub mod catalog;
pub mod marker;
