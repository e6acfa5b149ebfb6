// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: image loading and the persisted marker store.

pub mod media;
pub mod store;
