// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persisted marker store.
//!
//! This module provides a write-through repository over a single JSON file:
//! one marker record per flag id, plus one reserved key holding the last
//! viewed flag index. Every mutation rewrites the whole file synchronously.

use crate::models::marker::Marker;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk shape of the store.
///
/// The reserved index key sits next to the per-flag records in the same JSON
/// object, so flag ids must not collide with it.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(
        rename = "currentFlagKeyIndex",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    last_index: Option<usize>,

    #[serde(flatten)]
    markers: BTreeMap<String, Marker>,
}

/// Repository for marker records, backed by a JSON file.
pub struct MarkerStore {
    path: PathBuf,
    data: StoreData,
}

impl MarkerStore {
    /// Load the store from `path`, or start empty if the file does not exist.
    ///
    /// A file that exists but fails to parse is a fatal error.
    pub fn load(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read store: {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse store: {}", path.display()))?
        } else {
            StoreData::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Look up the marker for a flag id.
    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.data.markers.get(id)
    }

    /// Create or overwrite the marker for a flag id.
    pub fn set(&mut self, id: &str, marker: Marker) -> Result<()> {
        self.data.markers.insert(id.to_string(), marker);
        self.flush()
    }

    /// Remove the marker for a flag id.
    ///
    /// Returns `Ok(false)` without writing when no record exists.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.data.markers.remove(id).is_none() {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Number of marker records.
    pub fn len(&self) -> usize {
        self.data.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.markers.is_empty()
    }

    /// Last viewed flag index, if one was ever persisted.
    pub fn last_index(&self) -> Option<usize> {
        self.data.last_index
    }

    /// Persist the last viewed flag index.
    pub fn set_last_index(&mut self, index: usize) -> Result<()> {
        self.data.last_index = Some(index);
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write store: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::marker::Point;

    fn temp_store_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flagmark-store-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = temp_store_path("roundtrip");
        let marker = Marker::new(Point::new(0.42, 0.17), 63.2, 12.5);

        {
            let mut store = MarkerStore::load(&path).unwrap();
            store.set("nz", marker.clone()).unwrap();
            store.set_last_index(3).unwrap();
        }

        let store = MarkerStore::load(&path).unwrap();
        assert_eq!(store.get("nz"), Some(&marker));
        assert_eq!(store.last_index(), Some(3));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_delete_absent_returns_false_and_does_not_write() {
        let path = temp_store_path("delete-absent");
        let mut store = MarkerStore::load(&path).unwrap();
        store
            .set("au", Marker::new(Point::new(0.5, 0.5), 50.0, 0.0))
            .unwrap();
        let size_before = std::fs::metadata(&path).unwrap().len();

        assert!(!store.delete("ws").unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), size_before);

        assert!(store.delete("au").unwrap());
        assert!(store.is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let path = temp_store_path("missing");
        std::fs::remove_file(&path).ok();
        let store = MarkerStore::load(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.last_index(), None);
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let path = temp_store_path("malformed");
        std::fs::write(&path, "{not json").unwrap();
        assert!(MarkerStore::load(&path).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_record_without_rotation_reads_as_zero() {
        let path = temp_store_path("no-rotation");
        std::fs::write(
            &path,
            r#"{"nz": {"position": {"x": 0.5, "y": 0.5}, "radius": 50.0}}"#,
        )
        .unwrap();
        let store = MarkerStore::load(&path).unwrap();
        assert_eq!(store.get("nz").unwrap().rotation, 0.0);
        std::fs::remove_file(&path).ok();
    }
}
