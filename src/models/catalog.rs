// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Flag catalog.
//!
//! This module loads the ordered list of flag images from a catalog file
//! (YAML or JSON) and provides cyclic next/previous navigation over it.
//! The catalog is immutable for the session.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One catalog entry: a flag identifier and the image it refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagEntry {
    pub id: String,
    pub path: PathBuf,
}

/// Ordered, session-immutable list of flags.
#[derive(Debug, Clone)]
pub struct FlagCatalog {
    entries: Vec<FlagEntry>,
}

impl FlagCatalog {
    /// Build a catalog directly from entries.
    pub fn from_entries(entries: Vec<FlagEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a YAML or JSON file, selected by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let entries: Vec<FlagEntry> = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
                .with_context(|| format!("Failed to parse YAML catalog: {}", path.display()))?,
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))?,
            _ => bail!("Unsupported catalog extension: {:?}", extension),
        };

        if entries.is_empty() {
            bail!("Catalog is empty: {}", path.display());
        }

        log::info!("Loaded catalog with {} flags from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FlagEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[FlagEntry] {
        &self.entries
    }

    /// Next index with wraparound.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.entries.len()
    }

    /// Previous index with wraparound.
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 {
            self.entries.len() - 1
        } else {
            index - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> FlagCatalog {
        FlagCatalog::from_entries(
            (0..n)
                .map(|i| FlagEntry {
                    id: format!("flag{}", i),
                    path: PathBuf::from(format!("flags/flag{}.png", i)),
                })
                .collect(),
        )
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let cat = catalog(5);
        assert_eq!(cat.prev_index(0), 4);
    }

    #[test]
    fn test_next_from_last_wraps_to_zero() {
        let cat = catalog(5);
        assert_eq!(cat.next_index(4), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let cat = catalog(3);
        let mut idx = 0;
        for _ in 0..3 {
            idx = cat.next_index(idx);
        }
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_entries_preserve_order() {
        let json = r#"[
            {"id": "nz", "path": "flags/nz.png"},
            {"id": "au", "path": "flags/au.png"},
            {"id": "ws", "path": "flags/ws.png"}
        ]"#;
        let entries: Vec<FlagEntry> = serde_json::from_str(json).unwrap();
        let cat = FlagCatalog::from_entries(entries);
        assert_eq!(cat.get(0).unwrap().id, "nz");
        assert_eq!(cat.get(1).unwrap().id, "au");
        assert_eq!(cat.get(2).unwrap().id, "ws");
    }
}
