// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Keyboard edge detector.
//!
//! egui exposes its own per-frame key queries, but the annotation logic
//! needs press-edge semantics it can drive explicitly (and test without a
//! UI): `down` is level state that never mutates, `pressed` reports each
//! up/down transition exactly once. State is fed from the raw egui key
//! events each frame.

use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
struct KeyState {
    down: bool,
    just_pressed: bool,
}

/// Per-key down/edge state.
#[derive(Debug, Default)]
pub struct Keyboard {
    keys: HashMap<egui::Key, KeyState>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw key transition. Down events replace the level state but
    /// preserve the edge latch, so key repeat does not re-trigger `pressed`.
    pub fn handle_event(&mut self, key: egui::Key, down: bool) {
        self.keys.entry(key).or_default().down = down;
    }

    /// Drain key events from the egui raw input into this keyboard.
    pub fn update_from_egui(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.raw.events.clone());
        for event in events {
            if let egui::Event::Key { key, pressed, .. } = event {
                self.handle_event(key, pressed);
            }
        }
    }

    /// Level state: true while the key is held. Safe to query every frame.
    pub fn down(&self, key: egui::Key) -> bool {
        self.keys.get(&key).map(|s| s.down).unwrap_or(false)
    }

    /// Edge state: `Some(true)` exactly once per down transition,
    /// `Some(false)` exactly once per release, `None` otherwise.
    ///
    /// Each call consumes the edge, so only the first caller per transition
    /// observes it. A second call site querying the same key in the same
    /// frame sees `None`. Known limitation; resetting the latch once per
    /// frame instead would lift it.
    pub fn pressed(&mut self, key: egui::Key) -> Option<bool> {
        let state = self.keys.get_mut(&key)?;

        if state.down && !state.just_pressed {
            state.just_pressed = true;
            return Some(true);
        }

        if !state.down && state.just_pressed {
            state.just_pressed = false;
            return Some(false);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Key;

    #[test]
    fn test_pressed_fires_once_per_down_transition() {
        let mut kb = Keyboard::new();
        kb.handle_event(Key::Space, true);

        assert_eq!(kb.pressed(Key::Space), Some(true));
        for _ in 0..10 {
            assert_eq!(kb.pressed(Key::Space), None);
        }

        kb.handle_event(Key::Space, false);
        assert_eq!(kb.pressed(Key::Space), Some(false));
        for _ in 0..10 {
            assert_eq!(kb.pressed(Key::Space), None);
        }
    }

    #[test]
    fn test_down_is_level_state_and_never_consumed() {
        let mut kb = Keyboard::new();
        assert!(!kb.down(Key::Q));

        kb.handle_event(Key::Q, true);
        for _ in 0..5 {
            assert!(kb.down(Key::Q));
        }
        kb.pressed(Key::Q);
        assert!(kb.down(Key::Q));

        kb.handle_event(Key::Q, false);
        assert!(!kb.down(Key::Q));
    }

    #[test]
    fn test_key_repeat_does_not_retrigger_edge() {
        let mut kb = Keyboard::new();
        kb.handle_event(Key::D, true);
        assert_eq!(kb.pressed(Key::D), Some(true));

        // OS key repeat delivers more down events while held.
        kb.handle_event(Key::D, true);
        kb.handle_event(Key::D, true);
        assert_eq!(kb.pressed(Key::D), None);
    }

    #[test]
    fn test_second_call_site_misses_the_edge() {
        let mut kb = Keyboard::new();
        kb.handle_event(Key::A, true);

        // Two independent consumers in one frame: only the first sees it.
        assert_eq!(kb.pressed(Key::A), Some(true));
        assert_eq!(kb.pressed(Key::A), None);
    }

    #[test]
    fn test_untracked_key_is_none() {
        let mut kb = Keyboard::new();
        assert_eq!(kb.pressed(Key::Z), None);
        assert!(!kb.down(Key::Z));
    }

    #[test]
    fn test_retrigger_after_release() {
        let mut kb = Keyboard::new();
        kb.handle_event(Key::Space, true);
        assert_eq!(kb.pressed(Key::Space), Some(true));
        kb.handle_event(Key::Space, false);
        assert_eq!(kb.pressed(Key::Space), Some(false));
        kb.handle_event(Key::Space, true);
        assert_eq!(kb.pressed(Key::Space), Some(true));
    }
}
