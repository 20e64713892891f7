//! Keyboard state shared between the host and the simulation
//!
//! The host feeds press/release events as they arrive; the simulation reads
//! two views of the same set once per frame:
//! - level-triggered: `is_held`
//! - edge-triggered: `was_just_pressed`, diffed against the previous frame

use std::collections::HashSet;

/// Set of currently held key identifiers
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
    /// Snapshot of `held` taken at the end of the last frame
    previous: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held. Repeated presses (key auto-repeat) are ignored.
    pub fn press(&mut self, key: &str) {
        if !self.held.contains(key) {
            self.held.insert(key.to_owned());
        }
    }

    /// Mark a key as held without producing a press edge.
    ///
    /// For auto-repeat of a key that was already down before `clear` dropped
    /// it: level views see it held again, `was_just_pressed` stays false
    /// until it is released and pressed anew.
    pub fn press_held(&mut self, key: &str) {
        if !self.held.contains(key) {
            self.held.insert(key.to_owned());
            self.previous.insert(key.to_owned());
        }
    }

    /// Mark a key as released. Releasing a key that is not held is a no-op.
    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Release everything (focus loss drops pending key-ups)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// True when `key` is held now but was not held at the end of last frame
    pub fn was_just_pressed(&self, key: &str) -> bool {
        self.held.contains(key) && !self.previous.contains(key)
    }

    /// Close the current frame: the held set becomes the edge baseline
    pub fn end_frame(&mut self) {
        self.previous.clone_from(&self.held);
    }

    pub fn held_keys(&self) -> impl Iterator<Item = &str> {
        self.held.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
