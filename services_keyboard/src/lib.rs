//! # Keyboard Service
//!
//! This crate tracks which portable keys are currently down.
//!
//! ## Philosophy
//!
//! - **Explicit instance**: The tracker is owned by the input subsystem and
//!   handed to whoever needs it; there is no global keyboard
//! - **Recognition, not errors**: `press`/`release` only report whether the
//!   platform code was recognized
//! - **Snapshots are copies**: A returned `KeyboardState` never changes afterwards
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A platform event source (see `hal`)
//! - A translation table (see `hal_android`)
//! - Per-player state (the player index is accepted and ignored)
//! - An auto-repeat or timing layer

pub mod shared;

pub use shared::SharedKeyboard;

use hal::{HalKeyEvent, KeyTranslator};
use key_types::{Key, KeyboardState, PlayerIndex};
use log::{debug, trace};
use thiserror::Error;

/// Keyboard service error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyboardError {
    #[error("Keyboard state lock poisoned")]
    StatePoisoned,
}

/// Keyboard state tracker
///
/// Holds the set of keys currently down, in the order they went down.
/// Each key is either down or up; `press` is idempotent while down and
/// `release` is idempotent while up.
#[derive(Debug, Clone)]
pub struct KeyboardTracker<T: KeyTranslator> {
    /// Platform code translation table
    translator: T,
    /// Keys currently down (unique, never `Key::None`)
    pressed: Vec<Key>,
}

impl<T: KeyTranslator> KeyboardTracker<T> {
    /// Creates a tracker with no keys down
    pub fn new(translator: T) -> Self {
        Self {
            translator,
            pressed: Vec::new(),
        }
    }

    /// Records a key-down for a platform code
    ///
    /// Returns true if the code maps to a key (whether or not it was already
    /// down). Unmapped codes leave the state unchanged and return false.
    pub fn press(&mut self, code: T::Code) -> bool {
        let key = self.translator.translate(code);
        if key.is_none() {
            debug!("Ignoring key-down for unmapped code {:?}", code);
            return false;
        }

        if !self.pressed.contains(&key) {
            self.pressed.push(key);
            trace!("{} down ({:?})", key, code);
        }
        true
    }

    /// Records a key-up for a platform code
    ///
    /// Returns true for any mapped code, including one whose key was not down.
    /// Unmapped codes leave the state unchanged and return false.
    pub fn release(&mut self, code: T::Code) -> bool {
        let key = self.translator.translate(code);
        if key.is_none() {
            debug!("Ignoring key-up for unmapped code {:?}", code);
            return false;
        }

        if let Some(pos) = self.pressed.iter().position(|k| *k == key) {
            self.pressed.remove(pos);
            trace!("{} up ({:?})", key, code);
        }
        true
    }

    /// Dispatches a raw device event to `press` or `release`
    ///
    /// The return value is what a platform key callback should report as "handled".
    pub fn handle_event(&mut self, event: HalKeyEvent<T::Code>) -> bool {
        if event.is_pressed() {
            self.press(event.code)
        } else {
            self.release(event.code)
        }
    }

    /// Returns a copy of the current state
    pub fn snapshot(&self) -> KeyboardState {
        KeyboardState::new(self.pressed.iter().copied())
    }

    /// Returns the current state for a player
    ///
    /// There is one keyboard for all players, so the index is ignored and the
    /// result is always identical to `snapshot()`, even for out-of-range indices.
    pub fn snapshot_for(&self, _player: PlayerIndex) -> KeyboardState {
        self.snapshot()
    }

    /// Returns true if the key is currently down
    pub fn is_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Returns the number of keys currently down
    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }

    /// Releases every key
    ///
    /// Used at input subsystem shutdown or when the platform loses focus.
    pub fn reset(&mut self) {
        if !self.pressed.is_empty() {
            debug!("Resetting keyboard state ({} keys down)", self.pressed.len());
        }
        self.pressed.clear();
    }

    /// Returns the translation table in use
    pub fn translator(&self) -> &T {
        &self.translator
    }
}

impl<T: KeyTranslator + Default> Default for KeyboardTracker<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
