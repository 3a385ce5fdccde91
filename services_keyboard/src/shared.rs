//! Shared keyboard handle
//!
//! For hosts whose platform delivers key callbacks on a different thread than
//! the game loop. Every clone refers to the same tracker; each call takes the
//! lock for the duration of one operation.

use crate::{KeyboardError, KeyboardTracker};
use hal::{HalKeyEvent, KeyTranslator};
use key_types::{KeyboardState, PlayerIndex};
use std::sync::{Arc, Mutex, MutexGuard};

/// Clonable, lock-guarded keyboard tracker
#[derive(Debug)]
pub struct SharedKeyboard<T: KeyTranslator> {
    inner: Arc<Mutex<KeyboardTracker<T>>>,
}

impl<T: KeyTranslator> SharedKeyboard<T> {
    /// Wraps a tracker
    pub fn new(tracker: KeyboardTracker<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Creates a shared tracker with no keys down
    pub fn with_translator(translator: T) -> Self {
        Self::new(KeyboardTracker::new(translator))
    }

    fn lock(&self) -> Result<MutexGuard<'_, KeyboardTracker<T>>, KeyboardError> {
        self.inner.lock().map_err(|_| KeyboardError::StatePoisoned)
    }

    /// See [`KeyboardTracker::press`]
    pub fn press(&self, code: T::Code) -> Result<bool, KeyboardError> {
        Ok(self.lock()?.press(code))
    }

    /// See [`KeyboardTracker::release`]
    pub fn release(&self, code: T::Code) -> Result<bool, KeyboardError> {
        Ok(self.lock()?.release(code))
    }

    /// See [`KeyboardTracker::handle_event`]
    pub fn handle_event(&self, event: HalKeyEvent<T::Code>) -> Result<bool, KeyboardError> {
        Ok(self.lock()?.handle_event(event))
    }

    pub fn snapshot(&self) -> Result<KeyboardState, KeyboardError> {
        Ok(self.lock()?.snapshot())
    }

    /// The player index is ignored, as in [`KeyboardTracker::snapshot_for`]
    pub fn snapshot_for(&self, player: PlayerIndex) -> Result<KeyboardState, KeyboardError> {
        Ok(self.lock()?.snapshot_for(player))
    }

    pub fn reset(&self) -> Result<(), KeyboardError> {
        self.lock()?.reset();
        Ok(())
    }

    /// Runs a closure with exclusive access to the tracker
    ///
    /// Used to apply a batch of events under a single lock.
    pub fn with_tracker<R>(
        &self,
        f: impl FnOnce(&mut KeyboardTracker<T>) -> R,
    ) -> Result<R, KeyboardError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }
}

impl<T: KeyTranslator> Clone for SharedKeyboard<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: KeyTranslator + Default> Default for SharedKeyboard<T> {
    fn default() -> Self {
        Self::new(KeyboardTracker::default())
    }
}
