//! # Keyboard HAL Bridge Service
//!
//! This service bridges a platform keyboard device to the keyboard tracker.
//!
//! ## Philosophy
//!
//! - **Devices are just a source**: The device owns no key state
//! - **Once per tick**: The game loop drains pending events before it reads a snapshot
//! - **Same tracker everywhere**: Events reach the tracker through `SharedKeyboard`,
//!   so a platform thread and the game loop can hold the same state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hal::QueuedKeyboard;
//! use hal_android::AndroidKeyTranslator;
//! use services_keyboard::SharedKeyboard;
//! use services_keyboard_hal_bridge::KeyboardHalBridge;
//!
//! let keyboard = SharedKeyboard::with_translator(AndroidKeyTranslator::new());
//! let mut bridge = KeyboardHalBridge::new(keyboard.clone(), QueuedKeyboard::new());
//!
//! // Game loop
//! loop {
//!     bridge.drain()?;
//!     let state = keyboard.snapshot()?;
//!     // update(state) ...
//! }
//! ```

use hal::{KeyTranslator, KeyboardDevice};
use log::debug;
use services_keyboard::{KeyboardError, SharedKeyboard};
use thiserror::Error;

/// Bridge error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Keyboard error: {0}")]
    Keyboard(#[from] KeyboardError),
}

/// Poll result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollResult {
    /// An event was received and its code was recognized
    Handled,
    /// An event was received but its code is unmapped
    Ignored,
    /// No event was available from the device
    NoEvent,
}

/// Result of draining the device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainSummary {
    /// Events whose code was recognized
    pub handled: u64,
    /// Events whose code was unmapped
    pub ignored: u64,
}

impl DrainSummary {
    /// Total events taken from the device
    pub fn total(&self) -> u64 {
        self.handled + self.ignored
    }
}

/// Keyboard HAL Bridge
///
/// This component:
/// - Owns a `KeyboardDevice` (platform event source)
/// - Holds a `SharedKeyboard` handle (state destination)
/// - Counts handled and ignored events for diagnostics
pub struct KeyboardHalBridge<T, D>
where
    T: KeyTranslator,
    D: KeyboardDevice<Code = T::Code>,
{
    /// Destination tracker
    keyboard: SharedKeyboard<T>,

    /// Platform keyboard device
    device: D,

    /// Number of recognized events applied
    events_handled: u64,

    /// Number of unmapped events dropped
    events_ignored: u64,
}

impl<T, D> KeyboardHalBridge<T, D>
where
    T: KeyTranslator,
    D: KeyboardDevice<Code = T::Code>,
{
    /// Creates a new keyboard bridge
    pub fn new(keyboard: SharedKeyboard<T>, device: D) -> Self {
        Self {
            keyboard,
            device,
            events_handled: 0,
            events_ignored: 0,
        }
    }

    /// Polls one event from the device and applies it
    ///
    /// Returns:
    /// - `Ok(PollResult::Handled)` if a recognized event was applied
    /// - `Ok(PollResult::Ignored)` if an unmapped event was dropped
    /// - `Ok(PollResult::NoEvent)` if the device had nothing pending
    /// - `Err(BridgeError)` if the shared state is unusable
    pub fn poll(&mut self) -> Result<PollResult, BridgeError> {
        let event = match self.device.poll_event() {
            Some(event) => event,
            None => return Ok(PollResult::NoEvent),
        };

        if self.keyboard.handle_event(event)? {
            self.events_handled += 1;
            Ok(PollResult::Handled)
        } else {
            self.events_ignored += 1;
            Ok(PollResult::Ignored)
        }
    }

    /// Applies every pending device event under a single lock
    pub fn drain(&mut self) -> Result<DrainSummary, BridgeError> {
        let device = &mut self.device;
        let summary = self.keyboard.with_tracker(|tracker| {
            let mut summary = DrainSummary::default();
            while let Some(event) = device.poll_event() {
                if tracker.handle_event(event) {
                    summary.handled += 1;
                } else {
                    summary.ignored += 1;
                }
            }
            summary
        })?;

        self.events_handled += summary.handled;
        self.events_ignored += summary.ignored;
        if summary.total() > 0 {
            debug!(
                "Drained {} key events ({} handled, {} ignored)",
                summary.total(),
                summary.handled,
                summary.ignored
            );
        }
        Ok(summary)
    }

    /// Returns the shared keyboard this bridge feeds
    pub fn keyboard(&self) -> &SharedKeyboard<T> {
        &self.keyboard
    }

    /// Returns the device, e.g. to enqueue platform events
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Returns the number of recognized events applied
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    /// Returns the number of unmapped events dropped
    pub fn events_ignored(&self) -> u64 {
        self.events_ignored
    }
}
