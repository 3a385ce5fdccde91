//! # Android Keyboard Layer
//!
//! This crate implements the HAL keyboard traits for Android.
//!
//! ## Scope
//!
//! Android delivers key events to the activity as `KeyEvent` objects carrying
//! an integer `KEYCODE_*` value. This crate names those values and translates
//! them to portable keys. Receiving the events from the activity is the host's
//! job; it pushes them into a `hal::QueuedKeyboard<AndroidKeycode>` or calls
//! the tracker directly.

pub mod keyboard_translation;
pub mod keycode;

pub use keyboard_translation::{keycode_to_key, AndroidKeyTranslator};
pub use keycode::AndroidKeycode;
