//! # Hardware Abstraction Layer (HAL)
//!
//! Platform-neutral keyboard traits.
//!
//! ## Philosophy
//!
//! **Platforms must be fully abstracted and swappable.**
//!
//! Nothing above this layer knows which operating system produced a key code.
//! Each platform crate (`hal_android`, ...) supplies a code type and a
//! translator; the tracker and bridge are generic over them.
//!
//! ## Design Principles
//!
//! 1. **No platform-specific assumptions**: Core logic works with any code type
//! 2. **Trait-based**: Translation and event delivery go through traits
//! 3. **Testable**: Devices and translators can be faked

pub mod keyboard;
pub mod keyboard_translation;

pub use keyboard::{
    channel_keyboard, ChannelKeyboard, HalKeyEvent, KeyEventSender, KeyboardDevice, QueuedKeyboard,
};
pub use keyboard_translation::KeyTranslator;
