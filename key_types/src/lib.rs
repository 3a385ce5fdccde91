#![no_std]

//! # Key Types
//!
//! Framework-neutral keyboard types shared by the platform layer and the
//! game loop.
//!
//! ## Philosophy
//!
//! - **Portable, not platform**: Keys are logical identifiers, never raw platform codes
//! - **Snapshots, not streams**: Consumers ask "what is down right now"
//! - **Testable**: Every type is serializable so states can be captured and injected
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A translation table (that lives with each platform)
//! - A key-state tracker (see `services_keyboard`)
//! - Layout or IME aware

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Portable key identifier
///
/// `Key::None` is the sentinel for "no mapping". Translation tables return it
/// for platform codes they do not recognize, and it is never reported as down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Unmapped sentinel
    None,

    // Editing and navigation
    Back,
    Tab,
    Enter,
    Pause,
    CapsLock,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    PrintScreen,
    Insert,
    Delete,
    Help,

    // Digit row
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    LeftWindows,
    RightWindows,

    // Numeric pad
    NumPad0,
    NumPad1,
    NumPad2,
    NumPad3,
    NumPad4,
    NumPad5,
    NumPad6,
    NumPad7,
    NumPad8,
    NumPad9,
    Multiply,
    Add,
    Subtract,
    Decimal,
    Divide,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    NumLock,
    Scroll,

    // Modifiers
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,

    // Browser and media
    BrowserSearch,
    VolumeMute,
    VolumeDown,
    VolumeUp,
    MediaNextTrack,
    MediaPreviousTrack,
    MediaStop,
    MediaPlayPause,

    // OEM punctuation
    OemSemicolon,
    OemPlus,
    OemComma,
    OemMinus,
    OemPeriod,
    OemQuestion,
    OemTilde,
    OemOpenBrackets,
    OemPipe,
    OemCloseBrackets,
    OemQuotes,
    OemBackslash,
}

impl Key {
    /// Returns true for the unmapped sentinel
    pub fn is_none(&self) -> bool {
        *self == Key::None
    }

    /// Returns true if this is one of the left/right modifier keys
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Key::LeftShift
                | Key::RightShift
                | Key::LeftControl
                | Key::RightControl
                | Key::LeftAlt
                | Key::RightAlt
                | Key::LeftWindows
                | Key::RightWindows
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Player (device) index
///
/// Accepted by snapshot queries for symmetry with multi-controller APIs.
/// The keyboard has a single global state, so the value is never consulted.
/// Any raw value can be constructed, including ones past `FOUR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIndex(pub u8);

impl PlayerIndex {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);

    /// Returns the raw index
    pub fn raw(&self) -> u8 {
        self.0
    }

    /// Returns true for `ONE` through `FOUR`
    pub fn is_in_range(&self) -> bool {
        self.0 <= Self::FOUR.0
    }
}

impl Default for PlayerIndex {
    fn default() -> Self {
        Self::ONE
    }
}

/// Modifier keys held in a snapshot
///
/// Left and right variants collapse into one flag each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Left/Right Windows keys
    pub meta: bool,
}

impl Modifiers {
    fn from_keys(keys: &[Key]) -> Self {
        let mut mods = Self::default();
        for key in keys {
            match key {
                Key::LeftShift | Key::RightShift => mods.shift = true,
                Key::LeftControl | Key::RightControl => mods.ctrl = true,
                Key::LeftAlt | Key::RightAlt => mods.alt = true,
                Key::LeftWindows | Key::RightWindows => mods.meta = true,
                _ => {}
            }
        }
        mods
    }

    /// Returns true if no modifier is held
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.meta)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let flags = [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, "Meta"),
        ];
        let mut first = true;
        for (_, name) in flags.iter().filter(|(held, _)| *held) {
            if !first {
                write!(f, "+")?;
            }
            write!(f, "{}", name)?;
            first = false;
        }
        Ok(())
    }
}

/// Keyboard state snapshot
///
/// An owned copy of the keys that were down when the snapshot was taken,
/// in the order they went down. Equality ignores that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawKeyboardState")]
pub struct KeyboardState {
    keys: Vec<Key>,
}

/// Wire form of `KeyboardState`, re-validated on the way in
#[derive(Deserialize)]
struct RawKeyboardState {
    keys: Vec<Key>,
}

impl From<RawKeyboardState> for KeyboardState {
    fn from(raw: RawKeyboardState) -> Self {
        Self::new(raw.keys)
    }
}

impl KeyboardState {
    /// Creates a snapshot from a list of pressed keys
    ///
    /// Duplicates and the `Key::None` sentinel are dropped, first occurrence wins.
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut unique: Vec<Key> = Vec::new();
        for key in keys {
            if !key.is_none() && !unique.contains(&key) {
                unique.push(key);
            }
        }
        Self { keys: unique }
    }

    /// Returns the empty snapshot
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the key was down
    pub fn is_key_down(&self, key: Key) -> bool {
        !key.is_none() && self.keys.contains(&key)
    }

    /// Returns true if the key was up
    pub fn is_key_up(&self, key: Key) -> bool {
        !self.is_key_down(key)
    }

    /// Keys that were down, in press order
    pub fn pressed_keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Number of keys down
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Modifier flags implied by the held modifier keys
    pub fn modifiers(&self) -> Modifiers {
        Modifiers::from_keys(&self.keys)
    }
}

impl PartialEq for KeyboardState {
    fn eq(&self, other: &Self) -> bool {
        // Both sides hold unique keys, so equal length plus containment is set equality.
        self.keys.len() == other.keys.len() && self.keys.iter().all(|k| other.keys.contains(k))
    }
}

impl Eq for KeyboardState {}

impl<'a> IntoIterator for &'a KeyboardState {
    type Item = &'a Key;
    type IntoIter = core::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl fmt::Display for KeyboardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keys.is_empty() {
            return write!(f, "(none)");
        }
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
