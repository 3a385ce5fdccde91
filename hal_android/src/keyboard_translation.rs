//! Android key code to portable key translation
//!
//! ## Philosophy
//!
//! - **Deterministic mapping**: Same key code always produces the same `Key`
//! - **Explicit sentinel fallback**: Every code not listed returns `Key::None`
//! - **No locale/IME complexity**: Physical keys only
//!
//! Some Android codes have a portable counterpart but are deliberately left
//! out (`MOVE_END`, `FORWARD_DEL`, the numeric pad digits, ...). They map to
//! `Key::None` like any other unlisted code.

use crate::keycode::AndroidKeycode;
use hal::KeyTranslator;
use key_types::Key;

/// Translates an Android key code to a portable key
///
/// Returns `Key::None` for unmapped codes, including values outside Android's range.
pub fn keycode_to_key(code: AndroidKeycode) -> Key {
    match code {
        // Directional pad
        AndroidKeycode::DPAD_LEFT => Key::Left,
        AndroidKeycode::DPAD_RIGHT => Key::Right,
        AndroidKeycode::DPAD_UP => Key::Up,
        AndroidKeycode::DPAD_DOWN => Key::Down,
        AndroidKeycode::DPAD_CENTER => Key::Enter,

        // Digit row
        AndroidKeycode::NUM_0 => Key::D0,
        AndroidKeycode::NUM_1 => Key::D1,
        AndroidKeycode::NUM_2 => Key::D2,
        AndroidKeycode::NUM_3 => Key::D3,
        AndroidKeycode::NUM_4 => Key::D4,
        AndroidKeycode::NUM_5 => Key::D5,
        AndroidKeycode::NUM_6 => Key::D6,
        AndroidKeycode::NUM_7 => Key::D7,
        AndroidKeycode::NUM_8 => Key::D8,
        AndroidKeycode::NUM_9 => Key::D9,

        // Letters
        AndroidKeycode::A => Key::A,
        AndroidKeycode::B => Key::B,
        AndroidKeycode::C => Key::C,
        AndroidKeycode::D => Key::D,
        AndroidKeycode::E => Key::E,
        AndroidKeycode::F => Key::F,
        AndroidKeycode::G => Key::G,
        AndroidKeycode::H => Key::H,
        AndroidKeycode::I => Key::I,
        AndroidKeycode::J => Key::J,
        AndroidKeycode::K => Key::K,
        AndroidKeycode::L => Key::L,
        AndroidKeycode::M => Key::M,
        AndroidKeycode::N => Key::N,
        AndroidKeycode::O => Key::O,
        AndroidKeycode::P => Key::P,
        AndroidKeycode::Q => Key::Q,
        AndroidKeycode::R => Key::R,
        AndroidKeycode::S => Key::S,
        AndroidKeycode::T => Key::T,
        AndroidKeycode::U => Key::U,
        AndroidKeycode::V => Key::V,
        AndroidKeycode::W => Key::W,
        AndroidKeycode::X => Key::X,
        AndroidKeycode::Y => Key::Y,
        AndroidKeycode::Z => Key::Z,

        // Editing and navigation
        AndroidKeycode::SPACE => Key::Space,
        AndroidKeycode::ESCAPE => Key::Escape,
        AndroidKeycode::BACK => Key::Back,
        AndroidKeycode::HOME => Key::Home,
        AndroidKeycode::ENTER => Key::Enter,
        AndroidKeycode::TAB => Key::Tab,
        AndroidKeycode::DEL => Key::Delete,
        AndroidKeycode::INSERT => Key::Insert,
        AndroidKeycode::PAGE_UP => Key::PageUp,
        AndroidKeycode::PAGE_DOWN => Key::PageDown,

        // Punctuation
        AndroidKeycode::PERIOD => Key::OemPeriod,
        AndroidKeycode::COMMA => Key::OemComma,
        AndroidKeycode::MINUS => Key::OemMinus,
        AndroidKeycode::LEFT_BRACKET => Key::OemOpenBrackets,
        AndroidKeycode::RIGHT_BRACKET => Key::OemCloseBrackets,
        AndroidKeycode::BACKSLASH => Key::OemBackslash,
        AndroidKeycode::SEMICOLON => Key::OemSemicolon,

        // System
        AndroidKeycode::MENU => Key::Help,
        AndroidKeycode::SEARCH => Key::BrowserSearch,

        // Volume and media
        AndroidKeycode::VOLUME_UP => Key::VolumeUp,
        AndroidKeycode::VOLUME_DOWN => Key::VolumeDown,
        AndroidKeycode::MUTE => Key::VolumeMute,
        AndroidKeycode::MEDIA_PAUSE => Key::Pause,
        AndroidKeycode::MEDIA_PLAY_PAUSE => Key::MediaPlayPause,
        AndroidKeycode::MEDIA_STOP => Key::MediaStop,
        AndroidKeycode::MEDIA_NEXT => Key::MediaNextTrack,
        AndroidKeycode::MEDIA_PREVIOUS => Key::MediaPreviousTrack,

        // Modifiers
        AndroidKeycode::ALT_LEFT => Key::LeftAlt,
        AndroidKeycode::ALT_RIGHT => Key::RightAlt,
        AndroidKeycode::SHIFT_LEFT => Key::LeftShift,
        AndroidKeycode::SHIFT_RIGHT => Key::RightShift,
        AndroidKeycode::CTRL_LEFT => Key::LeftControl,
        AndroidKeycode::CTRL_RIGHT => Key::RightControl,

        // Lock keys
        AndroidKeycode::CAPS_LOCK => Key::CapsLock,
        AndroidKeycode::SCROLL_LOCK => Key::Scroll,
        AndroidKeycode::NUM_LOCK => Key::NumLock,

        // Function keys
        AndroidKeycode::F1 => Key::F1,
        AndroidKeycode::F2 => Key::F2,
        AndroidKeycode::F3 => Key::F3,
        AndroidKeycode::F4 => Key::F4,
        AndroidKeycode::F5 => Key::F5,
        AndroidKeycode::F6 => Key::F6,
        AndroidKeycode::F7 => Key::F7,
        AndroidKeycode::F8 => Key::F8,
        AndroidKeycode::F9 => Key::F9,
        AndroidKeycode::F10 => Key::F10,
        AndroidKeycode::F11 => Key::F11,
        AndroidKeycode::F12 => Key::F12,

        // Numpad operators
        AndroidKeycode::NUMPAD_DIVIDE => Key::Divide,
        AndroidKeycode::NUMPAD_MULTIPLY => Key::Multiply,
        AndroidKeycode::NUMPAD_SUBTRACT => Key::Subtract,
        AndroidKeycode::NUMPAD_ADD => Key::Add,

        // Unmapped
        _ => Key::None,
    }
}

/// Android key translator
///
/// Stateless; all instances share the same static table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AndroidKeyTranslator;

impl AndroidKeyTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl KeyTranslator for AndroidKeyTranslator {
    type Code = AndroidKeycode;

    fn translate(&self, code: AndroidKeycode) -> Key {
        keycode_to_key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dpad() {
        assert_eq!(keycode_to_key(AndroidKeycode::DPAD_LEFT), Key::Left);
        assert_eq!(keycode_to_key(AndroidKeycode::DPAD_RIGHT), Key::Right);
        assert_eq!(keycode_to_key(AndroidKeycode::DPAD_UP), Key::Up);
        assert_eq!(keycode_to_key(AndroidKeycode::DPAD_DOWN), Key::Down);
        assert_eq!(keycode_to_key(AndroidKeycode::DPAD_CENTER), Key::Enter);
    }

    #[test]
    fn test_digits_and_letters() {
        assert_eq!(keycode_to_key(AndroidKeycode::NUM_0), Key::D0);
        assert_eq!(keycode_to_key(AndroidKeycode::NUM_9), Key::D9);
        assert_eq!(keycode_to_key(AndroidKeycode::A), Key::A);
        assert_eq!(keycode_to_key(AndroidKeycode::M), Key::M);
        assert_eq!(keycode_to_key(AndroidKeycode::Z), Key::Z);
    }

    #[test]
    fn test_renamed_keys() {
        assert_eq!(keycode_to_key(AndroidKeycode::BACK), Key::Back);
        assert_eq!(keycode_to_key(AndroidKeycode::DEL), Key::Delete);
        assert_eq!(keycode_to_key(AndroidKeycode::MENU), Key::Help);
        assert_eq!(keycode_to_key(AndroidKeycode::SEARCH), Key::BrowserSearch);
        assert_eq!(keycode_to_key(AndroidKeycode::MUTE), Key::VolumeMute);
        assert_eq!(keycode_to_key(AndroidKeycode::MEDIA_PAUSE), Key::Pause);
        assert_eq!(keycode_to_key(AndroidKeycode::SCROLL_LOCK), Key::Scroll);
        assert_eq!(keycode_to_key(AndroidKeycode::PERIOD), Key::OemPeriod);
        assert_eq!(
            keycode_to_key(AndroidKeycode::LEFT_BRACKET),
            Key::OemOpenBrackets
        );
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(keycode_to_key(AndroidKeycode::SHIFT_LEFT), Key::LeftShift);
        assert_eq!(keycode_to_key(AndroidKeycode::SHIFT_RIGHT), Key::RightShift);
        assert_eq!(keycode_to_key(AndroidKeycode::CTRL_LEFT), Key::LeftControl);
        assert_eq!(keycode_to_key(AndroidKeycode::ALT_RIGHT), Key::RightAlt);
    }

    #[test]
    fn test_function_and_numpad() {
        assert_eq!(keycode_to_key(AndroidKeycode::F1), Key::F1);
        assert_eq!(keycode_to_key(AndroidKeycode::F12), Key::F12);
        assert_eq!(keycode_to_key(AndroidKeycode::NUMPAD_DIVIDE), Key::Divide);
        assert_eq!(keycode_to_key(AndroidKeycode::NUMPAD_ADD), Key::Add);
    }

    #[test]
    fn test_unlisted_codes_are_unmapped() {
        assert_eq!(keycode_to_key(AndroidKeycode::UNKNOWN), Key::None);
        assert_eq!(keycode_to_key(AndroidKeycode::MOVE_END), Key::None);
        assert_eq!(keycode_to_key(AndroidKeycode::FORWARD_DEL), Key::None);
        assert_eq!(keycode_to_key(AndroidKeycode::NUMPAD_0), Key::None);
        assert_eq!(keycode_to_key(AndroidKeycode::META_LEFT), Key::None);
        assert_eq!(keycode_to_key(AndroidKeycode::VOLUME_MUTE), Key::None);
        assert_eq!(keycode_to_key(AndroidKeycode(9999)), Key::None);
        assert_eq!(keycode_to_key(AndroidKeycode(-1)), Key::None);
        assert_eq!(keycode_to_key(AndroidKeycode(i32::MAX)), Key::None);
    }

    #[test]
    fn test_table_size() {
        let mapped: Vec<(i32, Key)> = (-16..512)
            .map(|raw| (raw, keycode_to_key(AndroidKeycode(raw))))
            .filter(|(_, key)| !key.is_none())
            .collect();
        let distinct: HashSet<Key> = mapped.iter().map(|(_, key)| *key).collect();

        // DPAD_CENTER and ENTER share Key::Enter
        assert_eq!(mapped.len(), 93);
        assert_eq!(distinct.len(), 92);
    }

    #[test]
    fn test_translator_trait() {
        let translator = AndroidKeyTranslator::new();
        assert_eq!(translator.translate(AndroidKeycode::TAB), Key::Tab);
        assert!(translator.is_mapped(AndroidKeycode::CAPS_LOCK));
        assert!(!translator.is_mapped(AndroidKeycode(9999)));
    }
}
