//! Android key codes
//!
//! Values of `android.view.KeyEvent.KEYCODE_*`. Only the codes this workspace
//! names are listed; any other `i32` is still a valid (unmapped) code.
//!
//! Names follow the Android constants without the `KEYCODE_` prefix. The digit
//! row is `NUM_0`..`NUM_9` in Rust and `"0"`..`"9"` by name.

use core::fmt;

/// Android key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AndroidKeycode(pub i32);

macro_rules! keycodes {
    ($($ident:ident = $value:expr, $name:literal;)*) => {
        impl AndroidKeycode {
            $(pub const $ident: Self = Self($value);)*
        }

        const NAMES: &[(&str, AndroidKeycode)] = &[
            $(($name, AndroidKeycode::$ident),)*
        ];
    };
}

keycodes! {
    UNKNOWN = 0, "UNKNOWN";
    SOFT_LEFT = 1, "SOFT_LEFT";
    SOFT_RIGHT = 2, "SOFT_RIGHT";
    HOME = 3, "HOME";
    BACK = 4, "BACK";
    CALL = 5, "CALL";
    ENDCALL = 6, "ENDCALL";
    NUM_0 = 7, "0";
    NUM_1 = 8, "1";
    NUM_2 = 9, "2";
    NUM_3 = 10, "3";
    NUM_4 = 11, "4";
    NUM_5 = 12, "5";
    NUM_6 = 13, "6";
    NUM_7 = 14, "7";
    NUM_8 = 15, "8";
    NUM_9 = 16, "9";
    STAR = 17, "STAR";
    POUND = 18, "POUND";
    DPAD_UP = 19, "DPAD_UP";
    DPAD_DOWN = 20, "DPAD_DOWN";
    DPAD_LEFT = 21, "DPAD_LEFT";
    DPAD_RIGHT = 22, "DPAD_RIGHT";
    DPAD_CENTER = 23, "DPAD_CENTER";
    VOLUME_UP = 24, "VOLUME_UP";
    VOLUME_DOWN = 25, "VOLUME_DOWN";
    POWER = 26, "POWER";
    CAMERA = 27, "CAMERA";
    CLEAR = 28, "CLEAR";
    A = 29, "A";
    B = 30, "B";
    C = 31, "C";
    D = 32, "D";
    E = 33, "E";
    F = 34, "F";
    G = 35, "G";
    H = 36, "H";
    I = 37, "I";
    J = 38, "J";
    K = 39, "K";
    L = 40, "L";
    M = 41, "M";
    N = 42, "N";
    O = 43, "O";
    P = 44, "P";
    Q = 45, "Q";
    R = 46, "R";
    S = 47, "S";
    T = 48, "T";
    U = 49, "U";
    V = 50, "V";
    W = 51, "W";
    X = 52, "X";
    Y = 53, "Y";
    Z = 54, "Z";
    COMMA = 55, "COMMA";
    PERIOD = 56, "PERIOD";
    ALT_LEFT = 57, "ALT_LEFT";
    ALT_RIGHT = 58, "ALT_RIGHT";
    SHIFT_LEFT = 59, "SHIFT_LEFT";
    SHIFT_RIGHT = 60, "SHIFT_RIGHT";
    TAB = 61, "TAB";
    SPACE = 62, "SPACE";
    SYM = 63, "SYM";
    EXPLORER = 64, "EXPLORER";
    ENVELOPE = 65, "ENVELOPE";
    ENTER = 66, "ENTER";
    DEL = 67, "DEL";
    GRAVE = 68, "GRAVE";
    MINUS = 69, "MINUS";
    EQUALS = 70, "EQUALS";
    LEFT_BRACKET = 71, "LEFT_BRACKET";
    RIGHT_BRACKET = 72, "RIGHT_BRACKET";
    BACKSLASH = 73, "BACKSLASH";
    SEMICOLON = 74, "SEMICOLON";
    APOSTROPHE = 75, "APOSTROPHE";
    SLASH = 76, "SLASH";
    AT = 77, "AT";
    NUM = 78, "NUM";
    HEADSETHOOK = 79, "HEADSETHOOK";
    FOCUS = 80, "FOCUS";
    PLUS = 81, "PLUS";
    MENU = 82, "MENU";
    NOTIFICATION = 83, "NOTIFICATION";
    SEARCH = 84, "SEARCH";
    MEDIA_PLAY_PAUSE = 85, "MEDIA_PLAY_PAUSE";
    MEDIA_STOP = 86, "MEDIA_STOP";
    MEDIA_NEXT = 87, "MEDIA_NEXT";
    MEDIA_PREVIOUS = 88, "MEDIA_PREVIOUS";
    MEDIA_REWIND = 89, "MEDIA_REWIND";
    MEDIA_FAST_FORWARD = 90, "MEDIA_FAST_FORWARD";
    MUTE = 91, "MUTE";
    PAGE_UP = 92, "PAGE_UP";
    PAGE_DOWN = 93, "PAGE_DOWN";
    ESCAPE = 111, "ESCAPE";
    FORWARD_DEL = 112, "FORWARD_DEL";
    CTRL_LEFT = 113, "CTRL_LEFT";
    CTRL_RIGHT = 114, "CTRL_RIGHT";
    CAPS_LOCK = 115, "CAPS_LOCK";
    SCROLL_LOCK = 116, "SCROLL_LOCK";
    META_LEFT = 117, "META_LEFT";
    META_RIGHT = 118, "META_RIGHT";
    FUNCTION = 119, "FUNCTION";
    SYSRQ = 120, "SYSRQ";
    BREAK = 121, "BREAK";
    MOVE_HOME = 122, "MOVE_HOME";
    MOVE_END = 123, "MOVE_END";
    INSERT = 124, "INSERT";
    FORWARD = 125, "FORWARD";
    MEDIA_PLAY = 126, "MEDIA_PLAY";
    MEDIA_PAUSE = 127, "MEDIA_PAUSE";
    MEDIA_CLOSE = 128, "MEDIA_CLOSE";
    MEDIA_EJECT = 129, "MEDIA_EJECT";
    MEDIA_RECORD = 130, "MEDIA_RECORD";
    F1 = 131, "F1";
    F2 = 132, "F2";
    F3 = 133, "F3";
    F4 = 134, "F4";
    F5 = 135, "F5";
    F6 = 136, "F6";
    F7 = 137, "F7";
    F8 = 138, "F8";
    F9 = 139, "F9";
    F10 = 140, "F10";
    F11 = 141, "F11";
    F12 = 142, "F12";
    NUM_LOCK = 143, "NUM_LOCK";
    NUMPAD_0 = 144, "NUMPAD_0";
    NUMPAD_1 = 145, "NUMPAD_1";
    NUMPAD_2 = 146, "NUMPAD_2";
    NUMPAD_3 = 147, "NUMPAD_3";
    NUMPAD_4 = 148, "NUMPAD_4";
    NUMPAD_5 = 149, "NUMPAD_5";
    NUMPAD_6 = 150, "NUMPAD_6";
    NUMPAD_7 = 151, "NUMPAD_7";
    NUMPAD_8 = 152, "NUMPAD_8";
    NUMPAD_9 = 153, "NUMPAD_9";
    NUMPAD_DIVIDE = 154, "NUMPAD_DIVIDE";
    NUMPAD_MULTIPLY = 155, "NUMPAD_MULTIPLY";
    NUMPAD_SUBTRACT = 156, "NUMPAD_SUBTRACT";
    NUMPAD_ADD = 157, "NUMPAD_ADD";
    NUMPAD_DOT = 158, "NUMPAD_DOT";
    NUMPAD_COMMA = 159, "NUMPAD_COMMA";
    NUMPAD_ENTER = 160, "NUMPAD_ENTER";
    NUMPAD_EQUALS = 161, "NUMPAD_EQUALS";
    VOLUME_MUTE = 164, "VOLUME_MUTE";
}

impl AndroidKeycode {
    /// Returns the raw value
    pub fn raw(&self) -> i32 {
        self.0
    }

    /// Returns the Android name (without `KEYCODE_`) if this code is one we list
    pub fn name(&self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(_, code)| code == self)
            .map(|(name, _)| *name)
    }

    /// Parses a key code from its name or a decimal value
    ///
    /// Accepts `DPAD_LEFT`, `KEYCODE_DPAD_LEFT`, `dpad_left` or `21`.
    /// Names win over numbers, so `"5"` is the digit key, not raw code 5.
    pub fn from_name(input: &str) -> Option<Self> {
        let upper = input.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("KEYCODE_").unwrap_or(&upper);
        NAMES
            .iter()
            .find(|(name, _)| *name == bare)
            .map(|(_, code)| *code)
            .or_else(|| bare.parse::<i32>().ok().map(Self))
    }
}

impl fmt::Display for AndroidKeycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "KEYCODE_{}", name),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(AndroidKeycode::DPAD_UP.raw(), 19);
        assert_eq!(AndroidKeycode::NUM_0.raw(), 7);
        assert_eq!(AndroidKeycode::A.raw(), 29);
        assert_eq!(AndroidKeycode::Z.raw(), 54);
        assert_eq!(AndroidKeycode::ESCAPE.raw(), 111);
        assert_eq!(AndroidKeycode::F12.raw(), 142);
        assert_eq!(AndroidKeycode::NUMPAD_ADD.raw(), 157);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, (name_a, code_a)) in NAMES.iter().enumerate() {
            for (name_b, code_b) in &NAMES[i + 1..] {
                assert_ne!(name_a, name_b);
                assert_ne!(code_a, code_b);
            }
        }
    }

    #[test]
    fn test_from_name_forms() {
        assert_eq!(
            AndroidKeycode::from_name("DPAD_LEFT"),
            Some(AndroidKeycode::DPAD_LEFT)
        );
        assert_eq!(
            AndroidKeycode::from_name("KEYCODE_SHIFT_LEFT"),
            Some(AndroidKeycode::SHIFT_LEFT)
        );
        assert_eq!(AndroidKeycode::from_name("a"), Some(AndroidKeycode::A));
        assert_eq!(AndroidKeycode::from_name("7"), Some(AndroidKeycode::NUM_7));
        assert_eq!(AndroidKeycode::from_name("21"), Some(AndroidKeycode::DPAD_LEFT));
        assert_eq!(AndroidKeycode::from_name("9999"), Some(AndroidKeycode(9999)));
        assert_eq!(AndroidKeycode::from_name("-3"), Some(AndroidKeycode(-3)));
        assert_eq!(AndroidKeycode::from_name("NOT_A_KEY"), None);
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(AndroidKeycode::MEDIA_PLAY_PAUSE.name(), Some("MEDIA_PLAY_PAUSE"));
        assert_eq!(AndroidKeycode::NUM_5.name(), Some("5"));
        assert_eq!(AndroidKeycode(9999).name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(AndroidKeycode::TAB.to_string(), "KEYCODE_TAB");
        assert_eq!(AndroidKeycode(9999).to_string(), "9999");
    }
}
