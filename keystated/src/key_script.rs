//! # Key Script Parser
//!
//! A line-based script format for replaying Android key events.
//!
//! ## Format
//!
//! Each line is one action:
//! - `down <code>` / `press <code>`: queue a key-down
//! - `up <code>` / `release <code>`: queue a key-up
//! - `tap <code>`: queue a key-down followed by a key-up
//! - `tick`: drain queued events and report the state
//! - `snapshot [player]`: report the state without draining
//! - Comments: `# ...`, on their own line or after an action
//!
//! Codes are Android names (`DPAD_LEFT`, `KEYCODE_A`, `shift_left`) or raw
//! decimal values (`9999`).
//!
//! ## Example
//!
//! ```text
//! down A
//! tick                 # {A}
//! down SHIFT_LEFT
//! up A
//! tick                 # {LeftShift}
//! snapshot 7           # player index is ignored
//! ```

use hal_android::AndroidKeycode;
use key_types::PlayerIndex;
use std::collections::VecDeque;
use thiserror::Error;

/// Key script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyScriptError {
    #[error("Invalid key code: {0}")]
    InvalidKeyCode(String),

    #[error("Invalid player index: {0}")]
    InvalidPlayer(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// A single scripted action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedAction {
    /// Queue a key-down
    Down(AndroidKeycode),
    /// Queue a key-up
    Up(AndroidKeycode),
    /// Drain the queue and report
    Tick,
    /// Report without draining, optionally for a specific player
    Snapshot(Option<PlayerIndex>),
}

/// Key script
#[derive(Debug, Clone)]
pub struct KeyScript {
    actions: VecDeque<ScriptedAction>,
}

impl KeyScript {
    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, KeyScriptError> {
        let mut actions = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            }
            .trim();

            if line.is_empty() {
                continue;
            }

            let parsed = Self::parse_line(line).map_err(|e| KeyScriptError::ParseError {
                line: line_num + 1,
                message: e.to_string(),
            })?;
            actions.extend(parsed);
        }

        if actions.is_empty() {
            return Err(KeyScriptError::EmptyScript);
        }

        Ok(Self { actions })
    }

    /// Parses a single non-empty, comment-free line
    fn parse_line(line: &str) -> Result<Vec<ScriptedAction>, KeyScriptError> {
        let mut parts = line.split_whitespace();
        let action = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next();

        if let Some(extra) = parts.next() {
            return Err(KeyScriptError::UnknownAction(format!("unexpected argument '{}'", extra)));
        }

        match (action.as_str(), argument) {
            ("down" | "press", Some(code)) => {
                Ok(vec![ScriptedAction::Down(Self::parse_code(code)?)])
            }
            ("up" | "release", Some(code)) => {
                Ok(vec![ScriptedAction::Up(Self::parse_code(code)?)])
            }
            ("tap", Some(code)) => {
                let code = Self::parse_code(code)?;
                Ok(vec![ScriptedAction::Down(code), ScriptedAction::Up(code)])
            }
            ("tick", None) => Ok(vec![ScriptedAction::Tick]),
            ("snapshot", None) => Ok(vec![ScriptedAction::Snapshot(None)]),
            ("snapshot", Some(player)) => {
                let player = Self::parse_player(player)?;
                Ok(vec![ScriptedAction::Snapshot(Some(player))])
            }
            ("down" | "press" | "up" | "release" | "tap", None) => Err(
                KeyScriptError::InvalidKeyCode(format!("'{}' needs a key code", action)),
            ),
            _ => Err(KeyScriptError::UnknownAction(line.to_string())),
        }
    }

    fn parse_code(name: &str) -> Result<AndroidKeycode, KeyScriptError> {
        AndroidKeycode::from_name(name)
            .ok_or_else(|| KeyScriptError::InvalidKeyCode(name.to_string()))
    }

    /// Parses a raw player index; any `u8` is accepted
    pub fn parse_player(raw: &str) -> Result<PlayerIndex, KeyScriptError> {
        raw.trim()
            .parse::<u8>()
            .map(PlayerIndex)
            .map_err(|_| KeyScriptError::InvalidPlayer(raw.to_string()))
    }

    /// Returns the next action, if any
    pub fn next_action(&mut self) -> Option<ScriptedAction> {
        self.actions.pop_front()
    }

    /// Returns the number of remaining actions
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_down_up() {
        let mut script = KeyScript::from_text("down A\nup SHIFT_LEFT").unwrap();
        assert_eq!(script.remaining(), 2);

        assert_eq!(
            script.next_action(),
            Some(ScriptedAction::Down(AndroidKeycode::A))
        );
        assert_eq!(
            script.next_action(),
            Some(ScriptedAction::Up(AndroidKeycode::SHIFT_LEFT))
        );
        assert_eq!(script.next_action(), None);
    }

    #[test]
    fn test_parse_aliases_and_case() {
        let mut script = KeyScript::from_text("PRESS keycode_dpad_up\nRelease dpad_up").unwrap();
        assert_eq!(
            script.next_action(),
            Some(ScriptedAction::Down(AndroidKeycode::DPAD_UP))
        );
        assert_eq!(
            script.next_action(),
            Some(ScriptedAction::Up(AndroidKeycode::DPAD_UP))
        );
    }

    #[test]
    fn test_parse_raw_code() {
        let mut script = KeyScript::from_text("down 9999").unwrap();
        assert_eq!(
            script.next_action(),
            Some(ScriptedAction::Down(AndroidKeycode(9999)))
        );
    }

    #[test]
    fn test_parse_tap_expands() {
        let mut script = KeyScript::from_text("tap SPACE").unwrap();
        assert_eq!(script.remaining(), 2);
        assert_eq!(
            script.next_action(),
            Some(ScriptedAction::Down(AndroidKeycode::SPACE))
        );
        assert_eq!(
            script.next_action(),
            Some(ScriptedAction::Up(AndroidKeycode::SPACE))
        );
    }

    #[test]
    fn test_parse_tick_and_snapshot() {
        let mut script = KeyScript::from_text("tick\nsnapshot\nsnapshot 200").unwrap();
        assert_eq!(script.next_action(), Some(ScriptedAction::Tick));
        assert_eq!(script.next_action(), Some(ScriptedAction::Snapshot(None)));
        assert_eq!(
            script.next_action(),
            Some(ScriptedAction::Snapshot(Some(PlayerIndex(200))))
        );
    }

    #[test]
    fn test_parse_comments() {
        let script =
            KeyScript::from_text("# Comment\ndown A # trailing\n\n# Another\ntick").unwrap();
        assert_eq!(script.remaining(), 2);
    }

    #[test]
    fn test_empty_script_error() {
        assert!(matches!(
            KeyScript::from_text(""),
            Err(KeyScriptError::EmptyScript)
        ));
        assert!(matches!(
            KeyScript::from_text("# Just comments\n   \n"),
            Err(KeyScriptError::EmptyScript)
        ));
    }

    #[test]
    fn test_invalid_key_code() {
        let result = KeyScript::from_text("down A\ndown NOT_A_KEY");
        assert_eq!(
            result.unwrap_err(),
            KeyScriptError::ParseError {
                line: 2,
                message: "Invalid key code: NOT_A_KEY".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_key_code() {
        let result = KeyScript::from_text("down");
        assert!(matches!(result, Err(KeyScriptError::ParseError { line: 1, .. })));
    }

    #[test]
    fn test_unknown_action() {
        assert!(matches!(
            KeyScript::from_text("jump A"),
            Err(KeyScriptError::ParseError { line: 1, .. })
        ));
        assert!(matches!(
            KeyScript::from_text("tick now"),
            Err(KeyScriptError::ParseError { .. })
        ));
        assert!(matches!(
            KeyScript::from_text("down A B"),
            Err(KeyScriptError::ParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_player() {
        assert!(matches!(
            KeyScript::from_text("snapshot -1"),
            Err(KeyScriptError::ParseError { .. })
        ));
        assert_eq!(KeyScript::parse_player("3"), Ok(PlayerIndex::FOUR));
        assert_eq!(
            KeyScript::parse_player("x"),
            Err(KeyScriptError::InvalidPlayer("x".to_string()))
        );
    }
}
