//! # Host Runtime
//!
//! Replays a key script through the keyboard stack.

use crate::key_script::{KeyScript, KeyScriptError, ScriptedAction};
use hal::QueuedKeyboard;
use hal_android::{AndroidKeyTranslator, AndroidKeycode};
use key_types::{KeyboardState, PlayerIndex};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use services_keyboard::{KeyboardError, SharedKeyboard};
use services_keyboard_hal_bridge::{BridgeError, DrainSummary, KeyboardHalBridge};
use std::fmt;
use thiserror::Error;

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error: {0}")]
    ScriptError(#[from] KeyScriptError),

    #[error("Bridge error: {0}")]
    BridgeError(#[from] BridgeError),

    #[error("Keyboard error: {0}")]
    KeyboardError(#[from] KeyboardError),

    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),

    #[error("No script provided")]
    MissingScript,
}

/// Report rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per report
    Text,
    /// One JSON object per report
    Json,
}

/// Host runtime configuration
#[derive(Debug, Clone)]
pub struct HostRuntimeConfig {
    /// Key script text
    pub script: Option<String>,
    /// Report rendering format
    pub format: OutputFormat,
    /// Player index used by `snapshot` lines that do not name one
    pub player: Option<PlayerIndex>,
}

impl Default for HostRuntimeConfig {
    fn default() -> Self {
        Self {
            script: None,
            format: OutputFormat::Text,
            player: None,
        }
    }
}

/// What produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Tick,
    Snapshot,
}

/// One reported keyboard snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub kind: ReportKind,
    /// Ticks completed when the report was taken
    pub tick: u64,
    /// Recognized events applied by this report's drain
    pub handled: u64,
    /// Unmapped events dropped by this report's drain
    pub ignored: u64,
    /// Player index the snapshot was requested for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerIndex>,
    pub state: KeyboardState,
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ReportKind::Tick => write!(
                f,
                "tick {}: {} (handled {}, ignored {})",
                self.tick, self.state, self.handled, self.ignored
            ),
            ReportKind::Snapshot => match self.player {
                Some(player) => write!(f, "snapshot[player {}]: {}", player.raw(), self.state),
                None => write!(f, "snapshot: {}", self.state),
            },
        }
    }
}

type AndroidBridge = KeyboardHalBridge<AndroidKeyTranslator, QueuedKeyboard<AndroidKeycode>>;

/// Host runtime
pub struct HostRuntime {
    /// Configuration
    config: HostRuntimeConfig,
    /// Parsed key script
    script: KeyScript,
    /// Game-loop side of the keyboard state
    keyboard: SharedKeyboard<AndroidKeyTranslator>,
    /// Platform side: queue plus bridge into `keyboard`
    bridge: AndroidBridge,
    /// Completed ticks
    ticks: u64,
}

impl HostRuntime {
    /// Creates a new host runtime
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        let script_text = config
            .script
            .as_deref()
            .ok_or(HostRuntimeError::MissingScript)?;
        let script = KeyScript::from_text(script_text)?;

        let keyboard = SharedKeyboard::with_translator(AndroidKeyTranslator::new());
        let bridge = KeyboardHalBridge::new(keyboard.clone(), QueuedKeyboard::new());

        Ok(Self {
            config,
            script,
            keyboard,
            bridge,
            ticks: 0,
        })
    }

    /// Runs the script to completion
    ///
    /// Events still queued when the script ends are drained in a final tick.
    /// The keyboard is reset before returning.
    pub fn run(&mut self) -> Result<Vec<TickReport>, HostRuntimeError> {
        info!("Replaying key script ({} actions)", self.script.remaining());
        let mut reports = Vec::new();

        while let Some(action) = self.script.next_action() {
            if let Some(report) = self.step(action)? {
                reports.push(report);
            }
        }

        if !self.bridge.device_mut().is_empty() {
            debug!("Script ended with queued events, running final tick");
            reports.push(self.tick()?);
        }

        self.keyboard.reset()?;
        info!("Key script finished after {} ticks", self.ticks);
        Ok(reports)
    }

    /// Applies one scripted action
    pub fn step(&mut self, action: ScriptedAction) -> Result<Option<TickReport>, HostRuntimeError> {
        match action {
            ScriptedAction::Down(code) => {
                self.bridge.device_mut().push_down(code);
                Ok(None)
            }
            ScriptedAction::Up(code) => {
                self.bridge.device_mut().push_up(code);
                Ok(None)
            }
            ScriptedAction::Tick => self.tick().map(Some),
            ScriptedAction::Snapshot(player) => {
                let player = player.or(self.config.player);
                let state = match player {
                    Some(player) => self.keyboard.snapshot_for(player)?,
                    None => self.keyboard.snapshot()?,
                };
                Ok(Some(TickReport {
                    kind: ReportKind::Snapshot,
                    tick: self.ticks,
                    handled: 0,
                    ignored: 0,
                    player,
                    state,
                }))
            }
        }
    }

    fn tick(&mut self) -> Result<TickReport, HostRuntimeError> {
        let DrainSummary { handled, ignored } = self.bridge.drain()?;
        self.ticks += 1;
        Ok(TickReport {
            kind: ReportKind::Tick,
            tick: self.ticks,
            handled,
            ignored,
            player: None,
            state: self.keyboard.snapshot()?,
        })
    }

    /// Renders a report in the configured format
    pub fn render(&self, report: &TickReport) -> Result<String, HostRuntimeError> {
        match self.config.format {
            OutputFormat::Text => Ok(report.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
        }
    }

    /// Returns the number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use key_types::Key;

    fn runtime(script: &str) -> HostRuntime {
        HostRuntime::new(HostRuntimeConfig {
            script: Some(script.to_string()),
            ..HostRuntimeConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_missing_script() {
        let result = HostRuntime::new(HostRuntimeConfig::default());
        assert!(matches!(result, Err(HostRuntimeError::MissingScript)));
    }

    #[test]
    fn test_invalid_script() {
        let config = HostRuntimeConfig {
            script: Some("down NOPE".to_string()),
            ..HostRuntimeConfig::default()
        };
        assert!(matches!(
            HostRuntime::new(config),
            Err(HostRuntimeError::ScriptError(_))
        ));
    }

    #[test]
    fn test_press_shift_release_scenario() {
        let mut runtime = runtime(
            "down A\ntick\ndown SHIFT_LEFT\ntick\nup A\ntick\ndown 9999\ntick\n",
        );
        let reports = runtime.run().unwrap();

        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].state, KeyboardState::new([Key::A]));
        assert_eq!(
            reports[1].state,
            KeyboardState::new([Key::A, Key::LeftShift])
        );
        assert_eq!(reports[2].state, KeyboardState::new([Key::LeftShift]));
        assert_eq!(reports[3].state, KeyboardState::new([Key::LeftShift]));
        assert_eq!((reports[3].handled, reports[3].ignored), (0, 1));
        assert_eq!(runtime.ticks(), 4);
    }

    #[test]
    fn test_events_wait_for_tick() {
        let mut runtime = runtime("down A\nsnapshot\ntick\nsnapshot");
        let reports = runtime.run().unwrap();

        assert_eq!(reports[0].kind, ReportKind::Snapshot);
        assert!(reports[0].state.is_empty());
        assert_eq!(reports[1].kind, ReportKind::Tick);
        assert_eq!(reports[1].handled, 1);
        assert!(reports[2].state.is_key_down(Key::A));
    }

    #[test]
    fn test_final_tick_drains_remaining() {
        let mut runtime = runtime("down DPAD_LEFT\ndown DPAD_UP");
        let reports = runtime.run().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ReportKind::Tick);
        assert_eq!(reports[0].state.pressed_keys(), &[Key::Left, Key::Up]);
    }

    #[test]
    fn test_snapshot_player_is_inert() {
        let mut runtime = runtime("down CTRL_LEFT\ntick\nsnapshot\nsnapshot 0\nsnapshot 250");
        let reports = runtime.run().unwrap();

        assert_eq!(reports[2].player, Some(PlayerIndex::ONE));
        assert_eq!(reports[3].player, Some(PlayerIndex(250)));
        assert_eq!(reports[1].state, reports[2].state);
        assert_eq!(reports[1].state, reports[3].state);
    }

    #[test]
    fn test_default_player_from_config() {
        let mut runtime = HostRuntime::new(HostRuntimeConfig {
            script: Some("snapshot\nsnapshot 1".to_string()),
            format: OutputFormat::Text,
            player: Some(PlayerIndex::THREE),
        })
        .unwrap();
        let reports = runtime.run().unwrap();

        assert_eq!(reports[0].player, Some(PlayerIndex::THREE));
        assert_eq!(reports[1].player, Some(PlayerIndex::TWO));
    }

    #[test]
    fn test_render_text() {
        let mut runtime = runtime("down A\ndown SHIFT_LEFT\ntick\nsnapshot 2");
        let reports = runtime.run().unwrap();

        assert_eq!(
            runtime.render(&reports[0]).unwrap(),
            "tick 1: A LeftShift (handled 2, ignored 0)"
        );
        assert_eq!(
            runtime.render(&reports[1]).unwrap(),
            "snapshot[player 2]: A LeftShift"
        );
    }

    #[test]
    fn test_render_json() {
        let mut runtime = HostRuntime::new(HostRuntimeConfig {
            script: Some("tap A\ntick".to_string()),
            format: OutputFormat::Json,
            player: None,
        })
        .unwrap();
        let reports = runtime.run().unwrap();
        let line = runtime.render(&reports[0]).unwrap();

        assert_eq!(
            line,
            r#"{"kind":"tick","tick":1,"handled":2,"ignored":0,"state":{"keys":[]}}"#
        );
        let parsed: TickReport = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, reports[0]);
    }
}
