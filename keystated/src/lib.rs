//! # Keyboard State Host
//!
//! A host runtime that replays Android key events through the keyboard stack
//! and reports the resulting snapshots.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The runtime returns reports, the binary prints them
//! - **Input is explicit events**: Scripts name Android key codes, not characters
//! - **Deterministic**: The same script always produces the same reports
//!
//! ## Responsibilities
//!
//! The host runtime:
//! - Wires `hal_android` → `QueuedKeyboard` → bridge → `SharedKeyboard`
//! - Queues scripted key events the way a platform callback would
//! - Drains the queue once per `tick`, like a game loop
//! - Renders snapshots as text or JSON lines

pub mod key_script;
pub mod runtime;

pub use key_script::{KeyScript, KeyScriptError, ScriptedAction};
pub use runtime::{
    HostRuntime, HostRuntimeConfig, HostRuntimeError, OutputFormat, ReportKind, TickReport,
};
