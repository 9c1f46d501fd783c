//! Outbound application events.
//!
//! The [`DriveService`](super::service::DriveService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to serial, record in a test, etc.

use crate::drive::{CommandOutcome, DriveState};

use super::commands::{Command, Key};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum DriveEvent {
    /// The service has started (carries the power-on state).
    Started(DriveState),

    /// A key was mapped to a command and the controller ran it.
    CommandHandled {
        command: Command,
        outcome: CommandOutcome,
        state: DriveState,
    },

    /// A key arrived while the input gate was closed and was discarded.
    KeyDropped(Key),

    /// A key with no command bound (`*`, `#`).
    UnmappedKey(Key),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryData {
    pub state: DriveState,
    /// Ticks seen in the current cooldown window.
    pub tick_count: u16,
    pub maintenance_runs: u32,
    pub accepting_input: bool,
    pub commands_handled: u32,
    pub rejections: u32,
    pub keys_dropped: u32,
}
