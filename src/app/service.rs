//! Application service, the hexagonal core.
//!
//! [`DriveService`] owns the drive controller and the command statistics.
//! Each call to [`DriveService::poll_once`] is one pass of the polling
//! loop: scan the keypad, consult the input gate, map the key to a
//! command and run it.  All I/O flows through port traits injected at
//! call sites.
//!
//! ```text
//!  KeypadSource ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                   │       DriveService        │
//!  DriveOutputs ◀───│ gate · mapping · control  │
//!                   └──────────────────────────┘
//!                                ▲
//!                   Heartbeat (tick-side atomics)
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::config::DriveConfig;
use crate::drive::{CommandOutcome, DriveController, DriveState};
use crate::heartbeat::Heartbeat;

use super::commands::Command;
use super::events::{DriveEvent, TelemetryData};
use super::ports::{DisplayRow, DriveOutputs, EventSink, KeypadSource};

pub struct DriveService {
    controller: DriveController,
    commands_handled: u32,
    rejections: u32,
    keys_dropped: u32,
}

impl DriveService {
    pub fn new(config: &DriveConfig) -> Self {
        Self {
            controller: DriveController::new(config),
            commands_handled: 0,
            rejections: 0,
            keys_dropped: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Paint the mode label and announce the power-on state.
    pub fn start(&mut self, hw: &mut impl DriveOutputs, sink: &mut impl EventSink) {
        let state = self.controller.state();
        hw.write(DisplayRow::Top, 0, state.mode.descriptor().label);
        sink.emit(&DriveEvent::Started(state));
        info!("DriveService started: {:?}", state);
    }

    // ── Per-poll orchestration ────────────────────────────────

    /// One pass of the polling loop.
    ///
    /// A key read while the gate is closed is discarded.  An accepted key
    /// closes the gate and restarts the cooldown window before the command
    /// runs, so the tick handler reopens it no earlier than `tick_limit`
    /// ticks later.  Returns the outcome when a command ran.
    pub fn poll_once(
        &mut self,
        heartbeat: &Heartbeat,
        hw: &mut (impl KeypadSource + DriveOutputs),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Option<CommandOutcome> {
        let key = hw.poll()?;

        if !heartbeat.accepting_input() {
            self.keys_dropped = self.keys_dropped.saturating_add(1);
            debug!("Key '{}' dropped (cooldown)", key.as_char());
            sink.emit(&DriveEvent::KeyDropped(key));
            return None;
        }

        heartbeat.begin_cooldown();

        let Some(command) = Command::from_key(key) else {
            warn!("Key '{}' has no command", key.as_char());
            sink.emit(&DriveEvent::UnmappedKey(key));
            return None;
        };

        let outcome = self.handle_command(command, hw, delay);
        sink.emit(&DriveEvent::CommandHandled {
            command,
            outcome,
            state: self.controller.state(),
        });
        Some(outcome)
    }

    // ── Command handling ──────────────────────────────────────

    /// Run a command directly, bypassing keypad and gate.
    pub fn handle_command(
        &mut self,
        command: Command,
        hw: &mut impl DriveOutputs,
        delay: &mut impl DelayNs,
    ) -> CommandOutcome {
        let outcome = self.controller.handle_command(command, hw, delay);
        self.commands_handled = self.commands_handled.saturating_add(1);
        if matches!(outcome, CommandOutcome::Rejected(_)) {
            self.rejections = self.rejections.saturating_add(1);
        }
        outcome
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn build_telemetry(&self, heartbeat: &Heartbeat) -> TelemetryData {
        TelemetryData {
            state: self.controller.state(),
            tick_count: heartbeat.tick_count(),
            maintenance_runs: heartbeat.maintenance_runs(),
            accepting_input: heartbeat.accepting_input(),
            commands_handled: self.commands_handled,
            rejections: self.rejections,
            keys_dropped: self.keys_dropped,
        }
    }

    pub fn state(&self) -> DriveState {
        self.controller.state()
    }

    pub fn commands_handled(&self) -> u32 {
        self.commands_handled
    }

    pub fn rejections(&self) -> u32 {
        self.rejections
    }

    pub fn keys_dropped(&self) -> u32 {
        self.keys_dropped
    }
}
