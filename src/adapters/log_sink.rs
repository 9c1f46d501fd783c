//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{debug, info, warn};

use crate::app::events::DriveEvent;
use crate::app::ports::EventSink;
use crate::drive::CommandOutcome;

/// Adapter that logs every [`DriveEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DriveEvent) {
        match event {
            DriveEvent::Telemetry(t) => {
                info!(
                    "TELEM | mode={} gear={} duty={}% | ticks={} maint={} gate={} | \
                     cmds={} rejected={} dropped={}",
                    t.state.mode.name(),
                    t.state.speed,
                    t.state.duty,
                    t.tick_count,
                    t.maintenance_runs,
                    if t.accepting_input { "open" } else { "closed" },
                    t.commands_handled,
                    t.rejections,
                    t.keys_dropped,
                );
            }
            DriveEvent::CommandHandled {
                command,
                outcome,
                state,
            } => match outcome {
                CommandOutcome::Shifted { from, to, duty } => {
                    let mode = state.mode.name();
                    info!("SHIFT | {} -> {} | duty={}% | mode={}", from, to, duty, mode);
                }
                CommandOutcome::Rejected(err) => {
                    warn!("REJECT | {:?} | {}", command, err);
                }
                CommandOutcome::ModeSelected(mode) => {
                    info!("MODE | {}", mode.name());
                }
                CommandOutcome::Stopped => info!("STOP | duty=0%"),
                CommandOutcome::Started => {
                    info!("START | gear={} duty={}%", state.speed, state.duty);
                }
            },
            DriveEvent::KeyDropped(key) => {
                debug!("DROP | key='{}' (cooldown)", key.as_char());
            }
            DriveEvent::UnmappedKey(key) => {
                info!("KEY | '{}' unmapped", key.as_char());
            }
            DriveEvent::Started(state) => {
                info!(
                    "BOOT | mode={} gear={} duty={}%",
                    state.mode.name(),
                    state.speed,
                    state.duty
                );
            }
        }
    }
}
