//! Interrupt-shared heartbeat: tick source + input gate.
//!
//! ```text
//!  hw timer ──▶ Heartbeat::on_tick ──(limit reached)──▶ InputGate::enable
//!                     ▲
//!  polling loop ──────┘ begin_cooldown / accepting_input
//! ```
//!
//! This is the only state touched by both the timer callback and the
//! polling loop.  Every field is an atomic, so the struct can sit in a
//! `static` and be handed to the timer as a `&'static` pointer.  Nothing
//! in here blocks.

pub mod gate;
pub mod tick;

use core::sync::atomic::{AtomicU32, Ordering};

use crate::error::Result;
use gate::InputGate;
use tick::TickSource;

pub struct Heartbeat {
    ticks: TickSource,
    gate: InputGate,
    /// Maintenance runs since boot (wraps).
    maintenance_runs: AtomicU32,
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new()
    }
}

impl Heartbeat {
    pub const fn new() -> Self {
        Self {
            ticks: TickSource::new(),
            gate: InputGate::new(),
            maintenance_runs: AtomicU32::new(0),
        }
    }

    /// Arm the tick source with its maintenance limit.  Boot-time only.
    pub fn configure(&self, tick_limit: u16) -> Result<()> {
        self.ticks.arm(tick_limit)?;
        Ok(())
    }

    /// Timer callback body.  The timer hardware is re-armed by its driver
    /// before this runs; only the counter and the gate are touched here.
    pub fn on_tick(&self) {
        if self.ticks.on_tick() {
            self.run_maintenance();
        }
    }

    /// Close the gate and start a fresh cooldown window.  Main loop only.
    ///
    /// The window restarts before the gate closes: a tick landing between
    /// the two cannot reopen the gate early.
    pub fn begin_cooldown(&self) {
        self.ticks.restart_window();
        self.gate.disable();
    }

    pub fn accepting_input(&self) -> bool {
        self.gate.is_open()
    }

    pub fn tick_count(&self) -> u16 {
        self.ticks.count()
    }

    pub fn tick_limit(&self) -> u16 {
        self.ticks.limit()
    }

    pub fn maintenance_runs(&self) -> u32 {
        self.maintenance_runs.load(Ordering::Relaxed)
    }

    fn run_maintenance(&self) {
        self.gate.enable();
        self.maintenance_runs.fetch_add(1, Ordering::Relaxed);
    }
}
