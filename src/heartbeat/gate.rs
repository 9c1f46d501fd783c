//! Keypad input gate.
//!
//! Closed by the polling loop as soon as it accepts a key, re-opened only
//! by the maintenance step of the tick source.  While closed, keys read
//! from the keypad are dropped, not queued.

use core::sync::atomic::{AtomicBool, Ordering};

pub struct InputGate {
    open: AtomicBool,
}

impl Default for InputGate {
    fn default() -> Self {
        Self::new()
    }
}

impl InputGate {
    /// A gate that accepts input from power-on.
    pub const fn new() -> Self {
        Self {
            open: AtomicBool::new(true),
        }
    }

    /// Allow key reads again.  The maintenance action; ISR-safe.
    pub fn enable(&self) {
        self.open.store(true, Ordering::Release);
    }

    /// Block key reads until the next maintenance run.
    pub fn disable(&self) {
        self.open.store(false, Ordering::Release);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}
