//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DriveService (domain)
//! ```
//!
//! Driven adapters (motor PWM, character display, 7-segment digits,
//! keypad, event sinks) implement these traits.  The domain consumes them
//! via generics, so it never touches hardware directly.  Delays go through
//! [`embedded_hal::delay::DelayNs`] rather than a port of our own.
//!
//! All sinks are fire-and-forget: the hardware behind them is assumed to
//! accept every write.

use super::commands::Key;
use super::events::DriveEvent;

// ───────────────────────────────────────────────────────────────
// Motor output (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// PWM output driving the motor H-bridge.
pub trait PwmSink {
    /// Set duty in percent of the PWM period (0–100).
    fn set_duty(&mut self, duty: u8);
}

// ───────────────────────────────────────────────────────────────
// Operator feedback (driven adapters: domain → displays)
// ───────────────────────────────────────────────────────────────

/// Row of the two-line character display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow {
    /// Mode line.
    Top = 0,
    /// Status / gear line.
    Bottom = 1,
}

impl DisplayRow {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Two-line character display.
pub trait DisplaySink {
    /// Overwrite text starting at `col`; characters past the line end are dropped.
    fn write(&mut self, row: DisplayRow, col: u8, text: &str);
}

/// Four-digit 7-segment display.
pub trait DigitSink {
    /// Show `value` as four hex digits.
    fn show(&mut self, value: u16);
}

// ───────────────────────────────────────────────────────────────
// Operator input (driving adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

pub trait KeypadSource {
    /// One non-blocking scan.  `None` when no new key is down.
    fn poll(&mut self) -> Option<Key>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`DriveEvent`]s through this port.
/// Adapters decide where they go (serial log, test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &DriveEvent);
}

/// Everything the drive controller writes to.
pub trait DriveOutputs: PwmSink + DisplaySink + DigitSink {}

impl<T: PwmSink + DisplaySink + DigitSink> DriveOutputs for T {}
