//! Hardware adapter, bridging real peripherals to domain port traits.
//!
//! Owns the motor, keypad and both displays, exposing them through
//! [`PwmSink`], [`KeypadSource`], [`DisplaySink`] and [`DigitSink`].  This
//! is the only module in the system that touches actual hardware.  On
//! non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::commands::Key;
use crate::app::ports::{DigitSink, DisplayRow, DisplaySink, KeypadSource, PwmSink};
use crate::drivers::keypad::KeypadDriver;
use crate::drivers::lcd::CharDisplay;
use crate::drivers::motor::MotorDriver;
use crate::drivers::segment::{Frame, SegmentDisplay};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    motor: MotorDriver,
    keypad: KeypadDriver,
    lcd: CharDisplay,
    digits: SegmentDisplay,
}

impl HardwareAdapter {
    pub fn new(
        motor: MotorDriver,
        keypad: KeypadDriver,
        lcd: CharDisplay,
        digits: SegmentDisplay,
    ) -> Self {
        Self {
            motor,
            keypad,
            lcd,
            digits,
        }
    }

    /// Advance the 7-segment multiplexer by one digit.
    pub fn refresh_digits(&mut self) -> Frame {
        self.digits.refresh()
    }

    pub fn motor(&self) -> &MotorDriver {
        &self.motor
    }

    pub fn lcd(&self) -> &CharDisplay {
        &self.lcd
    }
}

// ── Motor ─────────────────────────────────────────────────────

impl PwmSink for HardwareAdapter {
    fn set_duty(&mut self, duty: u8) {
        self.motor.set_duty(duty);
    }
}

// ── Displays ──────────────────────────────────────────────────

impl DisplaySink for HardwareAdapter {
    fn write(&mut self, row: DisplayRow, col: u8, text: &str) {
        self.lcd.write_at(row.index(), usize::from(col), text);
    }
}

impl DigitSink for HardwareAdapter {
    fn show(&mut self, value: u16) {
        self.digits.set_value(value);
    }
}

// ── Keypad ────────────────────────────────────────────────────

impl KeypadSource for HardwareAdapter {
    fn poll(&mut self) -> Option<Key> {
        self.keypad.poll()
    }
}
