//! System configuration parameters
//!
//! All tunable parameters for the drive controller.  Applied once at boot;
//! there is no runtime reconfiguration and nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::drive::DriveMode;
use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveConfig {
    // --- Tick source ---
    /// RTI-style prescaler selector: low nibble = N, bits 4..6 = M.
    pub tick_selector: u8,
    /// Reference clock the prescaler divides (Hz).
    pub tick_ref_clock_hz: u32,
    /// Ticks per maintenance interval (input cooldown window).
    pub tick_limit: u16,

    // --- Ramp timing ---
    /// Settle delay between unit steps of an Eco-mode ramp (milliseconds)
    pub eco_step_ms: u32,
    /// Settle delay between unit steps of the brake ramp (milliseconds)
    pub brake_step_ms: u32,
    /// How long "Bad Shift" is held before polling resumes (milliseconds)
    pub bad_shift_hold_ms: u32,

    // --- Main loop ---
    /// Idle delay between keypad polls (milliseconds)
    pub poll_interval_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,

    /// Drive mode at power-on.
    pub initial_mode: DriveMode,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            // 0x7A @ 8 MHz -> 90.112 ms per tick, ~630 ms cooldown
            tick_selector: 0x7A,
            tick_ref_clock_hz: 8_000_000,
            tick_limit: 7,

            eco_step_ms: 50,
            brake_step_ms: 10,
            bad_shift_hold_ms: 1500,

            poll_interval_ms: 5,
            telemetry_interval_secs: 60,

            initial_mode: DriveMode::Eco,
        }
    }
}

impl DriveConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.tick_limit == 0 {
            return Err(Error::Config("tick_limit must be at least 1"));
        }
        if self.tick_ref_clock_hz == 0 {
            return Err(Error::Config("tick_ref_clock_hz must be non-zero"));
        }
        if (self.tick_selector >> 4) & 0x07 == 0 {
            return Err(Error::Config("tick_selector disables the timer"));
        }
        if self.eco_step_ms >= self.bad_shift_hold_ms {
            return Err(Error::Config(
                "eco_step_ms must be shorter than bad_shift_hold_ms",
            ));
        }
        if self.telemetry_interval_secs == 0 {
            return Err(Error::Config("telemetry_interval_secs must be non-zero"));
        }
        Ok(())
    }

    /// Parse a JSON config string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed config JSON"))?;
        config.validate()?;
        Ok(config)
    }
}
