//! Unified error types for the DragonDrive firmware.
//!
//! Two families live here:
//!
//! - [`Error`] / [`TimerError`]: boot-time failures (bad configuration,
//!   peripheral or timer setup).  These are fatal; `main` logs and halts.
//! - [`CommandError`]: operator mistakes at the keypad.  These never
//!   propagate; the drive controller reports them as a rejected outcome
//!   and the loop carries on.
//!
//! All variants are `Copy` so they can be passed through events and
//! outcomes without allocation.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible boot-time operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
    /// The periodic tick source could not be configured or started.
    Timer(TimerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Timer(e) => write!(f, "timer: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Tick source errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Prescaler selector has a zero rate field, which stops the timer.
    PrescalerDisabled,
    /// Reference clock frequency of 0 Hz.
    ZeroReferenceClock,
    /// Derived tick period does not fit the timer (0 µs or > u32::MAX µs).
    PeriodOutOfRange,
    /// A tick limit of zero would never fire maintenance.
    ZeroLimit,
    /// Timer creation returned an error code.
    CreateFailed(i32),
    /// Timer start returned an error code.
    StartFailed(i32),
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrescalerDisabled => write!(f, "prescaler selector disables the timer"),
            Self::ZeroReferenceClock => write!(f, "reference clock is 0 Hz"),
            Self::PeriodOutOfRange => write!(f, "tick period out of range"),
            Self::ZeroLimit => write!(f, "tick limit must be at least 1"),
            Self::CreateFailed(rc) => write!(f, "timer create failed (rc={rc})"),
            Self::StartFailed(rc) => write!(f, "timer start failed (rc={rc})"),
        }
    }
}

impl std::error::Error for TimerError {}

impl From<TimerError> for Error {
    fn from(e: TimerError) -> Self {
        Self::Timer(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Command rejections
// ---------------------------------------------------------------------------

/// Why a keypad command was refused.  State is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Requested gear is more than one level away from the current one.
    BadShift { from: u8, requested: u8 },
    /// Digit has no entry in the gear table.
    InvalidEntry(u8),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadShift { from, requested } => {
                write!(f, "bad shift {from} -> {requested}")
            }
            Self::InvalidEntry(digit) => write!(f, "invalid entry {digit}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
