//! Periodic tick source.
//!
//! The hardware timer calls [`TickSource::on_tick`] once per period.  The
//! counter climbs to the configured limit, at which point maintenance is
//! due and the counter restarts from zero.  Increment and restart are one
//! atomic read-modify-write, so the polling loop can never observe a torn
//! value that would drop or duplicate a maintenance trigger.
//!
//! ## Prescaler selector
//!
//! The tick period is expressed the way an HCS12-style RTI peripheral takes
//! it: one selector byte, `0b0MMM_NNNN`, dividing a reference clock by
//! `(N + 1) * 2^(M + 9)`.  `M == 0` switches the timer off.
//!
//! | Selector | @ 8 MHz     |
//! |----------|-------------|
//! | `0x11`   | 256 µs      |
//! | `0x63`   | 16.384 ms   |
//! | `0x7A`   | 90.112 ms   |
//! | `0x7F`   | 131.072 ms  |

use core::sync::atomic::{AtomicU16, Ordering};
use core::time::Duration;

use crate::error::TimerError;

/// Exponent offset of the prescaler divider.
const DIVIDER_BASE_SHIFT: u32 = 9;

/// Period of one hardware tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate {
    period_us: u32,
}

impl TickRate {
    /// Decode an RTI-style prescaler selector against `ref_clock_hz`.
    pub fn from_selector(selector: u8, ref_clock_hz: u32) -> Result<Self, TimerError> {
        if ref_clock_hz == 0 {
            return Err(TimerError::ZeroReferenceClock);
        }
        let n = u64::from(selector & 0x0F);
        let m = u32::from((selector >> 4) & 0x07);
        if m == 0 {
            return Err(TimerError::PrescalerDisabled);
        }

        let divider = (n + 1) << (m + DIVIDER_BASE_SHIFT);
        let period_us = divider * 1_000_000 / u64::from(ref_clock_hz);
        match u32::try_from(period_us) {
            Ok(0) | Err(_) => Err(TimerError::PeriodOutOfRange),
            Ok(period_us) => Ok(Self { period_us }),
        }
    }

    /// A rate given directly in microseconds (simulation and tests).
    pub const fn from_period_us(period_us: u32) -> Self {
        Self { period_us }
    }

    pub fn period_us(&self) -> u32 {
        self.period_us
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_micros(u64::from(self.period_us))
    }
}

/// Tick counter shared between the timer callback and the polling loop.
///
/// A limit of zero means "not armed": ticks are ignored until
/// [`arm`](Self::arm) succeeds.
pub struct TickSource {
    counter: AtomicU16,
    limit: AtomicU16,
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource {
    pub const fn new() -> Self {
        Self {
            counter: AtomicU16::new(0),
            limit: AtomicU16::new(0),
        }
    }

    /// Set the maintenance limit and clear the counter.
    pub fn arm(&self, limit: u16) -> Result<(), TimerError> {
        if limit == 0 {
            return Err(TimerError::ZeroLimit);
        }
        self.counter.store(0, Ordering::Release);
        self.limit.store(limit, Ordering::Release);
        Ok(())
    }

    /// Count one hardware tick.  Returns `true` when maintenance is due.
    ///
    /// Interrupt-safe: lock-free, never blocks.
    pub fn on_tick(&self) -> bool {
        let limit = self.limit.load(Ordering::Acquire);
        if limit == 0 {
            return false;
        }

        let step = |count: u16| {
            let next = count.saturating_add(1);
            Some(if next >= limit { 0 } else { next })
        };
        // The closure never declines, so both arms carry the prior value.
        let (Ok(prev) | Err(prev)) =
            self.counter
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, step);

        prev.saturating_add(1) >= limit
    }

    /// Start a fresh window.  Called from the polling loop only.
    pub fn restart_window(&self) {
        self.counter.store(0, Ordering::Release);
    }

    pub fn count(&self) -> u16 {
        self.counter.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> u16 {
        self.limit.load(Ordering::Acquire)
    }
}
