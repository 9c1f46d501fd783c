//! Gear levels and the gear → duty-cycle table.

use core::fmt;

/// Duty cycle (percent of a 100-count PWM period) for gears 1..=5.
pub const GEAR_TABLE: [u8; 5] = [20, 25, 30, 40, 50];

const GEAR_LABELS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// A gear the operator can select.  Level 1 doubles as "stopped" when
/// checking shift continuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = GEAR_TABLE.len() as u8;

    /// Level 1, the engine-start and post-stop reference gear.
    pub const BASELINE: Self = Self(1);

    /// `None` for anything outside the gear table.
    pub const fn new(level: u8) -> Option<Self> {
        if level >= Self::MIN && level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn duty(self) -> u8 {
        GEAR_TABLE[(self.0 - 1) as usize]
    }

    /// Single-character label for the gear indicator.
    pub const fn label(self) -> &'static str {
        GEAR_LABELS[(self.0 - 1) as usize]
    }

    /// Shift continuity: at most one level up or down per command.
    pub const fn allows_shift_to(self, requested: u8) -> bool {
        self.0.abs_diff(requested) <= 1
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
