//! Drive modes and their static descriptor table.
//!
//! ```text
//! ┌───────┬────────┬──────────┬────────────┐
//! │ Mode  │ name   │ label    │ ramp       │
//! ├───────┼────────┼──────────┼────────────┤
//! │ Eco   │ "Eco"  │ "Eco  "  │ UnitStep   │
//! │ Sport │ "Sport"│ "Sport"  │ Snap       │
//! └───────┴────────┴──────────┴────────────┘
//! ```
//!
//! The label is padded to the widest name so that writing it over the
//! previous one leaves no stale characters on the display.

use serde::{Deserialize, Serialize};

use super::ramp::RampPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DriveMode {
    /// Gradual, rate-limited speed changes.
    Eco = 0,
    /// Instant speed changes.
    Sport = 1,
}

/// One row of the mode table.
pub struct ModeDescriptor {
    pub mode: DriveMode,
    pub name: &'static str,
    pub label: &'static str,
    pub ramp: RampPolicy,
}

/// Indexed by `DriveMode as usize`.
pub const MODE_TABLE: [ModeDescriptor; DriveMode::COUNT] = [
    ModeDescriptor {
        mode: DriveMode::Eco,
        name: "Eco",
        label: "Eco  ",
        ramp: RampPolicy::UnitStep,
    },
    ModeDescriptor {
        mode: DriveMode::Sport,
        name: "Sport",
        label: "Sport",
        ramp: RampPolicy::Snap,
    },
];

impl DriveMode {
    pub const COUNT: usize = 2;

    pub fn descriptor(self) -> &'static ModeDescriptor {
        &MODE_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn ramp_policy(self) -> RampPolicy {
        self.descriptor().ramp
    }
}
