//! Drive state machine.
//!
//! Owns the drive mode, the selected gear and the duty cycle on the motor,
//! and applies operator commands to them:
//!
//! | Command       | Effect                                                  |
//! |---------------|---------------------------------------------------------|
//! | `SelectEco`   | mode = Eco, label on the top line                       |
//! | `SelectSport` | mode = Sport, label on the top line                     |
//! | `Stop`        | brake ramp to 0, gear back to 1                         |
//! | `Start`       | duty = gear-1 value in one write, no ramp in any mode   |
//! | `SetSpeed(n)` | continuity check, table lookup, mode ramp, then commit  |
//!
//! Rejected commands leave the state bit-for-bit unchanged.  Only the
//! polling loop calls in here; nothing is shared with the tick handler.

pub mod gear;
pub mod mode;
pub mod ramp;

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::app::commands::Command;
use crate::app::ports::{DisplayRow, DriveOutputs};
use crate::config::DriveConfig;
use crate::error::CommandError;

pub use gear::{GEAR_TABLE, SpeedLevel};
pub use mode::DriveMode;
use ramp::DutyRamp;

/// Column of the single-digit gear indicator on the bottom line.
const GEAR_COL: u8 = 15;
/// Clears the status field left of the gear indicator.
const STATUS_BLANK: &str = "         ";

/// Mode, gear and duty as last committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveState {
    pub mode: DriveMode,
    pub speed: SpeedLevel,
    /// Duty cycle on the motor output, percent.
    pub duty: u8,
}

impl DriveState {
    /// Power-on state: gear 1 with its table duty as the last known value.
    pub const fn initial(mode: DriveMode) -> Self {
        Self {
            mode,
            speed: SpeedLevel::BASELINE,
            duty: SpeedLevel::BASELINE.duty(),
        }
    }
}

impl Default for DriveState {
    fn default() -> Self {
        Self::initial(DriveMode::Eco)
    }
}

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    ModeSelected(DriveMode),
    Stopped,
    Started,
    Shifted {
        from: SpeedLevel,
        to: SpeedLevel,
        duty: u8,
    },
    Rejected(CommandError),
}

pub struct DriveController {
    state: DriveState,
    ramp: DutyRamp,
    bad_shift_hold_ms: u32,
}

impl DriveController {
    pub fn new(config: &DriveConfig) -> Self {
        Self {
            state: DriveState::initial(config.initial_mode),
            ramp: DutyRamp::from_config(config),
            bad_shift_hold_ms: config.bad_shift_hold_ms,
        }
    }

    pub fn state(&self) -> DriveState {
        self.state
    }

    /// Apply one command.  Blocks for the duration of any ramp or hold.
    pub fn handle_command(
        &mut self,
        cmd: Command,
        hw: &mut impl DriveOutputs,
        delay: &mut impl DelayNs,
    ) -> CommandOutcome {
        match cmd {
            Command::SelectEco => self.select_mode(DriveMode::Eco, hw),
            Command::SelectSport => self.select_mode(DriveMode::Sport, hw),
            Command::Stop => self.stop(hw, delay),
            Command::Start => self.start(hw),
            Command::SetSpeed(requested) => self.shift(requested, hw, delay),
        }
    }

    fn select_mode(&mut self, mode: DriveMode, hw: &mut impl DriveOutputs) -> CommandOutcome {
        self.state.mode = mode;
        hw.write(DisplayRow::Top, 0, mode.descriptor().label);
        info!("Drive mode: {}", mode.name());
        CommandOutcome::ModeSelected(mode)
    }

    fn stop(&mut self, hw: &mut impl DriveOutputs, delay: &mut impl DelayNs) -> CommandOutcome {
        hw.write(DisplayRow::Bottom, 0, "Stopping");
        info!("Braking from {}%", self.state.duty);

        self.state.duty = self.ramp.brake(self.state.duty, hw, delay);
        self.state.speed = SpeedLevel::BASELINE;

        hw.write(DisplayRow::Bottom, GEAR_COL, "0");
        hw.show(duty_readout(self.state.duty));
        CommandOutcome::Stopped
    }

    fn start(&mut self, hw: &mut impl DriveOutputs) -> CommandOutcome {
        let level = SpeedLevel::BASELINE;
        hw.write(DisplayRow::Bottom, 0, STATUS_BLANK);
        hw.set_duty(level.duty());

        self.state.speed = level;
        self.state.duty = level.duty();

        hw.write(DisplayRow::Bottom, GEAR_COL, level.label());
        hw.show(duty_readout(self.state.duty));
        info!("Engine start: gear {} at {}%", level, self.state.duty);
        CommandOutcome::Started
    }

    fn shift(
        &mut self,
        requested: u8,
        hw: &mut impl DriveOutputs,
        delay: &mut impl DelayNs,
    ) -> CommandOutcome {
        let from = self.state.speed;

        if !from.allows_shift_to(requested) {
            warn!("Bad shift: {} -> {}", from, requested);
            hw.write(DisplayRow::Bottom, 0, "Bad Shift");
            delay.delay_ms(self.bad_shift_hold_ms);
            return CommandOutcome::Rejected(CommandError::BadShift {
                from: from.get(),
                requested,
            });
        }

        let Some(to) = SpeedLevel::new(requested) else {
            warn!("Invalid entry {}", requested);
            return CommandOutcome::Rejected(CommandError::InvalidEntry(requested));
        };

        hw.write(DisplayRow::Bottom, 0, STATUS_BLANK);
        hw.write(DisplayRow::Bottom, GEAR_COL, to.label());

        let policy = self.state.mode.ramp_policy();
        let duty = self.ramp.ramp(self.state.duty, to.duty(), policy, hw, delay);

        self.state.speed = to;
        self.state.duty = duty;
        hw.show(duty_readout(duty));

        info!("Shift {} -> {} ({}%, {:?})", from, to, duty, policy);
        CommandOutcome::Shifted { from, to, duty }
    }
}

/// Duty as a BCD word so the hex digit display reads it in decimal.
fn duty_readout(duty: u8) -> u16 {
    let duty = u16::from(duty.min(99));
    ((duty / 10) << 4) | (duty % 10)
}
