//! DC motor driver (dual H-bridge, one channel).
//!
//! Speed via LEDC PWM on the bridge enable pin, direction via the two
//! bridge inputs.  The drive only turns forward: leaving standstill latches
//! IN1 high / IN2 low, and returning to 0% parks both inputs low so the
//! bridge coasts.
//!
//! On ESP-IDF: drives real PWM and GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    Stopped,
    Running { duty: u8 },
}

pub struct MotorDriver {
    state: MotorState,
}

impl Default for MotorDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorDriver {
    pub fn new() -> Self {
        Self {
            state: MotorState::Stopped,
        }
    }

    /// Duty in percent, clamped to 100.  0 stops and parks the bridge.
    pub fn set_duty(&mut self, duty: u8) {
        let duty = duty.min(100);
        match (self.state, duty) {
            (MotorState::Stopped, d) if d > 0 => set_bridge_hw(true),
            (MotorState::Running { .. }, 0) => set_bridge_hw(false),
            _ => {}
        }
        set_duty_hw(duty);
        self.state = if duty == 0 {
            MotorState::Stopped
        } else {
            MotorState::Running { duty }
        };
    }

    pub fn state(&self) -> MotorState {
        self.state
    }

    pub fn current_duty(&self) -> u8 {
        match self.state {
            MotorState::Stopped => 0,
            MotorState::Running { duty } => duty,
        }
    }
}

/// `true` engages forward, `false` parks both bridge inputs low.
fn set_bridge_hw(forward: bool) {
    hw_init::gpio_write(pins::MOTOR_IN1_GPIO, forward);
    hw_init::gpio_write(pins::MOTOR_IN2_GPIO, false);
}

fn set_duty_hw(duty: u8) {
    hw_init::ledc_set(hw_init::LEDC_CH_MOTOR, percent_to_8bit(duty));
}

/// Scale a 0–100 duty to the 8-bit LEDC range.
pub fn percent_to_8bit(duty: u8) -> u8 {
    ((u16::from(duty.min(100)) * 255) / 100) as u8
}
