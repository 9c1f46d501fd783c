//! Duty ramp controller.
//!
//! Moves the PWM output from its current duty to a target either in one
//! write ([`RampPolicy::Snap`]) or one unit per settle interval
//! ([`RampPolicy::UnitStep`]).  Braking always uses unit steps, whatever
//! the drive mode.
//!
//! Step direction is re-derived from the sign of `target - current` on
//! every iteration and the loop ends on equality, so a ramp can never
//! overshoot.  Ramps block the polling loop and cannot be cancelled.

use embedded_hal::delay::DelayNs;

use crate::app::ports::PwmSink;
use crate::config::DriveConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampPolicy {
    /// Single write of the target.
    Snap,
    /// ±1 per settle interval until the target is reached.
    UnitStep,
}

/// Intermediate duty values from `current` (exclusive) to `target`
/// (inclusive), one unit apart.
#[derive(Debug, Clone)]
pub struct UnitSteps {
    current: u8,
    target: u8,
}

pub fn unit_steps(current: u8, target: u8) -> UnitSteps {
    UnitSteps { current, target }
}

impl Iterator for UnitSteps {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.current == self.target {
            return None;
        }
        if self.current < self.target {
            self.current += 1;
        } else {
            self.current -= 1;
        }
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.current.abs_diff(self.target));
        (n, Some(n))
    }
}

impl ExactSizeIterator for UnitSteps {}

pub struct DutyRamp {
    step_ms: u32,
    brake_step_ms: u32,
}

impl DutyRamp {
    pub fn new(step_ms: u32, brake_step_ms: u32) -> Self {
        Self {
            step_ms,
            brake_step_ms,
        }
    }

    pub fn from_config(config: &DriveConfig) -> Self {
        Self::new(config.eco_step_ms, config.brake_step_ms)
    }

    /// Drive `pwm` from `current` to `target` under `policy`.
    /// Returns the duty now on the output (always `target`).
    pub fn ramp(
        &self,
        current: u8,
        target: u8,
        policy: RampPolicy,
        pwm: &mut impl PwmSink,
        delay: &mut impl DelayNs,
    ) -> u8 {
        match policy {
            RampPolicy::Snap => pwm.set_duty(target),
            RampPolicy::UnitStep => {
                for duty in unit_steps(current, target) {
                    delay.delay_ms(self.step_ms);
                    pwm.set_duty(duty);
                }
            }
        }
        target
    }

    /// Unit-step down to zero, then force the output to exactly 0.
    pub fn brake(&self, current: u8, pwm: &mut impl PwmSink, delay: &mut impl DelayNs) -> u8 {
        for duty in unit_steps(current, 0) {
            delay.delay_ms(self.brake_step_ms);
            pwm.set_duty(duty);
        }
        pwm.set_duty(0);
        0
    }
}



#[cfg(test)]
mod proptests {
    use super::test_support::{RecordingDelay, RecordingPwm};
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unit_step_ramp_is_monotonic_without_overshoot(a in 0u8..=100, b in 0u8..=100) {
            let ramp = DutyRamp::new(1, 1);
            let mut pwm = RecordingPwm::default();
            let mut delay = RecordingDelay::default();

            let out = ramp.ramp(a, b, RampPolicy::UnitStep, &mut pwm, &mut delay);

            prop_assert_eq!(out, b);
            prop_assert_eq!(pwm.writes.len(), usize::from(a.abs_diff(b)));
            let mut prev = a;
            for &duty in &pwm.writes {
                prop_assert_eq!(duty.abs_diff(prev), 1);
                prop_assert!(duty.abs_diff(b) < prev.abs_diff(b));
                prev = duty;
            }
            prop_assert_eq!(prev, b);
        }

        #[test]
        fn brake_always_ends_at_zero(start in 0u8..=100) {
            let ramp = DutyRamp::new(1, 1);
            let mut pwm = RecordingPwm::default();
            let mut delay = RecordingDelay::default();

            ramp.brake(start, &mut pwm, &mut delay);

            prop_assert_eq!(pwm.writes.last().copied(), Some(0));
            prop_assert!(pwm.writes.windows(2).all(|w| w[1] <= w[0]));
            prop_assert_eq!(pwm.writes.len(), usize::from(start) + 1);
        }
    }
}
