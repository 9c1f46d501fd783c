//! DragonDrive firmware library.
//!
//! Keypad-driven DC motor controller: a periodic tick gates operator input,
//! a small state machine validates gear shifts, and a duty ramp moves the
//! motor PWM under the selected drive mode.
//!
//! Exposes the pure-logic modules for integration testing.  All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod drive;
pub mod error;
pub mod heartbeat;

pub mod adapters;
pub mod drivers;

pub mod pins;
