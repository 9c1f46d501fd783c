//! Application core: pure domain orchestration, zero I/O.
//!
//! This module wires keypad input, the input gate and the drive
//! controller into one polling-loop step.  All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
