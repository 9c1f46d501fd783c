//! Mock hardware adapter for integration tests.
//!
//! Records every output call in order so tests can assert on the full
//! history without touching real GPIO/PWM registers, and feeds scripted
//! keys to the service.

use std::collections::VecDeque;

use dragondrive::app::commands::Key;
use dragondrive::app::events::DriveEvent;
use dragondrive::app::ports::{DigitSink, DisplayRow, DisplaySink, EventSink, KeypadSource, PwmSink};
use embedded_hal::delay::DelayNs;

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    SetDuty(u8),
    Write { row: DisplayRow, col: u8, text: String },
    Show(u16),
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub calls: Vec<HwCall>,
    pub keys: VecDeque<Key>,
}

impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, c: char) {
        if let Some(key) = Key::from_char(c) {
            self.keys.push_back(key);
        }
    }

    pub fn duty_writes(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::SetDuty(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(DisplayRow, u8, &str)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::Write { row, col, text } => Some((*row, *col, text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn last_shown(&self) -> Option<u16> {
        self.calls.iter().rev().find_map(|c| match c {
            HwCall::Show(v) => Some(*v),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl PwmSink for MockHardware {
    fn set_duty(&mut self, duty: u8) {
        self.calls.push(HwCall::SetDuty(duty));
    }
}

impl DisplaySink for MockHardware {
    fn write(&mut self, row: DisplayRow, col: u8, text: &str) {
        self.calls.push(HwCall::Write {
            row,
            col,
            text: text.to_string(),
        });
    }
}

impl DigitSink for MockHardware {
    fn show(&mut self, value: u16) {
        self.calls.push(HwCall::Show(value));
    }
}

impl KeypadSource for MockHardware {
    fn poll(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }
}

// ── Delay ─────────────────────────────────────────────────────

/// Accumulates requested delays instead of sleeping.
#[derive(Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.delays_ms.iter().map(|&d| u64::from(d)).sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<DriveEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &DriveEvent) {
        self.events.push(event.clone());
    }
}
