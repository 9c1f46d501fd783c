//! Four-digit multiplexed 7-segment display.
//!
//! One digit is lit per [`SegmentDisplay::refresh`]; the polling loop calls
//! it every pass so persistence of vision does the rest.  Digit select is
//! active-low, the lowest nibble goes on the rightmost digit.

use crate::drivers::hw_init;
use crate::pins;

/// Segment patterns (bit 0 = a … bit 6 = g) for 0–F, then G and H.
pub const SEGMENT_DECODER: [u8; 18] = [
    0x3f, 0x06, 0x5b, 0x4f, 0x66, 0x6d, 0x7d, 0x07, 0x7f, 0x6f, // 0-9
    0x77, 0x7c, 0x39, 0x5e, 0x79, 0x71, // A-F
    0x3d, 0x76, // G, H
];

pub const DIGITS: usize = 4;

/// Select + segment pattern for one multiplex step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Low nibble, active-low: exactly one bit clear.
    pub select: u8,
    pub segments: u8,
}

pub struct SegmentDisplay {
    value: u16,
    next: usize,
}

impl Default for SegmentDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentDisplay {
    pub const fn new() -> Self {
        Self { value: 0, next: 0 }
    }

    pub fn set_value(&mut self, value: u16) {
        self.value = value;
    }

    /// Frame for digit `i` (0 = rightmost).
    pub fn frame(&self, i: usize) -> Frame {
        let i = i % DIGITS;
        let nibble = usize::from((self.value >> (4 * i)) & 0xF);
        Frame {
            select: !(1u8 << (DIGITS - 1 - i)) & 0x0F,
            segments: SEGMENT_DECODER[nibble],
        }
    }

    /// Light the next digit and return what was driven.
    pub fn refresh(&mut self) -> Frame {
        let frame = self.frame(self.next);
        self.next = (self.next + 1) % DIGITS;
        drive_hw(frame);
        frame
    }
}

fn drive_hw(frame: Frame) {
    // Blank first so the old pattern never ghosts on the new digit.
    for &pin in &pins::DIGIT_SELECT_GPIOS {
        hw_init::gpio_write(pin, true);
    }
    for (bit, &pin) in pins::SEGMENT_GPIOS.iter().enumerate() {
        hw_init::gpio_write(pin, frame.segments & (1 << bit) != 0);
    }
    for (i, &pin) in pins::DIGIT_SELECT_GPIOS.iter().enumerate() {
        hw_init::gpio_write(pin, frame.select & (1 << (DIGITS - 1 - i)) != 0);
    }
}
