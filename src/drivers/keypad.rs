//! 4×4 matrix keypad.
//!
//! Rows are driven low one at a time; a low column input means the key at
//! that crossing is down.  [`KeypadDriver::poll`] reports a key once, on
//! the scan where it first appears, and stays quiet until every key has
//! been released.

use crate::app::commands::Key;
use crate::drivers::hw_init;
use crate::pins;

/// Key legends, row-major.
pub const LAYOUT: [[char; 4]; 4] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// First pressed key in a scan, row-major.  `cols_low[row]` is a 4-bit
/// mask of column inputs reading low while that row was driven.
pub fn decode(cols_low: [u8; 4]) -> Option<Key> {
    cols_low.iter().enumerate().find_map(|(row, &mask)| {
        (0..4)
            .find(|&col| mask & (1 << col) != 0)
            .and_then(|col| Key::from_char(LAYOUT[row][col]))
    })
}

pub struct KeypadDriver {
    held: Option<Key>,
}

impl Default for KeypadDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadDriver {
    pub const fn new() -> Self {
        Self { held: None }
    }

    /// One full matrix scan.  `Some` only on a press edge.
    pub fn poll(&mut self) -> Option<Key> {
        self.on_scan(scan_hw())
    }

    /// Edge detection over a decoded scan.
    pub fn on_scan(&mut self, down: Option<Key>) -> Option<Key> {
        let edge = match (self.held, down) {
            (None, Some(key)) => Some(key),
            _ => None,
        };
        self.held = down;
        edge
    }
}

fn scan_hw() -> Option<Key> {
    let mut cols_low = [0u8; 4];
    for (row, &row_pin) in pins::KEYPAD_ROW_GPIOS.iter().enumerate() {
        hw_init::gpio_write(row_pin, false);
        for (col, &col_pin) in pins::KEYPAD_COL_GPIOS.iter().enumerate() {
            if !hw_init::gpio_read(col_pin) {
                cols_low[row] |= 1 << col;
            }
        }
        hw_init::gpio_write(row_pin, true);
    }
    decode(cols_low)
}
