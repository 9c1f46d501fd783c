//! 2×16 character display.
//!
//! Keeps a frame buffer of the two lines; writes overwrite in place and
//! are clipped at column 16.  Non-ASCII characters render as `?`.

use heapless::String;
use log::debug;

pub const COLS: usize = 16;
pub const ROWS: usize = 2;

pub struct CharDisplay {
    lines: [[u8; COLS]; ROWS],
}

impl Default for CharDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay {
    pub const fn new() -> Self {
        Self {
            lines: [[b' '; COLS]; ROWS],
        }
    }

    /// Overwrite `text` at (`row`, `col`).  Out-of-range rows are ignored.
    pub fn write_at(&mut self, row: usize, col: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        for (cell, ch) in line.iter_mut().skip(col).zip(text.chars()) {
            *cell = if ch.is_ascii() { ch as u8 } else { b'?' };
        }
        debug!("LCD[{}] |{}|", row, self.line(row));
    }

    pub fn line(&self, row: usize) -> String<COLS> {
        let mut out = String::new();
        if let Some(line) = self.lines.get(row) {
            for &b in line {
                // Capacity equals COLS, cannot overflow.
                let _ = out.push(char::from(b));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank() {
        let lcd = CharDisplay::new();
        assert_eq!(lcd.line(0).as_str(), "                ");
    }

    #[test]
    fn overwrite_keeps_the_tail() {
        let mut lcd = CharDisplay::new();
        lcd.write_at(1, 0, "Bad Shift");
        lcd.write_at(1, 15, "3");
        lcd.write_at(1, 0, "Stopping");
        assert_eq!(lcd.line(1).as_str(), "Stoppingt      3");
    }

    #[test]
    fn clipped_at_line_end() {
        let mut lcd = CharDisplay::new();
        lcd.write_at(0, 14, "Sport");
        assert_eq!(lcd.line(0).as_str(), "              Sp");
    }

    #[test]
    fn bad_row_ignored() {
        let mut lcd = CharDisplay::new();
        lcd.write_at(2, 0, "x");
        lcd.write_at(0, 20, "x");
        assert_eq!(lcd.line(0).as_str(), "                ");
    }
}
