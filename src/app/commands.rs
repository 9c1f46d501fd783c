//! Keypad keys and the drive commands they map to.
//!
//! ```text
//!  ┌───┬───┬───┬───┐
//!  │ 1 │ 2 │ 3 │ A │   A  Eco mode
//!  ├───┼───┼───┼───┤   B  Sport mode
//!  │ 4 │ 5 │ 6 │ B │   C  Stop (smooth brake)
//!  ├───┼───┼───┼───┤   D  Start (engage gear 1)
//!  │ 7 │ 8 │ 9 │ C │   0-9 Select gear
//!  ├───┼───┼───┼───┤   * # unmapped
//!  │ * │ 0 │ # │ D │
//!  └───┴───┴───┴───┘
//! ```

/// A key of the 4×4 keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Numeric key, always `0..=9`.
    Digit(u8),
    A,
    B,
    C,
    D,
    Star,
    Hash,
}

impl Key {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            '*' => Some(Self::Star),
            '#' => Some(Self::Hash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d.min(9)),
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::Star => '*',
            Self::Hash => '#',
        }
    }
}

/// Commands the drive controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectEco,
    SelectSport,
    /// Brake to a standstill.
    Stop,
    /// Engage gear 1 directly, no ramp.
    Start,
    /// Shift to the given gear digit (validated by the controller).
    SetSpeed(u8),
}

impl Command {
    /// `None` for keys with no command bound.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::A => Some(Self::SelectEco),
            Key::B => Some(Self::SelectSport),
            Key::C => Some(Self::Stop),
            Key::D => Some(Self::Start),
            Key::Digit(d) => Some(Self::SetSpeed(d)),
            Key::Star | Key::Hash => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping_is_reversible() {
        for c in "0123456789ABCD*#".chars() {
            let key = Key::from_char(c).unwrap();
            assert_eq!(key.as_char(), c);
        }
        assert_eq!(Key::from_char('E'), None);
        assert_eq!(Key::from_char('a'), None);
    }

    #[test]
    fn letter_keys_map_to_commands() {
        assert_eq!(Command::from_key(Key::A), Some(Command::SelectEco));
        assert_eq!(Command::from_key(Key::B), Some(Command::SelectSport));
        assert_eq!(Command::from_key(Key::C), Some(Command::Stop));
        assert_eq!(Command::from_key(Key::D), Some(Command::Start));
        assert_eq!(Command::from_key(Key::Digit(4)), Some(Command::SetSpeed(4)));
    }

    #[test]
    fn star_and_hash_are_unmapped() {
        assert_eq!(Command::from_key(Key::Star), None);
        assert_eq!(Command::from_key(Key::Hash), None);
    }
}
