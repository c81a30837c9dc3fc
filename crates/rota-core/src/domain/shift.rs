//! Shift kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a shift: day, night, or off.
///
/// The numeric codes (1–3) are the automaton input symbols used by the
/// persisted rule-set form. Code `0` is reserved for "unassigned" and never
/// maps to a `ShiftType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShiftType {
    /// A day shift.
    Day = 1,
    /// A night shift.
    Night = 2,
    /// An off shift.
    Off = 3,
}

impl ShiftType {
    /// All legal shift kinds, in symbol order.
    pub const ALL: [ShiftType; 3] = [ShiftType::Day, ShiftType::Night, ShiftType::Off];

    /// Reserved code for an unassigned cell.
    pub const NONE_CODE: u8 = 0;

    /// Returns the automaton symbol code (1–3).
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based position of this kind in [`ShiftType::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Maps a symbol code back to a shift kind.
    ///
    /// Returns `None` for the reserved code `0` and anything above `3`.
    ///
    /// ```
    /// use rota_core::ShiftType;
    ///
    /// assert_eq!(ShiftType::from_code(2), Some(ShiftType::Night));
    /// assert_eq!(ShiftType::from_code(0), None);
    /// ```
    pub fn from_code(code: i64) -> Option<ShiftType> {
        match code {
            1 => Some(ShiftType::Day),
            2 => Some(ShiftType::Night),
            3 => Some(ShiftType::Off),
            _ => None,
        }
    }

    /// Whether the employee works during this shift.
    #[inline]
    pub fn is_worked(self) -> bool {
        !matches!(self, ShiftType::Off)
    }

    /// One-letter tag used in diagnostics (`d`, `n`, `o`).
    pub fn tag(self) -> char {
        match self {
            ShiftType::Day => 'd',
            ShiftType::Night => 'n',
            ShiftType::Off => 'o',
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::Day => write!(f, "Day"),
            ShiftType::Night => write!(f, "Night"),
            ShiftType::Off => write!(f, "Off"),
        }
    }
}
