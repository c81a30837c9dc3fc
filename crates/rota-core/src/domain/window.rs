//! Shift timing.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::ShiftType;
use crate::error::{Result, RotaError};

/// Latest hour a day shift may start at.
pub const MAX_START_HOUR: i64 = 12;

/// Longest allowed shift, in hours.
pub const MAX_SHIFT_HOURS: i64 = 12;

/// When the working shifts of a day begin and how long they last.
///
/// The day shift runs from `start_hour` for `shift_hours`; the night shift
/// follows it directly. With the maximum values the night shift ends at
/// the next morning, so timestamps are computed by plain addition and roll
/// into the next calendar day where needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftWindow {
    start_hour: u32,
    shift_hours: u32,
}

impl ShiftWindow {
    /// Validates `start_hour` (0–12) and `shift_hours` (1–12).
    pub fn new(start_hour: i64, shift_hours: i64) -> Result<Self> {
        if !(0..=MAX_START_HOUR).contains(&start_hour) {
            return Err(RotaError::out_of_range(
                "start_hour",
                "Starting hour is bigger than expected. Please provide a number between 0-12",
            ));
        }
        if !(1..=MAX_SHIFT_HOURS).contains(&shift_hours) {
            return Err(RotaError::out_of_range(
                "shift_hours",
                "Shift hours cannot be bigger than twelve. Please provide a number between 1-12",
            ));
        }
        Ok(Self {
            start_hour: start_hour as u32,
            shift_hours: shift_hours as u32,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn shift_hours(&self) -> u32 {
        self.shift_hours
    }

    /// Hour offset from midnight at which `shift_type` starts.
    pub fn offset_hours(&self, shift_type: ShiftType) -> u32 {
        match shift_type {
            ShiftType::Off => 0,
            ShiftType::Day => self.start_hour,
            ShiftType::Night => self.start_hour + self.shift_hours,
        }
    }

    /// Start and end timestamps of `shift_type` on `date`.
    ///
    /// Off shifts are zero-length at midnight.
    pub fn span(&self, date: NaiveDate, shift_type: ShiftType) -> (NaiveDateTime, NaiveDateTime) {
        let start =
            date.and_time(NaiveTime::MIN) + Duration::hours(self.offset_hours(shift_type) as i64);
        let end = if shift_type.is_worked() {
            start + Duration::hours(self.shift_hours as i64)
        } else {
            start
        };
        (start, end)
    }
}
