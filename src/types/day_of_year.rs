use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A calendar day expressed as a 1-based ordinal within the year.
///
/// Day 1 is January 1st, day 365 is December 31st in a common year, and day 366
/// only ever matches dates in leap years. The same ordinal can therefore land on
/// a different calendar date depending on the year. Use
/// [`DayOfYear::from_date`] when you have a concrete date in hand.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dayscore::DayOfYear;
///
/// let day = DayOfYear::new(60).unwrap();
/// let date = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// assert!(day.matches(date)); // 2023 is a common year
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(u16);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Day of year must be between 1 and 366, got {0}")]
pub struct InvalidDayOfYear(pub u16);

impl DayOfYear {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 366;

    /// Creates a day-of-year ordinal, rejecting anything outside `1..=366`.
    pub fn new(day: u16) -> Result<Self, InvalidDayOfYear> {
        if (Self::MIN..=Self::MAX).contains(&day) {
            Ok(Self(day))
        } else {
            Err(InvalidDayOfYear(day))
        }
    }

    /// The ordinal of a concrete calendar date within its own year.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.ordinal() as u16)
    }

    /// Whether `date` falls on this ordinal within its own year.
    pub fn matches(self, date: NaiveDate) -> bool {
        date.ordinal() == u32::from(self.0)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl Display for DayOfYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for DayOfYear {
    type Error = InvalidDayOfYear;

    fn try_from(day: u16) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}
