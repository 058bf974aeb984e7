use std::fmt;

use crate::domain::{DayOfWeek, Season};

/// Number of days in every season.
pub const DAYS_PER_SEASON: u8 = 28;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
	#[error("day {0} is outside 1..=28")]
	DayOutOfRange(u8),
	#[error("year must be at least 1")]
	YearZero,
}

/// A date on the world calendar.
///
/// Seasons are 28 days long and weeks start on Monday, so day-of-week is a
/// pure function of the day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameDate {
	day: u8,
	season: Season,
	year: u32,
}

impl GameDate {
	pub fn new(day: u8, season: Season, year: u32) -> Result<Self, DateError> {
		if !(1..=DAYS_PER_SEASON).contains(&day) {
			return Err(DateError::DayOutOfRange(day));
		}
		if year == 0 {
			return Err(DateError::YearZero);
		}
		Ok(Self { day, season, year })
	}

	#[inline]
	pub fn day(&self) -> u8 {
		self.day
	}

	#[inline]
	pub fn season(&self) -> Season {
		self.season
	}

	#[inline]
	pub fn year(&self) -> u32 {
		self.year
	}

	pub fn day_of_week(&self) -> DayOfWeek {
		DayOfWeek::ALL[usize::from(self.day - 1) % DayOfWeek::ALL.len()]
	}

	/// Key into the dated-event table, e.g. `spring13`.
	pub fn event_key(&self) -> String {
		format!("{}{}", self.season.as_str().to_lowercase(), self.day)
	}
}

impl fmt::Display for GameDate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} Y{}", self.season, self.day, self.year)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(1, DayOfWeek::Monday)]
	#[case(7, DayOfWeek::Sunday)]
	#[case(8, DayOfWeek::Monday)]
	#[case(28, DayOfWeek::Sunday)]
	fn day_of_week_cycles_weekly(#[case] day: u8, #[case] expected: DayOfWeek) {
		let date = GameDate::new(day, Season::Summer, 1).unwrap();
		assert_eq!(date.day_of_week(), expected);
	}

	#[test]
	fn event_key_uses_lowercase_season() {
		let date = GameDate::new(13, Season::Spring, 2).unwrap();
		assert_eq!(date.event_key(), "spring13");
	}

	#[test]
	fn rejects_out_of_range_parts() {
		assert_eq!(GameDate::new(0, Season::Fall, 1), Err(DateError::DayOutOfRange(0)));
		assert_eq!(GameDate::new(29, Season::Fall, 1), Err(DateError::DayOutOfRange(29)));
		assert_eq!(GameDate::new(3, Season::Fall, 0), Err(DateError::YearZero));
	}
}
