//! Civil date and date time values, plus the calendar constants shared by every algorithm.
//!
//! None of the types here validate their fields. A day of 0 or a month of 13 is carried through
//! the conversion functions as-is and produces whatever linear time the arithmetic yields, which is
//! what the differential harness relies on.

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds per hour.
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
/// Seconds per day. Leap seconds are not counted.
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
/// Days per non-leap year.
pub const DAYS_PER_NON_LEAP_YEAR: i32 = 365;
/// Number of years per era, after which the Gregorian leap pattern repeats.
pub const YEARS_PER_ERA: i32 = 400;
/// Number of days every era (400 years).
pub const DAYS_PER_ERA: i32 = YEARS_PER_ERA * DAYS_PER_NON_LEAP_YEAR
                            + YEARS_PER_ERA / 4
                            - YEARS_PER_ERA / 100
                            + 1;
/// Julian Day Number of the Unix epoch, January 1, 1970.
///
/// A Unix day count is `jdn - UNIX_EPOCH_JULIAN_DAY`.
pub const UNIX_EPOCH_JULIAN_DAY: i32 = 2440588;

/// A proleptic Gregorian calendar date.
///
/// Years are signed and astronomical, so year 0 is 1 BC and year -1 is 2 BC. Months are 1-indexed
/// starting at January.
///
/// # Examples
///
/// ```
/// # use civil::CivilDate;
/// let d = CivilDate::new(2024, 2, 29);
/// assert_eq!((d.year, d.month, d.day), (2024, 2, 29));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CivilDate {
	/// Astronomical year, unconstrained sign
	pub year: i32,
	/// Month of the year, nominally [1, 12]
	pub month: i32,
	/// Day of the month, nominally [1, 31]
	pub day: i32
}

impl CivilDate {
	/// Create a date from its three fields without any validation.
	#[inline(always)]
	pub const fn new(year: i32, month: i32, day: i32) -> CivilDate {
		CivilDate { year, month, day }
	}

	/// The date time at 00:00:00 on this date.
	#[inline(always)]
	pub const fn at_midnight(self) -> CivilDateTime {
		CivilDateTime { date: self, hour: 0, minute: 0, second: 0 }
	}

	/// Check whether this date falls in a leap year. See [`is_leap_year`].
	#[inline(always)]
	pub const fn is_leap_year(&self) -> bool {
		is_leap_year(self.year)
	}
}

/// A proleptic Gregorian calendar date with a time of day, in UTC.
///
/// `second` may be 60 to express a leap second. Since every day is 86400 seconds long, a leap
/// second collapses onto the first second of the following minute.
///
/// # Examples
///
/// ```
/// # use civil::CivilDateTime;
/// let t = CivilDateTime::new(1998, 12, 31, 23, 59, 60);
/// assert_eq!(t.seconds_of_day(), 86400);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
	/// The calendar date
	pub date: CivilDate,
	/// Hours, nominally [0, 23]
	pub hour: i32,
	/// Minutes, nominally [0, 59]
	pub minute: i32,
	/// Seconds, nominally [0, 60]
	pub second: i32
}

impl CivilDateTime {
	/// Create a date time from its six fields without any validation.
	#[inline(always)]
	pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32)
		-> CivilDateTime
	{
		CivilDateTime { date: CivilDate::new(year, month, day), hour, minute, second }
	}

	/// Seconds elapsed since midnight, at a flat 86400 seconds per day.
	#[inline(always)]
	pub const fn seconds_of_day(&self) -> i64 {
		self.hour as i64 * SECONDS_PER_HOUR
			+ self.minute as i64 * SECONDS_PER_MINUTE
			+ self.second as i64
	}
}

impl From<CivilDate> for CivilDateTime {
	fn from(value: CivilDate) -> Self {
		value.at_midnight()
	}
}

/// Combine a linear day count with a time of day into seconds since the Unix epoch.
///
/// The accumulation is done in 64 bits since `unix_day * 86400` leaves the 32-bit range roughly
/// 68 years away from 1970.
///
/// # Examples
///
/// ```
/// # use civil::{epoch_seconds, CivilDateTime};
/// let t = CivilDateTime::new(1999, 1, 1, 0, 0, 0);
/// assert_eq!(epoch_seconds(10592, &t), 915148800);
/// ```
#[inline(always)]
pub const fn epoch_seconds(unix_day: i32, time: &CivilDateTime) -> i64 {
	unix_day as i64 * SECONDS_PER_DAY + time.seconds_of_day()
}

/// Check whether a given `year` is a leap year under the 4/100/400 rule.
///
/// Works for negative (proleptic) years as well: year 0 and year -400 are leap years, year -100
/// is not.
///
/// # Examples
///
/// ```
/// # use civil::is_leap_year;
/// assert_eq!(is_leap_year(1900), false);
/// assert_eq!(is_leap_year(2000), true);
/// assert_eq!(is_leap_year(2023), false);
/// assert_eq!(is_leap_year(2024), true);
/// assert_eq!(is_leap_year(-4), true);
/// ```
#[inline(always)]
pub const fn is_leap_year(year: i32) -> bool {
	// Masking with 3 or 15 is a Euclidean remainder by 4 or 16, which also holds for negative
	// years. Divisible by 100 and by 16 means divisible by 400.
	let l = if year % 100 != 0 { 3 } else { 15 };
	(year & l) == 0
}

/// The number of days in a given month, for `month` in [1, 12].
///
/// Months outside that range produce an unspecified (but non-panicking) result.
///
/// # Examples
///
/// ```
/// # use civil::days_in_month;
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(1900, 2), 28);
/// assert_eq!(days_in_month(2024, 9), 30);
/// ```
pub const fn days_in_month(year: i32, month: i32) -> i32 {
	if month == 2 {
		if is_leap_year(year) { 29 } else { 28 }
	} else {
		30 | (month ^ (month >> 3)) & 1
	}
}
