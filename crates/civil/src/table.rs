//! Civil date to Unix day using a cumulative day-of-year table.
//!
//! Derived from the conversion in [upb](https://github.com/protocolbuffers/upb). Days are counted
//! from a base year, -4800 (4801 BC), chosen to precede every supported date and to be divisible by both
//! 100 and 400 so the leap year corrections start from a clean cycle. Leap days are counted by the
//! number of Februaries that have ended since the base, which sidesteps special casing February 29.
//!
//! The arithmetic is unsigned with wraparound, so dates before [`MIN_YEAR`] wrap instead of
//! failing. The final subtraction of the epoch is meant to wrap for dates before 1970.

/// Days before the first of each month in a non-leap year.
const MONTH_YDAY: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Years between the base year -4800 (4801 BC) and year 0.
const YEAR_BASE: i32 = 4800;

/// Days between January 1 of the base year and January 1, 1970.
const EPOCH: u32 = 2472692;

/// Earliest supported year. The January/February adjustment requires one full year before it.
pub const MIN_YEAR: i32 = 1 - YEAR_BASE;

/// Convert a civil date to days since the Unix epoch.
///
/// Months outside [1, 12] are wrapped into the table (month 13 reads the January entry, month 0 the
/// December entry), giving a valid but different day count rather than panicking.
///
/// # Examples
///
/// ```
/// # use civil::table::unix_day_from_civil;
/// assert_eq!(unix_day_from_civil(1970, 1, 1), 0);
/// assert_eq!(unix_day_from_civil(2000, 2, 29), 11016);
/// assert_eq!(unix_day_from_civil(1900, 3, 1), -25508);
/// ```
pub fn unix_day_from_civil(year: i32, month: i32, day: i32) -> i32 {
	let years_since_base = year.wrapping_add(YEAR_BASE) as u32;
	let febs_since_base = years_since_base.wrapping_sub((month <= 2) as u32);
	let leap_days_since_base = 1
		+ febs_since_base / 4
		- febs_since_base / 100
		+ febs_since_base / 400;
	let days_since_base = 365u32.wrapping_mul(years_since_base)
		.wrapping_add(MONTH_YDAY[month.wrapping_sub(1).rem_euclid(12) as usize])
		.wrapping_add((day as u32).wrapping_sub(1))
		.wrapping_add(leap_days_since_base);

	// Year 0 of the proleptic calendar is 1 BC, so there is no gap to account for here
	days_since_base.wrapping_sub(EPOCH) as i32
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unix_day_from_civil_test() {
		assert_eq!(unix_day_from_civil(1970, 1, 1), 0);
		assert_eq!(unix_day_from_civil(1969, 12, 31), -1);
		assert_eq!(unix_day_from_civil(2000, 2, 29), 11016);
		assert_eq!(unix_day_from_civil(2000, 3, 1), 11017);
		assert_eq!(unix_day_from_civil(1900, 2, 28), -25509);
		assert_eq!(unix_day_from_civil(1900, 3, 1), -25508);
		assert_eq!(unix_day_from_civil(1000000, 1, 1), 364522972);
		assert_eq!(unix_day_from_civil(-4713, 11, 24), -2440588);
	}

	#[test]
	fn min_year_test() {
		assert_eq!(MIN_YEAR, -4799);
		// January 1, 4800 BC is still in range
		assert_eq!(unix_day_from_civil(MIN_YEAR, 1, 1), crate::era::days_from_civil(MIN_YEAR, 1, 1));
	}

	#[test]
	fn out_of_range_month_test() {
		// Month 13 reads the January entry, and 2023 has no February 29 to tell them apart
		assert_eq!(unix_day_from_civil(2023, 13, 1), unix_day_from_civil(2023, 1, 1));

		// Make sure extreme inputs cannot panic
		unix_day_from_civil(0, 0, 0);
		unix_day_from_civil(i32::MAX - YEAR_BASE, i32::MAX, i32::MAX);
		unix_day_from_civil(MIN_YEAR, i32::MIN, i32::MIN);
	}
}
