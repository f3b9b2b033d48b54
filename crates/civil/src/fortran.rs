//! Julian Day conversions as published by Fliegel & Van Flandern.
//!
//! Both functions are transcriptions of the Fortran statements in H. F. Fliegel and T. C. Van
//! Flandern, "A Machine Algorithm for Processing Calendar Dates", Communications of the ACM,
//! vol. 11 (1968), p. 657. They rely on division truncating toward zero, which Rust's `/` on
//! signed integers does, so they are only valid while every dividend stays non-negative: from
//! March 1, 4800 BC ([`MIN_YEAR`]) onward.
//!
//! The arithmetic is widened to 64 bits so that far-future dates (millions of years) do not
//! overflow the intermediate products, even though the results fit 32 bits.

use crate::date::{CivilDate, UNIX_EPOCH_JULIAN_DAY};

/// Earliest year for which the truncating divisions agree with floor division.
pub const MIN_YEAR: i32 = -4799;

/// Convert a civil date to a Julian Day Number.
///
/// # Examples
///
/// ```
/// # use civil::fortran::julian_day_from_civil;
/// assert_eq!(julian_day_from_civil(1970, 1, 1), 2440588);
/// assert_eq!(julian_day_from_civil(2000, 1, 1), 2451545);
/// assert_eq!(julian_day_from_civil(-4713, 11, 24), 0);
/// ```
pub fn julian_day_from_civil(y: i32, m: i32, d: i32) -> i32 {
	let (y, m, d) = (y as i64, m as i64, d as i64);
	// (m - 14) / 12 is -1 for January and February, 0 otherwise
	let jan_feb = (m - 14) / 12;
	let jd = d - 32075
		+ 1461 * (y + 4800 + jan_feb) / 4
		+ 367 * (m - 2 - jan_feb * 12) / 12
		- 3 * ((y + 4900 + jan_feb) / 100) / 4;
	jd as i32
}

/// Convert a civil date to days since the Unix epoch, by way of [`julian_day_from_civil`].
///
/// # Examples
///
/// ```
/// # use civil::fortran::unix_day_from_civil;
/// assert_eq!(unix_day_from_civil(1970, 1, 1), 0);
/// assert_eq!(unix_day_from_civil(1969, 12, 31), -1);
/// ```
#[inline(always)]
pub fn unix_day_from_civil(y: i32, m: i32, d: i32) -> i32 {
	julian_day_from_civil(y, m, d).wrapping_sub(UNIX_EPOCH_JULIAN_DAY)
}

/// Convert a Julian Day Number to a civil date.
///
/// This is the exact inverse of [`julian_day_from_civil`] for every `jd >= 0` (and somewhat
/// before), and is the ground truth the other algorithms are tested against.
///
/// # Examples
///
/// ```
/// # use civil::{fortran::civil_from_julian_day, CivilDate};
/// assert_eq!(civil_from_julian_day(0), CivilDate::new(-4713, 11, 24));
/// assert_eq!(civil_from_julian_day(2299161), CivilDate::new(1582, 10, 15));
/// assert_eq!(civil_from_julian_day(1000000000), CivilDate::new(2733194, 11, 27));
/// ```
pub fn civil_from_julian_day(jd: i64) -> CivilDate {
	// Move the origin back to a March 1 and split off the 400-year cycles
	let mut l = jd + 68569;
	let n = 4 * l / 146097;
	l -= (146097 * n + 3) / 4;
	// Year within the cycle (4000 / 1461001 approximates 1 / 365.25)
	let mut i = 4000 * (l + 1) / 1461001;
	l = l - 1461 * i / 4 + 31;
	// Month counted from March, then day of month
	let mut j = 80 * l / 2447;
	let k = l - 2447 * j / 80;
	// Rotate January and February into the next year
	l = j / 11;
	j = j + 2 - 12 * l;
	i = 100 * (n - 49) + i + l;

	CivilDate::new(i as i32, j as i32, k as i32)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn julian_day_from_civil_test() {
		assert_eq!(julian_day_from_civil(1970, 1, 1), 2440588);
		assert_eq!(julian_day_from_civil(2000, 2, 29), 2451604);
		assert_eq!(julian_day_from_civil(2000, 3, 1), 2451605);
		assert_eq!(julian_day_from_civil(1900, 2, 28), 2415079);
		assert_eq!(julian_day_from_civil(1900, 3, 1), 2415080);
		assert_eq!(julian_day_from_civil(1000000, 1, 1), 366963560);
	}

	#[test]
	fn civil_from_julian_day_test() {
		assert_eq!(civil_from_julian_day(2440588), CivilDate::new(1970, 1, 1));
		assert_eq!(civil_from_julian_day(2451545), CivilDate::new(2000, 1, 1));
		assert_eq!(civil_from_julian_day(9999999), CivilDate::new(22666, 12, 19));
		assert_eq!(civil_from_julian_day(-1), CivilDate::new(-4713, 11, 23));
	}

	#[test]
	fn roundtrip_test() {
		// Dense coverage of the first few 400-year cycles and around the Unix epoch
		for jd in (0..600_000).chain(2_400_000..2_500_000) {
			let d = civil_from_julian_day(jd);
			assert_eq!(julian_day_from_civil(d.year, d.month, d.day) as i64, jd, "{:?}", d);
		}
	}
}
