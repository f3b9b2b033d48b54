//! Era-based conversions between civil dates and Unix days.
//!
//! The Gregorian calendar repeats every 400 years, with internal repetition every 100 years and
//! again every 4 years (this is how leap years work). Since leap days get added at the end of
//! February, the calendar is rotated to run March to February, which puts the leap day as the last
//! day of the rotated year. Working in 400-year eras, the year of era and day of era follow from a
//! few divisions; finally the year is rotated back to January to December.
//!
//! The era is computed with floor division, so negative years work the same as positive ones and
//! there is no minimum supported year. The arithmetic is widened to 64 bits, so any `i32` input is
//! accepted; day counts outside the `i32` range wrap, as they do in the other algorithms.
//!
//! More details: <http://howardhinnant.github.io/date_algorithms.html>

use crate::date::{CivilDate, DAYS_PER_ERA, DAYS_PER_NON_LEAP_YEAR, YEARS_PER_ERA};

/// Number of days every 4 years, excluding the leap day.
const DAYS_PER_4_YEARS: i32 = 4 * DAYS_PER_NON_LEAP_YEAR;
/// Number of days every 100 years, excluding the final leap day.
const DAYS_PER_CENTURY: i32 = 100 * DAYS_PER_NON_LEAP_YEAR + 100 / 4 - 1;
/// Days from January 1 to February 28, inclusive.
const DAYS_FROM_JAN_TO_FEB: i32 = 31 + 28;
/// Days from March 1, 0000 to January 1, 1970.
const DAYS_FROM_MARCH_0000_TO_JAN_1970: i32 = (1970 / YEARS_PER_ERA) * DAYS_PER_ERA
                                            + (1970 % YEARS_PER_ERA) * DAYS_PER_NON_LEAP_YEAR
                                            + (1970 % YEARS_PER_ERA) / 4
                                            - (1970 % YEARS_PER_ERA) / 100
                                            - DAYS_FROM_JAN_TO_FEB;

/// Convert a civil date to days since the Unix epoch.
///
/// # Examples
///
/// ```
/// # use civil::era::days_from_civil;
/// assert_eq!(days_from_civil(1970, 1, 1), 0);
/// assert_eq!(days_from_civil(2024, 2, 29), 19782);
/// assert_eq!(days_from_civil(0, 3, 1), -719468);
/// assert_eq!(days_from_civil(-1, 3, 1), -719834);
/// ```
pub fn days_from_civil(y: i32, m: i32, d: i32) -> i32 {
	let (y, m, d) = (y as i64, m as i64, d as i64);
	let (era_days, era_years) = (DAYS_PER_ERA as i64, YEARS_PER_ERA as i64);
	let y = if m <= 2 { y - 1 } else { y };
	// Floor division, without relying on how `/` rounds negative numbers
	let era = if y >= 0 { y } else { y - (era_years - 1) } / era_years;
	let yoe = y - era * era_years;
	let mp = if m > 2 { m - 3 } else { m + 9 };
	// Linear equation that calculates the day of year from a March-based month
	let doy = (153 * mp + 2) / 5 + d - 1;
	let doe = yoe * DAYS_PER_NON_LEAP_YEAR as i64 + yoe / 4 - yoe / 100 + doy;
	// Beyond roughly 5.8 million years the day count no longer fits and wraps
	(era * era_days + doe - DAYS_FROM_MARCH_0000_TO_JAN_1970 as i64) as i32
}

/// Convert days since the Unix epoch to a civil date.
///
/// This is the inverse of [`days_from_civil`] for every `days` whose year fits in an `i32`.
///
/// # Examples
///
/// ```
/// # use civil::{era::civil_from_days, CivilDate};
/// assert_eq!(civil_from_days(0), CivilDate::new(1970, 1, 1));
/// assert_eq!(civil_from_days(11016), CivilDate::new(2000, 2, 29));
/// assert_eq!(civil_from_days(-719468), CivilDate::new(0, 3, 1));
/// ```
pub fn civil_from_days(days: i32) -> CivilDate {
	let z = days as i64 + DAYS_FROM_MARCH_0000_TO_JAN_1970 as i64;
	let (era_days, era_years) = (DAYS_PER_ERA as i64, YEARS_PER_ERA as i64);
	let era = if z >= 0 { z } else { z - (era_days - 1) } / era_days;
	let doe = z - era * era_days;
	let yoe = (doe
		       - doe / DAYS_PER_4_YEARS as i64
		       + doe / DAYS_PER_CENTURY as i64
		       - doe / (era_days - 1)
		      ) / DAYS_PER_NON_LEAP_YEAR as i64;
	let y = yoe + era * era_years;
	let doy = doe - (DAYS_PER_NON_LEAP_YEAR as i64 * yoe + yoe / 4 - yoe / 100);
	// Linear equation that calculates the month from a set day of year
	let mp = (5 * doy + 2) / 153;
	// Linear equation that calculates the day of month from a day of year and month number
	let d = doy - (153 * mp + 2) / 5 + 1;
	// Convert from Mar-Feb year to Jan-Dec year
	let (y, m) = if mp < 10 { (y, mp + 3) } else { (y + 1, mp - 9) };
	CivilDate::new(y as i32, m as i32, d as i32)
}
