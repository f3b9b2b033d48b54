//! Branch-reduced civil date to Unix day conversion.
//!
//! The year is rotated to start in March, so the leap day becomes the last day of the (rotated)
//! year and no month needs special treatment. January and February are handled as months 13 and 14
//! of the previous year using a carry flag obtained from an unsigned comparison rather than a
//! branch on the month.
//!
//! All intermediate values are unsigned. A fixed year base is added before any subtraction so that
//! nothing underflows for years at or after [`MIN_YEAR`], and is removed again through the epoch
//! constant at the very end, where wrapping is what turns dates before 1970 negative.

/// Years between the base year -4800 (4801 BC) and year 0. Divisible by 100 and 400.
const YEAR_BASE: u32 = 4800;

/// The formula's day count for January 1, 1970.
const EPOCH: u32 = 2472632;

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1 - YEAR_BASE as i32;

/// Convert a civil date to days since the Unix epoch.
///
/// # Examples
///
/// ```
/// # use civil::fast::unix_day_from_civil;
/// assert_eq!(unix_day_from_civil(1970, 1, 1), 0);
/// assert_eq!(unix_day_from_civil(2000, 2, 29), 11016);
/// assert_eq!(unix_day_from_civil(1000000, 1, 1), 364522972);
/// ```
pub fn unix_day_from_civil(y: i32, m: i32, d: i32) -> i32 {
	let (y, m, d) = (y as u32, m as u32, d as u32);
	// 1 for January and February, whose m - 3 wraps around
	let carry = (m.wrapping_sub(3) > m) as u32;
	// Month counting from March
	let m_adj = m.wrapping_sub(3).wrapping_add(12 * carry);
	// Year, positive and March-based
	let y_adj = y.wrapping_add(YEAR_BASE).wrapping_sub(carry);
	// Approximate days for the year, assuming a leap year every 4 years
	let base_days = (365 * 4 + 1u32).wrapping_mul(y_adj) / 4;
	// Correction for century years that are not leap years
	let centuries = y_adj / 100;
	let extra_leap_days = (3 * centuries + 3) / 4;
	// Days before the month, counting from March
	let year_days = (367u32.wrapping_mul(m_adj.wrapping_add(1)) / 12).wrapping_sub(30);

	base_days
		.wrapping_sub(extra_leap_days)
		.wrapping_add(year_days)
		.wrapping_add(d.wrapping_sub(1))
		.wrapping_sub(EPOCH) as i32
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
		assert_eq!(unix_day_from_civil(1998, 12, 31), 10591);
		assert_eq!(unix_day_from_civil(-4713, 11, 24), -2440588);
	}

	#[test]
	fn carry_test() {
		// February 28 and March 1 are adjacent only outside leap years
		assert_eq!(unix_day_from_civil(2023, 3, 1) - unix_day_from_civil(2023, 2, 28), 1);
		assert_eq!(unix_day_from_civil(2024, 3, 1) - unix_day_from_civil(2024, 2, 28), 2);
		assert_eq!(unix_day_from_civil(2100, 3, 1) - unix_day_from_civil(2100, 2, 28), 1);
		assert_eq!(unix_day_from_civil(2400, 3, 1) - unix_day_from_civil(2400, 2, 28), 2);
		assert_eq!(unix_day_from_civil(2024, 1, 1) - unix_day_from_civil(2023, 12, 31), 1);
	}

	#[test]
	fn extreme_inputs_test() {
		// Make sure extreme inputs cannot panic
		unix_day_from_civil(0, 0, 0);
		unix_day_from_civil(i32::MAX, i32::MAX, i32::MAX);
		unix_day_from_civil(i32::MIN, i32::MIN, i32::MIN);
	}
}
