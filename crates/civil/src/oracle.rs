//! Reference conversions backed by the platform's C library.
//!
//! These are only used to cross-check the algorithms in this crate, never as a conversion path of
//! their own. Platform quirks are confined to the documented valid range: outside of it the
//! adapter returns `None` without calling into the C library at all.

/// Adapter over `timegm(3)`, which converts a broken-down UTC time to a `time_t`.
///
/// Some C libraries (notably macOS) fail with `-1` for any year before 1900, so the adapter only
/// accepts years from 1900 onward on every platform. Within that range `tm_year` (years since 1900)
/// always fits a C `int`.
///
/// # Examples
///
/// ```
/// # use civil::{oracle::timegm, CivilDateTime};
/// assert_eq!(timegm::epoch_seconds(&CivilDateTime::new(1999, 1, 1, 0, 0, 0)), Some(915148800));
/// assert_eq!(timegm::epoch_seconds(&CivilDateTime::new(1899, 12, 31, 0, 0, 0)), None);
/// ```
pub mod timegm {
	use core::ops::RangeInclusive;

	use crate::date::CivilDateTime;

	/// Name of the oracle as used in reports.
	pub const NAME: &str = "YMDToUnix_Libc";

	/// Years for which the C library's answer is trusted.
	pub const VALID_YEARS: RangeInclusive<i32> = 1900..=i32::MAX;

	/// Check whether `year` is within [`VALID_YEARS`].
	#[inline(always)]
	pub fn covers(year: i32) -> bool {
		VALID_YEARS.contains(&year)
	}

	/// Convert a civil date time to seconds since the Unix epoch using `timegm(3)`.
	///
	/// Returns `None` if the year is outside [`VALID_YEARS`]. Otherwise, the C library's result is
	/// returned as-is, including its `-1` failure sentinel.
	#[cfg(unix)]
	pub fn epoch_seconds(time: &CivilDateTime) -> Option<i64> {
		if !covers(time.date.year) { return None }
		// Safety:
		// - libc::tm is plain old data, all zeroes is a valid value (tm_zone is a nullable pointer)
		// - timegm only reads the fields set below and normalizes the struct in place
		unsafe {
			let mut tm: libc::tm = core::mem::zeroed();
			tm.tm_sec = time.second;
			tm.tm_min = time.minute;
			tm.tm_hour = time.hour;
			tm.tm_mday = time.date.day;
			tm.tm_mon = time.date.month.wrapping_sub(1);
			tm.tm_year = time.date.year - 1900;
			Some(libc::timegm(&mut tm) as i64)
		}
	}

	/// `timegm(3)` is not available on this platform, so every conversion is out of range.
	#[cfg(not(unix))]
	pub fn epoch_seconds(_time: &CivilDateTime) -> Option<i64> {
		None
	}
}
