//! Uniform access to every civil date conversion algorithm.

use core::fmt;

use crate::date::{epoch_seconds, CivilDate, CivilDateTime};
use crate::{era, fast, fortran, table};

/// The civil date to linear time algorithms implemented by this crate.
///
/// All variants compute the same function over their supported range; they differ only in how the
/// arithmetic is arranged. See the module of each algorithm for details.
///
/// # Examples
///
/// ```
/// # use civil::Algorithm;
/// for a in Algorithm::ALL {
/// 	assert_eq!(a.unix_day(1970, 1, 1), 0, "{}", a);
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Fliegel & Van Flandern's Julian Day formula. See [`fortran`].
	Fortran,
	/// Cumulative day-of-year lookup table. See [`table`].
	Table,
	/// Unsigned, carry-based March year. See [`fast`].
	Fast,
	/// 400-year era formula. See [`era`].
	DaysFromCivil
}

impl Algorithm {
	/// Every algorithm, in the order they are reported.
	pub const ALL: [Algorithm; 4] = [
		Algorithm::Fast,
		Algorithm::Table,
		Algorithm::DaysFromCivil,
		Algorithm::Fortran
	];

	/// Name of the algorithm as used in reports.
	pub const fn name(self) -> &'static str {
		match self {
			Algorithm::Fortran => "YMDToUnix_Fortran",
			Algorithm::Table => "YMDToUnix_Table",
			Algorithm::Fast => "YMDToUnix_Fast",
			Algorithm::DaysFromCivil => "YMDToUnix_DaysFromCivil"
		}
	}

	/// The earliest year this algorithm handles correctly, if it has one.
	///
	/// The truncating and unsigned variants shift every date by a fixed year base so their
	/// intermediate values stay non-negative; before that base they silently wrap.
	pub const fn min_year(self) -> Option<i32> {
		match self {
			Algorithm::Fortran => Some(fortran::MIN_YEAR),
			Algorithm::Table => Some(table::MIN_YEAR),
			Algorithm::Fast => Some(fast::MIN_YEAR),
			Algorithm::DaysFromCivil => None
		}
	}

	/// Check whether `year` is within the range this algorithm supports.
	#[inline(always)]
	pub const fn supports(self, year: i32) -> bool {
		match self.min_year() {
			Some(min) => year >= min,
			None => true
		}
	}

	/// Convert a civil date to days since the Unix epoch.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::Algorithm;
	/// assert_eq!(Algorithm::Table.unix_day(2000, 2, 29), 11016);
	/// assert_eq!(Algorithm::Fortran.unix_day(1900, 2, 28), -25509);
	/// ```
	#[inline]
	pub fn unix_day(self, year: i32, month: i32, day: i32) -> i32 {
		match self {
			Algorithm::Fortran => fortran::unix_day_from_civil(year, month, day),
			Algorithm::Table => table::unix_day_from_civil(year, month, day),
			Algorithm::Fast => fast::unix_day_from_civil(year, month, day),
			Algorithm::DaysFromCivil => era::days_from_civil(year, month, day)
		}
	}

	/// Convert a civil date to days since the Unix epoch. See [`Algorithm::unix_day`].
	#[inline(always)]
	pub fn unix_day_of(self, date: CivilDate) -> i32 {
		self.unix_day(date.year, date.month, date.day)
	}

	/// Convert a civil date time to seconds since the Unix epoch.
	///
	/// The date is converted with this algorithm and the time of day is added at a flat 86400
	/// seconds per day, so a leap second (`second == 60`) is the same instant as the start of the
	/// next minute.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::{Algorithm, CivilDateTime};
	/// let leap = CivilDateTime::new(1998, 12, 31, 23, 59, 60);
	/// let next = CivilDateTime::new(1999, 1, 1, 0, 0, 0);
	/// assert_eq!(Algorithm::Fast.epoch_seconds(leap), 915148800);
	/// assert_eq!(Algorithm::Fast.epoch_seconds(next), 915148800);
	/// ```
	#[inline]
	pub fn epoch_seconds(self, time: CivilDateTime) -> i64 {
		epoch_seconds(self.unix_day_of(time.date), &time)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn epoch_anchor_test() {
		for a in Algorithm::ALL {
			assert_eq!(a.unix_day(1970, 1, 1), 0, "{}", a);
			assert_eq!(a.epoch_seconds(CivilDateTime::new(1970, 1, 1, 0, 0, 0)), 0, "{}", a);
		}
	}

	#[test]
	fn leap_day_test() {
		// 2000 is a leap year, 1900 is not
		for a in Algorithm::ALL {
			assert_eq!(a.unix_day(2000, 3, 1) - a.unix_day(2000, 2, 28), 2, "{}", a);
			assert_eq!(a.unix_day(1900, 3, 1) - a.unix_day(1900, 2, 28), 1, "{}", a);
			assert_eq!(a.unix_day(2000, 2, 29) - a.unix_day(1900, 2, 28), 36525, "{}", a);
		}
	}

	#[test]
	fn leap_second_test() {
		for a in Algorithm::ALL {
			assert_eq!(a.epoch_seconds(CivilDateTime::new(1998, 12, 31, 23, 59, 59)), 915148799, "{}", a);
			assert_eq!(a.epoch_seconds(CivilDateTime::new(1998, 12, 31, 23, 59, 60)), 915148800, "{}", a);
			assert_eq!(a.epoch_seconds(CivilDateTime::new(1999, 1, 1, 0, 0, 0)), 915148800, "{}", a);
		}
	}

	#[test]
	fn far_future_test() {
		for a in Algorithm::ALL {
			assert_eq!(a.epoch_seconds(CivilDateTime::new(1000000, 1, 1, 0, 0, 0)), 31494784780800, "{}", a);
		}
	}

	#[test]
	fn supports_test() {
		assert!(Algorithm::Table.supports(-4799));
		assert!(!Algorithm::Table.supports(-4800));
		assert!(!Algorithm::Fast.supports(-4800));
		assert!(!Algorithm::Fortran.supports(-4800));
		assert!(Algorithm::DaysFromCivil.supports(i32::MIN));

		// Make sure extreme supported years cannot panic
		Algorithm::DaysFromCivil.unix_day(i32::MIN, 1, 1);
		Algorithm::DaysFromCivil.unix_day(i32::MAX, 12, 31);
		Algorithm::DaysFromCivil.epoch_seconds(CivilDateTime::new(6_000_000, 1, 1, 0, 0, 0));
	}

	#[test]
	fn names_test() {
		assert_eq!(Algorithm::ALL.len(), 4);
		for (i, a) in Algorithm::ALL.iter().enumerate() {
			for b in Algorithm::ALL.iter().skip(i + 1) {
				assert_ne!(a.name(), b.name());
			}
		}
	}
}
