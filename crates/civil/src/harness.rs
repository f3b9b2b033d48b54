//! Differential correctness checks across every algorithm.
//!
//! The sweep walks a range of Julian Day Numbers, recovers each day's civil date with
//! [`fortran::civil_from_julian_day`], and asserts that every [`Algorithm`] (and, if enabled, the
//! platform oracle) maps that date back to the expected Unix time. A short table of hand-picked
//! [`SCENARIOS`] covers times of day, a leap second boundary and a far-future date.
//!
//! Disagreements are not errors. Each one is handed to a caller-supplied sink as a [`Mismatch`] and
//! checking continues, so a single run surfaces every disagreement across the whole range.
//!
//! # Examples
//!
//! ```
//! # use civil::harness::{self, Options};
//! let mut mismatches = 0;
//! let summary = harness::sweep(2440000..2441000, Options::default(), |_| mismatches += 1);
//! assert_eq!(summary.dates, 1000);
//! assert_eq!(summary.mismatches, 0);
//! assert_eq!(mismatches, 0);
//! ```

use core::fmt;
use core::ops::{AddAssign, Range};

use crate::algorithm::Algorithm;
use crate::date::{CivilDateTime, SECONDS_PER_DAY, UNIX_EPOCH_JULIAN_DAY};
use crate::fortran;
#[cfg(feature = "oracle")]
use crate::oracle::timegm;

/// Julian Day Numbers covered by a full sweep: 4713 BC to 22666 AD.
pub const FULL_SWEEP: Range<i64> = 0..10_000_000;

/// Name used when reporting the Julian Day Number produced by [`fortran::julian_day_from_civil`].
pub const JULIAN_DAY_CHECK: &str = "YMDToJulian_Fortran";

/// A civil date time together with the Unix time it must convert to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
	/// The input to every algorithm
	pub input: CivilDateTime,
	/// Expected seconds since the Unix epoch
	pub expected: i64
}

/// Hand-picked instants checked in addition to the sweep.
///
/// | UTC                        | Unix time      |
/// | -------------------------- | -------------- |
/// | 1000000-01-01T00:00:00     | 31494784780800 |
/// | 1998-12-31T23:59:59        | 915148799      |
/// | 1998-12-31T23:59:60        | 915148800      |
/// | 1999-01-01T00:00:00        | 915148800      |
pub const SCENARIOS: [Scenario; 4] = [
	Scenario { input: CivilDateTime::new(1000000, 1, 1, 0, 0, 0), expected: 31494784780800 },
	Scenario { input: CivilDateTime::new(1998, 12, 31, 23, 59, 59), expected: 915148799 },
	Scenario { input: CivilDateTime::new(1998, 12, 31, 23, 59, 60), expected: 915148800 },
	Scenario { input: CivilDateTime::new(1999, 1, 1, 0, 0, 0), expected: 915148800 }
];

/// What to compare besides the algorithms themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Options {
	/// Also compare against the platform oracle within its valid range. Has no effect unless the
	/// `oracle` feature is enabled.
	pub oracle: bool
}

/// A single disagreement between a conversion and the expected Unix time.
///
/// The [`Display`](fmt::Display) form is the console report line:
///
/// ```
/// # use civil::{harness::Mismatch, CivilDateTime};
/// let m = Mismatch {
/// 	name: "YMDToUnix_Fast",
/// 	input: CivilDateTime::new(1970, 1, 2, 0, 0, 0),
/// 	actual: Some(0),
/// 	expected: 86400
/// };
/// assert_eq!(m.to_string(), "YMDToUnix_Fast(1970, 1, 2, 0, 0, 0) = 0 != 86400");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mismatch {
	/// Name of the algorithm or oracle that disagreed
	pub name: &'static str,
	/// The input it was given
	pub input: CivilDateTime,
	/// What it returned, or `None` if it reported a failure
	pub actual: Option<i64>,
	/// What it should have returned
	pub expected: i64
}

impl fmt::Display for Mismatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let t = &self.input;
		write!(f, "{}({}, {}, {}, {}, {}, {}) = ",
			self.name, t.date.year, t.date.month, t.date.day, t.hour, t.minute, t.second)?;
		match self.actual {
			Some(v) => write!(f, "{}", v)?,
			None => f.write_str("failed")?
		}
		write!(f, " != {}", self.expected)
	}
}

/// Counts accumulated by a check.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
	/// Number of inputs checked
	pub dates: u64,
	/// Number of individual comparisons made
	pub comparisons: u64,
	/// Number of comparisons that disagreed
	pub mismatches: u64,
	/// Number of comparisons skipped because the input is outside an algorithm's or the oracle's
	/// supported range
	pub skipped: u64
}

impl Summary {
	/// Check whether no comparison disagreed.
	#[inline(always)]
	pub fn is_clean(&self) -> bool {
		self.mismatches == 0
	}
}

impl AddAssign for Summary {
	fn add_assign(&mut self, rhs: Self) {
		self.dates += rhs.dates;
		self.comparisons += rhs.comparisons;
		self.mismatches += rhs.mismatches;
		self.skipped += rhs.skipped;
	}
}

/// Compare one result against the expectation, reporting any difference.
#[inline(always)]
fn compare<F>(
	summary: &mut Summary,
	sink: &mut F,
	name: &'static str,
	input: &CivilDateTime,
	actual: Option<i64>,
	expected: i64
) where F: FnMut(&Mismatch)
{
	summary.comparisons += 1;
	if actual != Some(expected) {
		summary.mismatches += 1;
		sink(&Mismatch { name, input: *input, actual, expected });
	}
}

/// Check one civil date time against every algorithm (and optionally the oracle).
///
/// Algorithms are skipped for years before their [`Algorithm::min_year`], and the oracle outside
/// its valid range.
///
/// # Examples
///
/// ```
/// # use civil::{harness::{self, Options}, CivilDateTime};
/// let t = CivilDateTime::new(2024, 2, 29, 12, 0, 0);
/// let mut report = Vec::new();
/// let summary = harness::check_instant(&t, 1709208000, Options::default(), &mut |m| report.push(*m));
/// assert!(summary.is_clean());
///
/// // Off by one day
/// let summary = harness::check_instant(&t, 1709208000 + 86400, Options::default(), &mut |m| report.push(*m));
/// assert_eq!(summary.mismatches, 4);
/// assert_eq!(report.len(), 4);
/// ```
pub fn check_instant<F>(input: &CivilDateTime, expected: i64, options: Options, sink: &mut F)
	-> Summary
where F: FnMut(&Mismatch)
{
	let mut summary = Summary { dates: 1, ..Summary::default() };
	for a in Algorithm::ALL {
		if a.supports(input.date.year) {
			compare(&mut summary, sink, a.name(), input, Some(a.epoch_seconds(*input)), expected);
		} else {
			summary.skipped += 1;
		}
	}

	#[cfg(feature = "oracle")]
	if options.oracle {
		match timegm::epoch_seconds(input) {
			Some(v) => compare(&mut summary, sink, timegm::NAME, input, Some(v), expected),
			None => summary.skipped += 1
		}
	}
	#[cfg(not(feature = "oracle"))]
	let _ = options;

	summary
}

/// Check the civil date of a single Julian Day Number at midnight.
///
/// Besides every algorithm, this also asserts that [`fortran::julian_day_from_civil`] returns `jd`
/// itself, reported under [`JULIAN_DAY_CHECK`].
pub fn check_julian_day<F>(jd: i64, options: Options, sink: &mut F) -> Summary
where F: FnMut(&Mismatch)
{
	let unix_day = jd - UNIX_EPOCH_JULIAN_DAY as i64;
	let date = fortran::civil_from_julian_day(jd);
	let input = date.at_midnight();

	let mut summary = check_instant(&input, unix_day * SECONDS_PER_DAY, options, sink);
	if date.year >= fortran::MIN_YEAR {
		let actual = fortran::julian_day_from_civil(date.year, date.month, date.day) as i64;
		compare(&mut summary, sink, JULIAN_DAY_CHECK, &input, Some(actual), jd);
	} else {
		summary.skipped += 1;
	}
	summary
}

/// Check every Julian Day Number in `range`, reporting each disagreement to `sink`.
///
/// This is exhaustive: it never stops early, however many mismatches it finds.
pub fn sweep<F>(range: Range<i64>, options: Options, mut sink: F) -> Summary
where F: FnMut(&Mismatch)
{
	let mut summary = Summary::default();
	for jd in range {
		summary += check_julian_day(jd, options, &mut sink);
	}
	summary
}

/// Check every entry of [`SCENARIOS`], reporting each disagreement to `sink`.
///
/// # Examples
///
/// ```
/// # use civil::harness::{self, Options};
/// let summary = harness::check_scenarios(Options::default(), |m| panic!("{}", m));
/// assert_eq!(summary.dates, 4);
/// assert_eq!(summary.comparisons, 16);
/// ```
pub fn check_scenarios<F>(options: Options, mut sink: F) -> Summary
where F: FnMut(&Mismatch)
{
	let mut summary = Summary::default();
	for s in SCENARIOS.iter() {
		summary += check_instant(&s.input, s.expected, options, &mut sink);
	}
	summary
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sweep_epoch_test() {
		let mut reported = 0;
		let summary = sweep(2_440_000..2_450_000, Options::default(), |_| reported += 1);
		assert_eq!(summary.dates, 10_000);
		// Four algorithms plus the Julian Day check
		assert_eq!(summary.comparisons, 50_000);
		assert_eq!(summary.mismatches, 0);
		assert_eq!(summary.skipped, 0);
		assert_eq!(reported, 0);
	}

	#[test]
	fn sweep_start_test() {
		// The very beginning of the Julian Period, in 4713 BC
		let summary = sweep(0..20_000, Options::default(), |m| panic!("{}", m));
		assert!(summary.is_clean());
		assert_eq!(summary.skipped, 0);
	}

	#[test]
	fn sweep_before_min_year_test() {
		// Around 4800 BC, where only the era algorithm is still valid
		let start = fortran::julian_day_from_civil(fortran::MIN_YEAR, 3, 1) as i64;
		let summary = sweep(start - 1_000..start + 1_000, Options::default(), |m| panic!("{}", m));
		assert_eq!(summary.dates, 2_000);
		assert!(summary.skipped > 0);
		assert!(summary.is_clean());
	}

	#[test]
	fn mismatch_reported_test() {
		let mut last = None;
		let t = CivilDateTime::new(1970, 1, 1, 0, 0, 1);
		let summary = check_instant(&t, 0, Options::default(), &mut |m| last = Some(*m));
		assert_eq!(summary.comparisons, 4);
		assert_eq!(summary.mismatches, 4);
		let last = last.unwrap();
		assert_eq!(last.actual, Some(1));
		assert_eq!(last.expected, 0);
		assert_eq!(last.name, Algorithm::ALL[3].name());
	}

	#[test]
	fn scenarios_test() {
		let summary = check_scenarios(Options::default(), |m| panic!("{}", m));
		assert_eq!(summary.dates, SCENARIOS.len() as u64);
		assert!(summary.is_clean());
	}

	#[cfg(all(feature = "oracle", unix))]
	#[test]
	fn oracle_test() {
		let options = Options { oracle: true };
		let summary = check_scenarios(options, |m| panic!("{}", m));
		assert_eq!(summary.comparisons, 20);

		// Straddles 1900, before which the oracle is skipped
		let start = fortran::julian_day_from_civil(1899, 12, 1) as i64;
		let summary = sweep(start..start + 62, options, |m| panic!("{}", m));
		assert_eq!(summary.skipped, 31);
		assert!(summary.is_clean());
	}

	#[test]
	fn summary_add_test() {
		let mut a = Summary { dates: 1, comparisons: 2, mismatches: 3, skipped: 4 };
		a += Summary { dates: 10, comparisons: 20, mismatches: 30, skipped: 40 };
		assert_eq!(a, Summary { dates: 11, comparisons: 22, mismatches: 33, skipped: 44 });
		assert!(!a.is_clean());
	}
}
