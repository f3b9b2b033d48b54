//! Synthetic workloads for measuring the per-call cost of each conversion.
//!
//! Inputs come from a counter masked into small ranges per field, so consecutive calls see rapidly
//! varying years, months and times of day. This defeats branch prediction and memoization without
//! pretending to be a realistic date distribution, and includes out-of-range fields (month 0, day
//! 0) which every algorithm accepts without validation.
//!
//! With the `std` feature, [`measure`] times a workload, optionally replicated across independent
//! threads. The workers share nothing, so this measures contention-free scaling of pure functions.
//! Results are performance figures only, not correctness checks.

use core::fmt;
use core::hint::black_box;

use crate::algorithm::Algorithm;
use crate::date::CivilDateTime;
#[cfg(feature = "oracle")]
use crate::oracle::timegm;

/// Something whose conversion cost can be measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
	/// One of this crate's algorithms, including the time of day assembly.
	Algorithm(Algorithm),
	/// The platform's `timegm`, for comparison.
	#[cfg(feature = "oracle")]
	Oracle
}

impl Subject {
	/// Every subject: all algorithms, followed by the oracle if enabled.
	///
	/// # Examples
	///
	/// ```
	/// # use civil::{bench::Subject, Algorithm};
	/// let subjects: Vec<_> = Subject::all(false).collect();
	/// assert_eq!(subjects.len(), Algorithm::ALL.len());
	/// ```
	pub fn all(oracle: bool) -> impl Iterator<Item = Subject> {
		let algorithms = Algorithm::ALL.into_iter().map(Subject::Algorithm);
		#[cfg(feature = "oracle")]
		{ algorithms.chain(oracle.then_some(Subject::Oracle)) }
		#[cfg(not(feature = "oracle"))]
		{ let _ = oracle; algorithms }
	}

	/// Name of the subject as used in reports.
	pub const fn name(self) -> &'static str {
		match self {
			Subject::Algorithm(a) => a.name(),
			#[cfg(feature = "oracle")]
			Subject::Oracle => timegm::NAME
		}
	}

	/// The synthetic input for counter value `i`.
	///
	/// The oracle's years are remapped into 1900..2028, since it declines anything earlier and the
	/// early return would not measure the C library at all.
	#[inline(always)]
	pub fn input(self, i: u32) -> CivilDateTime {
		let t = synthetic_input(i);
		match self {
			Subject::Algorithm(_) => t,
			#[cfg(feature = "oracle")]
			Subject::Oracle => CivilDateTime { date: crate::CivilDate { year: oracle_year(i), ..t.date }, ..t }
		}
	}

	/// Convert `time` to seconds since the Unix epoch.
	///
	/// The oracle's failure is reported as `-1`, as the C library does.
	#[inline(always)]
	pub fn call(self, time: CivilDateTime) -> i64 {
		match self {
			Subject::Algorithm(a) => a.epoch_seconds(time),
			#[cfg(feature = "oracle")]
			Subject::Oracle => timegm::epoch_seconds(&time).unwrap_or(-1)
		}
	}
}

impl fmt::Display for Subject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// How successive inputs are derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	/// Inputs come straight from the counter, so calls are independent of each other and can
	/// overlap in the pipeline.
	#[default]
	Throughput,
	/// Each call's year is taken from the previous call's result, so every call waits on the last.
	/// Only the year varies; the date is January 1 at midnight.
	Latency
}

impl Mode {
	/// Name of the mode as used in reports and on the command line.
	pub const fn name(self) -> &'static str {
		match self {
			Mode::Throughput => "throughput",
			Mode::Latency => "latency"
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// The counter-masked input for counter value `i`.
///
/// | Field  | Value      | Range   |
/// | ------ | ---------- | ------- |
/// | year   | `i & 0x7ff`| [0, 2047] |
/// | month  | `i & 7`    | [0, 7]  |
/// | day    | `i & 0xf`  | [0, 15] |
/// | hour   | `i & 0xf`  | [0, 15] |
/// | minute | `i & 0x1f` | [0, 31] |
/// | second | `i & 0x1f` | [0, 31] |
///
/// # Examples
///
/// ```
/// # use civil::{bench::synthetic_input, CivilDateTime};
/// assert_eq!(synthetic_input(0x8a5), CivilDateTime::new(0x0a5, 5, 5, 5, 5, 5));
/// ```
#[inline(always)]
pub const fn synthetic_input(i: u32) -> CivilDateTime {
	let i = i as i32;
	CivilDateTime::new(i & 0x7ff, i & 7, i & 0xf, i & 0xf, i & 0x1f, i & 0x1f)
}

/// Year within the oracle's valid range for counter value `i`.
#[cfg(feature = "oracle")]
#[inline(always)]
const fn oracle_year(i: u32) -> i32 {
	1900 + (i & 0x7f) as i32
}

/// Infinite stream of [`synthetic_input`]s for a subject, starting at counter 0.
///
/// # Examples
///
/// ```
/// # use civil::{bench::{SyntheticInputs, Subject}, Algorithm, CivilDateTime};
/// let mut inputs = SyntheticInputs::new(Subject::Algorithm(Algorithm::Fast));
/// assert_eq!(inputs.next(), Some(CivilDateTime::new(0, 0, 0, 0, 0, 0)));
/// assert_eq!(inputs.next(), Some(CivilDateTime::new(1, 1, 1, 1, 1, 1)));
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticInputs {
	subject: Subject,
	counter: u32
}

impl SyntheticInputs {
	/// Create the stream of inputs for `subject`.
	pub const fn new(subject: Subject) -> SyntheticInputs {
		SyntheticInputs { subject, counter: 0 }
	}
}

impl Iterator for SyntheticInputs {
	type Item = CivilDateTime;

	fn next(&mut self) -> Option<Self::Item> {
		let t = self.subject.input(self.counter);
		self.counter = self.counter.wrapping_add(1);
		Some(t)
	}
}

/// Call `subject` `iterations` times in the given `mode`, returning a value derived from every
/// result so that no call can be optimized away.
///
/// # Examples
///
/// ```
/// # use civil::{bench::{run, Mode, Subject}, Algorithm};
/// let a = run(Subject::Algorithm(Algorithm::Fast), Mode::Latency, 1000);
/// let b = run(Subject::Algorithm(Algorithm::Table), Mode::Latency, 1000);
/// assert_eq!(a, b);
/// ```
pub fn run(subject: Subject, mode: Mode, iterations: u64) -> i64 {
	let mut acc = 0i64;
	match mode {
		Mode::Throughput => {
			let mut i = 0u32;
			for _ in 0..iterations {
				let v = subject.call(black_box(subject.input(i)));
				acc = acc.wrapping_add(black_box(v));
				i = i.wrapping_add(1);
			}
		},
		Mode::Latency => {
			for _ in 0..iterations {
				let year = (acc & 0xffff) as u32;
				let year = match subject {
					Subject::Algorithm(_) => year as i32,
					#[cfg(feature = "oracle")]
					Subject::Oracle => oracle_year(year)
				};
				acc = black_box(subject.call(CivilDateTime::new(year, 1, 1, 0, 0, 0)));
			}
		}
	}
	acc
}

#[cfg(feature = "std")]
pub use timed::*;

#[cfg(feature = "std")]
mod timed {
	use core::fmt;
	use core::hint::black_box;
	use core::num::NonZero;
	use std::thread;
	use std::time::{Duration, Instant};

	use super::{run, Mode, Subject};

	/// Timing of one subject under one workload.
	#[derive(Clone, Copy, Debug, PartialEq)]
	pub struct Measurement {
		/// What was measured
		pub subject: Subject,
		/// How inputs were derived
		pub mode: Mode,
		/// Number of worker threads
		pub threads: usize,
		/// Calls made by each thread
		pub iterations: u64,
		/// Wall time until the last thread finished
		pub elapsed: Duration
	}

	impl Measurement {
		/// Average wall time per call within one thread, in nanoseconds.
		pub fn ns_per_call(&self) -> f64 {
			self.elapsed.as_nanos() as f64 / self.iterations as f64
		}

		/// Total calls per second across all threads.
		pub fn calls_per_second(&self) -> f64 {
			let secs = self.elapsed.as_secs_f64();
			if secs > 0.0 {
				(self.iterations as f64 * self.threads as f64) / secs
			} else {
				f64::INFINITY
			}
		}
	}

	impl fmt::Display for Measurement {
		/// One report line, e.g. `YMDToUnix_Fast  1.23 ns/call  812.4 Mcalls/s  (throughput, 1 thread)`.
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "{:<24} {:>10.2} ns/call {:>10.1} Mcalls/s  ({}, {} thread{})",
				self.subject.name(),
				self.ns_per_call(),
				self.calls_per_second() / 1e6,
				self.mode,
				self.threads,
				if self.threads == 1 { "" } else { "s" })
		}
	}

	/// Time `iterations` calls of `subject` on each of `threads` independent workers.
	///
	/// The workers share no state and need no synchronization beyond being joined at the end.
	///
	/// # Examples
	///
	/// ```
	/// # use std::num::NonZero;
	/// # use civil::{bench::{measure, Mode, Subject}, Algorithm};
	/// let m = measure(
	/// 	Subject::Algorithm(Algorithm::DaysFromCivil),
	/// 	Mode::Throughput,
	/// 	NonZero::new(10_000).unwrap(),
	/// 	NonZero::new(2).unwrap()
	/// );
	/// assert_eq!(m.threads, 2);
	/// assert!(m.ns_per_call() >= 0.0);
	/// ```
	pub fn measure(subject: Subject, mode: Mode, iterations: NonZero<u64>, threads: NonZero<usize>)
		-> Measurement
	{
		let iterations = iterations.get();
		let threads = threads.get();
		let start = Instant::now();
		if threads == 1 {
			black_box(run(subject, mode, iterations));
		} else {
			thread::scope(|s| {
				for _ in 0..threads {
					s.spawn(move || black_box(run(subject, mode, iterations)));
				}
			});
		}
		Measurement { subject, mode, threads, iterations, elapsed: start.elapsed() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn synthetic_input_test() {
		assert_eq!(synthetic_input(0), CivilDateTime::new(0, 0, 0, 0, 0, 0));
		assert_eq!(synthetic_input(0xffff_ffff), CivilDateTime::new(0x7ff, 7, 15, 15, 31, 31));
		assert_eq!(synthetic_input(0x1234), CivilDateTime::new(0x234, 4, 4, 4, 0x14, 0x14));
	}

	#[test]
	fn inputs_stay_supported_test() {
		// Every synthetic year is supported, so the algorithms agree wherever the month is in range.
		// Month 0 is where the table lookup wraps to December of the same year.
		let mut inputs = SyntheticInputs::new(Subject::Algorithm(Algorithm::Fast));
		for _ in 0..0x4000 {
			let t = inputs.next().unwrap();
			let expected = Algorithm::DaysFromCivil.epoch_seconds(t);
			for a in Algorithm::ALL {
				if a == Algorithm::Table && t.date.month == 0 { continue }
				assert_eq!(a.epoch_seconds(t), expected, "{} {:?}", a, t);
			}
		}
	}

	#[test]
	fn run_agrees_test() {
		let latency = run(Subject::Algorithm(Algorithm::DaysFromCivil), Mode::Latency, 5000);
		for a in Algorithm::ALL {
			assert_eq!(run(Subject::Algorithm(a), Mode::Latency, 5000), latency, "{}", a);
		}
		let throughput = run(Subject::Algorithm(Algorithm::DaysFromCivil), Mode::Throughput, 5000);
		for a in [Algorithm::Fast, Algorithm::Fortran] {
			assert_eq!(run(Subject::Algorithm(a), Mode::Throughput, 5000), throughput, "{}", a);
		}
	}

	#[cfg(feature = "oracle")]
	#[test]
	fn oracle_input_test() {
		let t = Subject::Oracle.input(0x8a5);
		assert_eq!(t.date.year, 1900 + 0x25);
		assert_eq!(t.date.month, 5);
		assert!(Subject::all(true).any(|s| s == Subject::Oracle));
		assert!(!Subject::all(false).any(|s| s == Subject::Oracle));
	}
}
