//! Conversions between proleptic Gregorian calendar dates and linear time.
//!
//! This crate collects several closed-form algorithms that turn a civil date (year, month, day)
//! into a linear day count, and a civil date time into Unix seconds. Each algorithm uses a
//! different integer arithmetic trick to stay branch-light and avoid floating point, and all of
//! them produce identical results across the supported date range:
//!
//! - [`fortran`]: the Julian Day formula of Fliegel & Van Flandern (1968), plus its inverse which
//!   serves as the ground truth for testing the others.
//! - [`table`]: a cumulative day-of-year lookup table with ceiling-style leap day corrections.
//! - [`fast`]: a March-based year computed with unsigned arithmetic and a carry flag.
//! - [`era`]: the 400-year era algorithm popularized by Howard Hinnant.
//!
//! [`Algorithm`] enumerates these so they can be iterated uniformly, and [`harness`] cross-checks
//! them against each other (and optionally against the platform's `timegm`, see [`oracle`]).
//! [`bench`] provides the synthetic workloads used to measure their per-call cost.
//!
//! Every day is treated as exactly 86400 seconds, as in POSIX time. There is no leap second table:
//! `23:59:60` lands on the same second as `00:00:00` of the following day.
//!
//! The crate is `no_std` by default. The `std` feature enables the timed benchmark loop in
//! [`bench`], and the `oracle` feature enables the `timegm` adapter in [`oracle`].
//!
//! # Examples
//!
//! ```
//! # use civil::{Algorithm, CivilDateTime};
//! let t = CivilDateTime::new(1998, 12, 31, 23, 59, 59);
//! for a in Algorithm::ALL {
//! 	assert_eq!(a.epoch_seconds(t), 915148799);
//! }
//! ```
//!
//! Recovering a civil date from a Julian Day Number.
//! ```
//! # use civil::{fortran, CivilDate};
//! assert_eq!(fortran::civil_from_julian_day(2440588), CivilDate::new(1970, 1, 1));
//! assert_eq!(fortran::julian_day_from_civil(1970, 1, 1), 2440588);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub mod algorithm;
pub mod bench;
pub mod date;
pub mod era;
pub mod fast;
pub mod fortran;
pub mod harness;
#[cfg(feature = "oracle")]
pub mod oracle;
pub mod table;

pub use algorithm::Algorithm;
pub use date::*;
