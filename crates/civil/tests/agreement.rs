use civil::era::civil_from_days;
use civil::harness::{self, Options, FULL_SWEEP};
use civil::{fortran, Algorithm, CivilDate, CivilDateTime, UNIX_EPOCH_JULIAN_DAY};

#[test]
fn strided_full_sweep_test() {
	// Every 7th day of the full sweep so that every weekday and month length is hit
	let mut summary = harness::Summary::default();
	for jd in FULL_SWEEP.step_by(7) {
		summary += harness::check_julian_day(jd, Options::default(), &mut |m| panic!("{}", m));
	}
	assert!(summary.is_clean());
	assert_eq!(summary.skipped, 0);
	assert_eq!(summary.dates, (FULL_SWEEP.end as u64 + 6) / 7);
}

#[test]
fn end_of_sweep_test() {
	let last = FULL_SWEEP.end - 1;
	assert_eq!(fortran::civil_from_julian_day(last), CivilDate::new(22666, 12, 19));
	let summary = harness::sweep(FULL_SWEEP.end - 100_000..FULL_SWEEP.end, Options::default(), |m| panic!("{}", m));
	assert_eq!(summary.dates, 100_000);
	assert!(summary.is_clean());
}

#[test]
fn inverses_agree_test() {
	for jd in FULL_SWEEP.step_by(97) {
		let day = (jd - UNIX_EPOCH_JULIAN_DAY as i64) as i32;
		assert_eq!(civil_from_days(day), fortran::civil_from_julian_day(jd), "jd {}", jd);
	}
}

#[test]
fn time_of_day_test() {
	// The time of day is added the same way by every algorithm, including out of range fields
	let base = CivilDateTime::new(2024, 2, 29, 0, 0, 0);
	let cases = [
		(CivilDateTime::new(2024, 2, 29, 23, 59, 59), 86399),
		(CivilDateTime::new(2024, 2, 29, 24, 0, 0), 86400),
		(CivilDateTime::new(2024, 2, 29, 0, 0, 60), 60),
		(CivilDateTime::new(2024, 2, 29, 0, 60, 0), 3600),
		(CivilDateTime::new(2024, 2, 29, 0, 0, -1), -1)
	];
	for a in Algorithm::ALL {
		let midnight = a.epoch_seconds(base);
		assert_eq!(midnight, 19782 * 86400, "{}", a);
		for (t, offset) in cases {
			assert_eq!(a.epoch_seconds(t), midnight + offset, "{} {:?}", a, t);
		}
	}
}

#[test]
fn century_leap_years_test() {
	for a in Algorithm::ALL {
		for year in (1600..=2400).step_by(100) {
			let feb = a.unix_day(year, 3, 1) - a.unix_day(year, 2, 1);
			let expected = if year % 400 == 0 { 29 } else { 28 };
			assert_eq!(feb, expected, "{} {}", a, year);
		}
	}
}

#[cfg(all(unix, feature = "oracle"))]
#[test]
fn oracle_agrees_test() {
	let options = Options { oracle: true };
	let start = fortran::julian_day_from_civil(1900, 1, 1) as i64;
	let end = fortran::julian_day_from_civil(2100, 1, 1) as i64;
	let summary = harness::sweep(start..end, options, |m| panic!("{}", m));
	assert!(summary.is_clean());
	assert_eq!(summary.skipped, 0);
	// Four algorithms, the Julian Day check and the oracle
	assert_eq!(summary.comparisons, summary.dates * 6);

	let summary = harness::check_scenarios(options, |m| panic!("{}", m));
	assert!(summary.is_clean());
}
