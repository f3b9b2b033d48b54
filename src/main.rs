//! Cross-check and benchmark civil date to linear time conversions.
//!
//! This application drives the algorithms of the [`civil`] crate: it sweeps a range of Julian Day
//! Numbers, converts each to a civil date, and checks that every algorithm (and the platform's
//! `timegm`) converts it back to the same Unix time. It then checks a short list of hand-picked
//! instants (a far-future date and a leap second boundary), and finally measures the per-call cost
//! of each conversion.
//!
//! Disagreements are printed to stdout, one per line, and never stop the run:
//! ```text
//! <name>(<year>, <month>, <day>, <hour>, <minute>, <second>) = <actual> != <expected>
//! ```
//! Benchmark results follow, one line per algorithm. The exit status is 0 whether or not any
//! disagreement was found; it is only non-zero for invalid command line arguments.
//!
//! # Command Line Arguments
//!
//! General form: `date-algorithms [options...]`
//!
//! | Short form | Long form        | Argument                   | Default    | Description                            |
//! | ---------- | ---------------- | -------------------------- | ---------- | -------------------------------------- |
//! |            | `--from`         | Julian Day Number          | 0          | The first day of the sweep             |
//! |            | `--to`           | Julian Day Number          | 10000000   | The end of the sweep, exclusive        |
//! |            | `--no-oracle`    |                            |            | Skip the platform `timegm` entirely    |
//! |            | `--skip-verify`  |                            |            | Skip the sweep and the fixed instants  |
//! |            | `--skip-bench`   |                            |            | Skip the benchmarks                    |
//! | `-n`       | `--iterations`   | Integer > 0                | 10000000   | Calls per thread per benchmark         |
//! | `-j`       | `--threads`      | Integer > 0                | 1          | Worker threads per benchmark           |
//! | `-m`       | `--mode`         | `throughput` or `latency`  | throughput | How benchmark inputs are derived       |
//! | `-v`       |                  |                            |            | More logging on stderr, repeatable     |
//!
//! The default sweep covers 4713 BC to 22666 AD. The platform `timegm` is only consulted for years
//! from 1900 onward, since some C libraries reject anything earlier.
//!
//! Logging is configured by `-v` (warnings only by default), or by the `RUST_LOG` environment
//! variable which takes precedence.
//!
//! # Examples
//!
//! Run everything with default settings
//! ```sh
//! date-algorithms
//! ```
//!
//! Check the 20th century only, without benchmarks
//! ```sh
//! date-algorithms --from 2415021 --to 2451545 --skip-bench
//! ```
//!
//! Benchmark call latency on 8 threads
//! ```sh
//! date-algorithms --skip-verify -m latency -j 8
//! ```

use std::process::ExitCode;
use std::time::Instant;

use civil::bench::{self, Subject};
use civil::harness::{self, Mismatch, Options, Summary};
use tracing::{debug, info, warn};

use args::{Arguments, ArgumentsError};

mod args;
mod logging;

/// Print one disagreement as a report line.
fn report(m: &Mismatch) {
	println!("{}", m);
}

/// Log the counts of a finished check.
fn log_summary(phase: &str, summary: &Summary, started: Instant) {
	info!(
		phase,
		dates = summary.dates,
		comparisons = summary.comparisons,
		mismatches = summary.mismatches,
		elapsed = ?started.elapsed(),
		"check finished"
	);
	debug!(phase, skipped = summary.skipped, "comparisons skipped outside supported ranges");
}

/// Run the sweep and the fixed instants, printing every disagreement.
fn verify(args: &Arguments) -> Summary {
	let options = Options { oracle: args.oracle };

	info!(from = args.sweep.start, to = args.sweep.end, oracle = args.oracle, "sweeping Julian Day Numbers");
	let started = Instant::now();
	let mut total = harness::sweep(args.sweep.clone(), options, report);
	log_summary("sweep", &total, started);

	let started = Instant::now();
	let scenarios = harness::check_scenarios(options, report);
	log_summary("scenarios", &scenarios, started);
	total += scenarios;

	if total.is_clean() {
		info!(comparisons = total.comparisons, "all conversions agree");
	} else {
		warn!(mismatches = total.mismatches, comparisons = total.comparisons, "conversions disagree");
	}
	total
}

/// Measure every subject, printing one line each.
fn benchmark(args: &Arguments) {
	info!(
		iterations = args.iterations.get(),
		threads = args.threads.get(),
		mode = %args.mode,
		"benchmarking"
	);
	for subject in Subject::all(args.oracle && cfg!(unix)) {
		let m = bench::measure(subject, args.mode, args.iterations, args.threads);
		debug!(subject = %subject, elapsed = ?m.elapsed, "measured");
		println!("{}", m);
	}
}

fn main() -> ExitCode {
	let args = match Arguments::parse(std::env::args_os().skip(1)) {
		Ok(a) => a,
		Err(e) => {
			return if let ArgumentsError::Help = e {
				println!("\
Cross-check and benchmark civil date to linear time conversions.

Usage: date-algorithms [OPTIONS]

Options:
  --from <JD>                first Julian Day Number of the sweep, default 0
  --to <JD>                  end of the sweep (exclusive), default 10000000
  --no-oracle                skip the platform timegm
  --skip-verify              skip the sweep and the fixed instants
  --skip-bench               skip the benchmarks
  -n, --iterations <COUNT>   calls per thread per benchmark, default 10000000
  -j, --threads <COUNT>      worker threads per benchmark, default 1
  -m, --mode <MODE>          throughput or latency, default throughput
  -v                         more logging on stderr, repeatable

Examples:
  date-algorithms --skip-bench
  date-algorithms --from 2415021 --to 2451545 --no-oracle
  date-algorithms --skip-verify -m latency -j 8\n");
				ExitCode::SUCCESS
			} else {
				eprintln!("{}", e);
				ExitCode::FAILURE
			}
		}
	};

	logging::init(args.verbose);
	debug!(?args, "configuration");

	if args.oracle && !cfg!(unix) {
		warn!("timegm is not available on this platform, skipping the oracle");
	}

	if args.verify {
		verify(&args);
	}
	if args.bench {
		benchmark(&args);
	}

	// Disagreements are diagnostics, never a failure
	ExitCode::SUCCESS
}
