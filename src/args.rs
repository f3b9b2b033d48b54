//! Support for command line argument parsing.
//!
//! See [crate] documentation for details on command line arguments and examples.

use std::ffi::OsString;
use std::num::NonZero;
use std::ops::Range;
use std::str::FromStr;

use civil::bench::Mode;
use civil::harness::FULL_SWEEP;

/// The error type for parsing command line arguments.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ArgumentsError {
	/// The option was unrecognized. The option is returned as the payload of this variant.
	#[error("Unrecognized option: {0}")]
	UnrecognizedOption(String),
	/// Error converting an option or parameter to UTF-8. The argument index and original
	/// [`OsString`] that could not be converted are returned as the payload of this variant.
	#[error("Invalid UTF-8 in argument {0}: {1:?}")]
	InvalidUTF8(usize, OsString),
	/// The parameter for an option was not supplied. The option is returned as the payload for this
	/// variant.
	#[error("Missing parameter for option {0}")]
	MissingParameter(String),
	/// The parameter for a numeric option could not be parsed or was out of range. The option and
	/// the supplied parameter are returned as the payload of this variant.
	#[error("Invalid number for option {0}: {1}")]
	InvalidNumber(String, String),
	/// The provided benchmark mode was invalid. The supplied mode is returned as the payload of this
	/// variant.
	#[error("Invalid mode: {0}")]
	InvalidMode(String),
	/// The sweep range is empty. The first and end Julian Days are returned as the payload.
	#[error("Empty sweep range: --from {0} is not before --to {1}")]
	EmptyRange(i64, i64),
	/// Help option (-h) was included, so print help details and exit.
	#[error("Help requested")]
	Help
}

/// Parse a string into a benchmark [`Mode`].
///
/// The parsing is case insensitive. Returns [`ArgumentsError::InvalidMode`] if the input string is
/// not one of the defined modes.
fn parse_mode(s: &str) -> Result<Mode, ArgumentsError> {
	match s.to_ascii_lowercase().as_str() {
		"throughput" => Ok(Mode::Throughput),
		"latency" => Ok(Mode::Latency),
		_ => Err(ArgumentsError::InvalidMode(s.to_string()))
	}
}

/// Convert an argument to [`&str`].
///
/// The function takes the argument index `i`, optional argument name `a`, and the argument `s`.
///
/// # Errors
///
/// Returns [`ArgumentsError::InvalidUTF8`] if the argument could not be converted to UTF-8 or
/// [`ArgumentsError::MissingParameter`] if the argument is `None`.
fn arg_to_str<'a, 'b>(i: usize, a: Option<&'a str>, s: Option<&'b OsString>)
	-> Result<&'b str, ArgumentsError>
{
	match s {
		Some(v) => v.to_str().ok_or_else(|| ArgumentsError::InvalidUTF8(i, v.clone())),
		None => Err(ArgumentsError::MissingParameter(a.map(String::from).unwrap_or_default()))
	}
}

/// Parse the parameter of option `a` into a number.
///
/// # Errors
///
/// In addition to the errors of [`arg_to_str`], returns [`ArgumentsError::InvalidNumber`] if the
/// parameter is not a valid `T`.
fn arg_to_num<T: FromStr>(i: usize, a: &str, s: Option<&OsString>) -> Result<T, ArgumentsError> {
	arg_to_str(i, Some(a), s).and_then(
		|v| v.parse().map_err(|_| ArgumentsError::InvalidNumber(a.to_string(), v.to_string()))
	)
}

/// Benchmark calls per thread per subject unless `-n` is given.
const DEFAULT_ITERATIONS: NonZero<u64> = NonZero::new(10_000_000).unwrap();

/// Parsed command line arguments.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Arguments {
	/// Julian Day Numbers to sweep.
	pub sweep: Range<i64>,
	/// Whether to compare against the platform's `timegm`.
	pub oracle: bool,
	/// Whether to run the sweep and the scenarios.
	pub verify: bool,
	/// Whether to run the benchmarks.
	pub bench: bool,
	/// Calls per thread per benchmark subject.
	pub iterations: NonZero<u64>,
	/// Worker threads per benchmark subject.
	pub threads: NonZero<usize>,
	/// How benchmark inputs are derived.
	pub mode: Mode,
	/// Log verbosity, the number of `-v` flags.
	pub verbose: u8
}

impl Default for Arguments {
	fn default() -> Arguments {
		Arguments {
			sweep: FULL_SWEEP,
			oracle: true,
			verify: true,
			bench: true,
			iterations: DEFAULT_ITERATIONS,
			threads: NonZero::<usize>::MIN,
			mode: Mode::Throughput,
			verbose: 0
		}
	}
}

impl Arguments {
	/// Parse command line arguments.
	///
	/// The input can be any type that implements [`Iterator`] that yields [`OsString`], though
	/// typically this would be [`std::env::args_os`]. This function assumes that the application
	/// name is **not** supplied as the first item yielded by `args`, see examples for common use.
	///
	/// # Errors
	///
	/// This function can return any of the variants in [`ArgumentsError`]. See that documentation
	/// for more details.
	///
	/// # Examples
	///
	/// ```ignore
	/// let args = match Arguments::parse(std::env::args_os().skip(1)) {
	/// 	Ok(a) => a,
	/// 	Err(e) => {
	/// 		// Handle error
	/// 		panic!("{}", e);
	/// 	}
	/// };
	/// ```
	pub fn parse(mut args: impl Iterator<Item = OsString>) -> Result<Arguments, ArgumentsError> {
		let mut parsed = Arguments::default();
		let mut arg = args.next();
		let mut i = 0;
		loop {
			if arg.is_none() { break; }
			match arg_to_str(i, None, arg.as_ref())? {
				"--from" => {
					parsed.sweep.start = arg_to_num(i+1, "--from", args.next().as_ref())?;
					// Increment because we called args.next()
					i += 1;
				},
				"--to" => {
					parsed.sweep.end = arg_to_num(i+1, "--to", args.next().as_ref())?;
					i += 1;
				},
				n @ ("-n" | "--iterations") => {
					parsed.iterations = arg_to_num(i+1, n, args.next().as_ref())?;
					i += 1;
				},
				j @ ("-j" | "--threads") => {
					parsed.threads = arg_to_num(i+1, j, args.next().as_ref())?;
					i += 1;
				},
				m @ ("-m" | "--mode") => {
					parsed.mode = parse_mode(arg_to_str(i+1, Some(m), args.next().as_ref())?)?;
					i += 1;
				},
				"--no-oracle" => parsed.oracle = false,
				"--skip-verify" => parsed.verify = false,
				"--skip-bench" => parsed.bench = false,
				"-h" | "--help" => return Err(ArgumentsError::Help),
				v => {
					// Repeatable verbosity, also accepted combined as -vv, -vvv
					match v.strip_prefix('-') {
						Some(flags) if !flags.is_empty() && flags.bytes().all(|b| b == b'v') => {
							parsed.verbose = parsed.verbose.saturating_add(flags.len() as u8);
						},
						_ => return Err(ArgumentsError::UnrecognizedOption(v.to_string()))
					}
				}
			}
			arg = args.next();
			i += 1;
		}

		if parsed.verify && parsed.sweep.is_empty() {
			return Err(ArgumentsError::EmptyRange(parsed.sweep.start, parsed.sweep.end));
		}

		Ok(parsed)
	}
}
