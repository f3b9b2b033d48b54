//! Statistically sampled timings of every conversion, complementing the quick single-pass timings
//! of the `date-algorithms` binary.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use civil::bench::{Mode, Subject, SyntheticInputs, run};
use civil::CivilDateTime;

/// Inputs converted per measured iteration.
const BATCH: usize = 4096;

fn bench_throughput(c: &mut Criterion) {
	let mut group = c.benchmark_group("throughput");
	group.throughput(Throughput::Elements(BATCH as u64));

	for subject in Subject::all(true) {
		let inputs: Vec<CivilDateTime> = SyntheticInputs::new(subject).take(BATCH).collect();
		group.bench_with_input(BenchmarkId::from_parameter(subject), &inputs, |b, inputs| {
			b.iter(|| {
				let mut acc = 0i64;
				for &t in inputs {
					acc = acc.wrapping_add(subject.call(black_box(t)));
				}
				acc
			})
		});
	}

	group.finish();
}

fn bench_latency(c: &mut Criterion) {
	let mut group = c.benchmark_group("latency");
	group.throughput(Throughput::Elements(BATCH as u64));

	for subject in Subject::all(true) {
		group.bench_function(BenchmarkId::from_parameter(subject), |b| {
			b.iter(|| run(black_box(subject), Mode::Latency, BATCH as u64))
		});
	}

	group.finish();
}

fn bench_leap_day(c: &mut Criterion) {
	let mut group = c.benchmark_group("leap_day");
	let leap = CivilDateTime::new(2000, 2, 29, 12, 0, 0);

	for subject in Subject::all(false) {
		group.bench_function(BenchmarkId::from_parameter(subject), |b| {
			b.iter(|| subject.call(black_box(leap)))
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_throughput,
	bench_latency,
	bench_leap_day,
);

criterion_main!(benches);
