use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pi_spigot::{DecimalExpansion, DigitGenerator, PiSpigot};
use std::time::Instant;

// Digit counts per benchmark iteration. Cost per digit grows with the
// position in the sequence, so each size gets its own measurement.
const DIGIT_COUNTS: [usize; 3] = [100, 1_000, 10_000];

/// Benchmarks pulling `n` digits from a fresh generator.
fn bench_generator<G>(c: &mut Criterion, group_name: &str)
where
    G: DigitGenerator<Err = core::convert::Infallible>,
{
    let mut group = c.benchmark_group(group_name);
    group.sample_size(10);

    for n in DIGIT_COUNTS {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("elems", n), &n, |b, &n| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let mut generator = G::new();
                    for _ in 0..n {
                        black_box(generator.next_digit());
                    }
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

/// Benchmarks rendering the full expansion into an in-memory buffer.
fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion/write");
    group.sample_size(10);

    for n in DIGIT_COUNTS {
        let expansion = DecimalExpansion::new(n).unwrap();
        group.throughput(Throughput::Bytes(expansion.rendered_len() as u64));
        group.bench_with_input(BenchmarkId::new("bytes", n), &expansion, |b, expansion| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(expansion.rendered_len());
                let written = expansion
                    .write_to(&mut PiSpigot::new(), &mut buf)
                    .unwrap();
                black_box((written, buf))
            });
        });
    }

    group.finish();
}

fn benchmark_spigot_basic(c: &mut Criterion) {
    bench_generator::<PiSpigot>(c, "spigot/basic");
}

criterion_group!(benches, benchmark_spigot_basic, bench_expansion);
criterion_main!(benches);
