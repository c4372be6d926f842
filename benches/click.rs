//! Criterion benchmarks for the click path.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use portrait::prelude::*;

/// Benchmark seek table lookups across the page width.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("seek_lookup");
    let table = SeekTable::default();

    for samples in [10usize, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*samples as u64));
        group.bench_with_input(BenchmarkId::new("sweep", samples), samples, |b, &n| {
            b.iter(|| {
                let mut total = 0.0;
                for i in 0..n {
                    let fraction = i as f64 / n as f64;
                    total += table.lookup(black_box(fraction)).target_secs();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

/// Benchmark a full click followed by one animation cycle.
fn bench_click_and_animate(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage");
    let viewport = Viewport::new(1280.0, 720.0);

    group.bench_function("click", |b| {
        let mut stage = Stage::default();
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 37.0) % viewport.width;
            black_box(stage.click(Click::new(x, 360.0), viewport))
        });
    });

    group.bench_function("click_then_all_frames", |b| {
        let mut stage = Stage::default();
        b.iter(|| {
            let out = stage.click(Click::new(640.0, 360.0), viewport);
            if let Some(spawned) = out.spawned {
                while let FrameTick::Show(frame) = stage.tick(spawned.id) {
                    black_box(frame);
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_click_and_animate);

criterion_main!(benches);
