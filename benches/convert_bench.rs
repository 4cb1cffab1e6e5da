//! Benchmarks for colorkit conversions.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use colorkit::color::{Channel, Cmyk, Color, Hsl, Rgb};
use colorkit::time::Time;

fn benchmark_hex_parse(c: &mut Criterion) {
    c.bench_function("hex_parse_cached", |b| {
        b.iter(|| black_box(Color::from_hex("#FF5733").unwrap()));
    });

    // Distinct inputs defeat the cache and hit the regex every time.
    let inputs: Vec<String> = (0u32..1024).map(|i| format!("#{:06X}", i * 16_383)).collect();
    c.bench_function("hex_parse_uncached", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % inputs.len();
            black_box(Color::from_hex(&inputs[i]).unwrap());
        });
    });
}

fn benchmark_constructors(c: &mut Criterion) {
    c.bench_function("from_rgb", |b| {
        b.iter(|| black_box(Color::from_rgb(Rgb::new(255, 87, 51)).unwrap()));
    });

    c.bench_function("from_hsl", |b| {
        b.iter(|| black_box(Color::from_hsl(Hsl::new(11.0, 100.0, 60.0)).unwrap()));
    });

    c.bench_function("from_cmyk", |b| {
        b.iter(|| black_box(Color::from_cmyk(Cmyk::new(0.0, 65.9, 80.0, 0.0)).unwrap()));
    });
}

fn benchmark_renderings(c: &mut Criterion) {
    let color = Color::from_hex("#FF5733AA").unwrap();

    c.bench_function("to_hex", |b| {
        b.iter(|| black_box(color.to_hex()));
    });

    c.bench_function("to_hsl", |b| {
        b.iter(|| black_box(color.to_hsl()));
    });

    c.bench_function("to_cmyk", |b| {
        b.iter(|| black_box(color.to_cmyk()));
    });

    c.bench_function("to_decimal_reordered", |b| {
        b.iter(|| {
            black_box(
                color
                    .to_decimal_with(&[Channel::Blue, Channel::Green, Channel::Red])
                    .unwrap(),
            );
        });
    });

    c.bench_function("to_json", |b| {
        b.iter(|| black_box(color.to_json()));
    });
}

fn benchmark_mutators(c: &mut Criterion) {
    let other = Color::from_hex("#33FF57").unwrap();

    c.bench_function("lighten", |b| {
        b.iter(|| {
            let mut color = Color::from_decimal(0xFF5733, false);
            black_box(color.lighten(20.0).unwrap());
        });
    });

    c.bench_function("mix", |b| {
        b.iter(|| {
            let mut color = Color::from_decimal(0xFF5733, false);
            black_box(color.mix(&other, 50.0).unwrap());
        });
    });
}

fn benchmark_duration_parse(c: &mut Criterion) {
    c.bench_function("duration_parse", |b| {
        b.iter(|| black_box("2 days 4 hours 30m".parse::<Time>().unwrap()));
    });
}

criterion_group!(
    benches,
    benchmark_hex_parse,
    benchmark_constructors,
    benchmark_renderings,
    benchmark_mutators,
    benchmark_duration_parse
);
criterion_main!(benches);
