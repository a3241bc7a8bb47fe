use criterion::{black_box, criterion_group, criterion_main, Criterion};
use currency_format::prelude::*;

fn bench_format_code(c: &mut Criterion) {
    let options = FormatOptions::default();
    c.bench_function("format_currency_code", |b| {
        b.iter(|| format_currency(black_box("USD"), black_box(123_456_789.0), &options))
    });
}

fn bench_format_symbol(c: &mut Criterion) {
    let options = FormatOptions::new()
        .with_currency_display(CurrencyDisplay::Symbol)
        .with_sign_display(SignDisplay::Always);
    c.bench_function("format_currency_symbol", |b| {
        b.iter(|| format_currency(black_box("IDR"), black_box(-987_654_321.0), &options))
    });
}

fn bench_unformat(c: &mut Criterion) {
    let options = ParseOptions::default();
    c.bench_function("unformat_currency", |b| {
        b.iter(|| unformat_currency(black_box("EUR"), black_box("€1.234.567,89"), &options))
    });
}

fn bench_round_trip_units(c: &mut Criterion) {
    c.bench_function("minor_major_round_trip", |b| {
        b.iter(|| {
            let major = to_major_unit(black_box("BHD"), black_box(1_234_567.0)).unwrap();
            to_minor_unit("BHD", major).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_format_code,
    bench_format_symbol,
    bench_unformat,
    bench_round_trip_units
);
criterion_main!(benches);
