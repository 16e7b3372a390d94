use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use sizhu_time::{equation_of_time_minutes, true_solar_time};

fn bench_solar(c: &mut Criterion) {
    let civil = NaiveDate::from_ymd_opt(1990, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    c.bench_function("equation_of_time", |b| {
        b.iter(|| black_box(equation_of_time_minutes(black_box(civil))))
    });

    c.bench_function("true_solar_time", |b| {
        b.iter(|| black_box(true_solar_time(black_box(civil), black_box(104.06)).unwrap()))
    });
}

criterion_group!(benches, bench_solar);
criterion_main!(benches);
