use criterion::{criterion_group, criterion_main, Criterion};
use jptime::{fmt_int_kanji_meisuu, holidays_in_year, JpLayout, JpTime};
use std::hint::black_box;

fn bench_meisuu(c: &mut Criterion) {
    c.bench_function("fmt_int_kanji_meisuu 0..100000", |b| {
        b.iter(|| {
            for n in 0..100_000 {
                black_box(fmt_int_kanji_meisuu(black_box(n)));
            }
        })
    });
}

fn bench_holiday(c: &mut Criterion) {
    let start = JpTime::from_ymd_hms(2015, 1, 1, 0, 0, 0).expect("valid date");
    c.bench_function("holiday daily sweep 2015", |b| {
        b.iter(|| {
            for i in 0..365 {
                black_box(start.add_days(black_box(i)).holiday());
            }
        })
    });
    c.bench_function("holidays_in_year 2015", |b| {
        b.iter(|| holidays_in_year(black_box(2015)))
    });
}

fn bench_format(c: &mut Criterion) {
    let t = JpTime::from_ymd_hms(2006, 1, 2, 15, 4, 5).expect("valid date");
    let mut group = c.benchmark_group("jp_format");
    for layout in JpLayout::ALL {
        group.bench_function(layout.name(), |b| b.iter(|| t.jp_format(black_box(layout))));
    }
    group.finish();
}

criterion_group!(benches, bench_meisuu, bench_holiday, bench_format);
criterion_main!(benches);
