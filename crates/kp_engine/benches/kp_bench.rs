use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kp_engine::{
    Chart, HouseGroup, KpPosition, PeriodLords, Placement, Transits, analyze, horary,
    next_sub_change, sub_at_degree, verify_event,
};
use kp_vedic_base::Graha;

fn sample_chart() -> Chart {
    let cusps = [
        100.5, 125.2, 151.0, 181.3, 214.8, 248.9, 280.5, 305.2, 331.0, 1.3, 34.8, 68.9,
    ];
    let placements = vec![
        Placement::new(Graha::Surya, 265.3, 6),
        Placement::new(Graha::Chandra, 12.7, 10),
        Placement::new(Graha::Mangal, 140.2, 2),
        Placement::new(Graha::Buddh, 250.1, 6),
        Placement::new(Graha::Guru, 45.6, 11),
        Placement::new(Graha::Shukra, 290.4, 7),
        Placement::new(Graha::Shani, 318.9, 8),
        Placement::new(Graha::Rahu, 200.0, 4),
        Placement::new(Graha::Ketu, 20.0, 10),
    ];
    match Chart::new(cusps, placements) {
        Ok(chart) => chart,
        Err(e) => panic!("bench chart rejected: {e}"),
    }
}

fn lookup_bench(c: &mut Criterion) {
    let lon = 237.891;

    let mut group = c.benchmark_group("lookup");
    group.bench_function("sub_at_degree", |b| {
        b.iter(|| sub_at_degree(black_box(lon)))
    });
    group.bench_function("resolve", |b| {
        b.iter(|| KpPosition::resolve(black_box(lon)))
    });
    group.bench_function("next_sub_change", |b| {
        b.iter(|| next_sub_change(black_box(lon)))
    });
    group.bench_function("horary", |b| {
        b.iter(|| horary(black_box(137), HouseGroup::Business))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let periods = PeriodLords::new(Graha::Guru, Graha::Shukra).with_antara(Graha::Chandra);
    let mut transits = Transits::new();
    transits.insert(Graha::Guru, 52.3);
    transits.insert(Graha::Shani, 325.0);
    transits.insert(Graha::Rahu, 190.4);

    let mut group = c.benchmark_group("chart");
    group.bench_function("analyze", |b| b.iter(|| analyze(black_box(&chart))));
    group.bench_function("verify_event", |b| {
        b.iter(|| {
            verify_event(
                black_box(&chart),
                HouseGroup::Marriage,
                &periods,
                Some(&transits),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, lookup_bench, chart_bench);
criterion_main!(benches);
