use criterion::{Criterion, criterion_group, criterion_main};
use guess_chart::api::{GuessChart, GuessChartConfig};
use guess_chart::core::{CoordinateMapper, DataPoint, DomainBounds, Viewport};
use guess_chart::guess::{GuessGrid, GuessPolicy, GuessState, record_drag};
use guess_chart::render::NullRenderer;
use std::hint::black_box;

fn bench_mapper_round_trip(c: &mut Criterion) {
    let bounds = DomainBounds::new(0.0, 10_000.0, -50.0, 50.0).expect("valid bounds");
    let mapper = CoordinateMapper::new(Viewport::new(1920, 1080), bounds).expect("valid mapper");

    c.bench_function("mapper_round_trip", |b| {
        b.iter(|| {
            let (px, py) = mapper.to_pixel(black_box(DataPoint::new(4_321.123, 12.5)));
            let _ = mapper.to_domain(px, py);
        })
    });
}

fn bench_record_drag_sweep_2k(c: &mut Criterion) {
    let reference: Vec<DataPoint> = (0..2_000)
        .map(|i| DataPoint::new(i as f64, (i as f64 * 0.01).sin()))
        .collect();
    let bounds = DomainBounds::new(0.0, 1_999.0, -1.0, 1.0).expect("valid bounds");
    let policy = GuessPolicy::new(GuessGrid::exact_for(&reference).expect("grid"));
    let seed = GuessState::new(&reference, bounds, policy).expect("state");

    c.bench_function("record_drag_sweep_2k", |b| {
        b.iter(|| {
            let mut state = seed.clone();
            for i in (0..2_000).step_by(7) {
                let (next, _) = record_drag(state, black_box(i as f64), black_box(0.25));
                state = next;
            }
            let (state, _) = record_drag(state, 1_999.0, 0.0);
            black_box(state.is_complete())
        })
    });
}

fn bench_guess_snapshot_json_500(c: &mut Criterion) {
    let reference: Vec<DataPoint> = (0..500)
        .map(|i| DataPoint::new(i as f64, (i % 17) as f64))
        .collect();
    let mut chart = GuessChart::new(
        NullRenderer::default(),
        reference,
        GuessChartConfig::new(Viewport::new(1600, 900)),
    )
    .expect("chart init");
    let _ = chart.drag_to(1_600.0, 450.0);

    c.bench_function("guess_snapshot_json_500", |b| {
        b.iter(|| {
            let _ = chart
                .snapshot_json_contract_v1_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_mapper_round_trip,
    bench_record_drag_sweep_2k,
    bench_guess_snapshot_json_500
);
criterion_main!(benches);
