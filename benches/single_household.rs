//! Benchmark one full calculation cycle for a single household:
//! estimate, recommend, and chart render.

use carbon_calculator_rust::chart::{SvgChart, TextChart};
use carbon_calculator_rust::estimator::estimate;
use carbon_calculator_rust::inputs::{DietType, ElectricityUnit, UserInputs};
use carbon_calculator_rust::tips::recommend;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_inputs() -> UserInputs {
    UserInputs {
        electricity_usage: 200.0,
        electricity_unit: ElectricityUnit::Kwh,
        driving_distance: 150.0,
        diet_type: DietType::NonVeg,
    }
}

fn bench_estimate(c: &mut Criterion) {
    let inputs = sample_inputs();
    c.bench_function("estimate", |b| b.iter(|| estimate(black_box(&inputs))));
}

fn bench_recommend(c: &mut Criterion) {
    let inputs = sample_inputs();
    let footprint = estimate(&inputs);
    c.bench_function("recommend", |b| {
        b.iter(|| recommend(black_box(&inputs), black_box(&footprint)))
    });
}

fn bench_render(c: &mut Criterion) {
    let footprint = estimate(&sample_inputs());
    c.bench_function("svg_chart", |b| {
        b.iter(|| SvgChart::render(black_box(&footprint)))
    });
    c.bench_function("text_chart", |b| {
        b.iter(|| TextChart::render(black_box(&footprint)))
    });
}

criterion_group!(benches, bench_estimate, bench_recommend, bench_render);
criterion_main!(benches);
