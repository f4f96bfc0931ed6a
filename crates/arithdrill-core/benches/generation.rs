use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use arithdrill_core::engine::generate_with;
use arithdrill_core::model::{CategoryCounts, GenerationSettings, Operator};
use arithdrill_core::scoring::score;
use arithdrill_core::generators::generate_question;

fn sheet(counts: CategoryCounts) -> GenerationSettings {
    GenerationSettings {
        counts,
        min_num: 1,
        max_num: 100,
        ..Default::default()
    }
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_question");
    let integer = GenerationSettings::default();
    let decimal = GenerationSettings {
        enable_decimal: true,
        decimal_places: 2,
        ..Default::default()
    };

    for operator in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
        let mut rng = StdRng::seed_from_u64(1);
        group.bench_function(format!("integer {operator}"), |b| {
            b.iter(|| generate_question(&mut rng, black_box(operator), black_box(&integer)))
        });
        let mut rng = StdRng::seed_from_u64(1);
        group.bench_function(format!("decimal {operator}"), |b| {
            b.iter(|| generate_question(&mut rng, black_box(operator), black_box(&decimal)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    let default_sheet = sheet(CategoryCounts::default());
    group.bench_function("default sheet", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| generate_with(&mut rng, black_box(&default_sheet)))
    });

    let full_sheet = sheet(CategoryCounts {
        add: 25,
        subtract: 25,
        multiply: 25,
        divide: 25,
        mixed: 25,
        bracketed: 25,
        fill_blank: 25,
        vertical: 25,
    });
    group.bench_function("200 questions", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| generate_with(&mut rng, black_box(&full_sheet)))
    });

    // Tiny range: the dedup pass exhausts its attempts on almost every question.
    let crowded = GenerationSettings {
        counts: CategoryCounts {
            add: 50,
            ..CategoryCounts::none()
        },
        min_num: 0,
        max_num: 2,
        ..Default::default()
    };
    group.bench_function("crowded dedup", |b| {
        let mut rng = StdRng::seed_from_u64(4);
        b.iter(|| generate_with(&mut rng, black_box(&crowded)))
    });

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(5);
    let set = generate_with(&mut rng, &sheet(CategoryCounts::default())).unwrap_or_default();
    let responses: Vec<Option<f64>> = set.iter().map(|q| Some(q.answer)).collect();

    c.bench_function("score default sheet", |b| {
        b.iter(|| score(black_box(&set), black_box(&responses)))
    });
}

criterion_group!(benches, bench_single, bench_batch, bench_score);
criterion_main!(benches);
