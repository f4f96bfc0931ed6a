//! Property tests for the generation invariants.

use arithdrill_core::composite::mixed_question;
use arithdrill_core::engine::{generate_with, shuffle_questions};
use arithdrill_core::generators::generate_question;
use arithdrill_core::model::{
    Category, CategoryCounts, GenerationSettings, Operator, Question, QuestionOrder,
};
use arithdrill_core::random::{random_decimal, round_to};
use arithdrill_core::ValidationError;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn range() -> impl Strategy<Value = (i64, i64)> {
    (0i64..50, 1i64..200).prop_map(|(min, span)| (min, min + span))
}

fn only(category: Category, n: u32) -> CategoryCounts {
    let mut counts = CategoryCounts::none();
    counts.set(category, n);
    counts
}

fn operands(q: &Question) -> (i64, i64) {
    let parts: Vec<&str> = q.text.split_whitespace().collect();
    (parts[0].parse().unwrap(), parts[2].parse().unwrap())
}

proptest! {
    #[test]
    fn no_negative_results_for_subtraction_shapes(seed in any::<u64>(), (min, max) in range()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts = CategoryCounts::none();
        counts.subtract = 10;
        counts.vertical = 10;
        counts.fill_blank = 10;
        counts.mixed = 10;
        let settings = GenerationSettings {
            counts,
            min_num: min,
            max_num: max,
            no_negative: true,
            ..Default::default()
        };
        let set = generate_with(&mut rng, &settings).unwrap();
        prop_assert_eq!(set.len(), 40);
        for q in &set {
            prop_assert!(q.answer >= 0.0, "{}", q.text);
            if q.category == Category::FillBlank {
                let shown: i64 = q.text.rsplit(' ').next().unwrap().parse().unwrap();
                prop_assert!(shown >= 0, "{}", q.text);
            }
        }
    }

    #[test]
    fn exact_division_has_no_remainder(seed in any::<u64>(), (min, max) in range()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let settings = GenerationSettings {
            counts: only(Category::Divide, 20),
            min_num: min,
            max_num: max,
            no_remainder: true,
            ..Default::default()
        };
        for q in &generate_with(&mut rng, &settings).unwrap() {
            let (dividend, divisor) = operands(q);
            prop_assert!(divisor != 0);
            prop_assert_eq!(dividend % divisor, 0);
            prop_assert_eq!(dividend / divisor, q.answer as i64);
        }
    }

    #[test]
    fn decimal_answers_carry_configured_precision(
        seed in any::<u64>(),
        (min, max) in range(),
        places in 1u32..=2,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let settings = GenerationSettings {
            counts: CategoryCounts {
                add: 5,
                subtract: 5,
                multiply: 5,
                divide: 5,
                ..CategoryCounts::none()
            },
            min_num: min,
            max_num: max,
            enable_decimal: true,
            decimal_places: places,
            ..Default::default()
        };
        let set = generate_with(&mut rng, &settings).unwrap();
        prop_assert_eq!(set.decimal_places, Some(places));
        for q in &set {
            prop_assert_eq!(round_to(q.answer, places), q.answer);
        }
    }

    #[test]
    fn shuffling_preserves_the_multiset(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let settings = GenerationSettings {
            counts: CategoryCounts {
                mixed: 5,
                bracketed: 5,
                ..CategoryCounts::default()
            },
            order: QuestionOrder::Sequential,
            ..Default::default()
        };
        let set = generate_with(&mut rng, &settings).unwrap();
        let mut shuffled = set.questions.clone();
        shuffle_questions(&mut rng, &mut shuffled);

        let key = |q: &Question| (q.text.clone(), q.answer.to_bits());
        let mut before: Vec<_> = set.iter().map(key).collect();
        let mut after: Vec<_> = shuffled.iter().map(key).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn zero_total_always_fails(seed in any::<u64>(), (min, max) in range(), decimal in any::<bool>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let settings = GenerationSettings {
            counts: CategoryCounts::none(),
            min_num: min,
            max_num: max,
            enable_decimal: decimal,
            ..Default::default()
        };
        prop_assert_eq!(generate_with(&mut rng, &settings), Err(ValidationError::NoQuestions));
    }

    #[test]
    fn length_matches_requested_counts(
        seed in any::<u64>(),
        add in 0u32..6,
        divide in 0u32..6,
        bracketed in 0u32..6,
        vertical in 1u32..6,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let settings = GenerationSettings {
            counts: CategoryCounts { add, divide, bracketed, vertical, ..CategoryCounts::none() },
            ..Default::default()
        };
        let set = generate_with(&mut rng, &settings).unwrap();
        prop_assert_eq!(set.len() as u32, add + divide + bracketed + vertical);
    }
}

#[test]
fn add_and_subtract_scenario() {
    let mut rng = StdRng::seed_from_u64(2024);
    let settings = GenerationSettings {
        counts: CategoryCounts {
            add: 5,
            subtract: 5,
            ..CategoryCounts::none()
        },
        min_num: 1,
        max_num: 20,
        no_negative: true,
        enable_decimal: false,
        ..Default::default()
    };
    let set = generate_with(&mut rng, &settings).unwrap();
    assert_eq!(set.len(), 10);
    for q in &set {
        let (a, b) = operands(q);
        match q.category {
            Category::Add => assert!((1..=20).contains(&a) && (1..=20).contains(&b)),
            Category::Subtract => assert!(q.answer >= 0.0),
            other => panic!("unexpected {other}"),
        }
    }
}

#[test]
fn random_decimal_thousand_draws() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let v = random_decimal(&mut rng, 1.0, 5.0, 1);
        assert!((1.0..=5.0).contains(&v));
        assert!(((v * 10.0) - (v * 10.0).round()).abs() < 1e-9);
    }
}

#[test]
fn exact_division_scenario() {
    let mut rng = StdRng::seed_from_u64(6);
    let settings = GenerationSettings {
        min_num: 1,
        max_num: 12,
        no_remainder: true,
        ..Default::default()
    };
    for _ in 0..1000 {
        let q = generate_question(&mut rng, Operator::Divide, &settings);
        let (num1, num2) = operands(&q);
        assert_eq!(num1, q.answer as i64 * num2);
    }
}

#[test]
fn mixed_scenario_never_negative() {
    let mut rng = StdRng::seed_from_u64(7);
    let settings = GenerationSettings {
        no_negative: true,
        ..Default::default()
    };
    for _ in 0..1000 {
        assert!(mixed_question(&mut rng, &settings).answer >= 0.0);
    }
}
