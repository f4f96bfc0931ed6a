//! Per-operator question generators.
//!
//! Each generator draws operands from the configured range and repairs
//! them until the pedagogical constraints hold: subtraction never goes
//! below zero when `no_negative` is set, integer division is exact when
//! `no_remainder` is set, and decimal answers carry no more precision than
//! the configured number of places.

use rand::Rng;

use crate::model::{Category, GenerationSettings, Operator, Question};
use crate::random::{format_number, random_decimal, random_int, round_to, window};

/// Largest operand for integer multiplication and exact division.
pub const TIMES_TABLE_CAP: i64 = 12;

/// Smallest operand for integer multiplication and exact division.
pub const TIMES_TABLE_FLOOR: i64 = 2;

/// Range of the second operand in decimal multiplication and division.
pub const DECIMAL_FACTOR_RANGE: (f64, f64) = (1.0, 5.0);

/// Resampling budget when subtraction draws two equal operands.
const MAX_DISTINCT_ATTEMPTS: u32 = 20;

/// Generate one question for a simple operator.
pub fn generate_question<R: Rng + ?Sized>(
    rng: &mut R,
    operator: Operator,
    settings: &GenerationSettings,
) -> Question {
    match settings.precision() {
        Some(places) => decimal_question(rng, operator, settings, places),
        None => integer_question(rng, operator, settings),
    }
}

fn integer_question<R: Rng + ?Sized>(
    rng: &mut R,
    operator: Operator,
    settings: &GenerationSettings,
) -> Question {
    let (min, max) = (settings.min_num, settings.max_num);
    let (a, b, answer) = match operator {
        Operator::Add | Operator::Subtract => {
            let (a, b) = integer_pair(rng, operator, settings);
            (a, b, apply(operator, a, b))
        }
        Operator::Multiply => {
            let (lo, hi) = window(min, max, TIMES_TABLE_FLOOR, TIMES_TABLE_CAP);
            let a = random_int(rng, lo, hi);
            let b = random_int(rng, lo, hi);
            (a, b, a * b)
        }
        Operator::Divide if settings.no_remainder => {
            let (lo, hi) = window(TIMES_TABLE_FLOOR, max, TIMES_TABLE_FLOOR, TIMES_TABLE_CAP);
            let quotient = random_int(rng, lo, hi);
            let divisor = random_int(rng, lo, hi);
            (quotient * divisor, divisor, quotient)
        }
        Operator::Divide => {
            let dividend = random_int(rng, min, max);
            let (lo, hi) = window(min, max, 1, i64::MAX);
            let divisor = random_int(rng, lo, hi);
            (dividend, divisor, dividend / divisor)
        }
    };

    Question::inline(
        category_for(operator),
        format!("{a} {operator} {b} = "),
        answer as f64,
    )
}

/// Draw the two operands of an integer addition or subtraction.
///
/// Subtraction resamples the second operand while it equals the first and
/// swaps the pair when `no_negative` would otherwise be violated.
fn integer_pair<R: Rng + ?Sized>(
    rng: &mut R,
    operator: Operator,
    settings: &GenerationSettings,
) -> (i64, i64) {
    let (min, max) = (settings.min_num, settings.max_num);
    let mut a = random_int(rng, min, max);
    let mut b = random_int(rng, min, max);
    if operator == Operator::Subtract {
        let mut attempts = 0;
        while a == b && attempts < MAX_DISTINCT_ATTEMPTS {
            b = random_int(rng, min, max);
            attempts += 1;
        }
        if settings.no_negative && a < b {
            std::mem::swap(&mut a, &mut b);
        }
    }
    (a, b)
}

/// Evaluate `a op b` on integers.
pub(crate) fn apply(operator: Operator, a: i64, b: i64) -> i64 {
    match operator {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => a / b,
    }
}

fn decimal_question<R: Rng + ?Sized>(
    rng: &mut R,
    operator: Operator,
    settings: &GenerationSettings,
    places: u32,
) -> Question {
    let (min, max) = (settings.min_num as f64, settings.max_num as f64);
    let (factor_min, factor_max) = DECIMAL_FACTOR_RANGE;

    let (a, b, raw) = match operator {
        Operator::Add => {
            let a = random_decimal(rng, min, max, places);
            let b = random_decimal(rng, min, max, places);
            (a, b, a + b)
        }
        Operator::Subtract => {
            let mut a = random_decimal(rng, min, max, places);
            let mut b = random_decimal(rng, min, max, places);
            let mut attempts = 0;
            while a == b && attempts < MAX_DISTINCT_ATTEMPTS {
                b = random_decimal(rng, min, max, places);
                attempts += 1;
            }
            if settings.no_negative && a < b {
                std::mem::swap(&mut a, &mut b);
            }
            (a, b, a - b)
        }
        Operator::Multiply => {
            let a = random_decimal(rng, min, max, places);
            let b = random_decimal(rng, factor_min, factor_max, places);
            (a, b, a * b)
        }
        Operator::Divide => {
            let a = random_decimal(rng, min, max, places);
            let mut b = random_decimal(rng, factor_min, factor_max, places);
            while b == 0.0 {
                b = random_decimal(rng, factor_min, factor_max, places);
            }
            (a, b, a / b)
        }
    };

    Question::inline(
        category_for(operator),
        format!(
            "{} {operator} {} = ",
            format_number(a, places),
            format_number(b, places)
        ),
        round_to(raw, places),
    )
}

fn category_for(operator: Operator) -> Category {
    match operator {
        Operator::Add => Category::Add,
        Operator::Subtract => Category::Subtract,
        Operator::Multiply => Category::Multiply,
        Operator::Divide => Category::Divide,
    }
}
