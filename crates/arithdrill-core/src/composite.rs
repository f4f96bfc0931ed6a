//! Composite question generators.
//!
//! Mixed chains, bracketed expressions, fill-in-the-blank and vertical
//! problems. These always work on integers; the decimal flag only applies
//! to the simple operator categories.

use rand::Rng;

use crate::generators::{apply, generate_question};
use crate::model::{Category, GenerationSettings, Layout, Operator, Question};
use crate::random::{random_int, window};

/// Cap on the third operand of a mixed chain.
pub const MIXED_TAIL_CAP: i64 = 15;

/// Cap on the operands inside a bracket.
pub const BRACKET_OPERAND_CAP: i64 = 10;

/// Range of the multiplier outside a bracket.
pub const BRACKET_MULTIPLIER_RANGE: (i64, i64) = (2, 5);

/// Regeneration budget for a mixed chain that came out negative.
pub const MAX_MIXED_ATTEMPTS: u32 = 100;

/// Placeholder printed where a fill-in-the-blank operand is hidden.
pub const BLANK: &str = "____";

const ADDITIVE: [Operator; 2] = [Operator::Add, Operator::Subtract];

fn additive<R: Rng + ?Sized>(rng: &mut R) -> Operator {
    ADDITIVE[rng.gen_range(0..ADDITIVE.len())]
}

/// `A op1 B op2 C`, evaluated left to right.
///
/// With `no_negative`, a negative chain is regenerated from scratch. After
/// [`MAX_MIXED_ATTEMPTS`] the last draw is kept with both operators turned
/// into additions, which cannot be negative for a valid range.
pub fn mixed_question<R: Rng + ?Sized>(rng: &mut R, settings: &GenerationSettings) -> Question {
    let (min, max) = (settings.min_num, settings.max_num);
    let (tail_lo, tail_hi) = window(min, max, min, MIXED_TAIL_CAP);

    let mut attempt = 0;
    loop {
        attempt += 1;
        let mut op1 = additive(rng);
        let mut op2 = additive(rng);
        let a = random_int(rng, min, max);
        let b = random_int(rng, min, max);
        let c = random_int(rng, tail_lo, tail_hi);

        let mut answer = apply(op2, apply(op1, a, b), c);
        if settings.no_negative && answer < 0 {
            if attempt < MAX_MIXED_ATTEMPTS {
                continue;
            }
            tracing::debug!(attempts = attempt, "mixed chain stayed negative, using additions");
            op1 = Operator::Add;
            op2 = Operator::Add;
            answer = a + b + c;
        }

        return Question::inline(
            Category::Mixed,
            format!("{a} {op1} {b} {op2} {c} = "),
            answer as f64,
        );
    }
}

/// `(A op B) × C`.
///
/// The inner subtraction is always ordered so the bracket is non-negative,
/// independent of `no_negative`. The outer operator is always
/// multiplication.
pub fn bracketed_question<R: Rng + ?Sized>(rng: &mut R, settings: &GenerationSettings) -> Question {
    let (min, max) = (settings.min_num, settings.max_num);
    let inner = additive(rng);
    let (lo, hi) = window(min, max, min, BRACKET_OPERAND_CAP);
    let mut a = random_int(rng, lo, hi);
    let mut b = random_int(rng, lo, hi);
    let (mul_floor, mul_cap) = BRACKET_MULTIPLIER_RANGE;
    let (mul_lo, mul_hi) = window(mul_floor, max, mul_floor, mul_cap);
    let c = random_int(rng, mul_lo, mul_hi);

    if inner == Operator::Subtract && a < b {
        std::mem::swap(&mut a, &mut b);
    }
    let answer = apply(Operator::Multiply, apply(inner, a, b), c);

    Question::inline(
        Category::Bracketed,
        format!("({a} {inner} {b}) {} {c} = ", Operator::Multiply),
        answer as f64,
    )
}

/// `A op B = R` with one operand hidden; the answer is the hidden operand.
pub fn fill_blank_question<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &GenerationSettings,
) -> Question {
    let op = additive(rng);
    let hide_first = rng.gen_bool(0.5);
    let (a, b) = swapped_pair(rng, op, settings);
    let result = apply(op, a, b);

    let (text, answer) = if hide_first {
        (format!("{BLANK} {op} {b} = {result}"), a)
    } else {
        (format!("{a} {op} {BLANK} = {result}"), b)
    };
    Question::inline(Category::FillBlank, text, answer as f64)
}

/// An addition or subtraction printed as stacked operands.
pub fn vertical_question<R: Rng + ?Sized>(rng: &mut R, settings: &GenerationSettings) -> Question {
    let op = additive(rng);
    let (a, b) = swapped_pair(rng, op, settings);

    Question {
        text: format!("{a} {op} {b} = "),
        answer: apply(op, a, b) as f64,
        category: Category::Vertical,
        layout: Layout::Vertical {
            top: a.to_string(),
            operator: op,
            bottom: b.to_string(),
        },
    }
}

/// Two independent operands from the full range, swapped for a
/// subtraction that would go negative under `no_negative`.
fn swapped_pair<R: Rng + ?Sized>(
    rng: &mut R,
    op: Operator,
    settings: &GenerationSettings,
) -> (i64, i64) {
    let mut a = random_int(rng, settings.min_num, settings.max_num);
    let mut b = random_int(rng, settings.min_num, settings.max_num);
    if settings.no_negative && op == Operator::Subtract && a < b {
        std::mem::swap(&mut a, &mut b);
    }
    (a, b)
}

/// Dispatch a category to its generator.
pub fn question_for<R: Rng + ?Sized>(
    rng: &mut R,
    category: Category,
    settings: &GenerationSettings,
) -> Question {
    match category {
        Category::Add => generate_question(rng, Operator::Add, settings),
        Category::Subtract => generate_question(rng, Operator::Subtract, settings),
        Category::Multiply => generate_question(rng, Operator::Multiply, settings),
        Category::Divide => generate_question(rng, Operator::Divide, settings),
        Category::Mixed => mixed_question(rng, settings),
        Category::Bracketed => bracketed_question(rng, settings),
        Category::FillBlank => fill_blank_question(rng, settings),
        Category::Vertical => vertical_question(rng, settings),
    }
}
