//! Random value primitives and number formatting.
//!
//! Every primitive takes the random source explicitly so batches can be
//! reproduced from a seed.

use rand::Rng;

/// Uniform integer in `[min, max]`, inclusive.
///
/// A reversed range is sampled as if its bounds were swapped.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Uniform value on the grid of multiples of `10^-places` inside `[min, max]`.
///
/// Bounds are scaled to integers, sampled, and scaled back; the result is
/// rounded to `places` so no binary drift leaks into callers.
pub fn random_decimal<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, places: u32) -> f64 {
    let multiplier = scale(places);
    let lo = (min * multiplier).ceil() as i64;
    let hi = (max * multiplier).floor() as i64;
    let value = random_int(rng, lo, hi);
    round_to(value as f64 / multiplier, places)
}

/// Round half away from zero to `places` fractional digits.
pub fn round_to(value: f64, places: u32) -> f64 {
    let multiplier = scale(places);
    (value * multiplier).round() / multiplier
}

/// Render a number for display.
///
/// Integral values print without a decimal point; anything else is rounded
/// to `places` and printed without trailing zeros.
pub fn format_number(value: f64, places: u32) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let fixed = format!("{:.*}", places as usize, round_to(value, places));
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Clamp `[min, max]` into `[floor, cap]`.
///
/// When the clamped window is empty the result collapses to its lower bound,
/// so the returned pair always satisfies `lo <= hi`.
pub fn window(min: i64, max: i64, floor: i64, cap: i64) -> (i64, i64) {
    let lo = min.max(floor);
    let hi = max.min(cap);
    if hi < lo {
        (lo, lo)
    } else {
        (lo, hi)
    }
}

fn scale(places: u32) -> f64 {
    10f64.powi(places as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_int_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let n = random_int(&mut rng, 3, 9);
            assert!((3..=9).contains(&n));
        }
        assert_eq!(random_int(&mut rng, 4, 4), 4);
    }

    #[test]
    fn random_int_tolerates_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let n = random_int(&mut rng, 10, 2);
            assert!((2..=10).contains(&n));
        }
    }

    #[test]
    fn random_decimal_lands_on_tenths_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let value = random_decimal(&mut rng, 1.0, 5.0, 1);
            assert!((1.0..=5.0).contains(&value), "{value} out of range");
            let tenths = value * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9, "{value} is not a multiple of 0.1");
        }
    }

    #[test]
    fn random_decimal_hundredths() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let value = random_decimal(&mut rng, 0.0, 2.0, 2);
            assert!((0.0..=2.0).contains(&value));
            assert_eq!(round_to(value, 2), value);
        }
    }

    #[test]
    fn round_to_removes_binary_drift() {
        assert_eq!(round_to(0.1 + 0.2, 1), 0.3);
        assert_eq!(round_to(2.675, 1), 2.7);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(7.0, 2), 7.0);
    }

    #[test]
    fn format_number_strips_trailing_zeros() {
        assert_eq!(format_number(12.0, 2), "12");
        assert_eq!(format_number(1.5, 2), "1.5");
        assert_eq!(format_number(1.25, 2), "1.25");
        assert_eq!(format_number(1.999, 2), "2");
        assert_eq!(format_number(0.30000000000000004, 1), "0.3");
        assert_eq!(format_number(-3.0, 1), "-3");
    }

    #[test]
    fn window_clamps_and_collapses() {
        assert_eq!(window(1, 20, 2, 12), (2, 12));
        assert_eq!(window(5, 8, 2, 12), (5, 8));
        assert_eq!(window(20, 50, 2, 12), (20, 20));
        assert_eq!(window(0, 1, 2, 5), (2, 2));
    }
}
