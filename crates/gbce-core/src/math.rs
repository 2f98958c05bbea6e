//! Decimal arithmetic helpers.
//!
//! Everything here stays in `Decimal` except the seed of the n-th root
//! iteration, which starts from an `f64` estimate and is then refined in
//! decimal arithmetic.
//!
//! # Root precision
//!
//! [`nth_root`] runs Newton's method at the full working precision of
//! `Decimal` (28 significant digits) until two successive iterates differ by
//! no more than [`NEWTON_TOLERANCE`] or [`MAX_NEWTON_ITERATIONS`] is reached.
//! The result is then rounded to the requested number of decimal places with
//! banker's rounding (`MidpointNearestEven`).
//!
//! [`geometric_mean`] roots the exact product when it fits. Otherwise the
//! product is kept as a mantissa in `[1, 10)` and a power of ten, and the two
//! are rooted separately at the same working precision. Only when even that
//! leaves the range does it fall back to `exp(Σ ln v / n)`, which is accurate
//! to about 1e-26 relative rather than to the last decimal place.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use tracing::{debug, warn};

use crate::error::{MarketError, MarketResult};

/// Convergence threshold between successive Newton iterates.
pub const NEWTON_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 24);

/// Upper bound on Newton iterations.
pub const MAX_NEWTON_ITERATIONS: usize = 64;

/// Products below this magnitude have already lost most of their digits to
/// repeated decimal multiplication, so they take the scaled path instead.
const PRODUCT_FLOOR: Decimal = Decimal::from_parts(1, 0, 0, false, 12);

/// Rounding rule applied to every extracted root.
pub const ROOT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Divides `numerator` by `denominator`.
///
/// # Errors
///
/// Returns `MarketError::InvalidArgument` for a zero denominator and
/// `MarketError::Overflow` when the quotient does not fit in a `Decimal`.
pub fn checked_quotient(
    numerator: Decimal,
    denominator: Decimal,
    operation: &str,
) -> MarketResult<Decimal> {
    if denominator.is_zero() {
        return Err(MarketError::invalid_argument(format!(
            "{operation}: division by zero"
        )));
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| MarketError::overflow(operation))
}

/// Returns the principal `n`-th root of `value`, rounded to `scale` places.
///
/// Returns `None` for `n == 0` or a negative `value`.
///
/// # Example
///
/// ```rust
/// use gbce_core::math::nth_root;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(nth_root(dec!(27), 3, 12), Some(dec!(3)));
/// assert_eq!(nth_root(dec!(2), 2, 6), Some(dec!(1.414214)));
/// ```
#[must_use]
pub fn nth_root(value: Decimal, n: u32, scale: u32) -> Option<Decimal> {
    if n == 0 || value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    root(value, n).map(|r| r.round_dp_with_strategy(scale, ROOT_ROUNDING))
}

/// Unrounded principal root of a positive `value`.
fn root(value: Decimal, n: u32) -> Option<Decimal> {
    if n == 1 {
        Some(value)
    } else {
        newton_root(value, n).or_else(|| log_root(value.checked_ln()?, n))
    }
}

/// Returns the geometric mean of `values`, rounded to `scale` places.
///
/// Returns `None` when `values` is empty or holds a non-positive entry.
/// The product is accumulated exactly while it fits; once it overflows or
/// shrinks below `1e-12` it is carried as mantissa and power of ten instead.
#[must_use]
pub fn geometric_mean(values: &[Decimal], scale: u32) -> Option<Decimal> {
    if values.is_empty() || values.iter().any(|v| *v <= Decimal::ZERO) {
        return None;
    }
    let n = u32::try_from(values.len()).ok()?;

    let product = values
        .iter()
        .try_fold(Decimal::ONE, |acc, v| acc.checked_mul(*v));

    match product {
        Some(p) if p >= PRODUCT_FLOOR => nth_root(p, n, scale),
        _ => {
            debug!(
                count = values.len(),
                "product outside exact range, rooting mantissa and exponent separately"
            );
            if let Some(mean) = scaled_geometric_mean(values, n) {
                return Some(mean.round_dp_with_strategy(scale, ROOT_ROUNDING));
            }
            warn!(
                count = values.len(),
                "scaled product out of range, using log-space geometric mean"
            );
            let log_sum = values
                .iter()
                .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v.checked_ln()?))?;
            log_root(log_sum, n).map(|r| r.round_dp_with_strategy(scale, ROOT_ROUNDING))
        }
    }
}

fn newton_root(value: Decimal, n: u32) -> Option<Decimal> {
    let n_dec = Decimal::from(n);
    let n_minus_one = Decimal::from(n - 1);
    let mut x = initial_estimate(value, n);

    for _ in 0..MAX_NEWTON_ITERATIONS {
        let power = x.checked_powu(u64::from(n - 1))?;
        let next = n_minus_one
            .checked_mul(x)?
            .checked_add(value.checked_div(power)?)?
            .checked_div(n_dec)?;
        if next == x || (next - x).abs() <= NEWTON_TOLERANCE {
            return Some(next);
        }
        x = next;
    }
    Some(x)
}

/// Geometric mean of positive values whose product leaves the `Decimal`
/// range.
///
/// The product is carried as `mantissa × 10^exponent` with the mantissa in
/// `[1, 10)`, so every partial product keeps 28 significant digits. With
/// `exponent = q·n + r` the mean is `mantissa^(1/n) × (10^(1/n))^r × 10^q`.
fn scaled_geometric_mean(values: &[Decimal], n: u32) -> Option<Decimal> {
    let mut mantissa = Decimal::ONE;
    let mut exponent: i64 = 0;
    for value in values {
        let (m, e) = split_power_of_ten(*value)?;
        mantissa = mantissa.checked_mul(m)?;
        exponent += e;
        if mantissa >= Decimal::TEN {
            mantissa = mantissa.checked_div(Decimal::TEN)?;
            exponent += 1;
        }
    }

    let n_wide = i64::from(n);
    let quotient = exponent.div_euclid(n_wide);
    let remainder = u64::try_from(exponent.rem_euclid(n_wide)).ok()?;

    let fractional_ten = root(Decimal::TEN, n)?.checked_powu(remainder)?;
    let mean = root(mantissa, n)?.checked_mul(fractional_ten)?;
    let shift = Decimal::TEN.checked_powu(quotient.unsigned_abs())?;
    if quotient >= 0 {
        mean.checked_mul(shift)
    } else {
        mean.checked_div(shift)
    }
}

/// Splits a positive value into `(m, e)` with `value = m × 10^e`, `1 <= m < 10`.
fn split_power_of_ten(value: Decimal) -> Option<(Decimal, i64)> {
    let digits = value.mantissa();
    if digits <= 0 {
        return None;
    }
    let magnitude = digits.ilog10();
    let mantissa = Decimal::try_from_i128_with_scale(digits, magnitude).ok()?;
    Some((mantissa, i64::from(magnitude) - i64::from(value.scale())))
}

/// `exp(log_value / n)`, the root of a value already taken to log space.
fn log_root(log_value: Decimal, n: u32) -> Option<Decimal> {
    log_value.checked_div(Decimal::from(n))?.checked_exp()
}

fn initial_estimate(value: Decimal, n: u32) -> Decimal {
    value
        .to_f64()
        .map(|v| v.powf(1.0 / f64::from(n)))
        .filter(|v| v.is_finite() && *v > 0.0)
        .and_then(Decimal::from_f64)
        .filter(|v| !v.is_zero())
        .unwrap_or(Decimal::ONE)
}
