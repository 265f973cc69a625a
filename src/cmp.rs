// towernum: a numeric tower library in Rust
// 2026

// cmp.rs
//
// Equality and three-way comparison across the tower

use std::cmp::Ordering;

use rug::Integer;

use crate::error::{NumericError, Result};
use crate::flonum::{decode_flonum, DecodedFlonum};
use crate::value::Number;

/// The exact rational value of a finite real, as a numerator and a
/// positive denominator. None for NaN and infinities.
fn exact_parts(n: &Number) -> Option<(Integer, Integer)> {
    match n {
        Number::Fixnum(v) => Some((Integer::from(*v), Integer::from(1))),
        Number::Bignum(b) => Some((b.clone(), Integer::from(1))),
        Number::Ratnum(r) => Some((r.num.clone(), r.den.clone())),
        Number::Flonum(d) => match decode_flonum(*d) {
            DecodedFlonum::Finite {
                sign,
                mantissa,
                exponent,
            } => {
                let m = Integer::from(mantissa) * sign;
                if exponent >= 0 {
                    Some((m << exponent as u32, Integer::from(1)))
                } else {
                    Some((m, Integer::from(1) << (-exponent) as u32))
                }
            }
            _ => None,
        },
        Number::Compnum(_, _) => None,
    }
}

/// Exact cross-multiplied comparison of two rational views.
fn cmp_parts(n0: &Integer, d0: &Integer, n1: &Integer, d1: &Integer) -> Ordering {
    if *d0 == *d1 {
        return n0.cmp(n1);
    }
    Integer::from(n0 * d1).cmp(&Integer::from(n1 * d0))
}

/// Compares two reduced ratios, screening out the cases where the
/// numerator and denominator orderings already decide the answer
/// before falling back to cross-multiplication.
fn cmp_ratnum(n0: &Integer, d0: &Integer, n1: &Integer, d1: &Integer) -> Ordering {
    let dc = d0.cmp(d1);
    if dc == Ordering::Equal {
        return n0.cmp(n1);
    }

    let s0 = n0.cmp0();
    let s1 = n1.cmp0();
    if s0 != s1 {
        return s0.cmp(&s1);
    }

    let nc = n0.cmp(n1);
    if s0 == Ordering::Greater {
        // both positive: a smaller numerator over a larger denominator
        // is strictly smaller
        if nc != Ordering::Greater && dc == Ordering::Greater {
            return Ordering::Less;
        }
        if nc != Ordering::Less && dc == Ordering::Less {
            return Ordering::Greater;
        }
    } else {
        // both negative: the denominator ordering flips
        if nc != Ordering::Greater && dc == Ordering::Less {
            return Ordering::Less;
        }
        if nc != Ordering::Less && dc == Ordering::Greater {
            return Ordering::Greater;
        }
    }
    cmp_parts(n0, d0, n1, d1)
}

/// Three-way comparison over reals.
///
/// `Ok(None)` means a NaN operand made the pair unordered; complex
/// operands are a type error. The comparison is exact for every
/// variant pairing: flonums compare through their full decoded
/// mantissa rather than through a lossy conversion.
pub(crate) fn cmp_real(x: &Number, y: &Number) -> Result<Option<Ordering>> {
    use Number::{Bignum, Compnum, Fixnum, Flonum, Ratnum};

    match (x, y) {
        (Compnum(_, _), _) => Err(NumericError::type_error("real number", x)),
        (_, Compnum(_, _)) => Err(NumericError::type_error("real number", y)),

        (Fixnum(a), Fixnum(b)) => Ok(Some(a.cmp(b))),
        (Fixnum(a), Bignum(b)) => Ok(Some(Integer::from(*a).cmp(b))),
        (Bignum(a), Fixnum(b)) => Ok(Some(a.cmp(&Integer::from(*b)))),
        (Bignum(a), Bignum(b)) => Ok(Some(a.cmp(b))),

        (Flonum(a), Flonum(b)) => Ok(a.partial_cmp(b)),

        (Flonum(a), _) => {
            if a.is_nan() {
                return Ok(None);
            }
            if a.is_infinite() {
                return Ok(Some(if *a > 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }));
            }
            let (n0, d0) = exact_parts(x).ok_or_else(|| NumericError::type_error("real number", x))?;
            let (n1, d1) = exact_parts(y).ok_or_else(|| NumericError::type_error("real number", y))?;
            Ok(Some(cmp_parts(&n0, &d0, &n1, &d1)))
        }
        (_, Flonum(_)) => Ok(cmp_real(y, x)?.map(Ordering::reverse)),

        (Ratnum(a), Ratnum(b)) => Ok(Some(cmp_ratnum(&a.num, &a.den, &b.num, &b.den))),
        (Ratnum(r), _) => {
            // compare n against i * d
            let (n1, d1) = exact_parts(y).ok_or_else(|| NumericError::type_error("real number", y))?;
            Ok(Some(cmp_parts(&r.num, &r.den, &n1, &d1)))
        }
        (_, Ratnum(_)) => Ok(cmp_real(y, x)?.map(Ordering::reverse)),
    }
}

/// Three-way comparison of two real numbers.
///
/// Errors on a complex operand and on NaN, which admits no ordering.
pub fn num_cmp(x: &Number, y: &Number) -> Result<Ordering> {
    cmp_real(x, y)?.ok_or_else(|| NumericError::type_error("ordered real number", "+nan.0"))
}

/// Numeric equality across variants.
///
/// Complex values compare componentwise under IEEE semantics; a
/// complex never equals a real (its imaginary part is non-zero by
/// construction). NaN equals nothing.
pub fn num_eq(x: &Number, y: &Number) -> bool {
    match (x, y) {
        (Number::Compnum(r0, i0), Number::Compnum(r1, i1)) => r0 == r1 && i0 == i1,
        (Number::Compnum(_, _), _) | (_, Number::Compnum(_, _)) => false,
        _ => matches!(cmp_real(x, y), Ok(Some(Ordering::Equal))),
    }
}

pub fn num_lt(x: &Number, y: &Number) -> Result<bool> {
    Ok(matches!(cmp_real(x, y)?, Some(Ordering::Less)))
}

pub fn num_le(x: &Number, y: &Number) -> Result<bool> {
    Ok(matches!(
        cmp_real(x, y)?,
        Some(Ordering::Less | Ordering::Equal)
    ))
}

pub fn num_gt(x: &Number, y: &Number) -> Result<bool> {
    Ok(matches!(cmp_real(x, y)?, Some(Ordering::Greater)))
}

pub fn num_ge(x: &Number, y: &Number) -> Result<bool> {
    Ok(matches!(
        cmp_real(x, y)?,
        Some(Ordering::Greater | Ordering::Equal)
    ))
}

/// The smallest of the arguments. Exactness is contagious: if any
/// argument is inexact, an exact winner is converted before returning.
pub fn num_min(first: &Number, rest: &[Number]) -> Result<Number> {
    min_max(first, rest, Ordering::Greater)
}

/// The largest of the arguments, with the same contagion rule as
/// [`num_min`].
pub fn num_max(first: &Number, rest: &[Number]) -> Result<Number> {
    min_max(first, rest, Ordering::Less)
}

fn min_max(first: &Number, rest: &[Number], replace_when: Ordering) -> Result<Number> {
    if !first.is_real() {
        return Err(NumericError::type_error("real number", first));
    }
    let mut inexact = first.is_inexact();
    let mut best = first.clone();
    for arg in rest {
        if !arg.is_real() {
            return Err(NumericError::type_error("real number", arg));
        }
        if arg.is_inexact() {
            inexact = true;
        }
        if cmp_real(&best, arg)? == Some(replace_when) {
            best = arg.clone();
        }
    }
    if inexact && best.is_exact() {
        Ok(crate::coerce::exact_to_inexact(&best))
    } else {
        Ok(best)
    }
}

// Numeric equality, in the manner of the tower's `=`. Structural
// distinctions (exact vs inexact) are deliberately invisible here.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        num_eq(self, other)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Compnum(_, _), _) | (_, Number::Compnum(_, _)) => {
                if num_eq(self, other) {
                    Some(Ordering::Equal)
                } else {
                    None
                }
            }
            _ => cmp_real(self, other).ok().flatten(),
        }
    }
}
