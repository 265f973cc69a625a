// towernum: a numeric tower library in Rust
// 2026

// intdiv.rs
//
// Integer division family: quotient, remainder, modulo, gcd

use rug::Integer;

use crate::coerce::to_f64;
use crate::error::{NumericError, Result};
use crate::value::Number;

/// Truncating integer division.
pub fn quotient(x: &Number, y: &Number) -> Result<Number> {
    Ok(quotient_rem(x, y)?.0)
}

/// Remainder of truncating division; its sign follows the dividend.
pub fn remainder(x: &Number, y: &Number) -> Result<Number> {
    modrem(x, y, true)
}

/// Modulo; its sign follows the divisor.
pub fn modulo(x: &Number, y: &Number) -> Result<Number> {
    modrem(x, y, false)
}

/// Truncating division producing quotient and remainder in one pass.
///
/// Flonum operands are accepted only when they carry a zero fractional
/// part; the results are then flonums as well.
pub fn quotient_rem(x: &Number, y: &Number) -> Result<(Number, Number)> {
    use Number::{Bignum, Fixnum, Flonum};

    // this shortcut looks overly specific, but division by one appears
    // all over rational arithmetic
    if y.is_exact_one() {
        if !x.is_integer() {
            return Err(NumericError::type_error("integer", x));
        }
        return Ok((x.clone(), Number::Fixnum(0)));
    }

    match (x, y) {
        (Fixnum(a), Fixnum(b)) => {
            if *b == 0 {
                return Err(NumericError::DivisionByZero("quotient"));
            }
            Ok((Number::from_i64(a / b), Number::Fixnum(a % b)))
        }
        (Fixnum(a), Bignum(_)) => {
            // a bignum divisor always exceeds a fixnum in magnitude
            Ok((Number::Fixnum(0), Number::Fixnum(*a)))
        }
        (Bignum(a), Fixnum(b)) => {
            if *b == 0 {
                return Err(NumericError::DivisionByZero("quotient"));
            }
            let (q, r) = Integer::from(a).div_rem(Integer::from(*b));
            Ok((Number::from_integer(q), Number::from_integer(r)))
        }
        (Bignum(a), Bignum(b)) => {
            let (q, r) = Integer::from(a).div_rem(Integer::from(b));
            Ok((Number::from_integer(q), Number::from_integer(r)))
        }
        (Fixnum(_) | Bignum(_) | Flonum(_), Fixnum(_) | Bignum(_) | Flonum(_)) => {
            let rx = integral_f64(x)?;
            let ry = integral_f64(y)?;
            if ry == 0.0 {
                return Err(NumericError::DivisionByZero("quotient"));
            }
            let q = (rx / ry).trunc();
            let r = rx - q * ry;
            Ok((Number::Flonum(q), Number::Flonum(r)))
        }
        _ => {
            let bad = if x.is_integer() { y } else { x };
            Err(NumericError::type_error("integer", bad))
        }
    }
}

/// The binary64 value of an integral operand; fractional flonums and
/// non-real variants are rejected.
fn integral_f64(n: &Number) -> Result<f64> {
    if !n.is_integer() {
        return Err(NumericError::type_error("integer", n));
    }
    to_f64(n)
}

fn modrem(x: &Number, y: &Number, remp: bool) -> Result<Number> {
    use Number::{Bignum, Fixnum, Flonum};

    match (x, y) {
        (Fixnum(a), Fixnum(b)) => {
            if *b == 0 {
                return Err(NumericError::DivisionByZero("modulo or remainder"));
            }
            let mut r = a % b;
            if !remp && r != 0 && ((*a > 0 && *b < 0) || (*a < 0 && *b > 0)) {
                r += b;
            }
            Ok(Number::Fixnum(r))
        }
        (Fixnum(a), Bignum(b)) => {
            // dividend smaller than the divisor: remainder is the
            // dividend itself, modulo may need one adjustment
            if remp {
                Ok(Number::Fixnum(*a))
            } else if (*a < 0 && b.is_positive()) || (*a > 0 && b.is_negative()) {
                Ok(Number::from_integer(Integer::from(b + *a)))
            } else {
                Ok(Number::Fixnum(*a))
            }
        }
        (Bignum(a), Fixnum(b)) => {
            if *b == 0 {
                return Err(NumericError::DivisionByZero("modulo or remainder"));
            }
            let (_, r) = Integer::from(a).div_rem(Integer::from(*b));
            if !remp
                && r.cmp0() != std::cmp::Ordering::Equal
                && ((a.is_negative() && *b > 0) || (a.is_positive() && *b < 0))
            {
                Ok(Number::from_integer(r + *b))
            } else {
                Ok(Number::from_integer(r))
            }
        }
        (Bignum(a), Bignum(b)) => {
            let (_, r) = Integer::from(a).div_rem(Integer::from(b));
            if !remp
                && r.cmp0() != std::cmp::Ordering::Equal
                && a.is_negative() != b.is_negative()
            {
                Ok(Number::from_integer(r + b))
            } else {
                Ok(Number::from_integer(r))
            }
        }
        (Fixnum(_) | Bignum(_) | Flonum(_), Fixnum(_) | Bignum(_) | Flonum(_)) => {
            let rx = integral_f64(x)?;
            let ry = integral_f64(y)?;
            if ry == 0.0 {
                return Err(NumericError::DivisionByZero("modulo or remainder"));
            }
            let mut rem = rx % ry;
            if !remp && rem != 0.0 && ((rx > 0.0 && ry < 0.0) || (rx < 0.0 && ry > 0.0)) {
                rem += ry;
            }
            Ok(Number::Flonum(rem))
        }
        _ => {
            let bad = if x.is_integer() { y } else { x };
            Err(NumericError::type_error("integer", bad))
        }
    }
}

/// Euclid on machine words; assumes `x > y >= 0` is not required,
/// only non-negative operands.
fn gcd_fixfix(mut x: u64, mut y: u64) -> u64 {
    while y > 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Real-valued Euclid for integral flonums.
fn gcd_floflo(mut x: f64, mut y: f64) -> f64 {
    x = x.abs();
    y = y.abs();
    if x < y {
        std::mem::swap(&mut x, &mut y);
    }
    while y > 0.0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// One big-by-small division step, then machine-word Euclid on the
/// remainder. The sign of the bignum is irrelevant since only the
/// remainder's magnitude feeds the loop.
fn gcd_bigfix(x: &Integer, y: u64) -> u64 {
    let (_, r) = Integer::from(x).div_rem(Integer::from(y));
    let r = r.abs().to_u64().unwrap_or(0);
    gcd_fixfix(y, r)
}

/// Greatest common divisor of two integral numbers.
///
/// `gcd(0, y) = |y|`. Flonum operands run a real-valued Euclid loop and
/// produce a flonum. The result is always non-negative.
pub fn gcd(x: &Number, y: &Number) -> Result<Number> {
    use Number::{Bignum, Fixnum};

    if !x.is_integer() {
        return Err(NumericError::type_error("integer", x));
    }
    if !y.is_integer() {
        return Err(NumericError::type_error("integer", y));
    }
    if x.is_flonum() || y.is_flonum() {
        return Ok(Number::Flonum(gcd_floflo(to_f64(x)?, to_f64(y)?)));
    }

    match (x, y) {
        (Fixnum(0), _) => Ok(abs_exact(y)),
        (_, Fixnum(0)) => Ok(abs_exact(x)),
        (Fixnum(a), Fixnum(b)) => {
            let (ux, uy) = (a.unsigned_abs(), b.unsigned_abs());
            let r = if ux >= uy {
                gcd_fixfix(ux, uy)
            } else {
                gcd_fixfix(uy, ux)
            };
            Ok(Number::from_u64(r))
        }
        (Bignum(a), Fixnum(b)) => Ok(Number::from_u64(gcd_bigfix(a, b.unsigned_abs()))),
        (Fixnum(a), Bignum(b)) => Ok(Number::from_u64(gcd_bigfix(b, a.unsigned_abs()))),
        (Bignum(a), Bignum(b)) => {
            // full big-integer Euclid; this path is rare enough that a
            // fancier algorithm isn't worth carrying
            let mut x = Integer::from(a.abs_ref());
            let mut y = Integer::from(b.abs_ref());
            if x < y {
                std::mem::swap(&mut x, &mut y);
            }
            while y.cmp0() != std::cmp::Ordering::Equal {
                let r = Integer::from(&x % &y);
                x = y;
                y = r;
            }
            Ok(Number::from_integer(x))
        }
        _ => Err(NumericError::type_error("integer", x)),
    }
}

fn abs_exact(n: &Number) -> Number {
    match n {
        Number::Fixnum(v) => Number::from_i64(v.wrapping_abs()),
        Number::Bignum(b) => Number::from_integer(Integer::from(b.abs_ref())),
        _ => n.clone(),
    }
}
