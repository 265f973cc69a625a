// towernum: a numeric tower library in Rust
// 2026

// coerce.rs
//
// Host-integer extraction with clamping, binary64 extraction,
// and conversion between exact and inexact

use rug::Integer;

use crate::error::{NumericError, Result};
use crate::flonum::{decode_flonum, ldexp, DecodedFlonum, EXPT2_63, EXPT2_64};
use crate::value::{Number, SMALL_INT_MAX, SMALL_INT_MIN};

/// Saturation policy for host-integer extraction.
///
/// With `None`, an out-of-range source is a [`NumericError::Range`];
/// `Hi` and `Lo` permit saturating to the top or bottom of the requested
/// width, and `Both` permits either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clamp {
    None,
    Hi,
    Lo,
    Both,
}

impl Clamp {
    fn allows_hi(self) -> bool {
        matches!(self, Clamp::Hi | Clamp::Both)
    }

    fn allows_lo(self) -> bool {
        matches!(self, Clamp::Lo | Clamp::Both)
    }
}

/// Extracts a signed 64-bit host integer.
///
/// Flonum and ratnum sources are truncated toward zero; range overflow
/// saturates when the clamp policy permits and errors otherwise.
pub fn to_i64(n: &Number, clamp: Clamp) -> Result<i64> {
    match n {
        Number::Fixnum(v) => Ok(*v),
        Number::Bignum(b) => match b.to_i64() {
            Some(v) => Ok(v),
            Option::None if b.is_positive() && clamp.allows_hi() => Ok(i64::MAX),
            Option::None if b.is_negative() && clamp.allows_lo() => Ok(i64::MIN),
            Option::None => Err(NumericError::range(n)),
        },
        Number::Flonum(v) => i64_from_f64(*v, clamp, n),
        Number::Ratnum(_) => i64_from_f64(to_f64(n)?, clamp, n),
        Number::Compnum(_, _) => Err(NumericError::type_error("real number", n)),
    }
}

fn i64_from_f64(v: f64, clamp: Clamp, orig: &Number) -> Result<i64> {
    if v.is_nan() {
        return Err(NumericError::range(orig));
    }
    if v == f64::INFINITY {
        return if clamp.allows_hi() {
            Ok(i64::MAX)
        } else {
            Err(NumericError::range(orig))
        };
    }
    if v == f64::NEG_INFINITY {
        return if clamp.allows_lo() {
            Ok(i64::MIN)
        } else {
            Err(NumericError::range(orig))
        };
    }
    // exact comparison against the interned 2^63 bound
    let t = Integer::from_f64(v).unwrap_or_default();
    if t >= *EXPT2_63 {
        if clamp.allows_hi() {
            return Ok(i64::MAX);
        }
        return Err(NumericError::range(orig));
    }
    if t < Integer::from(-&*EXPT2_63) {
        if clamp.allows_lo() {
            return Ok(i64::MIN);
        }
        return Err(NumericError::range(orig));
    }
    t.to_i64().ok_or_else(|| NumericError::range(orig))
}

/// Extracts an unsigned 64-bit host integer.
pub fn to_u64(n: &Number, clamp: Clamp) -> Result<u64> {
    match n {
        Number::Fixnum(v) => {
            if *v < 0 {
                if clamp.allows_lo() {
                    Ok(0)
                } else {
                    Err(NumericError::range(n))
                }
            } else {
                Ok(*v as u64)
            }
        }
        Number::Bignum(b) => match b.to_u64() {
            Some(v) => Ok(v),
            Option::None if b.is_negative() && clamp.allows_lo() => Ok(0),
            Option::None if b.is_positive() && clamp.allows_hi() => Ok(u64::MAX),
            Option::None => Err(NumericError::range(n)),
        },
        Number::Flonum(v) => u64_from_f64(*v, clamp, n),
        Number::Ratnum(_) => u64_from_f64(to_f64(n)?, clamp, n),
        Number::Compnum(_, _) => Err(NumericError::type_error("real number", n)),
    }
}

fn u64_from_f64(v: f64, clamp: Clamp, orig: &Number) -> Result<u64> {
    if v.is_nan() {
        return Err(NumericError::range(orig));
    }
    if v < 0.0 {
        return if clamp.allows_lo() {
            Ok(0)
        } else {
            Err(NumericError::range(orig))
        };
    }
    if v == f64::INFINITY {
        return if clamp.allows_hi() {
            Ok(u64::MAX)
        } else {
            Err(NumericError::range(orig))
        };
    }
    let t = Integer::from_f64(v).unwrap_or_default();
    if t >= *EXPT2_64 {
        if clamp.allows_hi() {
            return Ok(u64::MAX);
        }
        return Err(NumericError::range(orig));
    }
    t.to_u64().ok_or_else(|| NumericError::range(orig))
}

/// Extracts a signed 32-bit host integer by narrowing the 64-bit result.
pub fn to_i32(n: &Number, clamp: Clamp) -> Result<i32> {
    let v = to_i64(n, clamp)?;
    if v > i64::from(i32::MAX) {
        if clamp.allows_hi() {
            return Ok(i32::MAX);
        }
        return Err(NumericError::range(n));
    }
    if v < i64::from(i32::MIN) {
        if clamp.allows_lo() {
            return Ok(i32::MIN);
        }
        return Err(NumericError::range(n));
    }
    Ok(v as i32)
}

/// Extracts an unsigned 32-bit host integer by narrowing the 64-bit result.
pub fn to_u32(n: &Number, clamp: Clamp) -> Result<u32> {
    let v = to_u64(n, clamp)?;
    if v > u64::from(u32::MAX) {
        if clamp.allows_hi() {
            return Ok(u32::MAX);
        }
        return Err(NumericError::range(n));
    }
    Ok(v as u32)
}

/// Extracts a binary64 approximation of any real number.
///
/// Integers convert truncating toward zero, ratnums divide numerator by
/// denominator, flonums pass through; complex values are not reals.
pub fn to_f64(n: &Number) -> Result<f64> {
    match n {
        Number::Fixnum(v) => Ok(*v as f64),
        Number::Bignum(b) => Ok(b.to_f64()),
        Number::Ratnum(r) => Ok(ratio_to_f64(&r.num, &r.den)),
        Number::Flonum(v) => Ok(*v),
        Number::Compnum(_, _) => Err(NumericError::type_error("real number", n)),
    }
}

/// num/den as binary64.
///
/// Both sides convert independently in the common case. When either
/// magnitude exceeds the binary64 range, the quotient is still well
/// defined, so both sides are pre-scaled by a power of two and the
/// scale restored afterwards.
pub(crate) fn ratio_to_f64(num: &Integer, den: &Integer) -> f64 {
    let n = num.to_f64();
    let d = den.to_f64();
    if n.is_finite() && d.is_finite() && d != 0.0 {
        return n / d;
    }

    let a = (num.significant_bits() as i64 - 900).max(0);
    let b = (den.significant_bits() as i64 - 900).max(0);
    let scaled_num = Integer::from(num >> a as u32);
    let scaled_den = Integer::from(den >> b as u32);
    let q = scaled_num.to_f64() / scaled_den.to_f64();
    let k = a - b;
    if k > 2098 {
        if q < 0.0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else if k < -2098 {
        0.0
    } else {
        ldexp(q, k as i32)
    }
}

/// Converts an exact number to its binary64 approximation.
/// Inexact values pass through unchanged.
pub fn exact_to_inexact(n: &Number) -> Number {
    match n {
        Number::Fixnum(v) => Number::Flonum(*v as f64),
        Number::Bignum(b) => Number::Flonum(b.to_f64()),
        Number::Ratnum(r) => Number::Flonum(ratio_to_f64(&r.num, &r.den)),
        Number::Flonum(_) | Number::Compnum(_, _) => n.clone(),
    }
}

/// Converts an inexact real to the exact value it denotes.
///
/// An integral flonum becomes an integer; a fractional one decodes to
/// `mantissa * 2^exponent` and becomes the corresponding reduced
/// rational. Infinities, NaN and complex values have no exact form.
pub fn inexact_to_exact(n: &Number) -> Result<Number> {
    match n {
        Number::Fixnum(_) | Number::Bignum(_) | Number::Ratnum(_) => Ok(n.clone()),
        Number::Flonum(d) => {
            if d.is_nan() || d.is_infinite() {
                return Err(NumericError::UnsupportedExact("infinity/nan"));
            }
            if d.fract() == 0.0 {
                if *d < SMALL_INT_MIN as f64 || *d > SMALL_INT_MAX as f64 {
                    let b = Integer::from_f64(*d).unwrap_or_default();
                    Ok(Number::from_integer(b))
                } else {
                    Ok(Number::Fixnum(*d as i64))
                }
            } else {
                match decode_flonum(*d) {
                    DecodedFlonum::Finite {
                        sign,
                        mantissa,
                        exponent,
                    } => {
                        // a fractional value always decodes with a
                        // negative binary exponent
                        let num = Integer::from(mantissa) * sign;
                        let den = Integer::from(1) << (-exponent) as u32;
                        Ok(crate::value::make_ratio(num, den))
                    }
                    _ => Err(NumericError::UnsupportedExact("infinity/nan")),
                }
            }
        }
        Number::Compnum(_, _) => Err(NumericError::UnsupportedExact("complex")),
    }
}
