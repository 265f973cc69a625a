// towernum: a numeric tower library in Rust
// 2026

// value.rs
//
// The tagged number value, smart constructors and predicates

use rug::Integer;

use crate::error::{NumericError, Result};

/// Largest integer stored inline as a [`Number::Fixnum`].
///
/// A machine word minus tag bits, as a pointer-tagging runtime would
/// reserve. The bound is fixed at 2^61 so behavior does not depend on
/// the host pointer width.
pub const SMALL_INT_MAX: i64 = (1 << 61) - 1;

/// Smallest integer stored inline as a [`Number::Fixnum`].
pub const SMALL_INT_MIN: i64 = -(1 << 61);

/// An exact rational in reduced form.
///
/// Invariants, maintained by [`make_ratio`]:
/// `den > 0`, `gcd(|num|, den) == 1`, `den != 1`, `num != 0`.
/// A ratio violating any of these would have normalized to an integer
/// or a non-finite flonum instead.
#[derive(Clone, Debug)]
pub struct Ratio {
    pub(crate) num: Integer,
    pub(crate) den: Integer,
}

impl Ratio {
    /// The numerator. Carries the sign of the rational.
    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    /// The denominator. Always greater than one.
    pub fn denominator(&self) -> &Integer {
        &self.den
    }
}

/// A value of the numeric tower.
///
/// Exactly one of five variants: machine-word integer, arbitrary-precision
/// integer, exact rational, IEEE 754 binary64, or a rectangular complex
/// pair. The variants are mutually canonical:
///
/// - a [`Number::Bignum`] never holds a value that fits a fixnum;
/// - a [`Number::Ratnum`] is reduced, has a positive denominator, and
///   never collapses to an integer;
/// - a [`Number::Compnum`] never has a zero imaginary part.
///
/// Values are immutable; every operation produces a fresh value.
#[derive(Clone, Debug)]
pub enum Number {
    /// Signed machine-word integer in `[SMALL_INT_MIN, SMALL_INT_MAX]`.
    Fixnum(i64),
    /// Arbitrary-precision integer outside the fixnum range.
    Bignum(Integer),
    /// Exact rational with non-trivial denominator.
    Ratnum(Box<Ratio>),
    /// IEEE 754 binary64, including -0.0, infinities and NaN.
    Flonum(f64),
    /// Rectangular complex pair with non-zero imaginary part.
    Compnum(f64, f64),
}

impl Number {
    /// Constructs an exact integer, inline when it fits the fixnum range.
    pub fn from_i64(i: i64) -> Number {
        if (SMALL_INT_MIN..=SMALL_INT_MAX).contains(&i) {
            Number::Fixnum(i)
        } else {
            Number::Bignum(Integer::from(i))
        }
    }

    pub fn from_u64(i: u64) -> Number {
        if i <= SMALL_INT_MAX as u64 {
            Number::Fixnum(i as i64)
        } else {
            Number::Bignum(Integer::from(i))
        }
    }

    pub fn from_i32(i: i32) -> Number {
        Number::Fixnum(i64::from(i))
    }

    pub fn from_u32(i: u32) -> Number {
        Number::Fixnum(i64::from(i))
    }

    /// Constructs an exact integer from an arbitrary-precision value,
    /// down-normalizing into a fixnum when possible.
    pub fn from_integer(i: Integer) -> Number {
        match i.to_i64() {
            Some(v) if (SMALL_INT_MIN..=SMALL_INT_MAX).contains(&v) => Number::Fixnum(v),
            _ => Number::Bignum(i),
        }
    }

    /// The canonical exact zero.
    pub fn zero() -> Number {
        Number::Fixnum(0)
    }

    /// The canonical exact one.
    pub fn one() -> Number {
        Number::Fixnum(1)
    }

    /// Positive or negative infinity as a flonum.
    pub fn infinity(negative: bool) -> Number {
        if negative {
            Number::Flonum(f64::NEG_INFINITY)
        } else {
            Number::Flonum(f64::INFINITY)
        }
    }

    /// The flonum NaN.
    pub fn nan() -> Number {
        Number::Flonum(f64::NAN)
    }

    pub fn is_fixnum(&self) -> bool {
        matches!(self, Number::Fixnum(_))
    }

    pub fn is_bignum(&self) -> bool {
        matches!(self, Number::Bignum(_))
    }

    pub fn is_ratnum(&self) -> bool {
        matches!(self, Number::Ratnum(_))
    }

    pub fn is_flonum(&self) -> bool {
        matches!(self, Number::Flonum(_))
    }

    pub fn is_compnum(&self) -> bool {
        matches!(self, Number::Compnum(_, _))
    }

    /// True for fixnums and bignums.
    pub fn is_exact_integer(&self) -> bool {
        matches!(self, Number::Fixnum(_) | Number::Bignum(_))
    }

    /// True for exact values: integers and ratnums.
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            Number::Fixnum(_) | Number::Bignum(_) | Number::Ratnum(_)
        )
    }

    pub fn is_inexact(&self) -> bool {
        !self.is_exact()
    }

    /// True for integral values, including flonums with a zero
    /// fractional part. A normalized ratnum is never an integer.
    pub fn is_integer(&self) -> bool {
        match self {
            Number::Fixnum(_) | Number::Bignum(_) => true,
            Number::Ratnum(_) => false,
            Number::Flonum(d) => d.fract() == 0.0,
            Number::Compnum(_, _) => false,
        }
    }

    /// True for values with an exact or finite-real interpretation as a
    /// ratio of integers. Infinities and NaN are not rational.
    pub fn is_rational(&self) -> bool {
        match self {
            Number::Fixnum(_) | Number::Bignum(_) | Number::Ratnum(_) => true,
            Number::Flonum(d) => d.is_finite(),
            Number::Compnum(_, _) => false,
        }
    }

    pub fn is_real(&self) -> bool {
        !self.is_compnum()
    }

    /// Every tower value is a complex number.
    pub fn is_complex(&self) -> bool {
        true
    }

    /// Every tower value is a number; foreign objects live behind the
    /// generic dispatch layer instead.
    pub fn is_number(&self) -> bool {
        true
    }

    /// True only for the exact integer zero.
    pub(crate) fn is_exact_zero(&self) -> bool {
        matches!(self, Number::Fixnum(0))
    }

    /// True only for the exact integer one.
    pub(crate) fn is_exact_one(&self) -> bool {
        matches!(self, Number::Fixnum(1))
    }

    /// True for any zero, exact or inexact. A compnum is never zero
    /// since its imaginary part is non-zero by construction.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Fixnum(v) => *v == 0,
            Number::Bignum(_) => false,
            Number::Ratnum(_) => false,
            Number::Flonum(d) => *d == 0.0,
            Number::Compnum(_, _) => false,
        }
    }

    /// Returns -1, 0 or +1 for negative, zero, and positive real values.
    /// NaN reports 0. Complex values are not signed.
    pub fn sign(&self) -> Result<i32> {
        match self {
            Number::Fixnum(v) => Ok(v.signum() as i32),
            Number::Bignum(b) => Ok(b.cmp0() as i32),
            Number::Ratnum(r) => Ok(r.num.cmp0() as i32),
            Number::Flonum(d) => {
                if *d > 0.0 {
                    Ok(1)
                } else if *d < 0.0 {
                    Ok(-1)
                } else {
                    Ok(0)
                }
            }
            Number::Compnum(_, _) => Err(NumericError::type_error("real number", self)),
        }
    }

    pub fn is_positive(&self) -> Result<bool> {
        Ok(self.sign()? > 0)
    }

    pub fn is_negative(&self) -> Result<bool> {
        Ok(self.sign()? < 0)
    }

    /// Odd-integer test. Defined for exact integers and integral flonums.
    pub fn is_odd(&self) -> Result<bool> {
        match self {
            Number::Fixnum(v) => Ok(v & 1 != 0),
            Number::Bignum(b) => Ok(b.is_odd()),
            Number::Flonum(d) if d.fract() == 0.0 => Ok(d.rem_euclid(2.0) != 0.0),
            _ => Err(NumericError::type_error("integer", self)),
        }
    }

    pub fn is_even(&self) -> Result<bool> {
        Ok(!self.is_odd()?)
    }

    /// Clones out the underlying integer of a fixnum or bignum.
    pub(crate) fn as_exact_int(&self) -> Option<Integer> {
        match self {
            Number::Fixnum(v) => Some(Integer::from(*v)),
            Number::Bignum(b) => Some(b.clone()),
            _ => None,
        }
    }

    /// Numerator of a rational; any other number is its own numerator.
    pub fn numerator(&self) -> Number {
        match self {
            Number::Ratnum(r) => Number::from_integer(r.num.clone()),
            _ => self.clone(),
        }
    }

    /// Denominator of a rational; exact integers report 1,
    /// inexact values report 1.0.
    pub fn denominator(&self) -> Number {
        match self {
            Number::Ratnum(r) => Number::from_integer(r.den.clone()),
            Number::Fixnum(_) | Number::Bignum(_) => Number::Fixnum(1),
            _ => Number::Flonum(1.0),
        }
    }

    /// The real part, as binary64 for inexact values.
    pub fn real_part(&self) -> Result<f64> {
        match self {
            Number::Compnum(re, _) => Ok(*re),
            _ => crate::coerce::to_f64(self),
        }
    }

    /// The imaginary part; zero for any real number.
    pub fn imag_part(&self) -> Result<f64> {
        match self {
            Number::Compnum(_, im) => Ok(*im),
            _ => Ok(0.0),
        }
    }

    /// The absolute value of a real, or the modulus of a complex.
    pub fn magnitude(&self) -> Result<f64> {
        match self {
            Number::Compnum(re, im) => Ok(re.hypot(*im)),
            _ => Ok(crate::coerce::to_f64(self)?.abs()),
        }
    }

    /// The argument: `atan2(im, re)` for a complex value, 0 or pi for
    /// a real one.
    pub fn angle(&self) -> Result<f64> {
        match self {
            Number::Compnum(re, im) => Ok(im.atan2(*re)),
            _ => {
                if self.sign()? < 0 {
                    Ok(std::f64::consts::PI)
                } else {
                    Ok(0.0)
                }
            }
        }
    }
}

/// Builds an exact rational from a numerator and denominator,
/// normalizing per the tower invariants.
///
/// A zero denominator does not error: `n/0` collapses to a signed
/// infinity by the sign of `n`, and `0/0` to NaN. A denominator of one
/// or a numerator of zero collapses to an integer. Otherwise the sign
/// moves to the numerator and both sides are reduced by their gcd.
pub fn make_ratio(num: Integer, den: Integer) -> Number {
    if den.cmp0() == std::cmp::Ordering::Equal {
        return match num.cmp0() {
            std::cmp::Ordering::Greater => Number::infinity(false),
            std::cmp::Ordering::Less => Number::infinity(true),
            std::cmp::Ordering::Equal => Number::nan(),
        };
    }
    if num.cmp0() == std::cmp::Ordering::Equal {
        return Number::Fixnum(0);
    }

    let (mut num, mut den) = if den.is_negative() {
        (-num, -den)
    } else {
        (num, den)
    };

    let g = Integer::from(num.gcd_ref(&den));
    if g != 1 {
        num /= &g;
        den /= &g;
    }
    if den == 1 {
        Number::from_integer(num)
    } else {
        Number::Ratnum(Box::new(Ratio { num, den }))
    }
}

/// Exact-integer checked front end of [`make_ratio`].
pub fn make_rational(num: &Number, den: &Number) -> Result<Number> {
    let n = num
        .as_exact_int()
        .ok_or_else(|| NumericError::type_error("exact integer numerator", num))?;
    let d = den
        .as_exact_int()
        .ok_or_else(|| NumericError::type_error("exact integer denominator", den))?;
    Ok(make_ratio(n, d))
}

/// Builds a complex value, collapsing a zero imaginary part to a flonum.
pub fn make_complex(re: f64, im: f64) -> Number {
    if im == 0.0 {
        Number::Flonum(re)
    } else {
        Number::Compnum(re, im)
    }
}

/// Builds a complex value from polar magnitude and angle.
pub fn make_complex_polar(mag: f64, angle: f64) -> Number {
    make_complex(mag * angle.cos(), mag * angle.sin())
}

/// Boxes a binary64, demoting to an exact integer when `exact` is
/// requested and the value is finite with a zero fractional part.
pub fn flonum_to_number(d: f64, exact: bool) -> Number {
    if exact && !d.is_infinite() {
        let frac = d.fract();
        if frac == 0.0 {
            let i = d.trunc();
            if i > SMALL_INT_MAX as f64 || i < SMALL_INT_MIN as f64 {
                // from_f64 only fails on non-finite input, excluded above
                if let Some(b) = Integer::from_f64(i) {
                    return Number::from_integer(b);
                }
            } else {
                return Number::Fixnum(i as i64);
            }
        }
    }
    Number::Flonum(d)
}
