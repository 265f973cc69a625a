// towernum: a numeric tower library in Rust
// 2026

// arith.rs
//
// Binary arithmetic dispatch over the five-variant tower,
// unary operators, and exponentiation

use rug::Integer;

use crate::coerce::to_f64;
use crate::error::{NumericError, Result};
use crate::flonum::{iexpt10, IEXPT10_TABLESIZE};
use crate::intdiv::quotient_rem;
use crate::value::{make_complex, make_ratio, Number};

/// The binary64 value of a real operand. Callers guarantee the operand
/// is not complex.
fn real_f64(n: &Number) -> f64 {
    debug_assert!(n.is_real());
    to_f64(n).unwrap_or(f64::NAN)
}

/// Numerator and denominator of an exact operand, integers counting
/// as `n/1`. Callers guarantee exactness.
fn exact_num_den(n: &Number) -> (Integer, Integer) {
    debug_assert!(n.is_exact());
    match n {
        Number::Fixnum(v) => (Integer::from(*v), Integer::from(1)),
        Number::Bignum(b) => (b.clone(), Integer::from(1)),
        Number::Ratnum(r) => (r.num.clone(), r.den.clone()),
        _ => (Integer::new(), Integer::from(1)),
    }
}

/// Exact rational addition or subtraction.
///
/// `a/b + c/d` is computed over `lcm(b, d)`, factoring through
/// `g = gcd(b, d)` so intermediate products stay small. Equal and
/// dividing denominators skip the cross-multiplication entirely.
pub(crate) fn ratnum_add_sub(x: &Number, y: &Number, subtract: bool) -> Number {
    let (mut nx, dx) = exact_num_den(x);
    let (mut ny, dy) = exact_num_den(y);

    let dr;
    if dx == dy {
        dr = dx;
    } else {
        let g = if dx == 1 || dy == 1 {
            Integer::from(1)
        } else {
            Integer::from(dx.gcd_ref(&dy))
        };
        if dx == g {
            // b divides d: only x's numerator needs scaling
            nx *= Integer::from(&dy / &dx);
            dr = dy;
        } else if dy == g {
            ny *= Integer::from(&dx / &dy);
            dr = dx;
        } else {
            let fx = Integer::from(&dx / &g);
            let fy = Integer::from(&dy / &g);
            nx *= &fy;
            ny *= fx;
            dr = dx * fy;
        }
    }

    let nr = if subtract { nx - ny } else { nx + ny };
    make_ratio(nr, dr)
}

/// Exact rational multiplication or division; reduction happens in
/// [`make_ratio`].
pub(crate) fn ratnum_mul_div(x: &Number, y: &Number, divide: bool) -> Number {
    let (nx, dx) = exact_num_den(x);
    let (ny, dy) = exact_num_den(y);
    if divide {
        make_ratio(nx * dy, dx * ny)
    } else {
        make_ratio(nx * ny, dx * dy)
    }
}

/// Addition over the full tower.
pub fn add(x: &Number, y: &Number) -> Number {
    use Number::{Bignum, Compnum, Fixnum, Flonum, Ratnum};

    match (x, y) {
        (Fixnum(a), Fixnum(b)) => Number::from_i64(a + b),
        (Fixnum(a), Bignum(b)) => {
            if *a == 0 {
                y.clone()
            } else {
                Number::from_integer(Integer::from(b + *a))
            }
        }
        (Fixnum(a), Ratnum(_)) => {
            if *a == 0 {
                y.clone()
            } else {
                ratnum_add_sub(x, y, false)
            }
        }
        (Fixnum(a), Flonum(d)) => {
            if *a == 0 {
                y.clone()
            } else {
                Number::Flonum(*a as f64 + d)
            }
        }
        (Fixnum(a), Compnum(re, im)) => {
            if *a == 0 {
                y.clone()
            } else {
                Number::Compnum(*a as f64 + re, *im)
            }
        }

        (Bignum(a), Fixnum(b)) => {
            if *b == 0 {
                x.clone()
            } else {
                Number::from_integer(Integer::from(a + *b))
            }
        }
        (Bignum(a), Bignum(b)) => Number::from_integer(Integer::from(a + b)),
        (Bignum(_), Ratnum(_)) => ratnum_add_sub(x, y, false),
        (Ratnum(_), Fixnum(b)) => {
            if *b == 0 {
                x.clone()
            } else {
                ratnum_add_sub(x, y, false)
            }
        }
        (Ratnum(_), Bignum(_) | Ratnum(_)) => ratnum_add_sub(x, y, false),

        (Bignum(_) | Ratnum(_), Flonum(d)) => Number::Flonum(real_f64(x) + d),
        (Bignum(_) | Ratnum(_), Compnum(re, im)) => Number::Compnum(real_f64(x) + re, *im),

        (Flonum(d), Fixnum(b)) => {
            if *b == 0 {
                x.clone()
            } else {
                Number::Flonum(d + *b as f64)
            }
        }
        (Flonum(d), Bignum(_) | Ratnum(_)) => Number::Flonum(d + real_f64(y)),
        (Flonum(a), Flonum(b)) => Number::Flonum(a + b),
        (Flonum(a), Compnum(re, im)) => Number::Compnum(a + re, *im),

        (Compnum(re, im), Fixnum(b)) => {
            if *b == 0 {
                x.clone()
            } else {
                Number::Compnum(re + *b as f64, *im)
            }
        }
        (Compnum(re, im), Bignum(_) | Ratnum(_)) => Number::Compnum(re + real_f64(y), *im),
        (Compnum(re, im), Flonum(b)) => Number::Compnum(re + b, *im),
        (Compnum(r0, i0), Compnum(r1, i1)) => make_complex(r0 + r1, i0 + i1),
    }
}

/// Subtraction over the full tower.
pub fn sub(x: &Number, y: &Number) -> Number {
    use Number::{Bignum, Compnum, Fixnum, Flonum, Ratnum};

    match (x, y) {
        (Fixnum(a), Fixnum(b)) => Number::from_i64(a - b),
        (Fixnum(a), Bignum(b)) => Number::from_integer(Integer::from(*a) - b),
        (Fixnum(_), Ratnum(_)) => ratnum_add_sub(x, y, true),
        (Fixnum(a), Flonum(d)) => Number::Flonum(*a as f64 - d),
        (Fixnum(a), Compnum(re, im)) => Number::Compnum(*a as f64 - re, -im),

        (Bignum(a), Fixnum(b)) => {
            if *b == 0 {
                x.clone()
            } else {
                Number::from_integer(Integer::from(a - *b))
            }
        }
        (Bignum(a), Bignum(b)) => Number::from_integer(Integer::from(a - b)),
        (Bignum(_), Ratnum(_)) => ratnum_add_sub(x, y, true),
        (Ratnum(_), Fixnum(b)) => {
            if *b == 0 {
                x.clone()
            } else {
                ratnum_add_sub(x, y, true)
            }
        }
        (Ratnum(_), Bignum(_) | Ratnum(_)) => ratnum_add_sub(x, y, true),

        (Bignum(_) | Ratnum(_), Flonum(d)) => Number::Flonum(real_f64(x) - d),
        (Bignum(_) | Ratnum(_), Compnum(re, im)) => Number::Compnum(real_f64(x) - re, -im),

        (Flonum(d), Fixnum(b)) => {
            if *b == 0 {
                x.clone()
            } else {
                Number::Flonum(d - *b as f64)
            }
        }
        (Flonum(d), Bignum(_) | Ratnum(_)) => Number::Flonum(d - real_f64(y)),
        (Flonum(a), Flonum(b)) => Number::Flonum(a - b),
        (Flonum(a), Compnum(re, im)) => Number::Compnum(a - re, -im),

        (Compnum(re, im), Fixnum(b)) => {
            if *b == 0 {
                x.clone()
            } else {
                Number::Compnum(re - *b as f64, *im)
            }
        }
        (Compnum(re, im), Bignum(_) | Ratnum(_)) => Number::Compnum(re - real_f64(y), *im),
        (Compnum(re, im), Flonum(b)) => Number::Compnum(re - b, *im),
        (Compnum(r0, i0), Compnum(r1, i1)) => make_complex(r0 - r1, i0 - i1),
    }
}

/// Whether an inexact value has a NaN component; an exact zero does not
/// absorb these.
fn has_nan(n: &Number) -> bool {
    match n {
        Number::Flonum(d) => d.is_nan(),
        Number::Compnum(re, im) => re.is_nan() || im.is_nan(),
        _ => false,
    }
}

/// Multiplication over the full tower.
///
/// An exact zero absorbs any non-NaN multiplicand to exact zero, and
/// an exact one is the identity without reboxing the other operand.
pub fn mul(x: &Number, y: &Number) -> Number {
    use Number::{Bignum, Compnum, Fixnum, Flonum, Ratnum};

    // exact-zero / exact-one shortcuts, both directions
    if x.is_exact_zero() {
        return if has_nan(y) { mul_inexact_by(y, 0.0) } else { x.clone() };
    }
    if y.is_exact_zero() {
        return if has_nan(x) { mul_inexact_by(x, 0.0) } else { y.clone() };
    }
    if x.is_exact_one() {
        return y.clone();
    }
    if y.is_exact_one() {
        return x.clone();
    }

    match (x, y) {
        (Fixnum(a), Fixnum(b)) => match a.checked_mul(*b) {
            Some(k) => Number::from_i64(k),
            None => Number::from_integer(Integer::from(*a) * *b),
        },
        (Fixnum(a), Bignum(b)) => Number::from_integer(Integer::from(b * *a)),
        (Bignum(a), Fixnum(b)) => Number::from_integer(Integer::from(a * *b)),
        (Bignum(a), Bignum(b)) => Number::from_integer(Integer::from(a * b)),

        (Fixnum(_) | Bignum(_), Ratnum(_))
        | (Ratnum(_), Fixnum(_) | Bignum(_) | Ratnum(_)) => ratnum_mul_div(x, y, false),

        (Fixnum(_) | Bignum(_) | Ratnum(_), Flonum(d)) => Number::Flonum(real_f64(x) * d),
        (Flonum(d), Fixnum(_) | Bignum(_) | Ratnum(_)) => Number::Flonum(d * real_f64(y)),
        (Flonum(a), Flonum(b)) => Number::Flonum(a * b),

        (Fixnum(_) | Bignum(_) | Ratnum(_) | Flonum(_), Compnum(re, im)) => {
            let z = real_f64(x);
            make_complex(z * re, z * im)
        }
        (Compnum(re, im), Fixnum(_) | Bignum(_) | Ratnum(_) | Flonum(_)) => {
            let z = real_f64(y);
            make_complex(re * z, im * z)
        }
        (Compnum(r0, i0), Compnum(r1, i1)) => make_complex(r0 * r1 - i0 * i1, r0 * i1 + r1 * i0),
    }
}

/// Componentwise product with a scalar, used when an exact zero meets
/// a NaN-carrying operand.
fn mul_inexact_by(n: &Number, z: f64) -> Number {
    match n {
        Number::Flonum(d) => Number::Flonum(d * z),
        Number::Compnum(re, im) => make_complex(re * z, im * z),
        _ => n.clone(),
    }
}

/// Division by an exact zero.
///
/// An exact non-zero dividend has no representable quotient and
/// errors; an exact zero dividend gives NaN; inexact dividends follow
/// IEEE and spill into signed infinities.
fn div_by_exact_zero(x: &Number) -> Result<Number> {
    match x {
        Number::Flonum(d) => Ok(Number::Flonum(d / 0.0)),
        Number::Compnum(re, im) => Ok(make_complex(re / 0.0, im / 0.0)),
        _ => match x.sign()? {
            0 => Ok(Number::nan()),
            _ => Err(NumericError::DivisionByZero("division")),
        },
    }
}

fn div_internal(x: &Number, y: &Number, autocoerce: bool) -> Result<Number> {
    use Number::{Bignum, Compnum, Fixnum, Flonum, Ratnum};

    match (x, y) {
        (_, Fixnum(0)) => div_by_exact_zero(x),

        (Fixnum(a), Fixnum(b)) => {
            if *a == 0 || *b == 1 {
                return Ok(x.clone());
            }
            if autocoerce {
                if a % b == 0 {
                    Ok(Number::from_i64(a / b))
                } else {
                    Ok(Number::Flonum(*a as f64 / *b as f64))
                }
            } else {
                Ok(make_ratio(Integer::from(*a), Integer::from(*b)))
            }
        }
        (Fixnum(a), Bignum(b)) => {
            if *a == 0 {
                return Ok(x.clone());
            }
            if autocoerce {
                coerce_inexact_quotient(x, y)
            } else {
                Ok(make_ratio(Integer::from(*a), b.clone()))
            }
        }
        (Bignum(a), Fixnum(b)) => {
            if *b == 1 {
                return Ok(x.clone());
            }
            if autocoerce {
                coerce_inexact_quotient(x, y)
            } else {
                Ok(make_ratio(a.clone(), Integer::from(*b)))
            }
        }
        (Bignum(a), Bignum(b)) => {
            if autocoerce {
                coerce_inexact_quotient(x, y)
            } else {
                Ok(make_ratio(a.clone(), b.clone()))
            }
        }

        (Fixnum(_) | Bignum(_), Ratnum(_)) | (Ratnum(_), Fixnum(_) | Bignum(_) | Ratnum(_)) => {
            Ok(ratnum_mul_div(x, y, true))
        }

        (Fixnum(_) | Bignum(_) | Ratnum(_), Flonum(d)) => {
            if x.is_exact_zero() {
                // exact zero over an inexact zero is still undefined
                if *d == 0.0 {
                    return Ok(Number::nan());
                }
                return Ok(x.clone());
            }
            Ok(Number::Flonum(real_f64(x) / d))
        }
        (Flonum(d), Fixnum(b)) => {
            if *b == 1 {
                Ok(x.clone())
            } else {
                Ok(Number::Flonum(d / *b as f64))
            }
        }
        (Flonum(d), Bignum(_) | Ratnum(_)) => Ok(Number::Flonum(d / real_f64(y))),
        (Flonum(a), Flonum(b)) => Ok(Number::Flonum(a / b)),

        (Fixnum(_) | Bignum(_) | Ratnum(_) | Flonum(_), Compnum(r1, i1)) => {
            let rx = real_f64(x);
            let d = r1 * r1 + i1 * i1;
            Ok(make_complex(r1 * rx / d, -i1 * rx / d))
        }
        (Compnum(re, im), Fixnum(_) | Bignum(_) | Ratnum(_) | Flonum(_)) => {
            let z = real_f64(y);
            Ok(make_complex(re / z, im / z))
        }
        (Compnum(r0, i0), Compnum(r1, i1)) => {
            let d = r1 * r1 + i1 * i1;
            Ok(make_complex((r0 * r1 + i0 * i1) / d, (i0 * r1 - r0 * i1) / d))
        }
    }
}

/// Exact integer division that falls back to binary64 when the
/// quotient is not whole.
fn coerce_inexact_quotient(x: &Number, y: &Number) -> Result<Number> {
    let (q, r) = quotient_rem(x, y)?;
    if r.is_exact_zero() {
        Ok(q)
    } else {
        Ok(Number::Flonum(real_f64(x) / real_f64(y)))
    }
}

/// Exact-preserving division: `1 / 3` is the ratnum `1/3`.
pub fn div(x: &Number, y: &Number) -> Result<Number> {
    div_internal(x, y, false)
}

/// Division that coerces a non-terminating exact integer quotient to
/// binary64: `1 / 3` is `0.333...`. Ratnum operands still divide
/// exactly.
pub fn div_inexact(x: &Number, y: &Number) -> Result<Number> {
    div_internal(x, y, true)
}

/// Sign flip.
pub fn negate(x: &Number) -> Number {
    match x {
        Number::Fixnum(v) => Number::from_i64(-v),
        Number::Bignum(b) => Number::from_integer(Integer::from(-b)),
        Number::Ratnum(r) => make_ratio(Integer::from(-&r.num), r.den.clone()),
        Number::Flonum(d) => Number::Flonum(-d),
        Number::Compnum(re, im) => Number::Compnum(-re, -im),
    }
}

/// Absolute value of a real; modulus of a complex.
pub fn abs(x: &Number) -> Number {
    match x {
        Number::Fixnum(v) => Number::from_i64(v.wrapping_abs()),
        Number::Bignum(b) => Number::from_integer(Integer::from(b.abs_ref())),
        Number::Ratnum(r) => {
            if r.num.is_negative() {
                make_ratio(Integer::from(-&r.num), r.den.clone())
            } else {
                x.clone()
            }
        }
        Number::Flonum(d) => Number::Flonum(d.abs()),
        Number::Compnum(re, im) => Number::Flonum(re.hypot(*im)),
    }
}

/// Multiplicative inverse, exact for exact operands.
/// The reciprocal of exact zero is positive infinity.
pub fn reciprocal(x: &Number) -> Number {
    match x {
        Number::Fixnum(v) => make_ratio(Integer::from(1), Integer::from(*v)),
        Number::Bignum(b) => make_ratio(Integer::from(1), b.clone()),
        Number::Ratnum(r) => make_ratio(r.den.clone(), r.num.clone()),
        Number::Flonum(d) => Number::Flonum(1.0 / d),
        Number::Compnum(re, im) => {
            let d = re * re + im * im;
            make_complex(re / d, -im / d)
        }
    }
}

/// Multiplicative inverse that coerces exact reals to binary64.
pub fn reciprocal_inexact(x: &Number) -> Number {
    if x.is_exact_zero() {
        return Number::infinity(false);
    }
    if x.is_exact_one() {
        return x.clone();
    }
    if x.is_real() {
        Number::Flonum(1.0 / real_f64(x))
    } else {
        reciprocal(x)
    }
}

/// Exponentiation by squaring for an exact base and exact integer
/// exponent, with table lookups for base 10 and shifts for base 2.
fn exact_expt(x: &Number, y: &Number) -> Result<Number> {
    let sign = y.sign()?;
    if sign == 0 || x.is_exact_one() {
        return Ok(Number::one());
    }
    if matches!(x, Number::Fixnum(-1)) {
        return Ok(if y.is_odd()? {
            Number::Fixnum(-1)
        } else {
            Number::one()
        });
    }

    let iy = match y {
        Number::Fixnum(v) => *v,
        // who wants such a heavy calculation?
        _ => {
            return Err(NumericError::LimitViolation(format!(
                "exponent too big: {}",
                y
            )))
        }
    };
    let mag = iy.unsigned_abs();

    let r = if matches!(x, Number::Fixnum(10)) && iy > 0 && (iy as usize) < IEXPT10_TABLESIZE {
        Number::from_integer(iexpt10(iy as usize).clone())
    } else if matches!(x, Number::Fixnum(2)) && iy > 0 {
        if mag > u64::from(u32::MAX) {
            return Err(NumericError::LimitViolation(format!(
                "exponent too big: {}",
                y
            )));
        }
        crate::bits::ash(&Number::one(), mag as isize)?
    } else {
        let mut r = Number::one();
        let mut base = x.clone();
        let mut k = mag;
        loop {
            if k == 0 {
                break;
            }
            if k == 1 {
                r = mul(&r, &base);
                break;
            }
            if k & 1 != 0 {
                r = mul(&r, &base);
            }
            base = mul(&base, &base);
            k >>= 1;
        }
        r
    };

    Ok(if sign < 0 { reciprocal(&r) } else { r })
}

/// `x` raised to `y`.
///
/// Exact base with exact integer exponent stays exact; a negative real
/// base with a fractional exponent lands in the complex plane.
pub fn expt(x: &Number, y: &Number) -> Result<Number> {
    if x.is_exact() && y.is_exact_integer() {
        return exact_expt(x, y);
    }
    if !x.is_real() {
        return Err(NumericError::type_error("real number", x));
    }
    if !y.is_real() {
        return Err(NumericError::type_error("real number", y));
    }
    let dx = to_f64(x)?;
    let dy = to_f64(y)?;
    if dy == 0.0 {
        Ok(Number::Flonum(1.0))
    } else if dx < 0.0 && !y.is_integer() {
        // x^y = exp(y log|x|) * (cos(y pi) + i sin(y pi)) for negative
        // real x, since arg(x) = pi
        let mag = (dy * (-dx).ln()).exp();
        let theta = dy * std::f64::consts::PI;
        Ok(make_complex(mag * theta.cos(), mag * theta.sin()))
    } else {
        Ok(Number::Flonum(dx.powf(dy)))
    }
}

/// The smaller of two reals, with exactness contagion.
pub fn min2(x: &Number, y: &Number) -> Result<Number> {
    crate::cmp::num_min(x, std::slice::from_ref(y))
}

/// The larger of two reals, with exactness contagion.
pub fn max2(x: &Number, y: &Number) -> Result<Number> {
    crate::cmp::num_max(x, std::slice::from_ref(y))
}

impl std::ops::Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        negate(&self)
    }
}

impl std::ops::Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        add(&self, &rhs)
    }
}

impl std::ops::Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        sub(&self, &rhs)
    }
}

impl std::ops::Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        mul(&self, &rhs)
    }
}
