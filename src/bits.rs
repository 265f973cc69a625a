// towernum: a numeric tower library in Rust
// 2026

// bits.rs
//
// Arithmetic shift and bitwise logic on exact integers

use rug::Integer;

use crate::error::{NumericError, Result};
use crate::value::{Number, SMALL_INT_MAX};

/// Arithmetic shift: left for positive `cnt`, right with sign
/// extension for negative `cnt`.
///
/// Right-shifting everything out leaves -1 for negative values and 0
/// otherwise. Left shifts promote to a bignum as soon as the result
/// leaves the fixnum range.
pub fn ash(x: &Number, cnt: isize) -> Result<Number> {
    match x {
        Number::Fixnum(ix) => {
            let ix = *ix;
            if cnt <= -64 {
                Ok(Number::Fixnum(if ix < 0 { -1 } else { 0 }))
            } else if cnt < 0 {
                Ok(Number::Fixnum(ix >> (-cnt) as u32))
            } else if cnt < 61 && ix.unsigned_abs() < (SMALL_INT_MAX >> cnt) as u64 {
                Ok(Number::Fixnum(ix << cnt as u32))
            } else {
                let amount = shift_amount(cnt)?;
                Ok(Number::from_integer(Integer::from(ix) << amount))
            }
        }
        Number::Bignum(b) => {
            if cnt >= 0 {
                let amount = shift_amount(cnt)?;
                Ok(Number::from_integer(Integer::from(b << amount)))
            } else if cnt < -(u32::MAX as isize) {
                Ok(Number::Fixnum(if b.is_negative() { -1 } else { 0 }))
            } else {
                // rug's right shift floors, which is exactly
                // arithmetic sign extension
                Ok(Number::from_integer(Integer::from(b >> (-cnt) as u32)))
            }
        }
        _ => Err(NumericError::type_error("exact integer", x)),
    }
}

fn shift_amount(cnt: isize) -> Result<u32> {
    u32::try_from(cnt)
        .map_err(|_| NumericError::LimitViolation(format!("shift amount too big: {}", cnt)))
}

/// Bitwise complement over a two's-complement view of arbitrary
/// length: `lognot(x) = -(x + 1)`.
pub fn lognot(x: &Number) -> Result<Number> {
    match x {
        Number::Fixnum(v) => Ok(Number::Fixnum(!v)),
        Number::Bignum(b) => Ok(Number::from_integer(Integer::from(!b))),
        _ => Err(NumericError::type_error("exact integer", x)),
    }
}

/// Bitwise and. Non-negative fixnum/bignum pairs take a machine-word
/// fast path; everything else runs through the big-integer primitives.
pub fn logand(x: &Number, y: &Number) -> Result<Number> {
    use Number::{Bignum, Fixnum};

    match (x, y) {
        (Fixnum(a), Fixnum(b)) => Ok(Number::Fixnum(a & b)),
        (Fixnum(a), Bignum(b)) if *a >= 0 && b.is_positive() => {
            Ok(Number::Fixnum((*a as u64 & b.to_u64_wrapping()) as i64))
        }
        (Bignum(a), Fixnum(b)) if *b >= 0 && a.is_positive() => {
            Ok(Number::Fixnum((*b as u64 & a.to_u64_wrapping()) as i64))
        }
        (Fixnum(a), Bignum(b)) => Ok(Number::from_integer(Integer::from(*a) & b)),
        (Bignum(a), Fixnum(b)) => Ok(Number::from_integer(Integer::from(*b) & a)),
        (Bignum(a), Bignum(b)) => Ok(Number::from_integer(Integer::from(a & b))),
        _ => Err(exact_int_error(x, y)),
    }
}

/// Bitwise inclusive or.
pub fn logior(x: &Number, y: &Number) -> Result<Number> {
    use Number::{Bignum, Fixnum};

    match (x, y) {
        (Fixnum(a), Fixnum(b)) => Ok(Number::Fixnum(a | b)),
        (Fixnum(a), Bignum(b)) => Ok(Number::from_integer(Integer::from(*a) | b)),
        (Bignum(a), Fixnum(b)) => Ok(Number::from_integer(Integer::from(*b) | a)),
        (Bignum(a), Bignum(b)) => Ok(Number::from_integer(Integer::from(a | b))),
        _ => Err(exact_int_error(x, y)),
    }
}

/// Bitwise exclusive or.
pub fn logxor(x: &Number, y: &Number) -> Result<Number> {
    use Number::{Bignum, Fixnum};

    match (x, y) {
        (Fixnum(a), Fixnum(b)) => Ok(Number::Fixnum(a ^ b)),
        (Fixnum(a), Bignum(b)) => Ok(Number::from_integer(Integer::from(*a) ^ b)),
        (Bignum(a), Fixnum(b)) => Ok(Number::from_integer(Integer::from(*b) ^ a)),
        (Bignum(a), Bignum(b)) => Ok(Number::from_integer(Integer::from(a ^ b))),
        _ => Err(exact_int_error(x, y)),
    }
}

fn exact_int_error(x: &Number, y: &Number) -> NumericError {
    let bad = if x.is_exact_integer() { y } else { x };
    NumericError::type_error("exact integer", bad)
}
