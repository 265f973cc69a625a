// towernum: a numeric tower library in Rust
// 2026

// round.rs
//
// Rounding to integral values under four modes

use rug::Integer;

use crate::error::{NumericError, Result};
use crate::value::Number;

/// How a non-integral real maps to an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundMode {
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// Toward zero.
    Trunc,
    /// To the nearest integer, ties to the even neighbor.
    HalfEven,
}

/// Rounds a real number to an integral value in the given mode.
///
/// Exact integers are identities; ratnums produce exact integers;
/// flonums produce integral flonums.
pub fn round(n: &Number, mode: RoundMode) -> Result<Number> {
    match n {
        Number::Fixnum(_) | Number::Bignum(_) => Ok(n.clone()),
        Number::Ratnum(r) => {
            let (q, rem) = Integer::from(&r.num).div_rem(Integer::from(&r.den));
            // a reduced ratnum always has a non-zero remainder; the
            // truncated quotient sits between the value and zero
            let negative = r.num.is_negative();
            let offset = match mode {
                RoundMode::Floor => {
                    if negative {
                        -1
                    } else {
                        0
                    }
                }
                RoundMode::Ceil => {
                    if negative {
                        0
                    } else {
                        1
                    }
                }
                RoundMode::Trunc => 0,
                RoundMode::HalfEven => {
                    let rem2 = Integer::from(rem.abs_ref()) << 1u32;
                    match r.den.cmp(&rem2) {
                        std::cmp::Ordering::Greater => 0,
                        std::cmp::Ordering::Less => {
                            if negative {
                                -1
                            } else {
                                1
                            }
                        }
                        std::cmp::Ordering::Equal => {
                            // exactly halfway: break toward even
                            if q.is_odd() {
                                if negative {
                                    -1
                                } else {
                                    1
                                }
                            } else {
                                0
                            }
                        }
                    }
                }
            };
            Ok(Number::from_integer(q + offset))
        }
        Number::Flonum(d) => {
            let r = match mode {
                RoundMode::Floor => d.floor(),
                RoundMode::Ceil => d.ceil(),
                RoundMode::Trunc => d.trunc(),
                // the platform primitive is correctly rounded; no need
                // for a hand-rolled modf dance
                RoundMode::HalfEven => d.round_ties_even(),
            };
            Ok(Number::Flonum(r))
        }
        Number::Compnum(_, _) => Err(NumericError::type_error("real number", n)),
    }
}
