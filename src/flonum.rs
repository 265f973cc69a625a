// towernum: a numeric tower library in Rust
// 2026

// flonum.rs
//
// IEEE 754 binary64 decomposition and the shared constant tables

use once_cell::sync::Lazy;
use rug::Integer;

/// Smallest radix accepted for textual conversion.
pub const RADIX_MIN: u32 = 2;

/// Largest radix accepted for textual conversion.
pub const RADIX_MAX: u32 = 36;

/// Maximum allowable magnitude of a decimal exponent in a number
/// literal. Binary64 covers [-323, 308]; exact numbers could go
/// further but would consume unbounded memory, so the same bound
/// applies to both.
pub const MAX_EXPONENT: i64 = 324;

/// Max N such that 10^N is exactly representable in binary64,
/// i.e. max N with N * log2(5) < 53.
pub const MAX_EXACT_10_EXP: i32 = 23;

/// Entries of the integer 10^k table. `ceil(-log10(ldexp(1.0, -1074)))`
/// plus margin for subnormals.
pub(crate) const IEXPT10_TABLESIZE: usize = 341;

static IEXPT10: Lazy<Vec<Integer>> = Lazy::new(|| {
    let mut tab = Vec::with_capacity(IEXPT10_TABLESIZE);
    tab.push(Integer::from(1));
    for i in 1..IEXPT10_TABLESIZE {
        tab.push(Integer::from(&tab[i - 1] * 10));
    }
    tab
});

/// Fast integer 10^e for table-sized exponents.
pub(crate) fn iexpt10(e: usize) -> &'static Integer {
    &IEXPT10[e]
}

pub(crate) static EXPT2_52: Lazy<Integer> = Lazy::new(|| Integer::from(1u64 << 52));
pub(crate) static EXPT2_53: Lazy<Integer> = Lazy::new(|| Integer::from(1u64 << 53));
pub(crate) static EXPT2_63: Lazy<Integer> = Lazy::new(|| Integer::from(1u64 << 63));
pub(crate) static EXPT2_64: Lazy<Integer> = Lazy::new(|| Integer::from(1u128 << 64));

/// A binary64 value split into sign, integer mantissa and binary
/// exponent, so that `d = sign * mantissa * 2^exponent` with
/// `0 <= mantissa < 2^53`.
///
/// Normal numbers have `mantissa >= 2^52`; subnormals have a smaller
/// mantissa and `exponent == -1074`. Zero decodes as a zero mantissa.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedFlonum {
    Finite {
        sign: i32,
        mantissa: u64,
        exponent: i32,
    },
    Infinite {
        sign: i32,
    },
    Nan,
}

/// Decomposes a binary64 by inspecting its raw bit pattern.
pub fn decode_flonum(d: f64) -> DecodedFlonum {
    let bits = d.to_bits();
    let sign = if bits >> 63 != 0 { -1 } else { 1 };
    let rawexp = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1u64 << 52) - 1);

    if rawexp == 0x7ff {
        if frac == 0 {
            return DecodedFlonum::Infinite { sign };
        }
        return DecodedFlonum::Nan;
    }

    if rawexp > 0 {
        DecodedFlonum::Finite {
            sign,
            mantissa: frac | (1u64 << 52),
            exponent: rawexp - 0x3ff - 52,
        }
    } else {
        DecodedFlonum::Finite {
            sign,
            mantissa: frac,
            exponent: -0x3fe - 52,
        }
    }
}

/// `x * 2^n` with correct behavior into the subnormal range.
///
/// The exponent adjustment is staged so that a result that lands below
/// the normal range is produced by a single final rounding step.
pub(crate) fn ldexp(x: f64, n: i32) -> f64 {
    let p1023 = f64::from_bits(0x7fe0_0000_0000_0000); // 2^1023
    let m969 = f64::from_bits(0x0360_0000_0000_0000); // 2^-969

    let mut x = x;
    let mut n = n;
    if n > 1023 {
        x *= p1023;
        n -= 1023;
        if n > 1023 {
            x *= p1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -969 {
        x *= m969;
        n += 969;
        if n < -969 {
            x *= m969;
            n += 969;
            if n < -969 {
                n = -969;
            }
        }
    }
    x * f64::from_bits(((0x3ff + n) as u64) << 52)
}

/// Exactly-representable powers of ten: 10^k for 0 <= k <= 23.
const DPOW10: [f64; 24] = [
    1.0, 1.0e1, 1.0e2, 1.0e3, 1.0e4, 1.0e5, 1.0e6, 1.0e7, 1.0e8, 1.0e9, 1.0e10, 1.0e11, 1.0e12,
    1.0e13, 1.0e14, 1.0e15, 1.0e16, 1.0e17, 1.0e18, 1.0e19, 1.0e20, 1.0e21, 1.0e22, 1.0e23,
];

/// `x * 10^n` in binary64.
///
/// Exact while `|n| <= 23`; outside that range a rounding error creeps
/// in, which the reader corrects afterwards with its refinement loop.
pub(crate) fn raise_pow10(mut x: f64, mut n: i32) -> f64 {
    if n >= 0 {
        while n > 23 {
            x *= 1.0e24;
            n -= 24;
        }
        x * DPOW10[n as usize]
    } else {
        while n < -23 {
            x /= 1.0e24;
            n += 24;
        }
        x / DPOW10[(-n) as usize]
    }
}
