// towernum: a numeric tower library in Rust
// 2026

// read.rs
//
// The number reader: full literal grammar plus the correctly-rounded
// decimal-to-binary64 refinement (Clinger's algorithm R, "How to Read
// Floating Point Numbers Accurately", PLDI '90)
//
//  <number>  : <prefix> <complex>
//  <prefix>  : <radix> <exactness> | <exactness> <radix>
//  <radix>   : <empty> | '#b' | '#o' | '#d' | '#x'
//  <exactness> : <empty> | '#e' | '#i'
//  <complex> : <real>
//            | <real> '@' <real>
//            | <real> [+-] <ureal> 'i' | <real> [+-] 'i'
//            | [+-] <ureal> 'i' | [+-] 'i'
//  <real>    : <sign> <ureal>
//  <ureal>   : <uinteger> | <uinteger> '/' <uinteger> | <decimal>
//  <uinteger> : <digit>+ '#'*
//  <decimal> : <digit10>+ '#'* <suffix>
//            | '.' <digit10>+ '#'* <suffix>
//            | <digit10>+ '.' <digit10>* '#'* <suffix>
//            | <digit10>+ '#'+ '.' '#'* <suffix>
//  <suffix>  : <empty> | <exponent-marker> <sign> <digit10>+
//  <exponent-marker> : 'e' | 's' | 'f' | 'd' | 'l'
//
// A trailing '#' stands for an inexact zero digit and makes the whole
// literal inexact unless '#e' was given explicitly.

use once_cell::sync::Lazy;
use rug::ops::Pow;
use rug::Integer;

use crate::arith;
use crate::coerce::{exact_to_inexact, to_f64};
use crate::error::{NumericError, Result};
use crate::flonum::{
    decode_flonum, iexpt10, raise_pow10, DecodedFlonum, EXPT2_52, EXPT2_53, IEXPT10_TABLESIZE,
    MAX_EXACT_10_EXP, MAX_EXPONENT, RADIX_MAX, RADIX_MIN,
};
use crate::value::{make_complex, make_complex_polar, make_rational, Number};

const RADIX_COUNT: usize = (RADIX_MAX - RADIX_MIN + 1) as usize;

/// Per-radix accumulation limits for the unsigned-integer reader.
struct RadixTables {
    /// Accumulator bound: reading one more digit past this may
    /// overflow a signed machine word.
    longlimit: [u64; RADIX_COUNT],
    /// Max digits D such that any D-digit number in this radix fits
    /// a signed machine word.
    longdigs: [u32; RADIX_COUNT],
    /// radix^(longdigs+1), the "big digit" merged into a bignum
    /// accumulator in one multiply-add.
    bigdig: [u64; RADIX_COUNT],
}

static TABLES: Lazy<RadixTables> = Lazy::new(|| {
    let mut longlimit = [0u64; RADIX_COUNT];
    let mut longdigs = [0u32; RADIX_COUNT];
    let mut bigdig = [0u64; RADIX_COUNT];
    for radix in RADIX_MIN..=RADIX_MAX {
        let idx = (radix - RADIX_MIN) as usize;
        let r = radix as u64;
        longlimit[idx] = i64::MAX as u64 / r - r;
        let threshold = i64::MAX as u64 / r;
        let mut n = 1u64;
        let mut i = 0u32;
        loop {
            if n >= threshold {
                longdigs[idx] = i - 1;
                bigdig[idx] = n;
                break;
            }
            n *= r;
            i += 1;
        }
    }
    RadixTables {
        longlimit,
        longdigs,
        bigdig,
    }
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Exactness {
    Unspecified,
    Exact,
    Inexact,
}

struct ReadContext<'a> {
    input: &'a str,
    radix: u32,
    exactness: Exactness,
    padread: bool,
    strict: bool,
}

impl ReadContext<'_> {
    /// In strict mode an implementation-limit violation raises; in
    /// non-strict mode the whole parse quietly yields nothing.
    fn fail<T>(&self, err: NumericError) -> Result<Option<T>> {
        if self.strict {
            Err(err)
        } else {
            Ok(None)
        }
    }

    fn parse_error(&self, msg: &str) -> NumericError {
        NumericError::Parse {
            msg: format!(" {}", msg),
            input: self.input.to_string(),
        }
    }
}

/// radix^n for a small digit count; everything stays in range.
fn ipow(radix: u32, n: u32) -> u64 {
    let mut k = 1u64;
    for _ in 0..n {
        k *= radix as u64;
    }
    k
}

/// Integer 10^e; table lookup for the common range, computed beyond it.
fn pow10(e: u32) -> Integer {
    if (e as usize) < IEXPT10_TABLESIZE {
        iexpt10(e as usize).clone()
    } else {
        Integer::from(10).pow(e)
    }
}

fn digit_value(c: u8, radix: u32) -> Option<u32> {
    let v = match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'a'..=b'z' => (c - b'a') as u32 + 10,
        _ => return None,
    };
    if v < radix {
        Some(v)
    } else {
        None
    }
}

/// Reads an unsigned integer in the context radix, accumulating in a
/// machine word and spilling into a bignum only when forced.
///
/// `initval` is a previously read integer the new digits are appended
/// to; the fractional part of a decimal is read this way. Consuming a
/// `#` pad digit switches the context to inexact (unless `#e` was
/// explicit) and only pads may follow.
///
/// Consuming no digits returns zero; callers detect that case by
/// watching how much input was consumed.
fn read_uint(s: &mut &[u8], ctx: &mut ReadContext<'_>, initval: Option<Number>) -> Number {
    let idx = (ctx.radix - RADIX_MIN) as usize;
    let limit = TABLES.longlimit[idx];
    let diglimit = TABLES.longdigs[idx];
    let bdig = TABLES.bigdig[idx];

    let mut digread = false;
    let mut value_int: u64 = 0;
    let mut digits: u32 = 0;
    let mut value_big: Option<Integer> = None;

    match initval {
        Some(Number::Fixnum(v)) => {
            if v as u64 > limit {
                value_big = Some(Integer::from(v));
            } else {
                value_int = v as u64;
            }
            digread = true;
        }
        Some(Number::Bignum(b)) => {
            value_big = Some(b);
            digread = true;
        }
        Some(_) => {}
        None => {
            // skip leading zeros to avoid pointless bignum churn
            if !s.is_empty() && s[0] == b'0' {
                while !s.is_empty() && s[0] == b'0' {
                    *s = &s[1..];
                }
                digread = true;
            }
        }
    }

    while !s.is_empty() {
        let c = s[0].to_ascii_lowercase();
        let digval;
        if ctx.padread {
            if c == b'#' {
                digval = 0;
            } else {
                break;
            }
        } else if digread && c == b'#' {
            digval = 0;
            ctx.padread = true;
            if ctx.exactness == Exactness::Unspecified {
                ctx.exactness = Exactness::Inexact;
            }
        } else {
            match digit_value(c, ctx.radix) {
                Some(v) => {
                    digval = v as u64;
                    digread = true;
                }
                None => break,
            }
        }
        *s = &s[1..];

        value_int = value_int * ctx.radix as u64 + digval;
        digits += 1;
        if let Some(big) = value_big.as_mut() {
            if digits > diglimit {
                *big *= bdig;
                *big += value_int;
                value_int = 0;
                digits = 0;
            }
        } else if value_int >= limit {
            value_big = Some(Integer::from(value_int));
            value_int = 0;
            digits = 0;
        }
    }

    match value_big {
        None => Number::from_u64(value_int),
        Some(mut big) => {
            if digits > 0 {
                big *= ipow(ctx.radix, digits);
                big += value_int;
            }
            Number::from_integer(big)
        }
    }
}

/// True when an exact integer exceeds 2^52, i.e. a decimal mantissa
/// with more precision than binary64 carries.
fn exceeds_2_52(n: &Number) -> bool {
    match n {
        Number::Fixnum(v) => *v > (1i64 << 52),
        Number::Bignum(b) => *b > *EXPT2_52,
        _ => false,
    }
}

/// Finds the binary64 closest to `f * 10^e`, refining the initial
/// approximation `z`. The loop keeps exact scaled integer images of
/// the decimal value and the candidate, stepping the candidate
/// mantissa by one ulp while that reduces the error, with ties broken
/// to even.
fn algorithm_r(f: &Integer, e: i32, z: f64) -> f64 {
    let (mut m, mut k) = match decode_flonum(z) {
        DecodedFlonum::Finite {
            mantissa, exponent, ..
        } => (Integer::from(mantissa), exponent),
        _ => return z,
    };

    'retry: loop {
        let mut x;
        let mut y;
        if k >= 0 {
            if e >= 0 {
                x = f * pow10(e as u32);
                y = Integer::from(&m << k as u32);
            } else {
                x = f.clone();
                y = (&m * pow10((-e) as u32)) << k as u32;
            }
        } else if e >= 0 {
            x = (f * pow10(e as u32)) << (-k) as u32;
            y = m.clone();
        } else {
            x = Integer::from(f << (-k) as u32);
            y = &m * pow10((-e) as u32);
        }
        let kprev = k;

        loop {
            let sign_d = x.cmp(&y);
            let abs_d = if sign_d == std::cmp::Ordering::Greater {
                Integer::from(&x - &y)
            } else {
                Integer::from(&y - &x)
            };
            let d2 = Integer::from(&m * &abs_d) << 1u32;

            let step_down = match d2.cmp(&y) {
                std::cmp::Ordering::Less => {
                    // correctly rounded, except just above the binade
                    // boundary where the interval below is half-width
                    if m == *EXPT2_52
                        && sign_d == std::cmp::Ordering::Less
                        && Integer::from(&d2 << 1u32) > y
                    {
                        true
                    } else {
                        return crate::flonum::ldexp(m.to_f64(), k);
                    }
                }
                std::cmp::Ordering::Equal => {
                    if m.is_even() {
                        if m == *EXPT2_52 && sign_d == std::cmp::Ordering::Less {
                            true
                        } else {
                            return crate::flonum::ldexp(m.to_f64(), k);
                        }
                    } else {
                        sign_d == std::cmp::Ordering::Less
                    }
                }
                std::cmp::Ordering::Greater => sign_d == std::cmp::Ordering::Less,
            };

            if step_down {
                m -= 1;
                if k > -1074 && m < *EXPT2_52 {
                    m <<= 1u32;
                    k -= 1;
                }
            } else {
                m += 1;
                if m >= *EXPT2_53 {
                    m >>= 1u32;
                    k += 1;
                }
            }

            if kprev >= 0 {
                if k >= 0 {
                    // k stays non-negative: x is invariant
                    if e >= 0 {
                        y = Integer::from(&m << k as u32);
                    } else {
                        y = (&m * pow10((-e) as u32)) << k as u32;
                    }
                } else {
                    continue 'retry;
                }
            } else if k < 0 {
                if e >= 0 {
                    if k != kprev {
                        x = (f * pow10(e as u32)) << (-k) as u32;
                    }
                    y = m.clone();
                } else {
                    if k != kprev {
                        x = Integer::from(f << (-k) as u32);
                    }
                    y = &m * pow10((-e) as u32);
                }
            } else {
                continue 'retry;
            }
        }
    }
}

/// Reads one signed real: integer, rational, or decimal.
fn read_real(s: &mut &[u8], ctx: &mut ReadContext<'_>) -> Result<Option<Number>> {
    let mut minusp = false;
    let mut sign_seen = false;
    match s.first() {
        Some(b'-') => {
            minusp = true;
            sign_seen = true;
            *s = &s[1..];
        }
        Some(b'+') => {
            sign_seen = true;
            *s = &s[1..];
        }
        _ => {}
    }
    if s.is_empty() {
        return Ok(None);
    }

    // non-finite literals mirror what the printer emits; they require
    // an explicit sign
    if sign_seen {
        if s.starts_with(b"inf.0") {
            *s = &s[5..];
            if ctx.exactness == Exactness::Exact {
                return ctx.fail(NumericError::UnsupportedExact("infinity/nan"));
            }
            return Ok(Some(Number::infinity(minusp)));
        }
        if s.starts_with(b"nan.0") {
            *s = &s[5..];
            if ctx.exactness == Exactness::Exact {
                return ctx.fail(NumericError::UnsupportedExact("infinity/nan"));
            }
            return Ok(Some(Number::nan()));
        }
    }

    // integral part
    let intpart: Option<Number>;
    if s[0] != b'.' {
        let ip = read_uint(s, ctx, None);
        if s.is_empty() {
            let v = if minusp { arith::negate(&ip) } else { ip };
            return Ok(Some(if ctx.exactness == Exactness::Inexact {
                exact_to_inexact(&v)
            } else {
                v
            }));
        }
        if s[0] == b'/' {
            // possibly rational
            if s.len() <= 1 {
                return Ok(None);
            }
            *s = &s[1..];
            let lensave = s.len();
            let denom = read_uint(s, ctx, None);
            if denom.is_zero() {
                if lensave > s.len() {
                    if ctx.exactness == Exactness::Exact {
                        return ctx.fail(NumericError::UnsupportedExact("infinity/nan"));
                    }
                    if ip.is_zero() {
                        return Ok(Some(Number::nan()));
                    }
                    return Ok(Some(Number::infinity(minusp)));
                }
                return Ok(None);
            }
            let ip = if minusp { arith::negate(&ip) } else { ip };
            return if ctx.exactness == Exactness::Inexact {
                Ok(Some(exact_to_inexact(&arith::div(&ip, &denom)?)))
            } else {
                Ok(Some(make_rational(&ip, &denom)?))
            };
        }
        intpart = Some(ip);
    } else {
        intpart = None;
    }

    // fractional part; plain integers have already returned
    let mut fracdigs: i64 = 0;
    let fraction = if !s.is_empty() && s[0] == b'.' {
        if ctx.radix != 10 {
            return ctx.fail(ctx.parse_error("(only 10-based fraction is supported)"));
        }
        *s = &s[1..];
        let lensave = s.len();
        let f = read_uint(s, ctx, intpart.clone());
        fracdigs = (lensave - s.len()) as i64;
        f
    } else {
        match &intpart {
            Some(v) => v.clone(),
            None => return Ok(None),
        }
    };

    if intpart.is_none() && fracdigs == 0 {
        // the input was a bare "."
        return Ok(None);
    }

    // exponent
    let mut exponent: i64 = 0;
    let mut exp_minusp = false;
    let mut exp_overflow = false;
    if !s.is_empty() && matches!(s[0].to_ascii_lowercase(), b'e' | b's' | b'f' | b'd' | b'l') {
        *s = &s[1..];
        if s.is_empty() {
            return Ok(None);
        }
        match s[0] {
            b'-' => {
                exp_minusp = true;
                *s = &s[1..];
                if s.is_empty() {
                    return Ok(None);
                }
            }
            b'+' => {
                *s = &s[1..];
                if s.is_empty() {
                    return Ok(None);
                }
            }
            _ => {}
        }
        while !s.is_empty() {
            let c = s[0];
            if !c.is_ascii_digit() {
                break;
            }
            *s = &s[1..];
            if !exp_overflow {
                exponent = exponent * 10 + i64::from(c - b'0');
                // the obviously-wrong range is caught here; subtler
                // overflow is handled after composition
                if exponent >= MAX_EXPONENT {
                    exp_overflow = true;
                }
            }
        }
        if exp_minusp {
            exponent = -exponent;
        }
    }

    if exp_overflow {
        if ctx.exactness == Exactness::Exact {
            // exact values of that magnitude are representable in
            // principle but unreasonable to materialize
            return ctx.fail(NumericError::LimitViolation(format!(
                "exponent out of range: {}",
                ctx.input
            )));
        }
        if exp_minusp {
            return Ok(Some(Number::Flonum(0.0)));
        }
        return Ok(Some(Number::infinity(minusp)));
    }

    // compose
    if ctx.exactness == Exactness::Exact {
        // continue in exact arithmetic; this may produce a ratnum
        let scale = arith::expt(
            &Number::Fixnum(10),
            &Number::from_i64(exponent - fracdigs),
        )?;
        let e = arith::mul(&fraction, &scale);
        Ok(Some(if minusp { arith::negate(&e) } else { e }))
    } else {
        let e10 = exponent - fracdigs;
        let mut realnum = to_f64(&fraction)?;
        realnum = raise_pow10(realnum, e10.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);

        if realnum.is_infinite() {
            // too-big exponents surface here
            return Ok(Some(Number::infinity(minusp)));
        }

        if realnum > 0.0
            && (exceeds_2_52(&fraction)
                || e10 > i64::from(MAX_EXACT_10_EXP)
                || e10 < -i64::from(MAX_EXACT_10_EXP))
        {
            if let Some(fint) = fraction.as_exact_int() {
                realnum = algorithm_r(&fint, e10 as i32, realnum);
            }
        }
        if minusp {
            realnum = -realnum;
        }
        Ok(Some(Number::Flonum(realnum)))
    }
}

fn read_number(input: &str, radix: u32, strict: bool) -> Result<Option<Number>> {
    if !(RADIX_MIN..=RADIX_MAX).contains(&radix) {
        return Err(NumericError::range(format!("radix {}", radix)));
    }
    if !input.is_ascii() {
        return Ok(None);
    }

    let mut ctx = ReadContext {
        input,
        radix,
        exactness: Exactness::Unspecified,
        padread: false,
        strict,
    };
    let mut s = input.as_bytes();

    // prefixes, in either order
    let mut radix_seen = false;
    let mut exactness_seen = false;
    while !s.is_empty() && s[0] == b'#' {
        if s.len() < 2 {
            return Ok(None);
        }
        match s[1].to_ascii_lowercase() {
            b'x' => {
                if radix_seen {
                    return Ok(None);
                }
                ctx.radix = 16;
                radix_seen = true;
            }
            b'o' => {
                if radix_seen {
                    return Ok(None);
                }
                ctx.radix = 8;
                radix_seen = true;
            }
            b'b' => {
                if radix_seen {
                    return Ok(None);
                }
                ctx.radix = 2;
                radix_seen = true;
            }
            b'd' => {
                if radix_seen {
                    return Ok(None);
                }
                ctx.radix = 10;
                radix_seen = true;
            }
            b'e' => {
                if exactness_seen {
                    return Ok(None);
                }
                ctx.exactness = Exactness::Exact;
                exactness_seen = true;
            }
            b'i' => {
                if exactness_seen {
                    return Ok(None);
                }
                ctx.exactness = Exactness::Inexact;
                exactness_seen = true;
            }
            _ => return Ok(None),
        }
        s = &s[2..];
    }
    if s.is_empty() {
        return Ok(None);
    }

    // the pure imaginary forms need a look-ahead before read_real
    // consumes the sign
    let mut sign_seen = false;
    if s[0] == b'+' || s[0] == b'-' {
        if s.len() == 1 {
            return Ok(None);
        }
        if s.len() == 2 && s[1].to_ascii_lowercase() == b'i' {
            if ctx.exactness == Exactness::Exact {
                return ctx.fail(NumericError::UnsupportedExact("complex number"));
            }
            return Ok(Some(make_complex(
                0.0,
                if s[0] == b'+' { 1.0 } else { -1.0 },
            )));
        }
        sign_seen = true;
    }

    let realpart = match read_real(&mut s, &mut ctx)? {
        Some(r) => r,
        None => return Ok(None),
    };
    if s.is_empty() {
        return Ok(Some(realpart));
    }

    match s[0] {
        b'@' => {
            // polar form
            if s.len() <= 1 {
                return Ok(None);
            }
            s = &s[1..];
            let angle = match read_real(&mut s, &mut ctx)? {
                Some(a) => a,
                None => return Ok(None),
            };
            if !s.is_empty() {
                return Ok(None);
            }
            if ctx.exactness == Exactness::Exact {
                return ctx.fail(NumericError::UnsupportedExact("complex number"));
            }
            Ok(Some(make_complex_polar(to_f64(&realpart)?, to_f64(&angle)?)))
        }
        b'+' | b'-' => {
            // rectangular form
            if s.len() <= 1 {
                return Ok(None);
            }
            if s.len() == 2 && s[1].to_ascii_lowercase() == b'i' {
                if ctx.exactness == Exactness::Exact {
                    return ctx.fail(NumericError::UnsupportedExact("complex number"));
                }
                return Ok(Some(make_complex(
                    to_f64(&realpart)?,
                    if s[0] == b'+' { 1.0 } else { -1.0 },
                )));
            }
            let imagpart = match read_real(&mut s, &mut ctx)? {
                Some(i) => i,
                None => return Ok(None),
            };
            if s.len() != 1 || s[0].to_ascii_lowercase() != b'i' {
                return Ok(None);
            }
            if ctx.exactness == Exactness::Exact {
                return ctx.fail(NumericError::UnsupportedExact("complex number"));
            }
            if imagpart.sign()? == 0 {
                return Ok(Some(realpart));
            }
            Ok(Some(make_complex(to_f64(&realpart)?, to_f64(&imagpart)?)))
        }
        b'i' | b'I' => {
            // a signed ureal followed by i is pure imaginary
            if !sign_seen || s.len() != 1 {
                return Ok(None);
            }
            if ctx.exactness == Exactness::Exact {
                return ctx.fail(NumericError::UnsupportedExact("complex number"));
            }
            if realpart.sign()? == 0 {
                Ok(Some(Number::Flonum(0.0)))
            } else {
                Ok(Some(make_complex(0.0, to_f64(&realpart)?)))
            }
        }
        _ => Ok(None),
    }
}

/// Parses a number literal.
///
/// `radix` is the default when the literal carries no radix prefix.
/// In non-strict mode every failure, including implementation limits,
/// yields `Ok(None)`; strict mode raises instead, with malformed
/// input reported as a parse error.
pub fn string_to_number(s: &str, radix: u32, strict: bool) -> Result<Option<Number>> {
    match read_number(s, radix, strict)? {
        Some(n) => Ok(Some(n)),
        None => {
            if strict {
                Err(NumericError::Parse {
                    msg: String::new(),
                    input: s.to_string(),
                })
            } else {
                Ok(None)
            }
        }
    }
}
