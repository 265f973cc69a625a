// towernum: a numeric tower library in Rust
// 2026

// print.rs
//
// Number formatting, including the shortest-round-trip flonum printer
// (Burger & Dybvig, "Printing Floating-Point Numbers Quickly and
// Accurately", PLDI '96)

use std::fmt;

use rug::Integer;

use crate::error::{NumericError, Result};
use crate::flonum::{decode_flonum, iexpt10, DecodedFlonum, EXPT2_52, RADIX_MAX, RADIX_MIN};
use crate::value::Number;

/// A byte-oriented output sink for the printer.
pub trait OutputPort {
    fn put_bytes(&mut self, bytes: &[u8]);
    fn put_char(&mut self, c: char);
}

impl OutputPort for String {
    fn put_bytes(&mut self, bytes: &[u8]) {
        if let Ok(s) = std::str::from_utf8(bytes) {
            self.push_str(s);
        }
    }

    fn put_char(&mut self, c: char) {
        self.push(c);
    }
}

impl OutputPort for Vec<u8> {
    fn put_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn put_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }
}

/// Prints the shortest decimal numeral that reads back to exactly
/// `val`. With `plus_sign`, non-negative values carry an explicit `+`
/// (used for the imaginary part of a complex).
fn double_print(buf: &mut String, val: f64, plus_sign: bool) {
    if val == 0.0 {
        if val.is_sign_negative() {
            buf.push_str("-0.0");
        } else if plus_sign {
            buf.push_str("+0.0");
        } else {
            buf.push_str("0.0");
        }
        return;
    } else if val.is_infinite() {
        buf.push_str(if val < 0.0 { "-inf.0" } else { "+inf.0" });
        return;
    } else if val.is_nan() {
        buf.push_str("+nan.0");
        return;
    }

    let val = if val < 0.0 {
        buf.push('-');
        -val
    } else {
        if plus_sign {
            buf.push('+');
        }
        val
    };

    // Variable names follow Burger & Dybvig: mp and mm are m+ and m-,
    // the scaled half-gaps to the neighboring flonums. m+ == m- except
    // at the low edge of a binade, where m+ == 2*m-; the flag mp2
    // records that case so mp can be recomputed from mm each step.
    let (f, exp) = match decode_flonum(val) {
        DecodedFlonum::Finite {
            mantissa, exponent, ..
        } => (mantissa, exponent),
        _ => return,
    };

    // Tie-breaking in the termination conditions inherits the
    // round-half-to-even of the source: an even mantissa owns its
    // boundary points, an odd one does not.
    let mant_even = f & 1 == 0;

    let mut r;
    let mut s;
    let mut mm;
    let mp2;
    let f = Integer::from(f);
    if exp >= 0 {
        let be = Integer::from(1) << exp as u32;
        if f != *EXPT2_52 {
            r = Integer::from(&f << (exp + 1) as u32);
            s = Integer::from(2);
            mp2 = false;
            mm = be;
        } else {
            r = Integer::from(&f << (exp + 2) as u32);
            s = Integer::from(4);
            mp2 = true;
            mm = be;
        }
    } else if exp == -1074 || f != *EXPT2_52 {
        // at the minimum exponent the gap below is not halved, so the
        // interval stays symmetric even for the lowest mantissa
        r = Integer::from(&f << 1u32);
        s = Integer::from(1) << (-exp + 1) as u32;
        mp2 = false;
        mm = Integer::from(1);
    } else {
        r = Integer::from(&f << 2u32);
        s = Integer::from(1) << (-exp + 2) as u32;
        mp2 = true;
        mm = Integer::from(1);
    }

    // estimate the decimal scale
    let mut est = (val.log10() - 0.1).ceil() as i32;
    if est >= 0 {
        s *= iexpt10(est as usize);
    } else {
        let scale = iexpt10((-est) as usize);
        r *= scale;
        mm *= scale;
    }

    // fixup; avoid computing m+ for the obvious case
    let fixup = if r >= s {
        true
    } else {
        let mp = if mp2 {
            Integer::from(&mm << 1u32)
        } else {
            mm.clone()
        };
        let sum = Integer::from(&r + &mp);
        if mant_even {
            sum >= s
        } else {
            sum > s
        }
    };
    if fixup {
        s *= 10;
        est += 1;
    }

    // exponential notation is avoided for small exponents, so 0.9 and
    // 30.0 rather than 9.0e-1 and 3.0e1
    let positional = est < 10 && est > -3;
    let point;
    if positional {
        point = est;
        est = 1;
    } else {
        point = 1;
    }

    if point <= 0 {
        buf.push_str("0.");
        for _ in point..0 {
            buf.push('0');
        }
    }

    // digit generation
    let mut digs = 1;
    loop {
        let r10 = r * 10;
        let (q, rem) = r10.div_rem(s.clone());
        r = rem;
        mm *= 10;
        let mp = if mp2 {
            Integer::from(&mm << 1u32)
        } else {
            mm.clone()
        };

        let q = q.to_u8().unwrap_or(0);
        let (tc1, tc2) = if mant_even {
            (r <= mm, Integer::from(&r + &mp) >= s)
        } else {
            (r < mm, Integer::from(&r + &mp) > s)
        };

        if !tc1 {
            if !tc2 {
                buf.push((b'0' + q) as char);
                if digs == point {
                    buf.push('.');
                }
                digs += 1;
                continue;
            }
            buf.push((b'0' + q + 1) as char);
            break;
        }
        if !tc2 {
            buf.push((b'0' + q) as char);
            break;
        }
        // both terminate: pick the digit closer to the scaled value,
        // breaking the exact tie toward even
        let tc3 = Integer::from(&r << 1u32).cmp(&s);
        let keep = match tc3 {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => mant_even,
            std::cmp::Ordering::Greater => false,
        };
        if keep {
            buf.push((b'0' + q) as char);
        } else {
            buf.push((b'0' + q + 1) as char);
        }
        break;
    }

    if digs <= point {
        for _ in digs..point {
            buf.push('0');
        }
        // a single mantissa digit in exponential notation prints bare
        // (1e23, not 1.0e23), so the trailing ".0" is positional-only
        if positional {
            buf.push_str(".0");
        }
    }

    // the decimal point was shifted one digit in, hence the -1
    est -= 1;
    if est != 0 {
        buf.push('e');
        buf.push_str(&est.to_string());
    }
}

/// Renders an exact integer in the given radix.
fn integer_to_string(i: &Integer, radix: u32, upper: bool) -> String {
    if radix == 10 {
        return i.to_string();
    }
    let s = i.to_string_radix(radix as i32);
    if upper {
        s.to_uppercase()
    } else {
        s
    }
}

/// Formats a validated-radix number.
fn format_number(n: &Number, radix: u32, upper: bool) -> String {
    match n {
        Number::Fixnum(v) => {
            if radix == 10 {
                v.to_string()
            } else {
                integer_to_string(&Integer::from(*v), radix, upper)
            }
        }
        Number::Bignum(b) => integer_to_string(b, radix, upper),
        Number::Ratnum(r) => {
            let mut s = integer_to_string(&r.num, radix, upper);
            s.push('/');
            s.push_str(&integer_to_string(&r.den, radix, upper));
            s
        }
        Number::Flonum(d) => {
            // flonums print in decimal regardless of the requested radix
            let mut s = String::new();
            double_print(&mut s, *d, false);
            s
        }
        Number::Compnum(re, im) => {
            let mut s = String::new();
            double_print(&mut s, *re, false);
            double_print(&mut s, *im, true);
            s.push('i');
            s
        }
    }
}

/// Converts any number to text. `radix` must lie in [2, 36]; uppercase
/// digits are used for radices above ten when `upper` is set.
pub fn number_to_string(n: &Number, radix: u32, upper: bool) -> Result<String> {
    if !(RADIX_MIN..=RADIX_MAX).contains(&radix) {
        return Err(NumericError::range(format!("radix {}", radix)));
    }
    Ok(format_number(n, radix, upper))
}

/// Writes a number to a byte-oriented port.
pub fn write_number<P: OutputPort + ?Sized>(
    n: &Number,
    port: &mut P,
    radix: u32,
    upper: bool,
) -> Result<()> {
    let s = number_to_string(n, radix, upper)?;
    port.put_bytes(s.as_bytes());
    Ok(())
}

/// Writes the shortest-round-trip decimal form of a binary64 to a port.
pub fn write_double<P: OutputPort + ?Sized>(d: f64, port: &mut P) {
    let mut s = String::new();
    double_print(&mut s, d, false);
    port.put_bytes(s.as_bytes());
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self, 10, false))
    }
}
