// towernum: a numeric tower library in Rust
// 2026

// intdiv.rs
//
// Tests for quotient, remainder, modulo and gcd

use towernum::arith::expt;
use towernum::intdiv::{gcd, modulo, quotient, quotient_rem, remainder};
use towernum::value::make_rational;
use towernum::{Number, NumericError};

fn int(v: i64) -> Number {
    Number::from_i64(v)
}

#[test]
fn truncating_division_signs() {
    // quotient truncates toward zero; remainder follows the dividend,
    // modulo follows the divisor
    let cases = [
        // (x, y, quotient, remainder, modulo)
        (7, 2, 3, 1, 1),
        (-7, 2, -3, -1, 1),
        (7, -2, -3, 1, -1),
        (-7, -2, 3, -1, -1),
        (6, 3, 2, 0, 0),
        (-6, 3, -2, 0, 0),
    ];
    for (x, y, q, r, m) in cases {
        assert_eq!(quotient(&int(x), &int(y)).unwrap(), int(q), "quotient({}, {})", x, y);
        assert_eq!(remainder(&int(x), &int(y)).unwrap(), int(r), "remainder({}, {})", x, y);
        assert_eq!(modulo(&int(x), &int(y)).unwrap(), int(m), "modulo({}, {})", x, y);
    }
}

#[test]
fn combined_quotient_remainder() {
    let (q, r) = quotient_rem(&int(-7), &int(2)).unwrap();
    assert_eq!(q, int(-3));
    assert_eq!(r, int(-1));
}

#[test]
fn division_by_zero_errors() {
    assert!(matches!(
        quotient(&int(1), &int(0)),
        Err(NumericError::DivisionByZero(_))
    ));
    assert!(matches!(
        modulo(&int(1), &int(0)),
        Err(NumericError::DivisionByZero(_))
    ));
    assert!(matches!(
        remainder(&Number::Flonum(4.0), &Number::Flonum(0.0)),
        Err(NumericError::DivisionByZero(_))
    ));
}

#[test]
fn bignum_division() {
    let big = expt(&int(10), &int(30)).unwrap();
    assert_eq!(quotient(&big, &big).unwrap(), int(1));
    assert_eq!(remainder(&big, &int(7)).unwrap(), int(1));

    // a fixnum divided by a bignum is all remainder
    assert_eq!(quotient(&int(5), &big).unwrap(), int(0));
    assert_eq!(remainder(&int(5), &big).unwrap(), int(5));

    // modulo adjusts when the signs differ
    let neg_big = towernum::arith::negate(&big);
    assert_eq!(modulo(&int(5), &neg_big).unwrap(), towernum::arith::add(&neg_big, &int(5)));
    assert_eq!(remainder(&int(5), &neg_big).unwrap(), int(5));
}

#[test]
fn flonum_operands_must_be_integral() {
    let (q, r) = quotient_rem(&Number::Flonum(7.0), &Number::Flonum(2.0)).unwrap();
    assert!(matches!(q, Number::Flonum(d) if d == 3.0));
    assert!(matches!(r, Number::Flonum(d) if d == 1.0));

    assert!(matches!(
        quotient(&Number::Flonum(7.5), &Number::Flonum(2.0)),
        Err(NumericError::Type { .. })
    ));
    assert!(matches!(
        modulo(&int(7), &Number::Flonum(2.5)),
        Err(NumericError::Type { .. })
    ));
    let half = make_rational(&int(1), &int(2)).unwrap();
    assert!(matches!(
        quotient(&half, &int(2)),
        Err(NumericError::Type { .. })
    ));
}

#[test]
fn gcd_basics() {
    assert_eq!(gcd(&int(12), &int(18)).unwrap(), int(6));
    assert_eq!(gcd(&int(17), &int(5)).unwrap(), int(1));
    assert_eq!(gcd(&int(-12), &int(18)).unwrap(), int(6));
    // gcd(0, y) = |y|
    assert_eq!(gcd(&int(0), &int(-4)).unwrap(), int(4));
    assert_eq!(gcd(&int(9), &int(0)).unwrap(), int(9));
}

#[test]
fn gcd_mixed_widths() {
    let big = expt(&int(2), &int(100)).unwrap();
    let sixty = expt(&int(2), &int(60)).unwrap();
    assert_eq!(gcd(&big, &sixty).unwrap(), sixty);

    // big against fixnum takes the one-division fast path
    assert_eq!(gcd(&big, &int(6)).unwrap(), int(2));

    // flonum operands run the real-valued loop
    assert!(matches!(
        gcd(&Number::Flonum(4.0), &Number::Flonum(6.0)).unwrap(),
        Number::Flonum(d) if d == 2.0
    ));
    assert!(matches!(
        gcd(&int(4), &Number::Flonum(6.0)).unwrap(),
        Number::Flonum(d) if d == 2.0
    ));
    assert!(matches!(
        gcd(&Number::Flonum(1.5), &int(3)),
        Err(NumericError::Type { .. })
    ));
}
