// towernum: a numeric tower library in Rust
// 2026

// round.rs
//
// Tests for rounding modes, arithmetic shift, and bitwise logic

use towernum::arith::expt;
use towernum::bits::{ash, logand, logior, lognot, logxor};
use towernum::round::round;
use towernum::value::make_rational;
use towernum::{Number, NumericError, RoundMode};

fn int(v: i64) -> Number {
    Number::from_i64(v)
}

fn rat(n: i64, d: i64) -> Number {
    make_rational(&int(n), &int(d)).unwrap()
}

#[test]
fn integer_rounding_is_identity() {
    for mode in [
        RoundMode::Floor,
        RoundMode::Ceil,
        RoundMode::Trunc,
        RoundMode::HalfEven,
    ] {
        assert_eq!(round(&int(-3), mode).unwrap(), int(-3));
    }
}

#[test]
fn ratnum_rounding_modes() {
    // (value, floor, ceil, trunc, half-even)
    let cases = [
        (7, 2, 3, 4, 3, 4),
        (-7, 2, -4, -3, -3, -4),
        (5, 2, 2, 3, 2, 2),
        (-5, 2, -3, -2, -2, -2),
        (1, 3, 0, 1, 0, 0),
        (-1, 3, -1, 0, 0, 0),
        (5, 3, 1, 2, 1, 2),
    ];
    for (n, d, fl, ce, tr, he) in cases {
        let x = rat(n, d);
        assert_eq!(round(&x, RoundMode::Floor).unwrap(), int(fl), "floor {}/{}", n, d);
        assert_eq!(round(&x, RoundMode::Ceil).unwrap(), int(ce), "ceil {}/{}", n, d);
        assert_eq!(round(&x, RoundMode::Trunc).unwrap(), int(tr), "trunc {}/{}", n, d);
        assert_eq!(round(&x, RoundMode::HalfEven).unwrap(), int(he), "half-even {}/{}", n, d);
    }
}

#[test]
fn flonum_rounding_modes() {
    let check = |v: f64, mode, expected: f64| {
        assert!(
            matches!(round(&Number::Flonum(v), mode).unwrap(), Number::Flonum(d) if d == expected),
            "round({}, {:?})",
            v,
            mode
        );
    };
    check(2.5, RoundMode::HalfEven, 2.0);
    check(3.5, RoundMode::HalfEven, 4.0);
    check(-2.5, RoundMode::HalfEven, -2.0);
    check(2.7, RoundMode::Floor, 2.0);
    check(-2.7, RoundMode::Floor, -3.0);
    check(2.2, RoundMode::Ceil, 3.0);
    check(-2.2, RoundMode::Trunc, -2.0);
}

#[test]
fn complex_does_not_round() {
    let z = towernum::make_complex(1.0, 2.0);
    assert!(matches!(
        round(&z, RoundMode::Floor),
        Err(NumericError::Type { .. })
    ));
}

#[test]
fn shift_basics() {
    assert_eq!(ash(&int(5), 2).unwrap(), int(20));
    assert_eq!(ash(&int(20), -2).unwrap(), int(5));
    assert_eq!(ash(&int(-20), -2).unwrap(), int(-5));
    // sign extension survives shifting everything out
    assert_eq!(ash(&int(-1), -100).unwrap(), int(-1));
    assert_eq!(ash(&int(5), -100).unwrap(), int(0));
}

#[test]
fn shift_promotes_and_demotes() {
    let big = ash(&int(1), 100).unwrap();
    assert!(big.is_bignum());
    assert_eq!(big, expt(&int(2), &int(100)).unwrap());

    let back = ash(&big, -100).unwrap();
    assert!(back.is_fixnum());
    assert_eq!(back, int(1));

    // negative bignum right shift floors like an arithmetic shift
    let neg = towernum::arith::negate(&big);
    assert_eq!(ash(&neg, -99).unwrap(), int(-2));
    assert_eq!(ash(&neg, -200).unwrap(), int(-1));
}

#[test]
fn bitwise_logic() {
    assert_eq!(logand(&int(0b1100), &int(0b1010)).unwrap(), int(0b1000));
    assert_eq!(logior(&int(0b1100), &int(0b1010)).unwrap(), int(0b1110));
    assert_eq!(logxor(&int(0b1100), &int(0b1010)).unwrap(), int(0b0110));
    assert_eq!(lognot(&int(0)).unwrap(), int(-1));
    assert_eq!(lognot(&int(5)).unwrap(), int(-6));
}

#[test]
fn bitwise_logic_bignums() {
    let big = expt(&int(2), &int(100)).unwrap();
    let big1 = towernum::arith::add(&big, &int(5));

    // the non-negative fix/big pair takes the word fast path
    assert_eq!(logand(&int(0xff), &big1).unwrap(), int(5));
    assert_eq!(logand(&big1, &int(0xff)).unwrap(), int(5));

    // -1 is all ones in two's complement of any length
    assert_eq!(logand(&int(-1), &big).unwrap(), big);
    assert_eq!(logior(&int(0), &big).unwrap(), big);
    assert_eq!(logxor(&big, &big).unwrap(), int(0));

    assert_eq!(
        lognot(&lognot(&big).unwrap()).unwrap(),
        big
    );
}

#[test]
fn bitwise_requires_exact_integers() {
    let half = rat(1, 2);
    assert!(matches!(
        logand(&half, &int(1)),
        Err(NumericError::Type { .. })
    ));
    assert!(matches!(
        lognot(&Number::Flonum(1.0)),
        Err(NumericError::Type { .. })
    ));
    assert!(matches!(ash(&Number::Flonum(2.0), 1), Err(NumericError::Type { .. })));
}
