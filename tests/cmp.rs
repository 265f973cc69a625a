// towernum: a numeric tower library in Rust
// 2026

// cmp.rs
//
// Tests for comparison and ordering across variants

use std::cmp::Ordering;

use towernum::arith::expt;
use towernum::cmp::{num_cmp, num_eq, num_ge, num_gt, num_le, num_lt, num_max, num_min};
use towernum::value::{make_complex, make_rational};
use towernum::Number;

fn int(v: i64) -> Number {
    Number::from_i64(v)
}

fn rat(n: i64, d: i64) -> Number {
    make_rational(&int(n), &int(d)).unwrap()
}

#[test]
fn cross_variant_ordering() {
    let one = int(1);
    let three_halves = rat(3, 2);
    let two = Number::Flonum(2.0);

    assert!(num_lt(&one, &three_halves).unwrap());
    assert!(num_lt(&three_halves, &two).unwrap());
    assert!(num_gt(&two, &one).unwrap());
    assert!(num_le(&one, &Number::Flonum(1.0)).unwrap());
    assert!(num_ge(&three_halves, &rat(3, 2)).unwrap());
}

#[test]
fn equality_ignores_exactness() {
    assert!(num_eq(&int(1), &Number::Flonum(1.0)));
    assert!(num_eq(&rat(1, 2), &Number::Flonum(0.5)));
    assert!(!num_eq(&rat(1, 3), &Number::Flonum(1.0 / 3.0)));
}

#[test]
fn integer_flonum_comparison_is_exact() {
    // 2^53 + 1 is not representable in binary64; a lossy comparison
    // through f64 would call these equal
    let big = towernum::arith::add(&expt(&int(2), &int(53)).unwrap(), &int(1));
    let flo = Number::Flonum(9007199254740992.0);
    assert_eq!(num_cmp(&big, &flo).unwrap(), Ordering::Greater);
    assert_eq!(num_cmp(&flo, &big).unwrap(), Ordering::Less);

    // likewise large fixnums
    let a = int((1 << 60) + 1);
    let b = Number::Flonum((1u64 << 60) as f64);
    assert_eq!(num_cmp(&a, &b).unwrap(), Ordering::Greater);
}

#[test]
fn ratnum_screening() {
    assert_eq!(num_cmp(&rat(1, 3), &rat(1, 2)).unwrap(), Ordering::Less);
    assert_eq!(num_cmp(&rat(2, 3), &rat(3, 5)).unwrap(), Ordering::Greater);
    assert_eq!(num_cmp(&rat(5, 7), &rat(5, 7)).unwrap(), Ordering::Equal);
    // negative pairs flip the denominator ordering
    assert_eq!(num_cmp(&rat(-1, 7), &rat(-1, 3)).unwrap(), Ordering::Greater);
    assert_eq!(num_cmp(&rat(-3, 2), &rat(-4, 3)).unwrap(), Ordering::Less);
    // against an integer: n versus i * d
    assert_eq!(num_cmp(&rat(7, 2), &int(3)).unwrap(), Ordering::Greater);
    assert_eq!(num_cmp(&int(4), &rat(7, 2)).unwrap(), Ordering::Greater);
}

#[test]
fn nan_is_unordered() {
    let nan = Number::nan();
    assert!(!num_lt(&nan, &int(1)).unwrap());
    assert!(!num_gt(&nan, &int(1)).unwrap());
    assert!(!num_eq(&nan, &nan));
    assert!(num_cmp(&nan, &int(1)).is_err());
}

#[test]
fn complex_only_has_equality() {
    let z = make_complex(1.0, 2.0);
    assert!(num_eq(&z, &make_complex(1.0, 2.0)));
    assert!(!num_eq(&z, &make_complex(1.0, -2.0)));
    assert!(!num_eq(&z, &int(1)));
    assert!(num_cmp(&z, &int(1)).is_err());
    assert!(num_lt(&int(1), &z).is_err());
}

#[test]
fn infinities_order_against_everything() {
    let inf = Number::infinity(false);
    let ninf = Number::infinity(true);
    let big = expt(&int(10), &int(40)).unwrap();
    assert_eq!(num_cmp(&inf, &big).unwrap(), Ordering::Greater);
    assert_eq!(num_cmp(&ninf, &big).unwrap(), Ordering::Less);
    assert_eq!(num_cmp(&ninf, &inf).unwrap(), Ordering::Less);
}

#[test]
fn min_max_contagion() {
    let r = num_max(&int(3), &[Number::Flonum(2.0)]).unwrap();
    // the exact winner converts because an inexact value participated
    assert!(matches!(r, Number::Flonum(d) if d == 3.0));

    let r = num_min(&int(3), &[Number::Flonum(2.0)]).unwrap();
    assert!(matches!(r, Number::Flonum(d) if d == 2.0));

    let r = num_max(&int(3), &[int(7), int(5)]).unwrap();
    assert!(r.is_fixnum());
    assert_eq!(r, int(7));
}

#[test]
fn partial_ord_agrees() {
    assert!(int(1) < rat(3, 2));
    assert!(Number::Flonum(2.0) > rat(3, 2));
    assert_eq!(int(2), Number::Flonum(2.0));
    assert!(Number::nan().partial_cmp(&int(1)).is_none());
}
