// towernum: a numeric tower library in Rust
// 2026

// laws.rs
//
// Universal laws of the tower, checked over generated operands

use proptest::prelude::*;

use towernum::arith::{add, div, mul, negate, sub};
use towernum::bits::{ash, lognot};
use towernum::cmp::{num_eq, num_gt, num_lt};
use towernum::intdiv::{modulo, quotient_rem};
use towernum::value::make_rational;
use towernum::{string_to_number, Number};

fn int(v: i64) -> Number {
    Number::from_i64(v)
}

proptest! {
    #[test]
    fn addition_commutes(a in any::<i64>(), b in any::<i64>()) {
        let x = int(a);
        let y = int(b);
        prop_assert_eq!(add(&x, &y), add(&y, &x));
    }

    #[test]
    fn additive_inverse(a in any::<i64>()) {
        let x = int(a);
        prop_assert_eq!(add(&x, &negate(&x)), int(0));
        prop_assert_eq!(sub(&int(0), &x), negate(&x));
    }

    #[test]
    fn exact_division_inverts_multiplication(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let x = int(a);
        let y = int(b);
        let q = div(&x, &y).unwrap();
        prop_assert_eq!(mul(&q, &y), x);
    }

    #[test]
    fn quotient_remainder_identity(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let x = int(a);
        let y = int(b);
        let (q, r) = quotient_rem(&x, &y).unwrap();
        prop_assert_eq!(add(&mul(&q, &y), &r), x);

        // remainder sign follows the dividend, modulo sign the divisor
        let rs = r.sign().unwrap();
        prop_assert!(rs == 0 || rs == x.sign().unwrap());
        let m = modulo(&x, &y).unwrap();
        let ms = m.sign().unwrap();
        prop_assert!(ms == 0 || ms == y.sign().unwrap());
    }

    #[test]
    fn printed_flonums_read_back(bits in any::<u64>()) {
        let v = f64::from_bits(bits);
        prop_assume!(v.is_finite());
        let s = towernum::number_to_string(&Number::Flonum(v), 10, false).unwrap();
        let back = string_to_number(&s, 10, false).unwrap();
        match back {
            Some(Number::Flonum(d)) => prop_assert_eq!(d.to_bits(), v.to_bits(), "via {}", s),
            other => prop_assert!(false, "{:?} read back as {:?}", s, other),
        }
    }

    #[test]
    fn shift_round_trips(a in 0i64..(1 << 40), n in 0isize..64) {
        let x = int(a);
        let shifted = ash(&x, n).unwrap();
        prop_assert_eq!(ash(&shifted, -n).unwrap(), x);
    }

    #[test]
    fn lognot_is_an_involution(a in any::<i64>()) {
        let x = int(a);
        prop_assert_eq!(lognot(&lognot(&x).unwrap()).unwrap(), x);
    }

    #[test]
    fn real_comparison_is_total(a in any::<i64>(), bits in any::<u64>()) {
        let v = f64::from_bits(bits);
        prop_assume!(v.is_finite());
        let x = int(a);
        let y = Number::Flonum(v);
        let holds = u32::from(num_lt(&x, &y).unwrap())
            + u32::from(num_eq(&x, &y))
            + u32::from(num_gt(&x, &y).unwrap());
        prop_assert_eq!(holds, 1);
    }

    #[test]
    fn rationals_stay_reduced(n in any::<i64>(), d in any::<i64>()) {
        prop_assume!(d != 0);
        let r = make_rational(&int(n), &int(d)).unwrap();
        if let Number::Ratnum(ratio) = &r {
            let g = rug::Integer::from(ratio.numerator().gcd_ref(ratio.denominator()));
            prop_assert_eq!(g, 1);
            prop_assert!(*ratio.denominator() > 1);
            prop_assert!(*ratio.numerator() != 0);
        } else {
            // collapsed to an integer, which is exactly the point
            prop_assert!(r.is_exact_integer());
        }
    }
}
