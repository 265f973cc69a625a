// towernum: a numeric tower library in Rust
// 2026

// printer.rs
//
// Tests for number formatting and the shortest round-trip property

use pretty_assertions::assert_eq;

use towernum::arith::expt;
use towernum::print::write_number;
use towernum::value::{make_complex, make_rational};
use towernum::{number_to_string, string_to_number, Number};

fn int(v: i64) -> Number {
    Number::from_i64(v)
}

fn print10(n: &Number) -> String {
    number_to_string(n, 10, false).unwrap()
}

#[test]
fn integers_and_radices() {
    assert_eq!(print10(&int(0)), "0");
    assert_eq!(print10(&int(-42)), "-42");
    assert_eq!(
        print10(&expt(&int(2), &int(100)).unwrap()),
        "1267650600228229401496703205376"
    );
    assert_eq!(number_to_string(&int(255), 16, false).unwrap(), "ff");
    assert_eq!(number_to_string(&int(255), 16, true).unwrap(), "FF");
    assert_eq!(number_to_string(&int(-255), 16, false).unwrap(), "-ff");
    assert_eq!(number_to_string(&int(5), 2, false).unwrap(), "101");
    assert_eq!(number_to_string(&int(35), 36, false).unwrap(), "z");
}

#[test]
fn radix_out_of_range() {
    assert!(number_to_string(&int(1), 1, false).is_err());
    assert!(number_to_string(&int(1), 37, false).is_err());
}

#[test]
fn rationals_and_complexes() {
    let third = make_rational(&int(1), &int(3)).unwrap();
    assert_eq!(print10(&third), "1/3");
    let neg = make_rational(&int(-5), &int(10)).unwrap();
    assert_eq!(print10(&neg), "-1/2");
    assert_eq!(
        number_to_string(&make_rational(&int(255), &int(16)).unwrap(), 16, false).unwrap(),
        "ff/10"
    );

    assert_eq!(print10(&make_complex(1.0, 2.0)), "1.0+2.0i");
    assert_eq!(print10(&make_complex(1.0, -2.0)), "1.0-2.0i");
    assert_eq!(print10(&make_complex(-1.5, 0.5)), "-1.5+0.5i");
}

#[test]
fn flonum_special_values() {
    assert_eq!(print10(&Number::Flonum(0.0)), "0.0");
    assert_eq!(print10(&Number::Flonum(-0.0)), "-0.0");
    assert_eq!(print10(&Number::infinity(false)), "+inf.0");
    assert_eq!(print10(&Number::infinity(true)), "-inf.0");
    assert_eq!(print10(&Number::nan()), "+nan.0");
}

#[test]
fn shortest_decimal_output() {
    let cases = [
        (1.0, "1.0"),
        (-1.0, "-1.0"),
        (0.5, "0.5"),
        (0.1, "0.1"),
        (0.001, "0.001"),
        (1.5, "1.5"),
        (3.5, "3.5"),
        (100.0, "100.0"),
        (1234.5, "1234.5"),
        (1e8, "100000000.0"),
        (999999999.0, "999999999.0"),
        (1e9, "1e9"),
        (1e10, "1e10"),
        (1e23, "1e23"),
        (1.5e-5, "1.5e-5"),
        (3.141592653589793, "3.141592653589793"),
        (2.2250738585072014e-308, "2.2250738585072014e-308"),
        (5e-324, "5e-324"),
        (1.7976931348623157e308, "1.7976931348623157e308"),
    ];
    for (v, expected) in cases {
        assert_eq!(print10(&Number::Flonum(v)), expected, "printing {:e}", v);
    }
}

#[test]
fn printed_flonums_read_back_identically() {
    let samples = [
        0.1,
        -0.3,
        1.0 / 3.0,
        2.0f64.sqrt(),
        6.02214076e23,
        -1.6e-19,
        4.9e-324,
        1.7976931348623157e308,
        2.2250738585072014e-308,
        123456.789e-30,
        9007199254740993.0,
        f64::from_bits(0x0012_3456_789a_bcde),
        f64::from_bits(0x7fe1_2345_6789_abcd),
    ];
    for v in samples {
        let s = print10(&Number::Flonum(v));
        let back = string_to_number(&s, 10, false).unwrap().unwrap();
        match back {
            Number::Flonum(d) => {
                assert_eq!(d.to_bits(), v.to_bits(), "round-tripping {} via {:?}", v, s)
            }
            other => panic!("{:?} read back as {:?}", s, other),
        }
    }
}

#[test]
fn port_output() {
    let mut s = String::new();
    write_number(&int(42), &mut s, 10, false).unwrap();
    s.push(' ');
    write_number(&Number::Flonum(0.5), &mut s, 10, false).unwrap();
    assert_eq!(s, "42 0.5");

    let mut bytes: Vec<u8> = Vec::new();
    write_number(&int(255), &mut bytes, 16, true).unwrap();
    assert_eq!(bytes, b"FF");
}

#[test]
fn display_uses_decimal() {
    assert_eq!(format!("{}", int(7)), "7");
    assert_eq!(
        format!("{}", make_rational(&int(2), &int(6)).unwrap()),
        "1/3"
    );
    assert_eq!(format!("{}", Number::Flonum(2.5)), "2.5");
}
