/*!
`towernum` is the numeric tower of a dynamically-typed language
runtime: a tagged number value ranging over machine-word integers,
arbitrary-precision integers, exact rationals, IEEE 754 binary64
flonums, and rectangular complex pairs, together with the arithmetic,
comparison, rounding, bitwise logic and textual conversion that tie
the five variants into one coherent type.

The exact side is built on [rug](https://docs.rs/rug/latest/rug/)
(GMP) integers; the inexact side is plain binary64. The two halves
meet in the textual converters: [`number_to_string`] prints the
shortest decimal that reads back to the identical flonum (Burger &
Dybvig), and [`string_to_number`] reads decimals with correct
rounding (Clinger's algorithm R).

All values are immutable and every operation is a pure function; the
only process-wide state is a handful of lazily built, read-only
tables.
*/

pub mod arith;
pub mod bits;
pub mod cmp;
pub mod coerce;
pub mod error;
pub mod flonum;
pub mod generic;
pub mod intdiv;
pub mod print;
pub mod read;
pub mod round;
pub mod value;

pub use crate::coerce::Clamp;
pub use crate::error::{NumericError, Result};
pub use crate::flonum::{decode_flonum, DecodedFlonum};
pub use crate::generic::{GenericOp, GenericRegistry, NumericObject};
pub use crate::print::{number_to_string, OutputPort};
pub use crate::read::string_to_number;
pub use crate::round::RoundMode;
pub use crate::value::{
    flonum_to_number, make_complex, make_complex_polar, make_ratio, make_rational, Number, Ratio,
    SMALL_INT_MAX, SMALL_INT_MIN,
};
