#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision two's-complement integer arithmetic for bytenum."]

mod bigint;
mod bits;
mod convert;
mod ops;

pub mod io;

pub use bigint::BigInt;
