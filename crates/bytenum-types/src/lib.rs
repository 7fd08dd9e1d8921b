#![forbid(unsafe_code)]
#![doc = "Common types and error codes for bytenum."]

pub mod error;

pub use error::*;
