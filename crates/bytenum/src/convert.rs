//! Conversions: machine integers, decimal text, display.

use std::fmt;
use std::str::FromStr;

use bytenum_types::NumError;

use crate::bigint::BigInt;

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        let mut n = BigInt {
            digits: value.to_le_bytes().to_vec(),
            negative: value < 0,
        };
        n.normalize();
        n
    }
}

// Narrower machine integers widen through the canonical i32 word.
macro_rules! impl_from_small_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    BigInt::from(value as i32)
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, u8, u16);

impl BigInt {
    /// Convert to a machine integer, reading the first four sign-extended
    /// bytes little-endian. Values outside the i32 range truncate silently.
    pub fn to_i32(&self) -> i32 {
        let mut bytes = [0u8; 4];
        for (i, slot) in bytes.iter_mut().enumerate() {
            *slot = self.byte_at(i);
        }
        i32::from_le_bytes(bytes)
    }

    /// Render as decimal text.
    ///
    /// Repeatedly divides the magnitude by ten; each division yields one
    /// digit (the remainder's low byte) and the reduced value together.
    pub fn to_decimal(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let ten = BigInt::ten();
        let mut mag = self.magnitude();
        let mut digits = Vec::new();
        while !mag.is_zero() {
            let q = BigInt::quotient_magnitude(&mag, &ten);
            let r = mag.sub(&q.mul(&ten));
            digits.push((b'0' + r.byte_at(0)) as char);
            mag = q;
        }

        let mut out = String::with_capacity(digits.len() + 1);
        if self.negative {
            out.push('-');
        }
        out.extend(digits.iter().rev());
        out
    }

    /// Parse decimal text, substituting zero for malformed input.
    ///
    /// Legacy accommodation: the rejection is reported through `log::warn!`
    /// instead of the caller. New code should use the `FromStr`
    /// implementation, which propagates the error.
    pub fn parse_lossy(input: &str) -> BigInt {
        match input.parse() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("rejected integer literal {input:?}: {err}; substituting zero");
                BigInt::zero()
            }
        }
    }
}

impl FromStr for BigInt {
    type Err = NumError;

    /// Parse optional leading `+`/`-` followed by one or more decimal
    /// digits, folding left-to-right with Horner's method.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(NumError::EmptyInput);
        }

        let negative = input.starts_with('-');
        let skip = usize::from(negative || input.starts_with('+'));
        let body = &input[skip..];
        if body.is_empty() {
            return Err(NumError::SignOnly);
        }

        let ten = BigInt::ten();
        let mut value = BigInt::zero();
        for (pos, ch) in body.char_indices() {
            let digit = ch.to_digit(10).ok_or(NumError::InvalidDigit {
                found: ch,
                pos: pos + skip,
            })?;
            value = value.mul(&ten).add(&BigInt::from(digit as u8));
        }

        if negative {
            value = value.negate();
        }
        Ok(value)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}
