//! Text-stream adapters: one whitespace-delimited token in, decimal text out.
//!
//! Thin wrappers over the decimal conversions; no numeric logic of their own.

use std::io::{self, BufRead, ErrorKind, Write};

use crate::BigInt;

/// Skip leading whitespace, read one whitespace-delimited token, and parse
/// it as a decimal integer.
///
/// A malformed token maps to an `InvalidData` error; end of input before
/// any token maps to `UnexpectedEof`.
pub fn read_bigint<R: BufRead>(reader: &mut R) -> io::Result<BigInt> {
    let mut token = Vec::new();
    loop {
        let mut used = 0;
        let mut done = false;
        {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(byte);
            }
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(io::Error::new(
            ErrorKind::UnexpectedEof,
            "expected an integer token",
        ));
    }
    let text = String::from_utf8(token)
        .map_err(|err| io::Error::new(ErrorKind::InvalidData, err))?;
    text.parse::<BigInt>()
        .map_err(|err| io::Error::new(ErrorKind::InvalidData, err))
}

/// Write the decimal form of `value`.
pub fn write_bigint<W: Write>(writer: &mut W, value: &BigInt) -> io::Result<()> {
    write!(writer, "{value}")
}
