//! Property tests for bytenum.
//! Exercises the public contract end-to-end: round trips, algebraic
//! identities, and ordering laws over sampled operands.

#[cfg(test)]
mod tests {
    use bytenum::BigInt;
    use bytenum_types::NumError;

    /// A spread of signed values crossing byte-length boundaries.
    fn samples() -> Vec<BigInt> {
        let mut out: Vec<BigInt> = [
            0, 1, -1, 2, -2, 7, 10, 127, -128, 128, 255, -255, 256, -256, 1000, -1000, 65535,
            -65536, 1 << 20, i32::MAX, i32::MIN,
        ]
        .into_iter()
        .map(BigInt::from)
        .collect();
        // A few values wider than the machine word
        for text in [
            "123456789012345678901234567890",
            "-999999999999999999999999",
            "340282366920938463463374607431768211456",
        ] {
            out.push(text.parse().unwrap());
        }
        out
    }

    #[test]
    fn decimal_text_roundtrip_is_canonical() {
        for (input, canonical) in [
            ("0", "0"),
            ("-0", "0"),
            ("+0005", "5"),
            ("-0000128", "-128"),
            ("184467440737095516150", "184467440737095516150"),
        ] {
            let n: BigInt = input.parse().unwrap();
            assert_eq!(n.to_decimal(), canonical);
            let again: BigInt = n.to_decimal().parse().unwrap();
            assert_eq!(again, n);
        }
    }

    #[test]
    fn machine_int_roundtrip() {
        for v in [0, 1, -1, 42, -128, 32767, i32::MAX, i32::MIN] {
            assert_eq!(BigInt::from(v).to_i32(), v);
        }
    }

    #[test]
    fn machine_int_conversion_truncates_wide_values() {
        let wide: BigInt = "4294967296".parse().unwrap(); // 2^32
        assert_eq!(wide.to_i32(), 0);
        let reconstructed = BigInt::from(wide.to_i32());
        assert_eq!(reconstructed, BigInt::zero());
    }

    #[test]
    fn negation_and_inversion_are_involutions() {
        for x in samples() {
            assert_eq!(-(-&x), x);
            assert_eq!(!!&x, x);
            assert_eq!(&x + &(-&x), BigInt::zero());
        }
    }

    #[test]
    fn division_reconstructs_dividend() {
        for x in samples() {
            for y in samples() {
                if y.is_zero() {
                    continue;
                }
                let (q, r) = x.div_rem(&y).unwrap();
                assert_eq!(&q * &y + &r, x, "x={x} y={y}");
                // Truncating semantics: remainder sign follows the dividend
                if !r.is_zero() {
                    assert_eq!(r.is_negative(), x.is_negative(), "x={x} y={y} r={r}");
                }
            }
        }
    }

    #[test]
    fn multiplication_laws() {
        let xs = samples();
        for x in &xs {
            for y in &xs {
                assert_eq!(x * y, y * x, "commutativity x={x} y={y}");
            }
        }
        let (a, b, c) = (
            "123456789".parse::<BigInt>().unwrap(),
            "-987654321".parse::<BigInt>().unwrap(),
            "555555555".parse::<BigInt>().unwrap(),
        );
        assert_eq!((&a * &b) * &c, &a * (&b * &c));
        assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn ordering_is_a_strict_total_order() {
        let xs = samples();
        for x in &xs {
            for y in &xs {
                let outcomes = [x < y, x == y, x > y];
                assert_eq!(
                    outcomes.iter().filter(|&&held| held).count(),
                    1,
                    "trichotomy x={x} y={y}"
                );
            }
        }
        // Transitivity over sorted triples
        let mut sorted = xs.clone();
        sorted.sort();
        for window in sorted.windows(3) {
            assert!(window[0] <= window[1] && window[1] <= window[2]);
            assert!(window[0] <= window[2]);
        }
    }

    #[test]
    fn concrete_division_scenarios() {
        let a: BigInt = "135".parse().unwrap();
        let b: BigInt = "13".parse().unwrap();
        assert_eq!(&a / &b, BigInt::from(10));
        assert_eq!(&a % &b, BigInt::from(5));

        let neg: BigInt = "-135".parse().unwrap();
        assert_eq!(&neg / &b, BigInt::from(-10));
        assert_eq!(&neg % &b, BigInt::from(-5));
    }

    #[test]
    fn malformed_text_reports_position() {
        assert_eq!(
            "abc".parse::<BigInt>().unwrap_err(),
            NumError::InvalidDigit { found: 'a', pos: 0 }
        );
        assert_eq!("".parse::<BigInt>().unwrap_err(), NumError::EmptyInput);
        assert_eq!("+".parse::<BigInt>().unwrap_err(), NumError::SignOnly);
    }

    #[test]
    fn zero_divisor_is_rejected_for_any_dividend() {
        for x in samples() {
            assert_eq!(
                x.div_rem(&BigInt::zero()).unwrap_err(),
                NumError::DivisionByZero
            );
        }
    }

    #[test]
    fn bitwise_agrees_with_machine_integers() {
        let values = [0, 1, -1, 0x55, -0x56, 255, -256, 0x1234, -0x1234];
        for &a in &values {
            for &b in &values {
                let x = BigInt::from(a);
                let y = BigInt::from(b);
                assert_eq!((&x & &y).to_i32(), a & b, "and a={a} b={b}");
                assert_eq!((&x | &y).to_i32(), a | b, "or a={a} b={b}");
                assert_eq!((&x ^ &y).to_i32(), a ^ b, "xor a={a} b={b}");
            }
            assert_eq!((!BigInt::from(a)).to_i32(), !a, "not a={a}");
        }
    }

    #[test]
    fn arithmetic_agrees_with_machine_integers() {
        let values = [0, 1, -1, 13, -13, 100, -100, 32767, -32768];
        for &a in &values {
            for &b in &values {
                let x = BigInt::from(a);
                let y = BigInt::from(b);
                assert_eq!((&x + &y).to_i32(), a + b);
                assert_eq!((&x - &y).to_i32(), a - b);
                assert_eq!((&x * &y).to_i32(), a * b);
                if b != 0 {
                    assert_eq!((&x / &y).to_i32(), a / b);
                    assert_eq!((&x % &y).to_i32(), a % b);
                }
            }
        }
    }

    #[test]
    fn stream_adapters_roundtrip() {
        let mut buf = Vec::new();
        for x in samples() {
            bytenum::io::write_bigint(&mut buf, &x).unwrap();
            buf.push(b' ');
        }
        let mut cursor = buf.as_slice();
        for x in samples() {
            assert_eq!(bytenum::io::read_bigint(&mut cursor).unwrap(), x);
        }
    }
}
