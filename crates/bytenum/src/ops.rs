//! Arithmetic operations: addition, subtraction, multiplication, division.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use bytenum_types::NumError;

use crate::bigint::{BigInt, BYTE_BITS};

impl BigInt {
    /// Add two BigInts: self + rhs.
    ///
    /// Both operands are read through sign extension up to one byte past the
    /// longer buffer; that extra position is the guard byte absorbing any
    /// carry, so the stored top bit of the result is its true sign.
    pub fn add(&self, rhs: &BigInt) -> BigInt {
        let len = self.digits.len().max(rhs.digits.len());
        let mut result = BigInt {
            digits: Vec::with_capacity(len + 1),
            negative: false,
        };
        let mut carry: u16 = 0;
        for i in 0..=len {
            carry += self.byte_at(i) as u16 + rhs.byte_at(i) as u16;
            result.digits.push(carry as u8);
            carry >>= BYTE_BITS;
        }
        // Carry out of the guard byte falls off the end, as two's
        // complement requires.
        result.normalize();
        result
    }

    /// Subtract: self - rhs, as addition of the arithmetic negation.
    pub fn sub(&self, rhs: &BigInt) -> BigInt {
        self.add(&rhs.negate())
    }

    /// Arithmetic negation: bitwise invert, then add one.
    pub fn negate(&self) -> BigInt {
        self.invert().add(&BigInt::one())
    }

    /// Multiply: self * rhs.
    ///
    /// Schoolbook byte-by-byte product of the two magnitudes, negated back
    /// when exactly one operand was negative.
    pub fn mul(&self, rhs: &BigInt) -> BigInt {
        let a = self.magnitude();
        let b = rhs.magnitude();

        // One byte past the unsigned product keeps the top bit clear.
        let mut acc = vec![0u8; a.digits.len() + b.digits.len() + 1];
        for (i, &bd) in b.digits.iter().enumerate() {
            let mut carry: u16 = 0;
            for (j, &ad) in a.digits.iter().enumerate() {
                let t = acc[i + j] as u16 + ad as u16 * bd as u16 + carry;
                acc[i + j] = t as u8;
                carry = t >> BYTE_BITS;
            }
            acc[i + a.digits.len()] = carry as u8;
        }

        let mut product = BigInt {
            digits: acc,
            negative: false,
        };
        product.normalize();

        if self.negative != rhs.negative {
            product.negate()
        } else {
            product
        }
    }

    /// Division with remainder: returns (quotient, remainder).
    ///
    /// Truncates toward zero: the quotient's sign is the XOR of the operand
    /// signs, and the remainder has the sign of the dividend (or is zero),
    /// so `(a / b) * b + (a % b) == a` always holds.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), NumError> {
        if rhs.is_zero() {
            return Err(NumError::DivisionByZero);
        }

        let a = self.magnitude();
        let b = rhs.magnitude();
        let q = Self::quotient_magnitude(&a, &b);

        let quotient = if self.negative != rhs.negative {
            q.negate()
        } else {
            q
        };
        let remainder = self.sub(&(&quotient).mul(rhs));
        Ok((quotient, remainder))
    }

    /// Single-byte modulus variant: the general modulus restricted to a
    /// one-byte divisor, returning the low byte of the remainder.
    pub fn rem_byte(&self, rhs: u8) -> Result<u8, NumError> {
        let (_, remainder) = self.div_rem(&BigInt::from(rhs))?;
        Ok(remainder.byte_at(0))
    }

    /// The absolute value of self.
    pub(crate) fn magnitude(&self) -> BigInt {
        if self.negative {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Binary-search the unique q with q*b <= a < (q+1)*b, for non-negative
    /// a and positive b.
    ///
    /// Halving the interval costs one right shift; each probe costs a full
    /// multiplication and comparison. O(log a) iterations, traded against
    /// the bookkeeping of long division.
    pub(crate) fn quotient_magnitude(a: &BigInt, b: &BigInt) -> BigInt {
        let one = BigInt::one();
        let mut low = BigInt::zero();
        let mut high = a.add(&one);

        // The answer stays inside [low, high) throughout.
        while low < high {
            let mut mid = (&low).add(&high);
            mid.shift_right(1);

            let product = (&mid).mul(b);
            if product > *a {
                high = mid;
            } else if product.add(b) <= *a {
                low = mid.add(&one);
            } else {
                return mid;
            }
        }
        low
    }
}

// Pure operator sugar over the method primitives, for every combination of
// owned and borrowed operands.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, other: &BigInt) -> BigInt {
                let ($lhs, $rhs) = (self, other);
                $body
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, other: BigInt) -> BigInt {
                $trait::$method(self, &other)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, other: &BigInt) -> BigInt {
                $trait::$method(&self, other)
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, other: BigInt) -> BigInt {
                $trait::$method(&self, &other)
            }
        }
    };
}

// Compound assignment forms derived from the same primitives.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_trait:ident, $op_method:ident) => {
        impl $trait<&BigInt> for BigInt {
            fn $method(&mut self, other: &BigInt) {
                *self = $op_trait::$op_method(&*self, other);
            }
        }

        impl $trait<BigInt> for BigInt {
            fn $method(&mut self, other: BigInt) {
                *self = $op_trait::$op_method(&*self, &other);
            }
        }
    };
}

pub(crate) use {impl_assign_op, impl_binary_op};

impl_binary_op!(Add, add, |a, b| BigInt::add(a, b));
impl_binary_op!(Sub, sub, |a, b| BigInt::sub(a, b));
impl_binary_op!(Mul, mul, |a, b| BigInt::mul(a, b));

// Like the primitive integers, the `/` and `%` operators panic on a zero
// divisor; `div_rem` is the checked form.
impl_binary_op!(Div, div, |a, b| match a.div_rem(b) {
    Ok((quotient, _)) => quotient,
    Err(err) => panic!("{err}"),
});
impl_binary_op!(Rem, rem, |a, b| match a.div_rem(b) {
    Ok((_, remainder)) => remainder,
    Err(err) => panic!("{err}"),
});

impl_assign_op!(AddAssign, add_assign, Add, add);
impl_assign_op!(SubAssign, sub_assign, Sub, sub);
impl_assign_op!(MulAssign, mul_assign, Mul, mul);
impl_assign_op!(DivAssign, div_assign, Div, div);
impl_assign_op!(RemAssign, rem_assign, Rem, rem);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}
