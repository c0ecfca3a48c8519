//! # BigUint-backed Natural Number
//!
//! [`NaturalNumber`] implementation delegating the arithmetic to
//! `num-bigint`.

use super::{BoundedInt, NaturalNumber, INT_LIMIT};
use crate::calc::error::CalcError;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;

/// Arbitrary-precision natural number
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNatural(BigUint);

impl BigNatural {
    /// Zero
    pub fn zero() -> Self {
        Self::default()
    }
}

impl From<u64> for BigNatural {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl NaturalNumber for BigNatural {
    fn from_int(n: BoundedInt) -> Self {
        Self(BigUint::from(n))
    }

    fn clear(&mut self) {
        self.0.set_zero();
    }

    fn copy_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.0 = std::mem::take(&mut source.0);
    }

    fn add(&mut self, addend: &Self) {
        self.0 += &addend.0;
    }

    fn subtract(&mut self, subtrahend: &Self) -> Result<(), CalcError> {
        if subtrahend.0 > self.0 {
            return Err(CalcError::invalid_operation(
                "subtract",
                format!("{subtrahend} is greater than {self}"),
            ));
        }
        self.0 -= &subtrahend.0;
        Ok(())
    }

    fn multiply(&mut self, factor: &Self) {
        self.0 *= &factor.0;
    }

    fn divide(&mut self, divisor: &Self) -> Result<Self, CalcError> {
        if divisor.0.is_zero() {
            return Err(CalcError::invalid_operation("divide", "division by zero"));
        }
        let (quotient, remainder) = self.0.div_rem(&divisor.0);
        self.0 = quotient;
        Ok(Self(remainder))
    }

    fn power(&mut self, exponent: BoundedInt) {
        self.0 = self.0.pow(exponent);
    }

    fn root(&mut self, degree: BoundedInt) -> Result<(), CalcError> {
        if degree < 2 {
            return Err(CalcError::invalid_operation(
                "root",
                format!("degree {degree} is less than 2"),
            ));
        }
        self.0 = self.0.nth_root(degree);
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn to_int(&self) -> Result<BoundedInt, CalcError> {
        self.0
            .to_u32()
            .filter(|n| *n <= INT_LIMIT)
            .ok_or_else(|| CalcError::Overflow {
                value: self.to_string(),
            })
    }

    fn multiply_by_10(&mut self, digit: u8) -> Result<(), CalcError> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit { digit });
        }
        self.0 *= 10u32;
        self.0 += u32::from(digit);
        Ok(())
    }
}

impl fmt::Display for BigNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BigNatural {
    type Err = CalcError;

    /// Parse decimal digits, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parse_error = || CalcError::Parse {
            input: s.to_string(),
        };

        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_error());
        }

        BigUint::parse_bytes(trimmed.as_bytes(), 10)
            .map(Self)
            .ok_or_else(parse_error)
    }
}
