//! # Natural Numbers
//!
//! The value abstraction held in each calculator register: a mutable,
//! arbitrary-precision non-negative integer.
//!
//! Operations mutate the receiver in place. Operations with preconditions
//! return [`CalcError`] and leave the receiver unchanged when the
//! precondition does not hold.

pub mod big_natural;

pub use big_natural::BigNatural;

use crate::calc::error::CalcError;
use std::fmt;

/// Fixed-width integer used for exponents, root degrees and conversions.
pub type BoundedInt = u32;

/// Largest value a register may hold and still convert to [`BoundedInt`].
pub const INT_LIMIT: BoundedInt = i32::MAX as BoundedInt;

/// Mutable arbitrary-precision natural number
pub trait NaturalNumber: Default + Ord + fmt::Display + fmt::Debug {
    /// Build a value from a bounded integer
    fn from_int(n: BoundedInt) -> Self;

    /// Fresh zero-valued instance of the same type
    fn new_instance(&self) -> Self {
        Self::default()
    }

    /// Reset to zero
    fn clear(&mut self);

    /// Replace this value with a copy of `source`
    fn copy_from(&mut self, source: &Self);

    /// Move the value of `source` into this one, leaving `source` zero
    fn transfer_from(&mut self, source: &mut Self);

    fn add(&mut self, addend: &Self);

    /// Fails when `subtrahend > self`
    fn subtract(&mut self, subtrahend: &Self) -> Result<(), CalcError>;

    fn multiply(&mut self, factor: &Self);

    /// Leaves the quotient in place and returns the remainder.
    ///
    /// Fails when `divisor` is zero.
    fn divide(&mut self, divisor: &Self) -> Result<Self, CalcError>;

    fn power(&mut self, exponent: BoundedInt);

    /// Floor of the `degree`-th root. Fails when `degree < 2`.
    fn root(&mut self, degree: BoundedInt) -> Result<(), CalcError>;

    fn is_zero(&self) -> bool;

    /// Fails with [`CalcError::Overflow`] above [`INT_LIMIT`]
    fn to_int(&self) -> Result<BoundedInt, CalcError>;

    /// `self = self * 10 + digit`. Fails when `digit > 9`.
    fn multiply_by_10(&mut self, digit: u8) -> Result<(), CalcError>;
}
