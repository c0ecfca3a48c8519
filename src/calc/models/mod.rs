//! # Models Module
//!
//! The calculator model: exactly two natural number registers, "top" and
//! "bottom". The controller borrows them for each event and never creates
//! or destroys them.

pub mod register_model;

pub use register_model::RegisterModel;

use crate::calc::natural::NaturalNumber;

/// Capability set the controller needs from a model
pub trait CalcModel {
    /// Value type held by both registers
    type Value: NaturalNumber;

    fn top(&self) -> &Self::Value;

    fn bottom(&self) -> &Self::Value;

    fn top_mut(&mut self) -> &mut Self::Value;

    fn bottom_mut(&mut self) -> &mut Self::Value;

    /// Both registers at once, as `(top, bottom)`
    fn registers_mut(&mut self) -> (&mut Self::Value, &mut Self::Value);
}
