//! # Register Model
//!
//! Default [`CalcModel`] storing the register pair inline.

use super::CalcModel;
use crate::calc::natural::NaturalNumber;

/// Model owning the top and bottom registers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterModel<N: NaturalNumber> {
    top: N,
    bottom: N,
}

impl<N: NaturalNumber> RegisterModel<N> {
    /// Create a model with both registers at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model seeded with the given register values
    pub fn with_values(top: N, bottom: N) -> Self {
        Self { top, bottom }
    }
}

impl<N: NaturalNumber> CalcModel for RegisterModel<N> {
    type Value = N;

    fn top(&self) -> &N {
        &self.top
    }

    fn bottom(&self) -> &N {
        &self.bottom
    }

    fn top_mut(&mut self) -> &mut N {
        &mut self.top
    }

    fn bottom_mut(&mut self) -> &mut N {
        &mut self.bottom
    }

    fn registers_mut(&mut self) -> (&mut N, &mut N) {
        (&mut self.top, &mut self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::natural::BigNatural;

    #[test]
    fn register_model_should_start_at_zero() {
        let model: RegisterModel<BigNatural> = RegisterModel::new();
        assert!(model.top().is_zero());
        assert!(model.bottom().is_zero());
    }

    #[test]
    fn registers_mut_should_expose_both_registers() {
        let mut model =
            RegisterModel::with_values(BigNatural::from(1u64), BigNatural::from(2u64));

        let (top, bottom) = model.registers_mut();
        top.add(bottom);
        bottom.clear();

        assert_eq!(model.top(), &BigNatural::from(3u64));
        assert!(model.bottom().is_zero());
    }
}
