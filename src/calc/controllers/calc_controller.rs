//! # Calculator Controller
//!
//! One handler per UI event. Each handler mutates the model's registers in
//! place and then runs the single synchronization routine that pushes the
//! registers and the four legality flags to the view. Handlers never touch
//! the view directly.
//!
//! Handlers do not check the legality flags themselves: the view disables
//! illegal operations. If one is invoked anyway, the value type rejects it
//! with a [`CalcError`] before any register changes, so the view still
//! matches the model.

use crate::calc::commands::CalcEvent;
use crate::calc::error::CalcError;
use crate::calc::models::CalcModel;
use crate::calc::natural::{NaturalNumber, INT_LIMIT};
use crate::calc::views::CalcView;

/// Event handlers connecting a calculator model to a view
pub struct CalcController<M, V>
where
    M: CalcModel,
    V: CalcView<M::Value>,
{
    model: M,
    view: V,
    two: M::Value,
    int_limit: M::Value,
}

impl<M, V> CalcController<M, V>
where
    M: CalcModel,
    V: CalcView<M::Value>,
{
    /// Connect `model` and `view`; the view is synchronized before returning
    pub fn new(model: M, view: V) -> Self {
        let mut controller = Self {
            model,
            view,
            two: M::Value::from_int(2),
            int_limit: M::Value::from_int(INT_LIMIT),
        };
        controller.update_view_to_match_model();
        controller
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Push both registers and the legality flags to the view
    fn update_view_to_match_model(&mut self) {
        let top = self.model.top();
        let bottom = self.model.bottom();

        self.view.update_top_display(top);
        self.view.update_bottom_display(bottom);

        let subtract_allowed = bottom <= top;
        let divide_allowed = !bottom.is_zero();
        let root_allowed = bottom >= &self.two && bottom <= &self.int_limit;
        let power_allowed = bottom >= &self.two;

        self.view.update_subtract_allowed(subtract_allowed);
        self.view.update_divide_allowed(divide_allowed);
        self.view.update_root_allowed(root_allowed);
        self.view.update_power_allowed(power_allowed);

        tracing::debug!(
            "view synchronized: top={}, bottom={}, subtract={}, divide={}, root={}, power={}",
            top,
            bottom,
            subtract_allowed,
            divide_allowed,
            root_allowed,
            power_allowed
        );
    }

    /// Route `event` to its handler. Quit is not a calculator operation and
    /// leaves everything untouched.
    pub fn process_event(&mut self, event: CalcEvent) -> Result<(), CalcError> {
        tracing::debug!("processing {:?}", event);
        match event {
            CalcEvent::Clear => {
                self.process_clear_event();
                Ok(())
            }
            CalcEvent::Swap => {
                self.process_swap_event();
                Ok(())
            }
            CalcEvent::Enter => {
                self.process_enter_event();
                Ok(())
            }
            CalcEvent::Add => {
                self.process_add_event();
                Ok(())
            }
            CalcEvent::Multiply => {
                self.process_multiply_event();
                Ok(())
            }
            CalcEvent::Subtract => self.process_subtract_event(),
            CalcEvent::Divide => self.process_divide_event(),
            CalcEvent::Power => self.process_power_event(),
            CalcEvent::Root => self.process_root_event(),
            CalcEvent::AddDigit(digit) => self.process_add_new_digit_event(digit),
            CalcEvent::Quit => Ok(()),
        }
    }

    /// bottom := 0
    pub fn process_clear_event(&mut self) {
        self.model.bottom_mut().clear();
        self.update_view_to_match_model();
    }

    /// Exchange top and bottom
    pub fn process_swap_event(&mut self) {
        let (top, bottom) = self.model.registers_mut();
        let mut temp = top.new_instance();
        temp.transfer_from(top);
        top.transfer_from(bottom);
        bottom.transfer_from(&mut temp);
        self.update_view_to_match_model();
    }

    /// top := bottom, bottom keeps its value
    pub fn process_enter_event(&mut self) {
        let (top, bottom) = self.model.registers_mut();
        top.copy_from(bottom);
        self.update_view_to_match_model();
    }

    /// bottom := top + bottom, top := 0
    pub fn process_add_event(&mut self) {
        let (top, bottom) = self.model.registers_mut();
        top.add(bottom);
        bottom.transfer_from(top);
        self.update_view_to_match_model();
    }

    /// bottom := top - bottom, top := 0. Requires bottom <= top.
    pub fn process_subtract_event(&mut self) -> Result<(), CalcError> {
        let (top, bottom) = self.model.registers_mut();
        top.subtract(bottom)?;
        bottom.transfer_from(top);
        self.update_view_to_match_model();
        Ok(())
    }

    /// bottom := top * bottom, top := 0
    pub fn process_multiply_event(&mut self) {
        let (top, bottom) = self.model.registers_mut();
        top.multiply(bottom);
        bottom.transfer_from(top);
        self.update_view_to_match_model();
    }

    /// bottom := top / bottom, top := top % bottom. Requires bottom != 0.
    pub fn process_divide_event(&mut self) -> Result<(), CalcError> {
        let (top, bottom) = self.model.registers_mut();
        let mut remainder = top.divide(bottom)?;
        bottom.transfer_from(top);
        top.transfer_from(&mut remainder);
        self.update_view_to_match_model();
        Ok(())
    }

    /// bottom := top ^ bottom, top := 0. Requires bottom <= INT_LIMIT.
    pub fn process_power_event(&mut self) -> Result<(), CalcError> {
        let (top, bottom) = self.model.registers_mut();
        let exponent = bottom.to_int()?;
        top.power(exponent);
        bottom.transfer_from(top);
        self.update_view_to_match_model();
        Ok(())
    }

    /// bottom := floor(top ^ (1 / bottom)), top := 0.
    /// Requires 2 <= bottom <= INT_LIMIT.
    pub fn process_root_event(&mut self) -> Result<(), CalcError> {
        let (top, bottom) = self.model.registers_mut();
        let degree = bottom.to_int()?;
        top.root(degree)?;
        bottom.transfer_from(top);
        self.update_view_to_match_model();
        Ok(())
    }

    /// bottom := bottom * 10 + digit
    pub fn process_add_new_digit_event(&mut self, digit: u8) -> Result<(), CalcError> {
        self.model.bottom_mut().multiply_by_10(digit)?;
        self.update_view_to_match_model();
        Ok(())
    }
}
