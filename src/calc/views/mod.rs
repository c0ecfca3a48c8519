//! # Views Module
//!
//! The display side of the calculator. A view shows both registers and
//! enables or disables the four operations whose legality depends on the
//! register values. Views never read the model; the controller pushes
//! everything they show.

pub mod recording_view;
pub mod terminal_view;

pub use recording_view::{RecordingView, ViewUpdate};
pub use terminal_view::TerminalCalcView;

use crate::calc::natural::NaturalNumber;

/// Capability set the controller needs from a view
pub trait CalcView<N: NaturalNumber> {
    fn update_top_display(&mut self, value: &N);

    fn update_bottom_display(&mut self, value: &N);

    fn update_subtract_allowed(&mut self, allowed: bool);

    fn update_divide_allowed(&mut self, allowed: bool);

    fn update_root_allowed(&mut self, allowed: bool);

    fn update_power_allowed(&mut self, allowed: bool);
}

/// Snapshot of the four legality flags last pushed to a view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Legality {
    pub subtract: bool,
    pub divide: bool,
    pub root: bool,
    pub power: bool,
}

impl Legality {
    /// Every conditional operation enabled
    pub fn all() -> Self {
        Self {
            subtract: true,
            divide: true,
            root: true,
            power: true,
        }
    }
}
