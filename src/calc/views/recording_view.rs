//! # Recording View
//!
//! A [`CalcView`] that remembers every update it receives, for asserting
//! on what the controller pushed and in which order.

use super::{CalcView, Legality};
use crate::calc::natural::NaturalNumber;

/// One call received by a [`RecordingView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    TopDisplay(String),
    BottomDisplay(String),
    SubtractAllowed(bool),
    DivideAllowed(bool),
    RootAllowed(bool),
    PowerAllowed(bool),
}

/// View double recording all updates
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    updates: Vec<ViewUpdate>,
    top: String,
    bottom: String,
    legality: Legality,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates in arrival order
    pub fn updates(&self) -> &[ViewUpdate] {
        &self.updates
    }

    pub fn clear_updates(&mut self) {
        self.updates.clear();
    }

    /// Last displayed top register
    pub fn top(&self) -> &str {
        &self.top
    }

    /// Last displayed bottom register
    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    pub fn legality(&self) -> Legality {
        self.legality
    }
}

impl<N: NaturalNumber> CalcView<N> for RecordingView {
    fn update_top_display(&mut self, value: &N) {
        self.top = value.to_string();
        self.updates.push(ViewUpdate::TopDisplay(self.top.clone()));
    }

    fn update_bottom_display(&mut self, value: &N) {
        self.bottom = value.to_string();
        self.updates.push(ViewUpdate::BottomDisplay(self.bottom.clone()));
    }

    fn update_subtract_allowed(&mut self, allowed: bool) {
        self.legality.subtract = allowed;
        self.updates.push(ViewUpdate::SubtractAllowed(allowed));
    }

    fn update_divide_allowed(&mut self, allowed: bool) {
        self.legality.divide = allowed;
        self.updates.push(ViewUpdate::DivideAllowed(allowed));
    }

    fn update_root_allowed(&mut self, allowed: bool) {
        self.legality.root = allowed;
        self.updates.push(ViewUpdate::RootAllowed(allowed));
    }

    fn update_power_allowed(&mut self, allowed: bool) {
        self.legality.power = allowed;
        self.updates.push(ViewUpdate::PowerAllowed(allowed));
    }
}
