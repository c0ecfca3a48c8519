//! # Controllers Module
//!
//! [`CalcController`] maps calculator events onto the model and keeps the
//! view in step; [`AppController`] drives it from a terminal.

pub mod app_controller;
pub mod calc_controller;

pub use app_controller::AppController;
pub use calc_controller::CalcController;
