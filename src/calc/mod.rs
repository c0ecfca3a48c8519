//! # Calculator Module - MVC Architecture
//!
//! - **Model**: two natural number registers ([`models`])
//! - **View**: register display and operation availability ([`views`])
//! - **Controller**: event handlers that mutate the model and resynchronize
//!   the view ([`controllers`])
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Controller    │    │      Model      │    │      View       │
//! │                 │    │                 │    │                 │
//! │ • Event handlers│───▶│ • top register  │    │ • Register text │
//! │ • View sync     │    │ • bottom reg.   │    │ • Legality flags│
//! │                 │─────────────────────────▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Flow is one-way per event: key → command → controller handler → model →
//! view synchronization.

pub mod commands;
pub mod controllers;
pub mod error;
pub mod io;
pub mod models;
pub mod natural;
pub mod views;

pub use commands::{CalcEvent, CommandRegistry};
pub use controllers::{AppController, CalcController};
pub use error::CalcError;
pub use models::{CalcModel, RegisterModel};
pub use natural::{BigNatural, BoundedInt, NaturalNumber, INT_LIMIT};
pub use views::{CalcView, Legality, RecordingView, TerminalCalcView};
