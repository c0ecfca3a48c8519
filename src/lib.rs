//! # nncalc - Two-Register Natural Number Calculator
//!
//! An arbitrary-precision calculator for the terminal with two registers,
//! "top" and "bottom". Digits are typed into bottom; operations combine
//! top with bottom and leave the result in bottom.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  CalcEvent  ┌──────────────┐   mutates   ┌─────────┐
//! │  Commands   │────────────▶│  Controller  │────────────▶│  Model  │
//! │ (key maps)  │             │              │             │ top/bot │
//! └─────────────┘             └──────────────┘             └─────────┘
//!        ▲                           │ synchronize
//!        │ legality flags            ▼
//!        │                    ┌──────────────┐
//!        └────────────────────│     View     │
//!                             └──────────────┘
//! ```

pub mod calc;
pub mod cmd_args;
pub mod config;

pub use calc::*;
