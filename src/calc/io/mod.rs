//! # I/O Abstraction Layer
//!
//! Trait seams between the calculator and the terminal so the event loop
//! and the terminal view run unchanged against mock streams in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!              TerminalCalcView ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!              TerminalCalcView ──▶ MockRenderStream ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use crossterm::style::Attribute;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand, RenderLog};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Terminal size as (width, height)
pub type TerminalSize = (u16, u16);

/// Source of input events
pub trait EventStream {
    /// Check whether an event is ready within `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event. Only call after `poll` returned true.
    fn read(&mut self) -> Result<Event>;

    /// True once no further events can arrive. A terminal is never exhausted.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Sink for terminal output
///
/// Text goes through [`Write`]; everything else through the methods below.
pub trait RenderStream: Write {
    fn clear_screen(&mut self) -> Result<()>;

    /// Clear from the cursor to the end of the current line
    fn clear_line(&mut self) -> Result<()>;

    /// Move cursor to (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Apply a text attribute to subsequent writes
    fn set_attribute(&mut self, attribute: Attribute) -> Result<()>;

    fn size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}
