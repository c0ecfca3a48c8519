//! # Key Bindings
//!
//! Commands translate a terminal key press into calculator events. Each
//! command inspects the key and a [`CommandContext`] holding the legality
//! flags last shown by the view; a key for a disabled operation is simply
//! not relevant, which is how the UI keeps illegal operations away from the
//! controller.

pub mod app;
pub mod arithmetic;
pub mod entry;
pub mod events;
pub mod registry;

pub use app::QuitCommand;
pub use arithmetic::{
    AddCommand, DivideCommand, MultiplyCommand, PowerCommand, RootCommand, SubtractCommand,
};
pub use entry::{ClearCommand, DigitCommand, EnterCommand, SwapCommand};
pub use events::CalcEvent;
pub use registry::CommandRegistry;

use crate::calc::views::Legality;
use anyhow::Result;
use crossterm::event::KeyEvent;

/// Read-only state available to commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandContext {
    pub legality: Legality,
}

impl CommandContext {
    pub fn new(legality: Legality) -> Self {
        Self { legality }
    }
}

/// A key binding
pub trait Command {
    /// Whether this command handles `event` in the given context
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events for a relevant key press
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CalcEvent>>;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn char_key(ch: char) -> KeyEvent {
        key(KeyCode::Char(ch))
    }

    pub fn allowed() -> CommandContext {
        CommandContext::new(Legality::all())
    }

    pub fn disallowed() -> CommandContext {
        CommandContext::new(Legality::default())
    }
}
