//! # Entry Commands
//!
//! Digit entry and the register-shuffling keys: clear, swap and enter.
//! None of these has a precondition.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{CalcEvent, Command, CommandContext};

/// True when no control or alt modifier is held
pub(crate) fn is_plain(event: &KeyEvent) -> bool {
    !event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Append a digit (`0`-`9`)
pub struct DigitCommand;

impl Command for DigitCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_plain(event) && matches!(event.code, KeyCode::Char(ch) if ch.is_ascii_digit())
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        match event.code {
            KeyCode::Char(ch) => {
                let digit = ch
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or_else(|| anyhow::anyhow!("not a digit key: {ch:?}"))?;
                Ok(vec![CalcEvent::AddDigit(digit)])
            }
            other => Err(anyhow::anyhow!("not a digit key: {other:?}")),
        }
    }

    fn name(&self) -> &'static str {
        "Digit"
    }
}

/// Clear bottom (`c`, Delete, Backspace)
pub struct ClearCommand;

impl Command for ClearCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_plain(event)
            && matches!(
                event.code,
                KeyCode::Char('c') | KeyCode::Delete | KeyCode::Backspace
            )
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Clear])
    }

    fn name(&self) -> &'static str {
        "Clear"
    }
}

/// Swap registers (`s`, Tab)
pub struct SwapCommand;

impl Command for SwapCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_plain(event) && matches!(event.code, KeyCode::Char('s') | KeyCode::Tab)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Swap])
    }

    fn name(&self) -> &'static str {
        "Swap"
    }
}

/// Copy bottom into top (Enter, `=`)
pub struct EnterCommand;

impl Command for EnterCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_plain(event) && matches!(event.code, KeyCode::Enter | KeyCode::Char('='))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Enter])
    }

    fn name(&self) -> &'static str {
        "Enter"
    }
}
