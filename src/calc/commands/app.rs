//! # Application Control Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{CalcEvent, Command, CommandContext};

/// Quit (`q`, Esc, Ctrl+C)
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Char('q') | KeyCode::Esc => true,
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Quit])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::commands::test_support::{allowed, char_key, key};

    #[test]
    fn quit_should_be_relevant_for_ctrl_c() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(QuitCommand.is_relevant(&allowed(), &event));
    }

    #[test]
    fn quit_should_not_be_relevant_for_plain_c() {
        assert!(!QuitCommand.is_relevant(&allowed(), &char_key('c')));
    }

    #[test]
    fn quit_should_be_relevant_for_q_and_escape() {
        assert!(QuitCommand.is_relevant(&allowed(), &char_key('q')));
        assert!(QuitCommand.is_relevant(&allowed(), &key(KeyCode::Esc)));
    }

    #[test]
    fn quit_should_produce_quit_event() {
        let events = QuitCommand.execute(char_key('q'), &allowed()).unwrap();
        assert_eq!(events, vec![CalcEvent::Quit]);
    }
}
