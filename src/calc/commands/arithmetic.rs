//! # Arithmetic Commands
//!
//! One command per operation. Subtract, divide, power and root are only
//! relevant while the view shows them enabled.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::entry::is_plain;
use super::{CalcEvent, Command, CommandContext};

fn is_char(event: &KeyEvent, chars: &[char]) -> bool {
    is_plain(event) && matches!(event.code, KeyCode::Char(ch) if chars.contains(&ch))
}

/// `+`
pub struct AddCommand;

impl Command for AddCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_char(event, &['+'])
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Add])
    }

    fn name(&self) -> &'static str {
        "Add"
    }
}

/// `-`, while bottom <= top
pub struct SubtractCommand;

impl Command for SubtractCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.legality.subtract && is_char(event, &['-'])
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Subtract])
    }

    fn name(&self) -> &'static str {
        "Subtract"
    }
}

/// `*` or `x`
pub struct MultiplyCommand;

impl Command for MultiplyCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_char(event, &['*', 'x'])
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Multiply])
    }

    fn name(&self) -> &'static str {
        "Multiply"
    }
}

/// `/`, while bottom is non-zero
pub struct DivideCommand;

impl Command for DivideCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.legality.divide && is_char(event, &['/'])
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Divide])
    }

    fn name(&self) -> &'static str {
        "Divide"
    }
}

/// `^` or `p`, while bottom >= 2
pub struct PowerCommand;

impl Command for PowerCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.legality.power && is_char(event, &['^', 'p'])
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Power])
    }

    fn name(&self) -> &'static str {
        "Power"
    }
}

/// `r`, while 2 <= bottom <= INT_LIMIT
pub struct RootCommand;

impl Command for RootCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.legality.root && is_char(event, &['r'])
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CalcEvent>> {
        Ok(vec![CalcEvent::Root])
    }

    fn name(&self) -> &'static str {
        "Root"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::commands::test_support::{allowed, char_key, disallowed};
    use crate::calc::views::Legality;

    #[test]
    fn add_and_multiply_should_ignore_legality() {
        let context = disallowed();
        assert!(AddCommand.is_relevant(&context, &char_key('+')));
        assert!(MultiplyCommand.is_relevant(&context, &char_key('*')));
        assert!(MultiplyCommand.is_relevant(&context, &char_key('x')));
    }

    #[test]
    fn gated_commands_should_be_relevant_when_allowed() {
        let context = allowed();
        assert!(SubtractCommand.is_relevant(&context, &char_key('-')));
        assert!(DivideCommand.is_relevant(&context, &char_key('/')));
        assert!(PowerCommand.is_relevant(&context, &char_key('^')));
        assert!(PowerCommand.is_relevant(&context, &char_key('p')));
        assert!(RootCommand.is_relevant(&context, &char_key('r')));
    }

    #[test]
    fn gated_commands_should_not_be_relevant_when_disallowed() {
        let context = disallowed();
        assert!(!SubtractCommand.is_relevant(&context, &char_key('-')));
        assert!(!DivideCommand.is_relevant(&context, &char_key('/')));
        assert!(!PowerCommand.is_relevant(&context, &char_key('^')));
        assert!(!RootCommand.is_relevant(&context, &char_key('r')));
    }

    #[test]
    fn each_gate_should_only_consult_its_own_flag() {
        let context = CommandContext::new(Legality {
            divide: true,
            ..Legality::default()
        });
        assert!(DivideCommand.is_relevant(&context, &char_key('/')));
        assert!(!SubtractCommand.is_relevant(&context, &char_key('-')));
    }

    #[test]
    fn arithmetic_commands_should_produce_their_events() {
        let context = allowed();
        assert_eq!(
            AddCommand.execute(char_key('+'), &context).unwrap(),
            vec![CalcEvent::Add]
        );
        assert_eq!(
            SubtractCommand.execute(char_key('-'), &context).unwrap(),
            vec![CalcEvent::Subtract]
        );
        assert_eq!(
            MultiplyCommand.execute(char_key('*'), &context).unwrap(),
            vec![CalcEvent::Multiply]
        );
        assert_eq!(
            DivideCommand.execute(char_key('/'), &context).unwrap(),
            vec![CalcEvent::Divide]
        );
        assert_eq!(
            PowerCommand.execute(char_key('^'), &context).unwrap(),
            vec![CalcEvent::Power]
        );
        assert_eq!(
            RootCommand.execute(char_key('r'), &context).unwrap(),
            vec![CalcEvent::Root]
        );
    }
}
