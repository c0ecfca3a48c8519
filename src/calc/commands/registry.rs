//! # Command Registry
//!
//! Holds every key binding and dispatches a key press to the first one
//! that reports itself relevant.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{
    AddCommand, CalcEvent, ClearCommand, Command, CommandContext, DigitCommand, DivideCommand,
    EnterCommand, MultiplyCommand, PowerCommand, QuitCommand, RootCommand, SubtractCommand,
    SwapCommand,
};

/// Ordered collection of key bindings
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Registry with the default calculator bindings
    pub fn new() -> Self {
        let mut registry = Self::empty();

        // Quit comes first so Ctrl+C always wins
        registry.add_command(Box::new(QuitCommand));
        registry.add_command(Box::new(DigitCommand));
        registry.add_command(Box::new(ClearCommand));
        registry.add_command(Box::new(SwapCommand));
        registry.add_command(Box::new(EnterCommand));
        registry.add_command(Box::new(AddCommand));
        registry.add_command(Box::new(SubtractCommand));
        registry.add_command(Box::new(MultiplyCommand));
        registry.add_command(Box::new(DivideCommand));
        registry.add_command(Box::new(PowerCommand));
        registry.add_command(Box::new(RootCommand));

        registry
    }

    /// Registry without any bindings
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Events for `event`, empty when no binding applies
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CalcEvent>> {
        match self
            .commands
            .iter()
            .find(|command| command.is_relevant(context, &event))
        {
            Some(command) => {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                command.execute(event, context)
            }
            None => {
                tracing::debug!("No command for key {:?} in {:?}", event, context);
                Ok(Vec::new())
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::commands::test_support::{allowed, char_key, disallowed, key};
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn registry_should_register_every_default_binding() {
        assert_eq!(CommandRegistry::new().command_count(), 11);
        assert_eq!(CommandRegistry::empty().command_count(), 0);
    }

    #[test]
    fn registry_should_map_keys_to_events() {
        let registry = CommandRegistry::new();
        let context = allowed();

        let cases = [
            (char_key('5'), CalcEvent::AddDigit(5)),
            (char_key('c'), CalcEvent::Clear),
            (key(KeyCode::Tab), CalcEvent::Swap),
            (key(KeyCode::Enter), CalcEvent::Enter),
            (char_key('+'), CalcEvent::Add),
            (char_key('-'), CalcEvent::Subtract),
            (char_key('*'), CalcEvent::Multiply),
            (char_key('/'), CalcEvent::Divide),
            (char_key('^'), CalcEvent::Power),
            (char_key('r'), CalcEvent::Root),
            (char_key('q'), CalcEvent::Quit),
        ];

        for (event, expected) in cases {
            assert_eq!(
                registry.process_event(event, &context).unwrap(),
                vec![expected],
                "key {:?}",
                event.code
            );
        }
    }

    #[test]
    fn registry_should_prefer_quit_for_ctrl_c() {
        let registry = CommandRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        let events = registry.process_event(event, &allowed()).unwrap();

        assert_eq!(events, vec![CalcEvent::Quit]);
    }

    #[test]
    fn registry_should_drop_keys_for_disabled_operations() {
        let registry = CommandRegistry::new();
        let context = disallowed();

        for ch in ['-', '/', '^', 'r'] {
            assert!(registry
                .process_event(char_key(ch), &context)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn registry_should_ignore_unbound_keys() {
        let registry = CommandRegistry::new();
        assert!(registry
            .process_event(char_key('z'), &allowed())
            .unwrap()
            .is_empty());
    }
}
