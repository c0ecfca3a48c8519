//! # Calculator Events
//!
//! What a key binding asks for. The application controller turns each one
//! into a call on the calculator controller.

/// A discrete UI event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcEvent {
    /// bottom := 0
    Clear,
    /// Exchange top and bottom
    Swap,
    /// top := bottom
    Enter,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    /// Append a decimal digit to bottom
    AddDigit(u8),
    /// Leave the application
    Quit,
}

impl CalcEvent {
    /// Short name for logs and status messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Swap => "swap",
            Self::Enter => "enter",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Root => "root",
            Self::AddDigit(_) => "digit",
            Self::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_event_should_have_readable_names() {
        assert_eq!(CalcEvent::Divide.name(), "divide");
        assert_eq!(CalcEvent::AddDigit(7).name(), "digit");
    }
}
