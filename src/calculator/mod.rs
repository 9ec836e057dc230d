//! Four-function calculator driven by discrete key actions.
//!
//! Every action runs to completion and leaves a display string behind; there
//! is no error path. Division by zero shows a sentinel such as `Infinity`.

pub mod number;
pub mod operator;
pub mod state;

pub use number::{format_number, is_sentinel, parse_display};
pub use operator::{Digit, Operator};
pub use state::{CalculatorPhase, CalculatorState};

/// One key press forwarded by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorAction {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Evaluate,
    Clear,
}

impl CalculatorState {
    /// Applies `action` and returns the resulting display.
    pub fn apply(&mut self, action: CalculatorAction) -> &str {
        match action {
            CalculatorAction::Digit(digit) => self.append_digit(digit),
            CalculatorAction::Decimal => self.append_decimal(),
            CalculatorAction::Operator(op) => self.choose_operator(op),
            CalculatorAction::Evaluate => self.evaluate(),
            CalculatorAction::Clear => self.clear(),
        }
        self.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_returns_updated_display() {
        let mut state = CalculatorState::new();
        let digit = Digit::new(4).unwrap();
        assert_eq!(state.apply(CalculatorAction::Digit(digit)), "4");
        assert_eq!(state.apply(CalculatorAction::Decimal), "4.");
        assert_eq!(state.apply(CalculatorAction::Clear), "0");
    }
}
