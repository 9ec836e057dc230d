use tracing::debug;

use super::number::{format_number, parse_display};
use super::operator::{Digit, Operator};

const INITIAL_DISPLAY: &str = "0";

/// Whether an operator is waiting for its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorPhase {
    Idle,
    OperatorPending,
}

/// Session-local state of the four-function calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    accumulator: Option<f64>,
    pending_operator: Option<Operator>,
    fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            accumulator: None,
            pending_operator: None,
            fresh_entry: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn fresh_entry(&self) -> bool {
        self.fresh_entry
    }

    pub fn phase(&self) -> CalculatorPhase {
        if self.pending_operator.is_some() {
            CalculatorPhase::OperatorPending
        } else {
            CalculatorPhase::Idle
        }
    }

    /// Numeric value of the current display.
    pub fn current_value(&self) -> f64 {
        parse_display(&self.display)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn append_digit(&mut self, digit: Digit) {
        let ch = digit.as_char();
        if self.fresh_entry {
            self.display.clear();
            self.display.push(ch);
            self.fresh_entry = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display.clear();
            self.display.push(ch);
        } else {
            self.display.push(ch);
        }
    }

    pub fn append_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Installs `op`, folding any outstanding operation first so chained
    /// entry evaluates left to right.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.accumulator.is_some() {
            self.evaluate();
        }
        self.accumulator = Some(self.current_value());
        self.pending_operator = Some(op);
        self.fresh_entry = true;
        debug!(operator = %op, accumulator = ?self.accumulator, "operator chosen");
    }

    /// Computes `accumulator op display`. No-op unless both are present.
    ///
    /// Division by zero is not an error: the display shows `Infinity`,
    /// `-Infinity` or `NaN`. The fresh-entry flag is left as it was.
    pub fn evaluate(&mut self) {
        let (Some(lhs), Some(op)) = (self.accumulator, self.pending_operator) else {
            return;
        };
        let rhs = self.current_value();
        let result = op.apply(lhs, rhs);
        self.display = format_number(result);
        self.accumulator = None;
        self.pending_operator = None;
        debug!(lhs, rhs, operator = %op, display = %self.display, "evaluated");
    }
}
