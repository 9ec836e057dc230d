use std::{fmt, str::FromStr};

use crate::errors::ValidationError;

/// The four binary operations the calculator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Applies `lhs op rhs`. Division by zero yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "×" | "x" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(ValidationError::InvalidOperator(other.to_string())),
        }
    }
}

/// A single decimal digit key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = ValidationError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .and_then(Digit::new)
            .ok_or_else(|| ValidationError::InvalidDigit(ch.to_string()))
    }
}

impl FromStr for Digit {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Digit::try_from(ch),
            _ => Err(ValidationError::InvalidDigit(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_parse_from_ascii_and_display_symbols() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("−".parse::<Operator>(), Ok(Operator::Subtract));
        assert_eq!("×".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
        assert!(matches!(
            "%".parse::<Operator>(),
            Err(ValidationError::InvalidOperator(_))
        ));
    }

    #[test]
    fn apply_keeps_operand_order() {
        assert_eq!(Operator::Subtract.apply(8.0, 3.0), 5.0);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), 3.0);
        assert!(Operator::Divide.apply(5.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn digits_accept_only_single_decimal_characters() {
        assert_eq!("7".parse::<Digit>().map(Digit::as_char), Ok('7'));
        assert!("12".parse::<Digit>().is_err());
        assert!("a".parse::<Digit>().is_err());
        assert!("".parse::<Digit>().is_err());
        assert_eq!(Digit::new(10), None);
    }
}
