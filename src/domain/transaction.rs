//! Domain model for ledger transactions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;
use crate::errors::ValidationError;

/// A single income or expense entry. Immutable once recorded.
///
/// `amount` is always stored positive; the direction comes from `kind`.
/// Field aliases accept payloads written by the browser build of the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    #[serde(alias = "descricao")]
    pub description: String,
    #[serde(alias = "valor")]
    pub amount: f64,
    #[serde(alias = "tipo")]
    pub kind: TransactionKind,
    #[serde(alias = "categoria")]
    pub category: TransactionCategory,
}

impl Transaction {
    pub fn new(
        id: u64,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: TransactionCategory,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind,
            category,
        }
    }

    /// Checks user-supplied fields before a transaction is created.
    pub fn validate_input(description: &str, amount: f64) -> Result<(), ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(())
    }

    /// Amount with the sign implied by `kind`.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} ({})", self.description, self.category)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[serde(alias = "ganho")]
    Income,
    #[serde(alias = "gasto")]
    Expense,
}

impl TransactionKind {
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "ganho" => Ok(TransactionKind::Income),
            "expense" | "gasto" => Ok(TransactionKind::Expense),
            other => Err(ValidationError::Invalid(format!(
                "unknown transaction kind `{other}` (expected income or expense)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    #[default]
    #[serde(alias = "fixo")]
    Fixed,
    #[serde(alias = "eventual")]
    Occasional,
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionCategory::Fixed => "fixed",
            TransactionCategory::Occasional => "occasional",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionCategory {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fixo" => Ok(TransactionCategory::Fixed),
            "occasional" | "eventual" => Ok(TransactionCategory::Occasional),
            other => Err(ValidationError::Invalid(format!(
                "unknown category `{other}` (expected fixed or occasional)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_description_and_non_positive_amounts() {
        assert_eq!(
            Transaction::validate_input("   ", 10.0),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(
            Transaction::validate_input("Rent", 0.0),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            Transaction::validate_input("Rent", -3.5),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            Transaction::validate_input("Rent", f64::NAN),
            Err(ValidationError::NonPositiveAmount)
        );
        assert!(Transaction::validate_input("Rent", 0.01).is_ok());
    }

    #[test]
    fn signed_amount_follows_kind() {
        let income = Transaction::new(
            1,
            "Salary",
            100.0,
            TransactionKind::Income,
            TransactionCategory::Fixed,
        );
        let expense = Transaction::new(
            2,
            "Groceries",
            40.0,
            TransactionKind::Expense,
            TransactionCategory::Occasional,
        );
        assert_eq!(income.signed_amount(), 100.0);
        assert_eq!(expense.signed_amount(), -40.0);
    }

    #[test]
    fn deserializes_browser_payload_field_names() {
        let json = r#"{"id":1700000000000,"descricao":"Aluguel","valor":1200.5,"tipo":"gasto","categoria":"fixo"}"#;
        let txn: Transaction = serde_json::from_str(json).expect("legacy record");
        assert_eq!(txn.description, "Aluguel");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.category, TransactionCategory::Fixed);
        assert_eq!(txn.amount, 1200.5);
    }

    #[test]
    fn kind_and_category_parse_from_cli_tokens() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("gasto".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert_eq!(
            "eventual".parse::<TransactionCategory>(),
            Ok(TransactionCategory::Occasional)
        );
        assert!("monthly".parse::<TransactionCategory>().is_err());
    }
}
