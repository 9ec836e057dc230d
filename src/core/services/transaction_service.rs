//! Business logic helpers for recording transactions.

use crate::core::ledger_manager::LedgerManager;
use crate::core::services::ServiceResult;
use crate::domain::transaction::{TransactionCategory, TransactionKind};
use crate::errors::ValidationError;

/// Raw form fields as submitted by a presentation layer.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
}

impl TransactionInput {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind: kind.into(),
            category: category.into(),
        }
    }
}

/// Provides validated helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Parses the submitted fields, records the transaction and returns its id.
    pub fn add(manager: &mut LedgerManager, input: &TransactionInput) -> ServiceResult<u64> {
        let amount = parse_amount(&input.amount)?;
        let kind: TransactionKind = input.kind.parse()?;
        let category: TransactionCategory = input.category.parse()?;
        let updated = manager.add_transaction(&input.description, amount, kind, category)?;
        let id = updated.last().map(|txn| txn.id).unwrap_or_default();
        Ok(id)
    }
}

/// Accepts both `1234.56` and the comma-decimal form `1234,56`.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized
        .parse::<f64>()
        .map_err(|_| ValidationError::Invalid(format!("`{trimmed}` is not a valid amount")))
}
