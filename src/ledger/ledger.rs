use crate::domain::transaction::{Transaction, TransactionCategory, TransactionKind};
use crate::errors::ValidationError;

use super::id::IdGenerator;

/// Append-only sequence of transactions in insertion (chronological) order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    ids: IdGenerator,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from restored records, keeping their order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let last = transactions.iter().map(|txn| txn.id).max().unwrap_or(0);
        Self {
            transactions,
            ids: IdGenerator::seeded(last),
        }
    }

    /// Validates and appends a new transaction, returning the stored record.
    /// The description is kept exactly as typed.
    pub fn record(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        category: TransactionCategory,
    ) -> Result<&Transaction, ValidationError> {
        Transaction::validate_input(description, amount)?;
        let id = self.ids.next_id();
        self.transactions.push(Transaction::new(
            id,
            description,
            amount,
            kind,
            category,
        ));
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
