//! Derived views over a transaction sequence. Nothing here is cached.

use crate::domain::transaction::{Transaction, TransactionKind};

/// Whether a balance should be presented as a gain or a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    Positive,
    Negative,
}

impl BalanceTone {
    pub fn of(balance: f64) -> Self {
        if balance >= 0.0 {
            BalanceTone::Positive
        } else {
            BalanceTone::Negative
        }
    }
}

/// Income minus expenses over the whole sequence. Empty input yields zero.
pub fn compute_balance(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .fold(0.0, |acc, txn| acc + txn.signed_amount())
}

pub fn income_total(transactions: &[Transaction]) -> f64 {
    total_of(transactions, TransactionKind::Income)
}

pub fn expense_total(transactions: &[Transaction]) -> f64 {
    total_of(transactions, TransactionKind::Expense)
}

fn total_of(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .map(|txn| txn.amount)
        .sum()
}

/// The last `n` transactions, most recent first.
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    transactions.iter().rev().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionCategory;

    fn txn(id: u64, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction::new(id, format!("t{id}"), amount, kind, TransactionCategory::Fixed)
    }

    #[test]
    fn balance_of_empty_sequence_is_zero() {
        assert_eq!(compute_balance(&[]), 0.0);
    }

    #[test]
    fn balance_subtracts_expenses_from_income() {
        let txns = vec![
            txn(1, 100.0, TransactionKind::Income),
            txn(2, 30.0, TransactionKind::Expense),
            txn(3, 20.0, TransactionKind::Expense),
        ];
        assert_eq!(compute_balance(&txns), 50.0);
        assert_eq!(income_total(&txns), 100.0);
        assert_eq!(expense_total(&txns), 50.0);
        assert_eq!(BalanceTone::of(compute_balance(&txns)), BalanceTone::Positive);
    }

    #[test]
    fn zero_balance_counts_as_positive() {
        assert_eq!(BalanceTone::of(0.0), BalanceTone::Positive);
        assert_eq!(BalanceTone::of(-0.01), BalanceTone::Negative);
    }

    #[test]
    fn recent_returns_newest_first_and_caps_at_n() {
        let txns: Vec<_> = (1..=5)
            .map(|id| txn(id, 1.0, TransactionKind::Income))
            .collect();
        let ids: Vec<u64> = recent_transactions(&txns, 3).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);

        let all: Vec<u64> = recent_transactions(&txns, 10).iter().map(|t| t.id).collect();
        assert_eq!(all, vec![5, 4, 3, 2, 1]);

        assert!(recent_transactions(&txns, 0).is_empty());
    }
}
