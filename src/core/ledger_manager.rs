use tracing::{debug, info, warn};

use crate::domain::transaction::{Transaction, TransactionCategory, TransactionKind};
use crate::errors::CashError;
use crate::ledger::{
    compute_balance, decode_transactions, encode_transactions, recent_transactions, Ledger,
    STORAGE_KEY,
};
use crate::storage::KeyValueStore;

/// Reads the stored transaction sequence.
///
/// Never fails: a missing key, a read error or an unparseable payload all
/// fall back to an empty sequence and are only logged.
pub fn load_transactions(store: &dyn KeyValueStore) -> Vec<Transaction> {
    let payload = match store.get(STORAGE_KEY) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!(key = STORAGE_KEY, "no stored transactions");
            return Vec::new();
        }
        Err(err) => {
            warn!(key = STORAGE_KEY, error = %err, "failed to read stored transactions");
            return Vec::new();
        }
    };

    match decode_transactions(&payload) {
        Ok(report) => {
            for warning in &report.warnings {
                warn!(key = STORAGE_KEY, "{warning}");
            }
            report.transactions
        }
        Err(err) => {
            warn!(key = STORAGE_KEY, error = %err, "discarding unparseable transactions");
            Vec::new()
        }
    }
}

/// Facade that owns the single ledger instance and keeps it persisted.
pub struct LedgerManager {
    ledger: Ledger,
    store: Box<dyn KeyValueStore>,
}

impl LedgerManager {
    /// Restores the ledger from `store`.
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let transactions = load_transactions(store.as_ref());
        info!(count = transactions.len(), "ledger restored");
        Self {
            ledger: Ledger::from_transactions(transactions),
            store,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Validates, appends and persists a transaction.
    ///
    /// Returns the updated sequence. Validation failures leave both the
    /// ledger and the store untouched. A write failure is returned after the
    /// append; the next successful write stores the full sequence again.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        category: TransactionCategory,
    ) -> Result<&[Transaction], CashError> {
        let id = self.ledger.record(description, amount, kind, category)?.id;
        debug!(id, %kind, %category, amount, "transaction recorded");
        self.persist()?;
        Ok(self.ledger.transactions())
    }

    /// Writes the full sequence under the fixed storage key.
    pub fn persist(&self) -> Result<(), CashError> {
        let payload = encode_transactions(self.ledger.transactions())?;
        self.store.set(STORAGE_KEY, &payload)?;
        info!(
            key = STORAGE_KEY,
            count = self.ledger.transaction_count(),
            "transactions persisted"
        );
        Ok(())
    }

    pub fn balance(&self) -> f64 {
        compute_balance(self.ledger.transactions())
    }

    pub fn recent(&self, n: usize) -> Vec<&Transaction> {
        recent_transactions(self.ledger.transactions(), n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::storage::MemoryStore;

    fn manager_with(store: &MemoryStore) -> LedgerManager {
        LedgerManager::open(Box::new(store.clone()))
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> crate::storage::Result<Option<String>> {
            Err(CashError::Storage("offline".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> crate::storage::Result<()> {
            Err(CashError::Storage("offline".into()))
        }
    }

    #[test]
    fn add_persists_full_sequence_every_time() {
        let store = MemoryStore::new();
        let mut manager = manager_with(&store);
        manager
            .add_transaction(
                "Salary",
                1000.0,
                TransactionKind::Income,
                TransactionCategory::Fixed,
            )
            .unwrap();
        let updated = manager
            .add_transaction(
                "Rent",
                400.0,
                TransactionKind::Expense,
                TransactionCategory::Fixed,
            )
            .unwrap();
        assert_eq!(updated.len(), 2);

        let restored = load_transactions(&store);
        assert_eq!(restored, manager.transactions());
        assert_eq!(manager.balance(), 600.0);
    }

    #[test]
    fn invalid_add_does_not_touch_store() {
        let store = MemoryStore::new();
        let mut manager = manager_with(&store);
        let err = manager
            .add_transaction(
                "Gift",
                0.0,
                TransactionKind::Income,
                TransactionCategory::Occasional,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CashError::Validation(ValidationError::NonPositiveAmount)
        ));
        assert!(manager.transactions().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn load_falls_back_to_empty_on_garbage_or_read_failure() {
        let garbage = MemoryStore::with_entry(STORAGE_KEY, "{not json");
        assert!(load_transactions(&garbage).is_empty());
        assert!(load_transactions(&MemoryStore::new()).is_empty());
        assert!(load_transactions(&FailingStore).is_empty());
    }

    #[test]
    fn write_failure_is_reported_but_append_is_kept() {
        let mut manager = LedgerManager::open(Box::new(FailingStore));
        let err = manager
            .add_transaction(
                "Salary",
                10.0,
                TransactionKind::Income,
                TransactionCategory::Fixed,
            )
            .unwrap_err();
        assert!(matches!(err, CashError::Storage(_)));
        assert_eq!(manager.transactions().len(), 1);
    }
}
