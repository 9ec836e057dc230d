//! Ledger engine: the append-only transaction sequence, its derived balance,
//! and the encoding used to persist it.

pub mod codec;
pub mod id;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;

/// Fixed key the full transaction sequence is stored under.
pub const STORAGE_KEY: &str = "meuCashTransacoes";

/// Number of entries the overview lists when no limit is configured.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

pub use crate::domain::transaction::{Transaction, TransactionCategory, TransactionKind};
pub use codec::{decode_transactions, encode_transactions, LoadReport};
pub use id::IdGenerator;
pub use ledger::Ledger;
pub use summary::{
    compute_balance, expense_total, income_total, recent_transactions, BalanceTone,
};
