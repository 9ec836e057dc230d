pub mod common;
pub mod task;
pub mod transaction;

pub use common::Displayable;
pub use task::Task;
pub use transaction::{Transaction, TransactionCategory, TransactionKind};
