pub mod json_backend;
pub mod memory;

use crate::errors::CashError;

pub type Result<T> = std::result::Result<T, CashError>;

/// Flat key-value persistence addressed by string keys.
///
/// Values are opaque serialized text; callers own the encoding. There is no
/// schema versioning and a single logical writer is assumed.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
