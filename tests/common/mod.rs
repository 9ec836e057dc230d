#![allow(dead_code)]

use cash_core::{
    core::ledger_manager::LedgerManager,
    storage::{JsonFileStore, MemoryStore},
};
use tempfile::TempDir;

/// Ledger backed by a fresh temp directory. Keep the `TempDir` alive for the
/// duration of the test.
pub fn file_backed_manager() -> (LedgerManager, JsonFileStore, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonFileStore::new(temp.path().join("data")).expect("create json store");
    let manager = LedgerManager::open(Box::new(store.clone()));
    (manager, store, temp)
}

/// Ledger backed by an in-memory store plus a handle to inspect it.
pub fn memory_backed_manager() -> (LedgerManager, MemoryStore) {
    let store = MemoryStore::new();
    let manager = LedgerManager::open(Box::new(store.clone()));
    (manager, store)
}
