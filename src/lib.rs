#![doc(test(attr(deny(warnings))))]

//! Cash Core offers the ledger, calculator, and task-list engines behind the
//! cash tracker, plus the persistence and configuration plumbing the CLI uses.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod tasks;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cash Core tracing initialized.");
    });
}
