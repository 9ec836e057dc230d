pub mod ledger_manager;
pub mod services;
pub mod utils;
