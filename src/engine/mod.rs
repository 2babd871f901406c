mod balance;
mod issues;
mod ledger_engine;

pub use balance::summarize_balance;
pub use issues::select_issues;
pub use ledger_engine::LedgerEngine;
