//! CLI subcommand implementations.

pub mod balances;
pub mod ledgers;
pub mod reconcile;
pub mod search;
pub mod transactions;
