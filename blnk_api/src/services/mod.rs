//! Resource-specific calls. Each service borrows the [`Client`](crate::Client)
//! and only picks the endpoint, method, and payload.

mod balance;
pub use self::balance::BalanceService;

mod ledger;
pub use self::ledger::LedgerService;

mod reconciliation;
pub use self::reconciliation::ReconciliationService;

mod search;
pub use self::search::SearchService;

mod transaction;
pub use self::transaction::TransactionService;
