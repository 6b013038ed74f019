//! Append-only virtual currency ledger.

pub mod domain;
pub mod memory;
pub mod router;
pub mod service;
pub mod store;
pub mod triad;

#[cfg(test)]
mod tests;

pub use domain::{
    Balance, CurrencyKind, DecayOutcome, EntryId, LedgerEntry, MissionId, NewLedgerEntry,
    TransactionRejection, TransactionResult, UserId,
};
pub use memory::InMemoryLedger;
pub use router::currency_router;
pub use service::{CurrencyLedger, CurrencyServiceError, DECAY_REASON};
pub use store::{AppendOutcome, LedgerStore, LedgerStoreError};
