use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::CurrencyConfig;
use crate::currency::domain::{CurrencyKind, LedgerEntry, NewLedgerEntry, UserId};
use crate::currency::store::{AppendOutcome, LedgerStore, LedgerStoreError};
use crate::currency::{CurrencyLedger, InMemoryLedger};

pub(super) fn user(id: &str) -> UserId {
    UserId(id.to_string())
}

pub(super) fn build_ledger() -> (CurrencyLedger<InMemoryLedger>, Arc<InMemoryLedger>) {
    let store = Arc::new(InMemoryLedger::new());
    let ledger = CurrencyLedger::new(store.clone(), CurrencyConfig::default());
    (ledger, store)
}

pub(super) fn seed(
    ledger: &CurrencyLedger<InMemoryLedger>,
    user_id: &UserId,
    kind: CurrencyKind,
    amount: i64,
) {
    let result = ledger
        .credit(user_id, kind, amount, "seed", None)
        .expect("seed credit");
    assert!(result.success, "seed credit must apply");
}

/// Store whose backing database is down.
pub(super) struct OfflineLedger;

impl LedgerStore for OfflineLedger {
    fn append(&self, _entry: NewLedgerEntry) -> Result<AppendOutcome, LedgerStoreError> {
        Err(LedgerStoreError::Unavailable("database offline".to_string()))
    }

    fn append_if_covered(
        &self,
        _entry: NewLedgerEntry,
    ) -> Result<AppendOutcome, LedgerStoreError> {
        Err(LedgerStoreError::Unavailable("database offline".to_string()))
    }

    fn balance(&self, _user_id: &UserId, _kind: CurrencyKind) -> Result<i64, LedgerStoreError> {
        Err(LedgerStoreError::Unavailable("database offline".to_string()))
    }

    fn entries(
        &self,
        _user_id: &UserId,
        _kind: Option<CurrencyKind>,
        _limit: usize,
    ) -> Result<Vec<LedgerEntry>, LedgerStoreError> {
        Err(LedgerStoreError::Unavailable("database offline".to_string()))
    }

    fn holders(&self, _kind: CurrencyKind) -> Result<Vec<UserId>, LedgerStoreError> {
        Err(LedgerStoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
