use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use super::domain::{CurrencyKind, EntryId, LedgerEntry, NewLedgerEntry, UserId};
use super::store::{AppendOutcome, LedgerStore, LedgerStoreError};

#[derive(Default)]
struct LedgerState {
    entries: Vec<LedgerEntry>,
    next_sequence: u64,
}

impl LedgerState {
    /// Summed in `i128`; appends keep every balance within `i64`.
    fn balance(&self, user_id: &UserId, kind: CurrencyKind) -> i64 {
        let total: i128 = self
            .entries
            .iter()
            .filter(|entry| &entry.user_id == user_id && entry.kind == kind)
            .map(|entry| i128::from(entry.amount))
            .sum();
        narrow(total)
    }

    fn append(&mut self, entry: NewLedgerEntry, require_cover: bool) -> AppendOutcome {
        let balance = self.balance(&entry.user_id, entry.kind);
        let Some(next) = balance.checked_add(entry.amount) else {
            return AppendOutcome::Overflow { balance };
        };
        if require_cover && next < 0 {
            return AppendOutcome::Insufficient { balance };
        }

        AppendOutcome::Appended {
            entry: self.push(entry),
            balance: next,
        }
    }

    fn push(&mut self, entry: NewLedgerEntry) -> LedgerEntry {
        self.next_sequence += 1;
        let stored = LedgerEntry {
            id: EntryId(format!("txn-{:06}", self.next_sequence)),
            user_id: entry.user_id,
            kind: entry.kind,
            amount: entry.amount,
            reason: entry.reason,
            mission_id: entry.mission_id,
            created_at: Utc::now(),
        };
        self.entries.push(stored.clone());
        stored
    }
}

/// Process-local ledger. One mutex guards every entry, so conditional
/// debits are serialised.
#[derive(Default)]
pub struct InMemoryLedger {
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, LedgerState>, LedgerStoreError> {
        self.state
            .lock()
            .map_err(|_| LedgerStoreError::Unavailable("ledger mutex poisoned".to_string()))
    }
}

impl LedgerStore for InMemoryLedger {
    fn append(&self, entry: NewLedgerEntry) -> Result<AppendOutcome, LedgerStoreError> {
        Ok(self.state()?.append(entry, false))
    }

    fn append_if_covered(&self, entry: NewLedgerEntry) -> Result<AppendOutcome, LedgerStoreError> {
        Ok(self.state()?.append(entry, true))
    }

    fn balance(&self, user_id: &UserId, kind: CurrencyKind) -> Result<i64, LedgerStoreError> {
        Ok(self.state()?.balance(user_id, kind))
    }

    fn entries(
        &self,
        user_id: &UserId,
        kind: Option<CurrencyKind>,
        limit: usize,
    ) -> Result<Vec<LedgerEntry>, LedgerStoreError> {
        let state = self.state()?;
        Ok(state
            .entries
            .iter()
            .rev()
            .filter(|entry| &entry.user_id == user_id)
            .filter(|entry| kind.map_or(true, |kind| entry.kind == kind))
            .take(limit)
            .cloned()
            .collect())
    }

    fn holders(&self, kind: CurrencyKind) -> Result<Vec<UserId>, LedgerStoreError> {
        let state = self.state()?;
        let mut totals: BTreeMap<&UserId, i128> = BTreeMap::new();
        for entry in state.entries.iter().filter(|entry| entry.kind == kind) {
            *totals.entry(&entry.user_id).or_default() += i128::from(entry.amount);
        }
        Ok(totals
            .into_iter()
            .filter(|(_, total)| *total > 0)
            .map(|(user_id, _)| user_id.clone())
            .collect())
    }
}

fn narrow(total: i128) -> i64 {
    i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX })
}
