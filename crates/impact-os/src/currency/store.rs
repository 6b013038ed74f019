use super::domain::{Balance, CurrencyKind, LedgerEntry, NewLedgerEntry, UserId};

/// What the store did with an entry. `balance` is read under the same lock as the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended { entry: LedgerEntry, balance: i64 },
    Insufficient { balance: i64 },
    /// The new balance would not fit in an `i64`; nothing was written.
    Overflow { balance: i64 },
}

/// Append-only ledger storage. Balances are always aggregated from entries.
pub trait LedgerStore: Send + Sync {
    /// Append unless the resulting balance would overflow.
    fn append(&self, entry: NewLedgerEntry) -> Result<AppendOutcome, LedgerStoreError>;

    /// Append a negative entry only while the balance of its kind covers it.
    /// The balance check and the insert must be atomic per user and kind.
    fn append_if_covered(&self, entry: NewLedgerEntry)
        -> Result<AppendOutcome, LedgerStoreError>;

    fn balance(&self, user_id: &UserId, kind: CurrencyKind) -> Result<i64, LedgerStoreError>;

    fn balances(&self, user_id: &UserId) -> Result<Balance, LedgerStoreError> {
        let mut balance = Balance::default();
        for kind in CurrencyKind::ALL {
            balance.set(kind, self.balance(user_id, kind)?);
        }
        Ok(balance)
    }

    /// Newest entries first.
    fn entries(
        &self,
        user_id: &UserId,
        kind: Option<CurrencyKind>,
        limit: usize,
    ) -> Result<Vec<LedgerEntry>, LedgerStoreError>;

    /// Users holding a positive balance of `kind`.
    fn holders(&self, kind: CurrencyKind) -> Result<Vec<UserId>, LedgerStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerStoreError {
    #[error("ledger store unavailable: {0}")]
    Unavailable(String),
}
