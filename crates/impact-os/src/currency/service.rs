use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{
    Balance, CurrencyKind, DecayOutcome, LedgerEntry, MissionId, NewLedgerEntry,
    TransactionRejection, TransactionResult, UserId,
};
use super::store::{AppendOutcome, LedgerStore, LedgerStoreError};
use super::triad::approximate_triad;
use crate::assessment::SkillTriad;
use crate::config::{is_valid_decay_rate, CurrencyConfig};

pub const DECAY_REASON: &str = "decay";

/// Credit, debit and decay rules over an append-only ledger store.
///
/// Credits are not idempotent: crediting the same mission twice pays twice.
pub struct CurrencyLedger<S> {
    store: Arc<S>,
    config: CurrencyConfig,
}

impl<S> CurrencyLedger<S>
where
    S: LedgerStore + 'static,
{
    pub fn new(store: Arc<S>, config: CurrencyConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }

    pub fn credit(
        &self,
        user_id: &UserId,
        kind: CurrencyKind,
        amount: i64,
        reason: &str,
        mission_id: Option<MissionId>,
    ) -> Result<TransactionResult, CurrencyServiceError> {
        if amount <= 0 {
            let balance = self.store.balance(user_id, kind)?;
            debug!(user_id = %user_id, kind = kind.label(), amount, "credit ignored: non-positive amount");
            return Ok(TransactionResult::rejected(
                kind,
                balance,
                TransactionRejection::NonPositiveAmount { amount },
            ));
        }

        let outcome = self.store.append(NewLedgerEntry {
            user_id: user_id.clone(),
            kind,
            amount,
            reason: reason.to_string(),
            mission_id,
        })?;
        if let AppendOutcome::Appended { balance, .. } = &outcome {
            info!(user_id = %user_id, kind = kind.label(), amount, balance, "ledger credited");
        }
        Ok(settle(user_id, kind, amount, outcome))
    }

    /// Debit only when the balance covers the amount; never overdraws.
    pub fn debit(
        &self,
        user_id: &UserId,
        kind: CurrencyKind,
        amount: i64,
        reason: &str,
    ) -> Result<TransactionResult, CurrencyServiceError> {
        if amount <= 0 {
            let balance = self.store.balance(user_id, kind)?;
            debug!(user_id = %user_id, kind = kind.label(), amount, "debit ignored: non-positive amount");
            return Ok(TransactionResult::rejected(
                kind,
                balance,
                TransactionRejection::NonPositiveAmount { amount },
            ));
        }

        let outcome = self.store.append_if_covered(NewLedgerEntry {
            user_id: user_id.clone(),
            kind,
            amount: -amount,
            reason: reason.to_string(),
            mission_id: None,
        })?;

        if let AppendOutcome::Appended { balance, .. } = &outcome {
            info!(user_id = %user_id, kind = kind.label(), amount, balance, "ledger debited");
        }
        Ok(settle(user_id, kind, amount, outcome))
    }

    pub fn get_balance(&self, user_id: &UserId) -> Result<Balance, CurrencyServiceError> {
        Ok(self.store.balances(user_id)?)
    }

    pub fn can_afford(
        &self,
        user_id: &UserId,
        kind: CurrencyKind,
        cost: i64,
    ) -> Result<bool, CurrencyServiceError> {
        Ok(self.store.balance(user_id, kind)? >= cost)
    }

    /// Debit `ceil(balance * rate)` momentum. Running twice in one period decays twice.
    pub fn apply_momentum_decay(
        &self,
        user_id: &UserId,
        rate: f64,
    ) -> Result<DecayOutcome, CurrencyServiceError> {
        if !is_valid_decay_rate(rate) {
            return Ok(DecayOutcome::InvalidRate { rate });
        }

        let balance = self.store.balance(user_id, CurrencyKind::Momentum)?;
        if balance <= 0 {
            return Ok(DecayOutcome::NoMomentum { balance });
        }

        let amount = decay_amount(balance, rate);
        let result = self.debit(user_id, CurrencyKind::Momentum, amount, DECAY_REASON)?;
        Ok(DecayOutcome::Decayed { amount, result })
    }

    pub fn apply_default_momentum_decay(
        &self,
        user_id: &UserId,
    ) -> Result<DecayOutcome, CurrencyServiceError> {
        self.apply_momentum_decay(user_id, self.config.decay_rate)
    }

    /// Decay every user currently holding momentum; the scheduled-job entry point.
    pub fn decay_all_momentum(
        &self,
        rate: f64,
    ) -> Result<Vec<(UserId, DecayOutcome)>, CurrencyServiceError> {
        if !is_valid_decay_rate(rate) {
            return Ok(Vec::new());
        }

        let holders = self.store.holders(CurrencyKind::Momentum)?;
        let mut outcomes = Vec::with_capacity(holders.len());
        for user_id in holders {
            let outcome = self.apply_momentum_decay(&user_id, rate)?;
            outcomes.push((user_id, outcome));
        }
        info!(users = outcomes.len(), rate, "momentum decay sweep finished");
        Ok(outcomes)
    }

    pub fn transaction_history(
        &self,
        user_id: &UserId,
        kind: Option<CurrencyKind>,
        limit: Option<usize>,
    ) -> Result<Vec<LedgerEntry>, CurrencyServiceError> {
        let limit = limit.unwrap_or(self.config.history_limit);
        Ok(self.store.entries(user_id, kind, limit)?)
    }

    /// Display approximation derived from total skill XP; not the intake scorer.
    pub fn skill_triad(&self, user_id: &UserId) -> Result<SkillTriad, CurrencyServiceError> {
        let total_xp = self.store.balance(user_id, CurrencyKind::SkillXp)?;
        Ok(approximate_triad(total_xp))
    }
}

/// Turn a store outcome into the caller-facing result; `amount` is the positive request.
fn settle(
    user_id: &UserId,
    kind: CurrencyKind,
    amount: i64,
    outcome: AppendOutcome,
) -> TransactionResult {
    match outcome {
        AppendOutcome::Appended { entry, balance } => TransactionResult::applied(entry, balance),
        AppendOutcome::Insufficient { balance } => {
            warn!(
                user_id = %user_id,
                kind = kind.label(),
                required = amount,
                available = balance,
                "debit refused: insufficient balance"
            );
            TransactionResult::rejected(
                kind,
                balance,
                TransactionRejection::InsufficientBalance {
                    required: amount,
                    available: balance,
                },
            )
        }
        AppendOutcome::Overflow { balance } => {
            warn!(
                user_id = %user_id,
                kind = kind.label(),
                amount,
                balance,
                "ledger write refused: balance overflow"
            );
            TransactionResult::rejected(
                kind,
                balance,
                TransactionRejection::BalanceOverflow { amount, balance },
            )
        }
    }
}

const DECAY_PRECISION: f64 = 1e9;

/// `ceil(balance * rate)`, with float noise below 1e-9 discarded first so a
/// balance of 30 at 0.1 decays by 3, not 4. A positive balance always loses
/// at least one point and never more than it holds.
pub fn decay_amount(balance: i64, rate: f64) -> i64 {
    let raw = balance as f64 * rate;
    let settled = (raw * DECAY_PRECISION).round() / DECAY_PRECISION;
    (settled.ceil() as i64).clamp(1, balance.max(1))
}

/// Error raised by the ledger service. Business refusals are results, not errors.
#[derive(Debug, thiserror::Error)]
pub enum CurrencyServiceError {
    #[error(transparent)]
    Store(#[from] LedgerStoreError),
}
