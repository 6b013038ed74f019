use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionId(pub String);

/// Currencies tracked by the gamification layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyKind {
    Momentum,
    SkillXp,
    ArenaPoints,
    IncomeProof,
}

impl CurrencyKind {
    pub const ALL: [CurrencyKind; 4] = [
        CurrencyKind::Momentum,
        CurrencyKind::SkillXp,
        CurrencyKind::ArenaPoints,
        CurrencyKind::IncomeProof,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CurrencyKind::Momentum => "momentum",
            CurrencyKind::SkillXp => "skill_xp",
            CurrencyKind::ArenaPoints => "arena_points",
            CurrencyKind::IncomeProof => "income_proof",
        }
    }
}

/// Entry awaiting an id and timestamp from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLedgerEntry {
    pub user_id: UserId,
    pub kind: CurrencyKind,
    pub amount: i64,
    pub reason: String,
    pub mission_id: Option<MissionId>,
}

/// Immutable ledger line. Reversals are new entries with the opposite sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub kind: CurrencyKind,
    pub amount: i64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_id: Option<MissionId>,
    pub created_at: DateTime<Utc>,
}

/// Per-kind balances for one user; kinds without entries are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub momentum: i64,
    pub skill_xp: i64,
    pub arena_points: i64,
    pub income_proof: i64,
}

impl Balance {
    pub fn get(&self, kind: CurrencyKind) -> i64 {
        match kind {
            CurrencyKind::Momentum => self.momentum,
            CurrencyKind::SkillXp => self.skill_xp,
            CurrencyKind::ArenaPoints => self.arena_points,
            CurrencyKind::IncomeProof => self.income_proof,
        }
    }

    pub fn set(&mut self, kind: CurrencyKind, amount: i64) {
        match kind {
            CurrencyKind::Momentum => self.momentum = amount,
            CurrencyKind::SkillXp => self.skill_xp = amount,
            CurrencyKind::ArenaPoints => self.arena_points = amount,
            CurrencyKind::IncomeProof => self.income_proof = amount,
        }
    }
}

/// Why a ledger operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum TransactionRejection {
    NonPositiveAmount { amount: i64 },
    InsufficientBalance { required: i64, available: i64 },
    BalanceOverflow { amount: i64, balance: i64 },
}

impl fmt::Display for TransactionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionRejection::NonPositiveAmount { amount } => {
                write!(f, "amount must be positive (got {amount})")
            }
            TransactionRejection::InsufficientBalance {
                required,
                available,
            } => write!(
                f,
                "insufficient balance: required {required}, available {available}"
            ),
            TransactionRejection::BalanceOverflow { amount, balance } => write!(
                f,
                "crediting {amount} would overflow the balance of {balance}"
            ),
        }
    }
}

/// Outcome of a credit or debit. Callers must check `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub success: bool,
    pub kind: CurrencyKind,
    pub new_balance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<LedgerEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<TransactionRejection>,
}

impl TransactionResult {
    pub fn applied(entry: LedgerEntry, new_balance: i64) -> Self {
        Self {
            success: true,
            kind: entry.kind,
            new_balance,
            entry: Some(entry),
            rejection: None,
        }
    }

    pub fn rejected(kind: CurrencyKind, balance: i64, rejection: TransactionRejection) -> Self {
        Self {
            success: false,
            kind,
            new_balance: balance,
            entry: None,
            rejection: Some(rejection),
        }
    }
}

/// What a momentum decay run did for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecayOutcome {
    NoMomentum { balance: i64 },
    InvalidRate { rate: f64 },
    Decayed { amount: i64, result: TransactionResult },
}
