use super::common::*;
use crate::config::CurrencyConfig;
use crate::currency::domain::{Balance, CurrencyKind, DecayOutcome, MissionId, TransactionRejection};
use crate::currency::service::decay_amount;
use crate::currency::{CurrencyLedger, CurrencyServiceError, DECAY_REASON};
use std::sync::Arc;

#[test]
fn credit_appends_positive_entry() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");

    let result = ledger
        .credit(
            &alice,
            CurrencyKind::SkillXp,
            120,
            "mission complete",
            Some(MissionId("mission-7".to_string())),
        )
        .expect("credit succeeds");

    assert!(result.success);
    assert_eq!(result.new_balance, 120);
    let entry = result.entry.expect("entry recorded");
    assert_eq!(entry.amount, 120);
    assert_eq!(entry.mission_id, Some(MissionId("mission-7".to_string())));
    assert_eq!(entry.reason, "mission complete");
}

#[test]
fn zero_credit_is_an_unsuccessful_no_op() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::Momentum, 7);

    let result = ledger
        .credit(&alice, CurrencyKind::Momentum, 0, "x", None)
        .expect("credit call returns");

    assert!(!result.success);
    assert_eq!(result.new_balance, 7);
    assert!(result.entry.is_none());
    assert_eq!(
        result.rejection,
        Some(TransactionRejection::NonPositiveAmount { amount: 0 })
    );
    assert_eq!(
        ledger
            .transaction_history(&alice, None, None)
            .expect("history")
            .len(),
        1
    );
}

#[test]
fn negative_credit_is_refused() {
    let (ledger, _) = build_ledger();

    let result = ledger
        .credit(&user("bob"), CurrencyKind::ArenaPoints, -5, "x", None)
        .expect("credit call returns");

    assert!(!result.success);
    assert_eq!(result.new_balance, 0);
}

#[test]
fn debit_refuses_overdraft_and_keeps_balance() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::SkillXp, 50);

    let result = ledger
        .debit(&alice, CurrencyKind::SkillXp, 100, "x")
        .expect("debit call returns");

    assert!(!result.success);
    assert_eq!(result.new_balance, 50);
    assert_eq!(
        result.rejection,
        Some(TransactionRejection::InsufficientBalance {
            required: 100,
            available: 50,
        })
    );
    assert_eq!(
        ledger.get_balance(&alice).expect("balance").skill_xp,
        50
    );
}

#[test]
fn debit_of_exact_balance_succeeds() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::ArenaPoints, 40);

    let result = ledger
        .debit(&alice, CurrencyKind::ArenaPoints, 40, "entry fee")
        .expect("debit call returns");

    assert!(result.success);
    assert_eq!(result.new_balance, 0);
    assert_eq!(result.entry.expect("entry").amount, -40);
}

#[test]
fn non_positive_debit_is_refused() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::ArenaPoints, 40);

    let result = ledger
        .debit(&alice, CurrencyKind::ArenaPoints, 0, "x")
        .expect("debit call returns");

    assert!(!result.success);
    assert_eq!(result.new_balance, 40);
}

#[test]
fn balance_groups_by_kind_and_defaults_to_zero() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::Momentum, 10);
    seed(&ledger, &alice, CurrencyKind::Momentum, 5);
    seed(&ledger, &alice, CurrencyKind::IncomeProof, 1);
    seed(&ledger, &user("bob"), CurrencyKind::Momentum, 99);

    let balance = ledger.get_balance(&alice).expect("balance");

    assert_eq!(balance.momentum, 15);
    assert_eq!(balance.income_proof, 1);
    assert_eq!(balance.skill_xp, 0);
    assert_eq!(balance.arena_points, 0);
}

#[test]
fn unknown_user_has_empty_ledger() {
    let (ledger, _) = build_ledger();
    let ghost = user("ghost");

    assert_eq!(
        ledger.get_balance(&ghost).expect("balance"),
        Balance::default()
    );
    assert!(ledger
        .transaction_history(&ghost, None, None)
        .expect("history")
        .is_empty());
}

#[test]
fn can_afford_compares_against_balance() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::ArenaPoints, 30);

    assert!(ledger
        .can_afford(&alice, CurrencyKind::ArenaPoints, 30)
        .expect("check"));
    assert!(!ledger
        .can_afford(&alice, CurrencyKind::ArenaPoints, 31)
        .expect("check"));
    assert!(ledger
        .can_afford(&alice, CurrencyKind::SkillXp, 0)
        .expect("check"));
}

#[test]
fn decay_rounds_up() {
    assert_eq!(decay_amount(15, 0.1), 2);
    assert_eq!(decay_amount(1, 0.1), 1);
    assert_eq!(decay_amount(30, 0.1), 3);
    assert_eq!(decay_amount(100, 0.25), 25);
}

#[test]
fn decay_amount_stays_between_one_point_and_the_balance() {
    assert_eq!(decay_amount(1, 1e-10), 1);
    assert_eq!(decay_amount(3, f64::MIN_POSITIVE), 1);
    assert_eq!(decay_amount(7, 1.0), 7);
    assert_eq!(decay_amount(i64::MAX, 1.0), i64::MAX);
}

#[test]
fn tiny_decay_rate_still_takes_one_point() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::Momentum, 1);

    match ledger
        .apply_momentum_decay(&alice, 1e-10)
        .expect("decay runs")
    {
        DecayOutcome::Decayed { amount, result } => {
            assert_eq!(amount, 1);
            assert!(result.success);
            assert_eq!(result.new_balance, 0);
        }
        other => panic!("expected decay, got {other:?}"),
    }
}

#[test]
fn credit_past_i64_max_is_refused_and_ledger_stays_usable() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::SkillXp, i64::MAX);

    let result = ledger
        .credit(&alice, CurrencyKind::SkillXp, 1, "bonus", None)
        .expect("credit call returns");

    assert!(!result.success);
    assert_eq!(result.new_balance, i64::MAX);
    assert!(result.entry.is_none());
    assert_eq!(
        result.rejection,
        Some(TransactionRejection::BalanceOverflow {
            amount: 1,
            balance: i64::MAX,
        })
    );

    let bob = user("bob");
    seed(&ledger, &bob, CurrencyKind::Momentum, 4);
    assert_eq!(ledger.get_balance(&bob).expect("balance").momentum, 4);
    assert_eq!(
        ledger.get_balance(&alice).expect("balance").skill_xp,
        i64::MAX
    );
    let spent = ledger
        .debit(&alice, CurrencyKind::SkillXp, i64::MAX, "cash out")
        .expect("debit call returns");
    assert!(spent.success);
    assert_eq!(spent.new_balance, 0);
}

#[test]
fn concurrent_credits_each_report_their_own_balance() {
    let (ledger, _) = build_ledger();
    let ledger = Arc::new(ledger);
    let alice = user("alice");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            let alice = alice.clone();
            std::thread::spawn(move || {
                ledger
                    .credit(&alice, CurrencyKind::Momentum, 10, "check-in", None)
                    .expect("credit")
                    .new_balance
            })
        })
        .collect();

    let mut balances: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread joins"))
        .collect();
    balances.sort_unstable();

    assert_eq!(balances, vec![10, 20, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn decay_debits_ceiling_of_rate() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::Momentum, 15);

    let outcome = ledger
        .apply_momentum_decay(&alice, 0.1)
        .expect("decay runs");

    match outcome {
        DecayOutcome::Decayed { amount, result } => {
            assert_eq!(amount, 2);
            assert!(result.success);
            assert_eq!(result.new_balance, 13);
            assert_eq!(result.entry.expect("entry").reason, DECAY_REASON);
        }
        other => panic!("expected decay, got {other:?}"),
    }
}

#[test]
fn decay_of_single_point_empties_balance() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::Momentum, 1);

    ledger
        .apply_default_momentum_decay(&alice)
        .expect("decay runs");

    assert_eq!(ledger.get_balance(&alice).expect("balance").momentum, 0);
}

#[test]
fn decay_without_momentum_is_a_no_op() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::SkillXp, 100);

    let outcome = ledger
        .apply_momentum_decay(&alice, 0.1)
        .expect("decay runs");

    assert_eq!(outcome, DecayOutcome::NoMomentum { balance: 0 });
    assert_eq!(
        ledger
            .transaction_history(&alice, None, None)
            .expect("history")
            .len(),
        1
    );
}

#[test]
fn decay_rejects_rates_outside_unit_interval() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::Momentum, 20);

    for rate in [0.0, -0.5, 1.5, f64::NAN] {
        match ledger.apply_momentum_decay(&alice, rate).expect("decay runs") {
            DecayOutcome::InvalidRate { .. } => {}
            other => panic!("expected invalid rate for {rate}, got {other:?}"),
        }
    }
    assert_eq!(ledger.get_balance(&alice).expect("balance").momentum, 20);
}

#[test]
fn repeated_decay_in_one_period_compounds() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::Momentum, 100);

    ledger.apply_momentum_decay(&alice, 0.1).expect("first run");
    ledger.apply_momentum_decay(&alice, 0.1).expect("second run");

    assert_eq!(ledger.get_balance(&alice).expect("balance").momentum, 81);
}

#[test]
fn decay_sweep_visits_every_momentum_holder() {
    let (ledger, _) = build_ledger();
    seed(&ledger, &user("alice"), CurrencyKind::Momentum, 15);
    seed(&ledger, &user("bob"), CurrencyKind::Momentum, 10);
    seed(&ledger, &user("carol"), CurrencyKind::SkillXp, 10);

    let outcomes = ledger.decay_all_momentum(0.1).expect("sweep runs");

    let users: Vec<_> = outcomes.iter().map(|(id, _)| id.0.as_str()).collect();
    assert_eq!(users, vec!["alice", "bob"]);
    assert_eq!(
        ledger.get_balance(&user("alice")).expect("balance").momentum,
        13
    );
    assert_eq!(
        ledger.get_balance(&user("bob")).expect("balance").momentum,
        9
    );
}

#[test]
fn recrediting_a_mission_pays_twice() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    let mission = MissionId("mission-42".to_string());

    for _ in 0..2 {
        ledger
            .credit(
                &alice,
                CurrencyKind::SkillXp,
                25,
                "mission complete",
                Some(mission.clone()),
            )
            .expect("credit");
    }

    assert_eq!(ledger.get_balance(&alice).expect("balance").skill_xp, 50);
}

#[test]
fn history_is_newest_first_filtered_and_limited() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::SkillXp, 1);
    seed(&ledger, &alice, CurrencyKind::Momentum, 2);
    seed(&ledger, &alice, CurrencyKind::SkillXp, 3);
    seed(&ledger, &alice, CurrencyKind::SkillXp, 4);

    let all = ledger
        .transaction_history(&alice, None, None)
        .expect("history");
    let amounts: Vec<_> = all.iter().map(|entry| entry.amount).collect();
    assert_eq!(amounts, vec![4, 3, 2, 1]);

    let xp = ledger
        .transaction_history(&alice, Some(CurrencyKind::SkillXp), Some(2))
        .expect("history");
    let amounts: Vec<_> = xp.iter().map(|entry| entry.amount).collect();
    assert_eq!(amounts, vec![4, 3]);
}

#[test]
fn history_defaults_to_configured_limit() {
    let store = Arc::new(crate::currency::InMemoryLedger::new());
    let ledger = CurrencyLedger::new(
        store,
        CurrencyConfig {
            decay_rate: 0.1,
            history_limit: 3,
        },
    );
    let alice = user("alice");
    for _ in 0..5 {
        ledger
            .credit(&alice, CurrencyKind::Momentum, 1, "check-in", None)
            .expect("credit");
    }

    assert_eq!(
        ledger
            .transaction_history(&alice, None, None)
            .expect("history")
            .len(),
        3
    );
}

#[test]
fn currency_triad_splits_xp_and_caps_at_one_hundred() {
    let (ledger, _) = build_ledger();
    let alice = user("alice");
    seed(&ledger, &alice, CurrencyKind::SkillXp, 600);

    let triad = ledger.skill_triad(&alice).expect("triad");
    assert_eq!(triad.technical, 20.0);
    assert_eq!(triad.soft, 20.0);
    assert_eq!(triad.commercial, 20.0);

    seed(&ledger, &alice, CurrencyKind::SkillXp, 10_000);
    let capped = ledger.skill_triad(&alice).expect("triad");
    assert_eq!(capped.technical, 100.0);
}

#[test]
fn store_failures_surface_as_errors() {
    let ledger = CurrencyLedger::new(Arc::new(OfflineLedger), CurrencyConfig::default());

    match ledger.credit(&user("alice"), CurrencyKind::Momentum, 5, "x", None) {
        Err(CurrencyServiceError::Store(_)) => {}
        other => panic!("expected store error, got {other:?}"),
    }
    assert!(ledger.get_balance(&user("alice")).is_err());
}
