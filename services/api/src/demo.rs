use crate::infra::{read_submission, InMemoryApplicantRepository};
use clap::Args;
use impact_os::assessment::scoring::assess_profile;
use impact_os::assessment::{
    ApplicantId, AssessmentService, AssessmentSummary, EmploymentStatus, IntakeSignals,
    IntakeSubmission, ProbeResponses,
};
use impact_os::config::CurrencyConfig;
use impact_os::currency::{
    CurrencyKind, CurrencyLedger, DecayOutcome, InMemoryLedger, MissionId, TransactionResult,
    UserId,
};
use impact_os::error::AppError;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Intake submission JSON file to score
    #[arg(long)]
    pub(crate) applicant: PathBuf,
    /// Print the rounded staff summary instead of the raw result
    #[arg(long)]
    pub(crate) summary: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Momentum decay rate used in the ledger walkthrough (defaults to the configured rate)
    #[arg(long)]
    pub(crate) decay_rate: Option<f64>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let submission = read_submission(&args.applicant)?;
    let profile = submission.into_profile(ApplicantId("cli-preview".to_string()));
    let result = assess_profile(&profile);

    if args.summary {
        print_json(&AssessmentSummary::from_result(&result))
    } else {
        print_json(&result)
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Impact OS demo");

    let service = AssessmentService::new(Arc::new(InMemoryApplicantRepository::default()));
    let record = service.intake(demo_submission())?;
    println!("\nIntake");
    println!(
        "  Registered {} ({})",
        record.applicant_id(),
        record.status_label()
    );

    let result = service.assess(record.applicant_id())?;
    let summary = service.summary(record.applicant_id())?;
    println!("\nAssessment");
    println!(
        "  Triad: technical {} / soft {} / commercial {}",
        summary.scores.technical, summary.scores.soft, summary.scores.commercial
    );
    println!(
        "  Strongest axis: {}, weakest axis: {}",
        summary.highest, summary.lowest
    );
    println!(
        "  Offer: {} | stipend eligible: {} | focus: {}",
        result.offer_type.label(),
        result.stipend_eligible,
        result.primary_focus.label()
    );
    println!(
        "  Weekly targets: {} xp, {} arena points, graduate in {} days",
        result
            .kpi_targets
            .weekly_xp
            .map_or_else(|| "no".to_string(), |xp| xp.to_string()),
        result.kpi_targets.weekly_arena_points,
        result.kpi_targets.graduation_days
    );

    let config = CurrencyConfig::default();
    let rate = args.decay_rate.unwrap_or(config.decay_rate);
    let ledger = CurrencyLedger::new(Arc::new(InMemoryLedger::new()), config);
    let user = UserId(record.applicant_id().0.clone());

    println!("\nCurrency ledger");
    print_transaction(
        "Mission reward",
        &ledger.credit(
            &user,
            CurrencyKind::SkillXp,
            150,
            "mission complete",
            Some(MissionId("mission-001".to_string())),
        )?,
    );
    print_transaction(
        "Weekly check-in",
        &ledger.credit(&user, CurrencyKind::Momentum, 15, "weekly check-in", None)?,
    );
    print_transaction(
        "Arena win",
        &ledger.credit(&user, CurrencyKind::ArenaPoints, 20, "arena win", None)?,
    );
    print_transaction(
        "Arena entry fee",
        &ledger.debit(&user, CurrencyKind::ArenaPoints, 50, "arena entry fee")?,
    );

    match ledger.apply_momentum_decay(&user, rate)? {
        DecayOutcome::Decayed { amount, result } => println!(
            "  Momentum decay at {rate}: -{amount}, momentum now {}",
            result.new_balance
        ),
        DecayOutcome::NoMomentum { balance } => {
            println!("  Momentum decay skipped: balance {balance}")
        }
        DecayOutcome::InvalidRate { rate } => {
            println!("  Momentum decay refused: rate {rate} is outside (0, 1]")
        }
    }

    let triad = ledger.skill_triad(&user)?;
    println!(
        "  Progress triad from xp: technical {:.1} / soft {:.1} / commercial {:.1}",
        triad.technical, triad.soft, triad.commercial
    );

    println!("\nFinal balance");
    print_json(&ledger.get_balance(&user)?)
}

fn demo_submission() -> IntakeSubmission {
    IntakeSubmission {
        signals: IntakeSignals {
            readiness_score: Some(1.0),
            action_orientation: Some(3.0),
            market_awareness: Some(2.0),
            commitment_signal: Some(3.0),
        },
        tried_learning_skill: true,
        tried_online_earning: true,
        monthly_income: None,
        current_status: Some(EmploymentStatus::Caregiver),
        probes: ProbeResponses {
            technical: String::new(),
            commercial: "I sold handmade soap at the weekend market for two seasons and kept a \
                         simple notebook of what sold and at what price."
                .to_string(),
            exposure: String::new(),
            commitment: "Mornings while the kids are at school.".to_string(),
        },
    }
}

fn print_transaction(label: &str, result: &TransactionResult) {
    match &result.rejection {
        None => println!(
            "  {label}: ok, {} balance {}",
            result.kind.label(),
            result.new_balance
        ),
        Some(rejection) => println!(
            "  {label}: rejected ({rejection}), {} balance stays {}",
            result.kind.label(),
            result.new_balance
        ),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
