use super::super::domain::{ApplicantProfile, SkillDomain, SkillTriad};

const PROBE_DETAIL_THRESHOLD: usize = 100;
const AXIS_MIN: f64 = 0.0;
const AXIS_MAX: f64 = 100.0;

/// Missing or non-finite answers contribute nothing.
fn signal(value: Option<f64>) -> f64 {
    value.filter(|raw| raw.is_finite()).unwrap_or(0.0)
}

fn is_detailed(probe: &str) -> bool {
    probe.chars().count() > PROBE_DETAIL_THRESHOLD
}

fn bonus(condition: bool, points: f64) -> f64 {
    if condition {
        points
    } else {
        0.0
    }
}

fn clamp_axis(value: f64) -> f64 {
    value.min(AXIS_MAX).max(AXIS_MIN)
}

pub fn compute_triad(profile: &ApplicantProfile) -> SkillTriad {
    let signals = &profile.signals;
    let probes = &profile.probes;
    let detailed_exposure = is_detailed(&probes.exposure);

    let technical = signal(signals.readiness_score) * 20.0
        + bonus(profile.tried_learning_skill, 15.0)
        + bonus(is_detailed(&probes.technical), 10.0);

    let soft = signal(signals.action_orientation) * 25.0
        + signal(signals.commitment_signal) * 15.0
        + bonus(is_detailed(&probes.commitment), 10.0)
        + bonus(detailed_exposure, 5.0);

    let commercial = signal(signals.market_awareness) * 25.0
        + bonus(profile.tried_online_earning, 20.0)
        + bonus(profile.has_income(), 25.0)
        + bonus(is_detailed(&probes.commercial), 10.0)
        + bonus(detailed_exposure, 5.0);

    SkillTriad {
        technical: clamp_axis(technical),
        soft: clamp_axis(soft),
        commercial: clamp_axis(commercial),
    }
}

/// Weakest axis. Ties resolve commercial, then technical, then soft.
pub fn select_primary_focus(triad: &SkillTriad) -> SkillDomain {
    let lowest = triad.technical.min(triad.soft).min(triad.commercial);

    if triad.commercial == lowest {
        SkillDomain::Commercial
    } else if triad.technical == lowest {
        SkillDomain::Technical
    } else {
        SkillDomain::Soft
    }
}

/// Strongest axis. Ties resolve technical, then soft, then commercial.
pub fn strongest_domain(triad: &SkillTriad) -> SkillDomain {
    let highest = triad.technical.max(triad.soft).max(triad.commercial);

    if triad.technical == highest {
        SkillDomain::Technical
    } else if triad.soft == highest {
        SkillDomain::Soft
    } else {
        SkillDomain::Commercial
    }
}
