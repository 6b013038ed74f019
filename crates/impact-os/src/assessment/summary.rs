use serde::Serialize;

use super::domain::{ApplicantId, AssessmentResult, KpiTarget, OfferType, SkillDomain, SkillTriad};
use super::scoring::{select_primary_focus, strongest_domain};

/// Triad rounded half-up to whole points for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundedTriad {
    pub technical: u8,
    pub soft: u8,
    pub commercial: u8,
}

impl RoundedTriad {
    pub fn from_triad(triad: &SkillTriad) -> Self {
        Self {
            technical: round_half_up(triad.technical),
            soft: round_half_up(triad.soft),
            commercial: round_half_up(triad.commercial),
        }
    }
}

// Axes are already clamped to [0, 100].
fn round_half_up(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}

/// Staff-facing view of a stored assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentSummary {
    pub applicant_id: ApplicantId,
    pub triad: SkillTriad,
    pub scores: RoundedTriad,
    pub highest: &'static str,
    pub lowest: &'static str,
    pub offer_type: OfferType,
    pub stipend_eligible: bool,
    pub primary_focus: SkillDomain,
    pub kpi_targets: KpiTarget,
}

impl AssessmentSummary {
    pub fn from_result(result: &AssessmentResult) -> Self {
        let triad = result.triad;
        Self {
            applicant_id: result.applicant_id.clone(),
            triad,
            scores: RoundedTriad::from_triad(&triad),
            highest: strongest_domain(&triad).label(),
            lowest: select_primary_focus(&triad).label(),
            offer_type: result.offer_type,
            stipend_eligible: result.stipend_eligible,
            primary_focus: result.primary_focus,
            kpi_targets: result.kpi_targets,
        }
    }
}
