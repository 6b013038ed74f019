use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for applicants created at intake.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employment situation declared at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Unemployed,
    Underemployed,
    Caregiver,
    Student,
    Employed,
    Other,
}

/// Self-reported intake signals on a 0..N scale; absent answers stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeSignals {
    #[serde(default)]
    pub readiness_score: Option<f64>,
    #[serde(default)]
    pub action_orientation: Option<f64>,
    #[serde(default)]
    pub market_awareness: Option<f64>,
    #[serde(default)]
    pub commitment_signal: Option<f64>,
}

/// Free-text probe answers collected during the intake interview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponses {
    #[serde(default)]
    pub technical: String,
    #[serde(default)]
    pub commercial: String,
    #[serde(default)]
    pub exposure: String,
    #[serde(default)]
    pub commitment: String,
}

/// Intake payload before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSubmission {
    #[serde(default)]
    pub signals: IntakeSignals,
    #[serde(default)]
    pub tried_learning_skill: bool,
    #[serde(default)]
    pub tried_online_earning: bool,
    #[serde(default)]
    pub monthly_income: Option<u32>,
    #[serde(default)]
    pub current_status: Option<EmploymentStatus>,
    #[serde(default)]
    pub probes: ProbeResponses,
}

impl IntakeSubmission {
    pub fn into_profile(self, applicant_id: ApplicantId) -> ApplicantProfile {
        ApplicantProfile {
            applicant_id,
            signals: self.signals,
            tried_learning_skill: self.tried_learning_skill,
            tried_online_earning: self.tried_online_earning,
            monthly_income: self.monthly_income,
            current_status: self.current_status,
            probes: self.probes,
        }
    }
}

/// Applicant attributes the scoring rules read. Immutable after intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub applicant_id: ApplicantId,
    pub signals: IntakeSignals,
    pub tried_learning_skill: bool,
    pub tried_online_earning: bool,
    pub monthly_income: Option<u32>,
    pub current_status: Option<EmploymentStatus>,
    pub probes: ProbeResponses,
}

impl ApplicantProfile {
    pub fn has_income(&self) -> bool {
        self.monthly_income.map_or(false, |income| income > 0)
    }
}

/// Three-axis skill score, each axis in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillTriad {
    pub technical: f64,
    pub soft: f64,
    pub commercial: f64,
}

impl SkillTriad {
    pub fn score(&self, domain: SkillDomain) -> f64 {
        match domain {
            SkillDomain::Technical => self.technical,
            SkillDomain::Soft => self.soft,
            SkillDomain::Commercial => self.commercial,
        }
    }
}

/// Axis of the skill triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillDomain {
    Technical,
    Soft,
    Commercial,
}

impl SkillDomain {
    pub const fn label(self) -> &'static str {
        match self {
            SkillDomain::Technical => "technical",
            SkillDomain::Soft => "soft",
            SkillDomain::Commercial => "commercial",
        }
    }
}

/// Programme offer an applicant is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferType {
    FullSupport,
    SkillsOnly,
    Accelerator,
    CatalystTrack,
}

impl OfferType {
    pub const ALL: [OfferType; 4] = [
        OfferType::FullSupport,
        OfferType::SkillsOnly,
        OfferType::Accelerator,
        OfferType::CatalystTrack,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            OfferType::FullSupport => "full_support",
            OfferType::SkillsOnly => "skills_only",
            OfferType::Accelerator => "accelerator",
            OfferType::CatalystTrack => "catalyst_track",
        }
    }
}

/// Targets a cohort member on a given offer is tracked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiTarget {
    pub weekly_xp: Option<u32>,
    pub weekly_arena_points: u32,
    pub income_target: Option<u32>,
    pub graduation_days: u32,
}

/// Everything an assessment derives and writes back onto the applicant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub applicant_id: ApplicantId,
    pub triad: SkillTriad,
    pub offer_type: OfferType,
    pub stipend_eligible: bool,
    pub primary_focus: SkillDomain,
    pub kpi_targets: KpiTarget,
}
