//! Applicant assessment: intake signals in, triad/offer/stipend/focus/targets out.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantId, ApplicantProfile, AssessmentResult, EmploymentStatus, IntakeSignals,
    IntakeSubmission, KpiTarget, OfferType, ProbeResponses, SkillDomain, SkillTriad,
};
pub use repository::{ApplicantRecord, ApplicantRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
pub use summary::{AssessmentSummary, RoundedTriad};
