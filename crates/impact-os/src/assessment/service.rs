use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{ApplicantId, AssessmentResult, IntakeSubmission};
use super::repository::{ApplicantRecord, ApplicantRepository, RepositoryError};
use super::scoring::assess_profile;
use super::summary::AssessmentSummary;

/// Orchestrates intake, assessment and summaries over an applicant repository.
pub struct AssessmentService<R> {
    repository: Arc<R>,
}

static APPLICANT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_applicant_id() -> ApplicantId {
    let id = APPLICANT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicantId(format!("applicant-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: ApplicantRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new applicant. The record starts without an assessment.
    pub fn intake(
        &self,
        submission: IntakeSubmission,
    ) -> Result<ApplicantRecord, AssessmentServiceError> {
        let profile = submission.into_profile(next_applicant_id());
        let stored = self.repository.insert(ApplicantRecord::new(profile))?;
        info!(applicant_id = %stored.applicant_id(), "applicant registered");
        Ok(stored)
    }

    /// Score a stored applicant and persist every derived field in one write.
    /// Re-running overwrites the previous assessment.
    pub fn assess(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let record = self.load(applicant_id)?;
        let result = assess_profile(&record.profile);
        debug!(
            applicant_id = %applicant_id,
            technical = result.triad.technical,
            soft = result.triad.soft,
            commercial = result.triad.commercial,
            "triad computed"
        );

        self.repository
            .save_assessment(&result)
            .map_err(|err| match err {
                RepositoryError::NotFound => AssessmentServiceError::NotFound(applicant_id.clone()),
                other => AssessmentServiceError::Repository(other),
            })?;

        info!(
            applicant_id = %applicant_id,
            offer = result.offer_type.label(),
            stipend = result.stipend_eligible,
            focus = result.primary_focus.label(),
            "assessment persisted"
        );
        Ok(result)
    }

    pub fn summary(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<AssessmentSummary, AssessmentServiceError> {
        let record = self.load(applicant_id)?;
        let result = record
            .assessment
            .as_ref()
            .ok_or_else(|| AssessmentServiceError::NotAssessed(applicant_id.clone()))?;
        Ok(AssessmentSummary::from_result(result))
    }

    pub fn get(&self, applicant_id: &ApplicantId) -> Result<ApplicantRecord, AssessmentServiceError> {
        self.load(applicant_id)
    }

    fn load(&self, applicant_id: &ApplicantId) -> Result<ApplicantRecord, AssessmentServiceError> {
        self.repository
            .load_applicant(applicant_id)?
            .ok_or_else(|| AssessmentServiceError::NotFound(applicant_id.clone()))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("applicant {0} not found")]
    NotFound(ApplicantId),
    #[error("applicant {0} has not been assessed")]
    NotAssessed(ApplicantId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
