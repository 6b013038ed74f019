use serde::{Deserialize, Serialize};

use super::domain::{ApplicantId, ApplicantProfile, AssessmentResult};

/// Stored applicant: the intake profile plus the last assessment written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub profile: ApplicantProfile,
    pub assessment: Option<AssessmentResult>,
}

impl ApplicantRecord {
    pub fn new(profile: ApplicantProfile) -> Self {
        Self {
            profile,
            assessment: None,
        }
    }

    pub fn applicant_id(&self) -> &ApplicantId {
        &self.profile.applicant_id
    }

    pub fn status_label(&self) -> &'static str {
        if self.assessment.is_some() {
            "assessed"
        } else {
            "pending_assessment"
        }
    }
}

/// Storage abstraction so the scoring rules can be exercised without a database.
pub trait ApplicantRepository: Send + Sync {
    fn insert(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError>;
    fn load_applicant(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, RepositoryError>;
    /// Write all derived fields in one step; implementations must not apply part of it.
    fn save_assessment(&self, result: &AssessmentResult) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
