use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    ApplicantId, ApplicantProfile, AssessmentResult, EmploymentStatus, IntakeSignals,
    IntakeSubmission, ProbeResponses,
};
use crate::assessment::repository::{ApplicantRecord, ApplicantRepository, RepositoryError};
use crate::assessment::AssessmentService;

pub(super) fn detailed_answer() -> String {
    "I have been teaching myself spreadsheet automation in the evenings and recently built a \
     small inventory tracker for a neighbour's shop."
        .to_string()
}

pub(super) fn submission() -> IntakeSubmission {
    IntakeSubmission {
        signals: IntakeSignals {
            readiness_score: Some(2.0),
            action_orientation: Some(2.0),
            market_awareness: Some(1.0),
            commitment_signal: Some(2.0),
        },
        tried_learning_skill: true,
        tried_online_earning: false,
        monthly_income: None,
        current_status: Some(EmploymentStatus::Unemployed),
        probes: ProbeResponses {
            technical: detailed_answer(),
            commercial: String::new(),
            exposure: String::new(),
            commitment: "Evenings and weekends.".to_string(),
        },
    }
}

pub(super) fn profile(id: &str) -> ApplicantProfile {
    submission().into_profile(ApplicantId(id.to_string()))
}

pub(super) fn blank_profile(id: &str) -> ApplicantProfile {
    IntakeSubmission {
        signals: IntakeSignals::default(),
        tried_learning_skill: false,
        tried_online_earning: false,
        monthly_income: None,
        current_status: None,
        probes: ProbeResponses::default(),
    }
    .into_profile(ApplicantId(id.to_string()))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ApplicantId, ApplicantRecord>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &ApplicantId) -> Option<ApplicantRecord> {
        self.records.lock().expect("lock").get(id).cloned()
    }
}

impl ApplicantRepository for MemoryRepository {
    fn insert(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(record.applicant_id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.applicant_id().clone(), record.clone());
        Ok(record)
    }

    fn load_applicant(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").get(id).cloned())
    }

    fn save_assessment(&self, result: &AssessmentResult) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        let record = guard
            .get_mut(&result.applicant_id)
            .ok_or(RepositoryError::NotFound)?;
        record.assessment = Some(result.clone());
        Ok(())
    }
}

/// Loads succeed but every write fails, so nothing is ever persisted.
pub(super) struct ReadOnlyRepository {
    pub(super) record: ApplicantRecord,
}

impl ApplicantRepository for ReadOnlyRepository {
    fn insert(&self, _record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database read-only".to_string()))
    }

    fn load_applicant(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Ok((self.record.applicant_id() == id).then(|| self.record.clone()))
    }

    fn save_assessment(&self, _result: &AssessmentResult) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database read-only".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl ApplicantRepository for ConflictRepository {
    fn insert(&self, _record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn load_applicant(&self, _id: &ApplicantId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Ok(None)
    }

    fn save_assessment(&self, _result: &AssessmentResult) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone());
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
