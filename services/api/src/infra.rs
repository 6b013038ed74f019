use impact_os::assessment::{
    ApplicantId, ApplicantRecord, ApplicantRepository, AssessmentResult, IntakeSubmission,
    RepositoryError,
};
use impact_os::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicantRepository {
    records: Arc<Mutex<HashMap<ApplicantId, ApplicantRecord>>>,
}

impl InMemoryApplicantRepository {
    fn records(&self) -> Result<MutexGuard<'_, HashMap<ApplicantId, ApplicantRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl ApplicantRepository for InMemoryApplicantRepository {
    fn insert(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(record.applicant_id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.applicant_id().clone(), record.clone());
        Ok(record)
    }

    fn load_applicant(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }

    fn save_assessment(&self, result: &AssessmentResult) -> Result<(), RepositoryError> {
        let mut guard = self.records()?;
        let record = guard
            .get_mut(&result.applicant_id)
            .ok_or(RepositoryError::NotFound)?;
        record.assessment = Some(result.clone());
        Ok(())
    }
}

pub(crate) fn read_submission(path: &Path) -> Result<IntakeSubmission, AppError> {
    let raw = fs::read_to_string(path)?;
    let submission = serde_json::from_str(&raw)?;
    Ok(submission)
}
