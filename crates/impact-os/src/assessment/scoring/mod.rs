//! Pure scoring rules. Nothing in here touches storage.

mod offer;
mod targets;
mod triad;

pub use offer::{classify_offer, is_stipend_eligible};
pub use targets::resolve_kpi_targets;
pub use triad::{compute_triad, select_primary_focus, strongest_domain};

use super::domain::{ApplicantProfile, AssessmentResult};

/// Run the full rule chain: triad, offer, stipend, focus, then targets.
pub fn assess_profile(profile: &ApplicantProfile) -> AssessmentResult {
    let has_income = profile.has_income();
    let triad = compute_triad(profile);
    let offer_type = classify_offer(has_income, triad.technical);
    let stipend_eligible = is_stipend_eligible(offer_type, has_income, profile.current_status);
    let primary_focus = select_primary_focus(&triad);
    let kpi_targets = resolve_kpi_targets(offer_type);

    AssessmentResult {
        applicant_id: profile.applicant_id.clone(),
        triad,
        offer_type,
        stipend_eligible,
        primary_focus,
        kpi_targets,
    }
}
