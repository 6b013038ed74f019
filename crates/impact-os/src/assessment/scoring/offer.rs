use super::super::domain::{EmploymentStatus, OfferType};

const ACCELERATOR_TECHNICAL_FLOOR: f64 = 70.0;
const INCOME_ACCELERATOR_FLOOR: f64 = 40.0;
const INCOME_CATALYST_FLOOR: f64 = 70.0;

const STIPEND_QUALIFYING_STATUSES: [EmploymentStatus; 4] = [
    EmploymentStatus::Unemployed,
    EmploymentStatus::Underemployed,
    EmploymentStatus::Caregiver,
    EmploymentStatus::Student,
];

/// Place an applicant on an offer from income status and the technical axis only.
/// Boundary values belong to the upper bracket.
pub fn classify_offer(has_income: bool, technical: f64) -> OfferType {
    if has_income {
        if technical >= INCOME_CATALYST_FLOOR {
            OfferType::CatalystTrack
        } else if technical >= INCOME_ACCELERATOR_FLOOR {
            OfferType::Accelerator
        } else {
            OfferType::SkillsOnly
        }
    } else if technical >= ACCELERATOR_TECHNICAL_FLOOR {
        OfferType::Accelerator
    } else {
        OfferType::FullSupport
    }
}

pub fn is_stipend_eligible(
    offer: OfferType,
    has_income: bool,
    status: Option<EmploymentStatus>,
) -> bool {
    offer == OfferType::FullSupport
        && !has_income
        && status.map_or(false, |status| {
            STIPEND_QUALIFYING_STATUSES.contains(&status)
        })
}
