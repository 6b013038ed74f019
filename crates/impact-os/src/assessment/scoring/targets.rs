use super::super::domain::{KpiTarget, OfferType};

const FULL_SUPPORT_TARGETS: KpiTarget = KpiTarget {
    weekly_xp: Some(500),
    weekly_arena_points: 50,
    income_target: None,
    graduation_days: 90,
};

const SKILLS_ONLY_TARGETS: KpiTarget = KpiTarget {
    weekly_xp: Some(400),
    weekly_arena_points: 30,
    income_target: None,
    graduation_days: 60,
};

const ACCELERATOR_TARGETS: KpiTarget = KpiTarget {
    weekly_xp: Some(300),
    weekly_arena_points: 100,
    income_target: Some(500),
    graduation_days: 90,
};

const CATALYST_TRACK_TARGETS: KpiTarget = KpiTarget {
    weekly_xp: None,
    weekly_arena_points: 150,
    income_target: Some(1000),
    graduation_days: 60,
};

pub fn resolve_kpi_targets(offer: OfferType) -> KpiTarget {
    match offer {
        OfferType::FullSupport => FULL_SUPPORT_TARGETS,
        OfferType::SkillsOnly => SKILLS_ONLY_TARGETS,
        OfferType::Accelerator => ACCELERATOR_TARGETS,
        OfferType::CatalystTrack => CATALYST_TRACK_TARGETS,
    }
}
