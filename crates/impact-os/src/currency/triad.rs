use crate::assessment::SkillTriad;

const XP_PER_POINT: f64 = 10.0;
const AXIS_CAP: f64 = 100.0;

/// Currency-page triad: total XP split evenly across the three axes,
/// ten XP per point, capped at 100.
pub fn approximate_triad(total_xp: i64) -> SkillTriad {
    let per_axis = (total_xp as f64 / 3.0 / XP_PER_POINT).min(AXIS_CAP);
    SkillTriad {
        technical: per_axis,
        soft: per_axis,
        commercial: per_axis,
    }
}
