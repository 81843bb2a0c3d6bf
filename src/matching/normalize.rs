//! Linear rescaling of accumulated raw scores onto the comparison scale.

use super::config::ScoreScale;

/// Maps `score` from `[0, max_score]` onto `[target_min, target_max]`.
///
/// Scores beyond either end are clamped, so the result never leaves the target range.
/// `max_score` must be positive; [`MatchingConfig::validate`](super::MatchingConfig::validate)
/// guarantees this for configured maxima.
pub fn normalize(score: f64, max_score: f64, target_min: f64, target_max: f64) -> f64 {
    let ratio = (score / max_score).clamp(0.0, 1.0);
    target_min + (target_max - target_min) * ratio
}

pub(crate) fn normalize_to_scale(score: f64, max_score: f64, scale: &ScoreScale) -> f64 {
    normalize(score, max_score, scale.min, scale.max)
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
