use super::scoring::MatchResult;

/// Orders results by descending total and keeps the first `top_k`.
///
/// The sort is stable, so equal totals keep the order in which candidates were scored.
pub fn rank(mut results: Vec<MatchResult>, top_k: usize) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.total_match_score.total_cmp(&a.total_match_score));
    results.truncate(top_k);
    results
}
