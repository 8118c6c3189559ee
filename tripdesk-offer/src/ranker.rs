use tripdesk_core::Opening;

/// Scores are rounded to this many decimal places.
const SCORE_PRECISION: f64 = 100_000.0;

/// Stay-length proximity: `|stay - target| / max(stay, target)`.
///
/// 0.0 is an exact match and values approach 1.0 as the mismatch grows.
/// With both lengths positive the score stays in `[0, 1)`. A zero length
/// against a non-zero one scores exactly 1.0, the worst possible match, so a
/// `days_count` of 0 puts every stay at 1.0 and leaves input order intact.
/// Two zero lengths score 0.0.
pub fn proximity_score(stay_days: i64, target_days: u32) -> f64 {
    let target = i64::from(target_days);
    let denominator = stay_days.max(target);
    if denominator <= 0 {
        return 0.0;
    }
    let score = (stay_days - target).abs() as f64 / denominator as f64;
    (score * SCORE_PRECISION).round() / SCORE_PRECISION
}

/// Ranks search candidates by stay length against a target duration.
#[derive(Debug, Clone, Copy)]
pub struct StayRanker {
    target_days: u32,
}

impl StayRanker {
    pub fn new(target_days: u32) -> Self {
        Self { target_days }
    }

    /// Writes each candidate's score, then sorts by score descending.
    ///
    /// Descending puts the worst matches first. That is the established
    /// ordering of this endpoint and is pinned by tests. The sort is stable,
    /// so equal scores keep their input order.
    pub fn rank(&self, openings: &mut [Opening]) {
        for opening in openings.iter_mut() {
            opening.ranking_score = Some(proximity_score(opening.days_count(), self.target_days));
        }

        openings.sort_by(|a, b| {
            let score_a = a.ranking_score.unwrap_or(0.0);
            let score_b = b.ranking_score.unwrap_or(0.0);
            score_b.partial_cmp(&score_a).unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}
