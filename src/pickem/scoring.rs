//! Pick scoring once a game completes.

use crate::config::settings;

/// Flat per-correct-pick rule. Kept as a struct so a confidence-weighted
/// variant can carry extra fields later.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub points_per_correct: i32,
}

impl ScoringRule {
    pub fn from_settings() -> Self {
        ScoringRule {
            points_per_correct: settings().points_per_correct,
        }
    }
}

impl Default for ScoringRule {
    fn default() -> Self {
        ScoringRule {
            points_per_correct: 1,
        }
    }
}

/// Winner of a final score, or `None` on a tie.
pub fn winner_of(
    home_team_id: i32,
    away_team_id: i32,
    home_score: i32,
    away_score: i32,
) -> Option<i32> {
    match home_score.cmp(&away_score) {
        std::cmp::Ordering::Greater => Some(home_team_id),
        std::cmp::Ordering::Less => Some(away_team_id),
        std::cmp::Ordering::Equal => None,
    }
}

/// Returns `(is_correct, points)` for one pick. A tie (no winner) scores
/// every pick incorrect for zero points.
pub fn score_pick(
    selected_team_id: i32,
    winning_team_id: Option<i32>,
    rule: &ScoringRule,
) -> (bool, i32) {
    let correct = winning_team_id == Some(selected_team_id);
    let points = if correct { rule.points_per_correct } else { 0 };
    (correct, points)
}
