//! Correctness and points once a game has a final score.

use pickem_server::pickem::scoring::{score_pick, winner_of, ScoringRule};

const HOME: i32 = 7;
const AWAY: i32 = 12;

#[test]
fn home_win_beats_away_pick() {
    assert_eq!(winner_of(HOME, AWAY, 27, 20), Some(HOME));
    assert_eq!(winner_of(HOME, AWAY, 13, 31), Some(AWAY));
}

#[test]
fn tie_has_no_winner() {
    assert_eq!(winner_of(HOME, AWAY, 20, 20), None);
}

#[test]
fn correct_pick_earns_rule_points() {
    let rule = ScoringRule {
        points_per_correct: 1,
    };
    assert_eq!(score_pick(HOME, Some(HOME), &rule), (true, 1));
    assert_eq!(score_pick(AWAY, Some(HOME), &rule), (false, 0));
}

#[test]
fn tie_scores_every_pick_zero() {
    let rule = ScoringRule::default();
    assert_eq!(score_pick(HOME, None, &rule), (false, 0));
    assert_eq!(score_pick(AWAY, None, &rule), (false, 0));
}

#[test]
fn configurable_points_per_correct() {
    let rule = ScoringRule {
        points_per_correct: 3,
    };
    assert_eq!(score_pick(HOME, Some(HOME), &rule), (true, 3));
    assert_eq!(score_pick(HOME, Some(AWAY), &rule), (false, 0));
}
