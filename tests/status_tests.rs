//! Weekly status aggregation arithmetic.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use pickem_server::db::models::Game;
use pickem_server::pickem::status::week_status;

fn game(id: i64, home: i32, away: i32) -> Game {
    let deadline = Utc::now() + Duration::hours(1);
    Game {
        id,
        external_game_id: id.to_string(),
        home_team_id: home,
        away_team_id: away,
        game_time: deadline + Duration::minutes(5),
        pick_deadline: deadline,
        week: 3,
        season: 2025,
        is_playoffs: false,
        is_completed: false,
        location: None,
        home_score: None,
        away_score: None,
        winning_team_id: None,
    }
}

#[test]
fn one_of_two_games_picked() {
    let g1 = game(10, 1, 2);
    let g2 = game(11, 3, 4);
    let picked: HashSet<i64> = [10].into_iter().collect();

    let status = week_status(3, 2025, &[g1, g2], &picked);
    assert_eq!(status.total_games, 2);
    assert_eq!(status.picks_made, 1);
    assert!(!status.is_complete);
    assert_eq!(status.games_needing_picks, vec![11]);
}

#[test]
fn complete_when_every_game_picked() {
    let games = vec![game(1, 1, 2), game(2, 3, 4), game(3, 5, 6)];
    let picked: HashSet<i64> = [1, 2, 3].into_iter().collect();

    let status = week_status(3, 2025, &games, &picked);
    assert_eq!(status.picks_made, 3);
    assert!(status.is_complete);
    assert!(status.games_needing_picks.is_empty());
}

#[test]
fn empty_week_is_trivially_complete() {
    let status = week_status(8, 2025, &[], &HashSet::new());
    assert_eq!(status.total_games, 0);
    assert!(status.is_complete);
}

#[test]
fn made_plus_missing_always_equals_total() {
    let games: Vec<Game> = (0..16).map(|i| game(i, 1, 2)).collect();
    for picked_count in 0..=16 {
        let picked: HashSet<i64> = (0..picked_count).collect();
        let status = week_status(1, 2025, &games, &picked);
        assert_eq!(
            status.picks_made + status.games_needing_picks.len() as i64,
            status.total_games
        );
    }
}

#[test]
fn stray_pick_ids_outside_week_are_ignored() {
    let games = vec![game(1, 1, 2)];
    let picked: HashSet<i64> = [1, 999].into_iter().collect();

    let status = week_status(1, 2025, &games, &picked);
    assert_eq!(status.picks_made, 1);
    assert_eq!(status.total_games, 1);
}
