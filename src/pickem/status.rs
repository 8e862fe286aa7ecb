//! Per-user weekly completion status.

use std::collections::HashSet;

use serde::Serialize;

use crate::db::models::Game;

/// "How far through this week's picks am I" summary sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PicksStatus {
    pub week: i32,
    pub season: i32,
    pub total_games: i64,
    pub picks_made: i64,
    pub is_complete: bool,
    pub games_needing_picks: Vec<i64>,
}

/// Folds the week's schedule against the set of game ids the user has
/// picked. Holds `picks_made + games_needing_picks.len() == total_games`.
pub fn week_status(
    week: i32,
    season: i32,
    games: &[Game],
    picked_game_ids: &HashSet<i64>,
) -> PicksStatus {
    let mut games_needing_picks: Vec<i64> = games
        .iter()
        .map(|g| g.id)
        .filter(|id| !picked_game_ids.contains(id))
        .collect();
    games_needing_picks.sort_unstable();

    let total_games = games.len() as i64;
    let picks_made = total_games - games_needing_picks.len() as i64;

    PicksStatus {
        week,
        season,
        total_games,
        picks_made,
        is_complete: picks_made == total_games,
        games_needing_picks,
    }
}
