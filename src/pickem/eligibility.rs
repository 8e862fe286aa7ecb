//! Pick-submission eligibility checks.

use chrono::{DateTime, Utc};

use crate::db::models::Game;

/// Why a pick was refused. Unknown-game is handled earlier by the lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickRejection {
    DeadlinePassed { deadline: DateTime<Utc> },
    TeamNotInGame { selected_team_id: i32 },
}

/// A pick is accepted iff the server clock is still before the game's
/// deadline and the selected team is one of the two participants.
/// `now == deadline` counts as late.
pub fn validate_pick(
    game: &Game,
    selected_team_id: i32,
    now: DateTime<Utc>,
) -> Result<(), PickRejection> {
    if now >= game.pick_deadline {
        return Err(PickRejection::DeadlinePassed {
            deadline: game.pick_deadline,
        });
    }
    if selected_team_id != game.home_team_id && selected_team_id != game.away_team_id {
        return Err(PickRejection::TeamNotInGame { selected_team_id });
    }
    Ok(())
}
