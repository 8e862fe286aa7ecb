//! League pick visibility policy.
//!
//! Another member's selection stays hidden until the game's pick deadline
//! has passed (or the game finished). Enforced here, server-side; the
//! client only ever receives what it may show.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::models::{Game, Pick};

/// One member's pick for one game, filtered for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisiblePick {
    pub user_id: Uuid,
    pub game_id: i64,
    pub has_pick: bool,
    pub is_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_team_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

/// Whether the viewer may see which team was picked. Own picks are always
/// visible; everyone else's unlock at the deadline or on completion.
pub fn pick_revealed(game: &Game, owner_id: Uuid, viewer_id: Uuid, now: DateTime<Utc>) -> bool {
    owner_id == viewer_id || game.is_completed || now >= game.pick_deadline
}

pub fn visible_pick(
    pick: Option<&Pick>,
    game: &Game,
    owner_id: Uuid,
    viewer_id: Uuid,
    now: DateTime<Utc>,
) -> VisiblePick {
    let revealed = pick_revealed(game, owner_id, viewer_id, now);
    match pick {
        Some(p) if revealed => VisiblePick {
            user_id: owner_id,
            game_id: game.id,
            has_pick: true,
            is_visible: true,
            selected_team_id: Some(p.selected_team_id),
            is_correct: p.is_correct,
        },
        Some(_) => VisiblePick {
            user_id: owner_id,
            game_id: game.id,
            has_pick: true,
            is_visible: false,
            selected_team_id: None,
            is_correct: None,
        },
        None => VisiblePick {
            user_id: owner_id,
            game_id: game.id,
            has_pick: false,
            is_visible: revealed,
            selected_team_id: None,
            is_correct: None,
        },
    }
}
