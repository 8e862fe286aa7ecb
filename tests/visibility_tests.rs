//! League visibility: selections stay hidden until the deadline.

use chrono::{DateTime, Duration, Utc};
use pickem_server::db::models::{Game, Pick};
use pickem_server::pickem::visibility::{pick_revealed, visible_pick};
use uuid::Uuid;

const HOME: i32 = 7;
const AWAY: i32 = 12;

fn game_with_deadline(deadline: DateTime<Utc>) -> Game {
    Game {
        id: 1,
        external_game_id: "401".into(),
        home_team_id: HOME,
        away_team_id: AWAY,
        game_time: deadline + Duration::minutes(5),
        pick_deadline: deadline,
        week: 1,
        season: 2025,
        is_playoffs: false,
        is_completed: false,
        location: None,
        home_score: None,
        away_score: None,
        winning_team_id: None,
    }
}

fn pick_for(user_id: Uuid, game_id: i64, team: i32) -> Pick {
    Pick {
        id: 1,
        user_id,
        game_id,
        selected_team_id: team,
        submitted_at: Utc::now(),
        notes: None,
        is_correct: None,
        points: 0,
    }
}

#[test]
fn hidden_before_deadline_for_other_members() {
    let now = Utc::now();
    let game = game_with_deadline(now + Duration::hours(1));
    let owner = Uuid::new_v4();
    let viewer = Uuid::new_v4();
    let pick = pick_for(owner, game.id, HOME);

    let vp = visible_pick(Some(&pick), &game, owner, viewer, now);
    assert!(vp.has_pick);
    assert!(!vp.is_visible);
    assert_eq!(vp.selected_team_id, None);
    assert_eq!(vp.is_correct, None);
}

#[test]
fn revealed_after_deadline() {
    let now = Utc::now();
    let game = game_with_deadline(now - Duration::minutes(1));
    let owner = Uuid::new_v4();
    let viewer = Uuid::new_v4();
    let pick = pick_for(owner, game.id, HOME);

    let vp = visible_pick(Some(&pick), &game, owner, viewer, now);
    assert!(vp.has_pick);
    assert!(vp.is_visible);
    assert_eq!(vp.selected_team_id, Some(HOME));
}

#[test]
fn owner_always_sees_own_pick() {
    let now = Utc::now();
    let game = game_with_deadline(now + Duration::hours(1));
    let owner = Uuid::new_v4();
    let pick = pick_for(owner, game.id, AWAY);

    assert!(pick_revealed(&game, owner, owner, now));
    let vp = visible_pick(Some(&pick), &game, owner, owner, now);
    assert_eq!(vp.selected_team_id, Some(AWAY));
}

#[test]
fn completed_game_is_always_revealed() {
    let now = Utc::now();
    // Deadline nominally in the future but the game already finished.
    let mut game = game_with_deadline(now + Duration::hours(1));
    game.is_completed = true;

    let owner = Uuid::new_v4();
    let viewer = Uuid::new_v4();
    let mut pick = pick_for(owner, game.id, HOME);
    pick.is_correct = Some(true);
    pick.points = 1;

    let vp = visible_pick(Some(&pick), &game, owner, viewer, now);
    assert!(vp.is_visible);
    assert_eq!(vp.selected_team_id, Some(HOME));
    assert_eq!(vp.is_correct, Some(true));
}

#[test]
fn missing_pick_reports_has_pick_false() {
    let now = Utc::now();
    let game = game_with_deadline(now + Duration::hours(1));
    let owner = Uuid::new_v4();
    let viewer = Uuid::new_v4();

    let vp = visible_pick(None, &game, owner, viewer, now);
    assert!(!vp.has_pick);
    assert_eq!(vp.selected_team_id, None);
}
