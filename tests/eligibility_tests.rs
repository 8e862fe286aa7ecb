//! Pick eligibility: deadline enforcement and participant checks.

use chrono::{DateTime, Duration, Utc};
use pickem_server::db::models::Game;
use pickem_server::pickem::eligibility::{validate_pick, PickRejection};

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

#[test]
fn accepts_before_deadline() {
    let deadline = Utc::now() + Duration::hours(1);
    let game = game_with_deadline(deadline);
    assert_eq!(validate_pick(&game, HOME, Utc::now()), Ok(()));
    assert_eq!(validate_pick(&game, AWAY, Utc::now()), Ok(()));
}

#[test]
fn accepts_one_second_before_deadline() {
    let deadline = Utc::now();
    let game = game_with_deadline(deadline);
    let just_in_time = deadline - Duration::seconds(1);
    assert_eq!(validate_pick(&game, HOME, just_in_time), Ok(()));
}

#[test]
fn rejects_at_and_after_deadline() {
    let deadline = Utc::now();
    let game = game_with_deadline(deadline);

    let expected = Err(PickRejection::DeadlinePassed { deadline });
    assert_eq!(validate_pick(&game, HOME, deadline), expected);
    assert_eq!(
        validate_pick(&game, HOME, deadline + Duration::seconds(1)),
        expected
    );
}

#[test]
fn rejects_team_not_in_game() {
    let game = game_with_deadline(Utc::now() + Duration::hours(1));
    assert_eq!(
        validate_pick(&game, 99, Utc::now()),
        Err(PickRejection::TeamNotInGame {
            selected_team_id: 99
        })
    );
}

#[test]
fn deadline_check_runs_before_participant_check() {
    // A late pick for a bogus team reports the deadline, not validation.
    let deadline = Utc::now() - Duration::minutes(1);
    let game = game_with_deadline(deadline);
    assert_eq!(
        validate_pick(&game, 99, Utc::now()),
        Err(PickRejection::DeadlinePassed { deadline })
    );
}
