//! Provider payload decoding and event → game mapping.

use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};
use pickem_server::sync::provider::{map_event, MapError, ScoreboardResponse};

fn team_ids() -> HashMap<String, i32> {
    [("12".to_string(), 7), ("33".to_string(), 9)]
        .into_iter()
        .collect()
}

fn scoreboard(json: &str) -> ScoreboardResponse {
    serde_json::from_str(json).expect("scoreboard json")
}

const COMPLETED_EVENT: &str = r#"{
  "events": [{
    "id": "401547401",
    "date": "2025-09-07T17:00Z",
    "week": { "number": 1 },
    "season": { "year": 2025, "type": 2 },
    "competitions": [{
      "competitors": [
        { "homeAway": "home", "team": { "id": "12" }, "score": "27" },
        { "homeAway": "away", "team": { "id": "33" }, "score": "20" }
      ],
      "status": { "type": { "completed": true } },
      "venue": { "fullName": "Arrowhead Stadium" }
    }]
  }]
}"#;

#[test]
fn completed_event_maps_scores_and_winner() {
    let board = scoreboard(COMPLETED_EVENT);
    let up = map_event(&board.events[0], &team_ids(), Duration::minutes(5)).unwrap();

    assert_eq!(up.external_game_id, "401547401");
    assert_eq!(up.home_team_id, 7);
    assert_eq!(up.away_team_id, 9);
    assert_eq!(up.week, 1);
    assert_eq!(up.season, 2025);
    assert!(!up.is_playoffs);
    assert!(up.is_completed);
    assert_eq!(up.home_score, Some(27));
    assert_eq!(up.away_score, Some(20));
    assert_eq!(up.winning_team_id, Some(7));
    assert_eq!(up.location.as_deref(), Some("Arrowhead Stadium"));

    let kickoff = Utc.with_ymd_and_hms(2025, 9, 7, 17, 0, 0).unwrap();
    assert_eq!(up.game_time, kickoff);
    assert_eq!(up.pick_deadline, kickoff - Duration::minutes(5));
}

#[test]
fn scheduled_event_has_no_scores_or_winner() {
    let json = r#"{
      "events": [{
        "id": "401547500",
        "date": "2026-01-11T18:00:00Z",
        "week": { "number": 19 },
        "season": { "year": 2025, "type": 3 },
        "competitions": [{
          "competitors": [
            { "homeAway": "home", "team": { "id": "12" } },
            { "homeAway": "away", "team": { "id": "33" } }
          ],
          "status": { "type": { "completed": false } }
        }]
      }]
    }"#;
    let board = scoreboard(json);
    let up = map_event(&board.events[0], &team_ids(), Duration::minutes(5)).unwrap();

    assert!(!up.is_completed);
    assert!(up.is_playoffs);
    assert_eq!(up.home_score, None);
    assert_eq!(up.away_score, None);
    assert_eq!(up.winning_team_id, None);
    assert_eq!(up.location, None);
}

#[test]
fn tied_final_score_yields_no_winner() {
    let json = COMPLETED_EVENT.replace(r#""score": "27""#, r#""score": "20""#);
    let board = scoreboard(&json);
    let up = map_event(&board.events[0], &team_ids(), Duration::minutes(5)).unwrap();

    assert!(up.is_completed);
    assert_eq!(up.home_score, Some(20));
    assert_eq!(up.away_score, Some(20));
    assert_eq!(up.winning_team_id, None);
}

#[test]
fn unknown_provider_team_is_an_error() {
    let board = scoreboard(COMPLETED_EVENT);
    let mut ids = team_ids();
    ids.remove("33");

    let err = map_event(&board.events[0], &ids, Duration::minutes(5)).unwrap_err();
    assert_eq!(err, MapError::UnknownTeam("33".to_string()));
}

#[test]
fn unparseable_kickoff_is_an_error() {
    let json = COMPLETED_EVENT.replace("2025-09-07T17:00Z", "yesterday-ish");
    let board = scoreboard(&json);

    let err = map_event(&board.events[0], &team_ids(), Duration::minutes(5)).unwrap_err();
    assert_eq!(err, MapError::BadKickoff("yesterday-ish".to_string()));
}
