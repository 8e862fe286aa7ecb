//! Sports-data provider payloads and their mapping onto schedule rows.
//!
//! The fetch itself is a thin wrapper; everything interesting (payload →
//! [`GameUpsert`]) is pure so it can be tested against canned JSON.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::db::game_repo::GameUpsert;
use crate::pickem::scoring::winner_of;

// ── scoreboard structures ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreboardResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub struct Event {
    pub id: String,
    /// Kickoff, RFC 3339 (the provider drops seconds: `2025-09-07T17:00Z`).
    pub date: String,
    pub week: WeekRef,
    pub season: SeasonRef,
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Deserialize)]
pub struct WeekRef {
    pub number: i32,
}

#[derive(Debug, Deserialize)]
pub struct SeasonRef {
    pub year: i32,
    /// 2 = regular season, 3 = playoffs.
    #[serde(rename = "type")]
    pub season_type: i32,
}

#[derive(Debug, Deserialize)]
pub struct Competition {
    pub competitors: Vec<Competitor>,
    pub status: Status,
    pub venue: Option<Venue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub home_away: String,
    pub team: TeamRef,
    /// Scores arrive as strings.
    pub score: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct Status {
    #[serde(rename = "type")]
    pub kind: StatusType,
}

#[derive(Debug, Deserialize)]
pub struct StatusType {
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct Venue {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
}

// ── mapping ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("event {0} has no competition block")]
    MissingCompetition(String),
    #[error("event {0} lacks a home or away competitor")]
    MissingCompetitor(String),
    #[error("unknown provider team id {0}")]
    UnknownTeam(String),
    #[error("unparseable kickoff '{0}'")]
    BadKickoff(String),
    #[error("completed event {0} is missing a score")]
    MissingScore(String),
}

fn parse_kickoff(raw: &str) -> Result<DateTime<Utc>, MapError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Minute-precision variant without seconds.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .map(|naive| naive.and_utc())
        .map_err(|_| MapError::BadKickoff(raw.to_string()))
}

fn parse_score(c: &Competitor, event_id: &str) -> Result<i32, MapError> {
    c.score
        .as_deref()
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(|| MapError::MissingScore(event_id.to_string()))
}

/// Maps one provider event onto an upsert row. `team_ids` translates the
/// provider's team references to our `teams.id`; the pick deadline is
/// derived as kickoff minus `deadline_offset`. Ties (equal final scores)
/// yield no winner.
pub fn map_event(
    event: &Event,
    team_ids: &HashMap<String, i32>,
    deadline_offset: Duration,
) -> Result<GameUpsert, MapError> {
    let comp = event
        .competitions
        .first()
        .ok_or_else(|| MapError::MissingCompetition(event.id.clone()))?;

    let home = comp
        .competitors
        .iter()
        .find(|c| c.home_away == "home")
        .ok_or_else(|| MapError::MissingCompetitor(event.id.clone()))?;
    let away = comp
        .competitors
        .iter()
        .find(|c| c.home_away == "away")
        .ok_or_else(|| MapError::MissingCompetitor(event.id.clone()))?;

    let home_team_id = *team_ids
        .get(&home.team.id)
        .ok_or_else(|| MapError::UnknownTeam(home.team.id.clone()))?;
    let away_team_id = *team_ids
        .get(&away.team.id)
        .ok_or_else(|| MapError::UnknownTeam(away.team.id.clone()))?;

    let game_time = parse_kickoff(&event.date)?;
    let is_completed = comp.status.kind.completed;

    let (home_score, away_score, winning_team_id) = if is_completed {
        let hs = parse_score(home, &event.id)?;
        let as_ = parse_score(away, &event.id)?;
        (
            Some(hs),
            Some(as_),
            winner_of(home_team_id, away_team_id, hs, as_),
        )
    } else {
        (None, None, None)
    };

    Ok(GameUpsert {
        external_game_id: event.id.clone(),
        home_team_id,
        away_team_id,
        game_time,
        pick_deadline: game_time - deadline_offset,
        week: event.week.number,
        season: event.season.year,
        is_playoffs: event.season.season_type == 3,
        is_completed,
        location: comp.venue.as_ref().and_then(|v| v.full_name.clone()),
        home_score,
        away_score,
        winning_team_id,
    })
}

// ── fetch ───────────────────────────────────────────────────────────────────

pub async fn fetch_scoreboard(
    client: &Client,
    base_url: &str,
    season: i32,
) -> Result<ScoreboardResponse> {
    let url = format!("{base_url}/scoreboard?dates={season}&limit=1000");
    client
        .get(&url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .context("fetching scoreboard")?
        .json::<ScoreboardResponse>()
        .await
        .context("decoding scoreboard")
}
