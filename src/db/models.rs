use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Team {
    pub id: i32,
    pub external_team_id: String,
    pub name: String,
    pub city: String,
    pub abbreviation: String,
    pub conference: String,
    pub division: String,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub tertiary_color: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Game {
    pub id: i64,
    pub external_game_id: String,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub game_time: DateTime<Utc>,
    pub pick_deadline: DateTime<Utc>,
    pub week: i32,
    pub season: i32,
    pub is_playoffs: bool,
    pub is_completed: bool,
    pub location: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub winning_team_id: Option<i32>,
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub display_name: String,
    pub role: String,
    pub league_id: Option<i64>,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub admin_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Pick {
    pub id: i64,
    pub user_id: Uuid,
    pub game_id: i64,
    pub selected_team_id: i32,
    pub submitted_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub is_correct: Option<bool>,
    pub points: i32,
}
