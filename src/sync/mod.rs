//! Season schedule/result sync against the external provider.

pub mod provider;

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::Duration;
use serde::Serialize;
use sqlx::PgPool;

use crate::config::settings;
use crate::db::game_repo;
use crate::pickem::scoring::ScoringRule;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub games_synced: usize,
    pub games_completed: usize,
    pub events_skipped: usize,
}

/// Pull the season scoreboard and upsert every event. Events that cannot
/// be mapped (unknown team, malformed kickoff) are logged and skipped so
/// one bad row does not abort the whole sync.
pub async fn sync_season(db: &PgPool, season: i32) -> Result<SyncSummary> {
    let client = reqwest::Client::new();
    let board =
        provider::fetch_scoreboard(&client, &settings().provider_base_url, season).await?;

    let team_ids: HashMap<String, i32> =
        sqlx::query_as::<_, (String, i32)>("SELECT external_team_id, id FROM teams")
            .fetch_all(db)
            .await
            .context("loading team id map")?
            .into_iter()
            .collect();

    let rule = ScoringRule::from_settings();
    let offset = Duration::minutes(settings().pick_deadline_offset_mins);

    let mut summary = SyncSummary::default();
    for event in &board.events {
        match provider::map_event(event, &team_ids, offset) {
            Ok(up) => {
                let outcome = game_repo::upsert_and_score(db, &up, &rule).await?;
                summary.games_synced += 1;
                if outcome.newly_completed {
                    summary.games_completed += 1;
                }
            }
            Err(e) => {
                log::warn!("skipping event {}: {e}", event.id);
                summary.events_skipped += 1;
            }
        }
    }

    log::info!(
        "season {season} sync: {} upserted, {} newly completed, {} skipped",
        summary.games_synced,
        summary.games_completed,
        summary.events_skipped
    );
    Ok(summary)
}
