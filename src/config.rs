//! Runtime configuration for the pick'em server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Points awarded for a correct pick.
    pub points_per_correct: i32,
    /// Minutes before kickoff at which picks lock.
    pub pick_deadline_offset_mins: i64,
    /// Base URL of the external sports-data provider.
    pub provider_base_url: String,
}

impl Settings {
    fn from_env() -> Self {
        let points_per_correct = env::var("POINTS_PER_CORRECT")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(1);

        let pick_deadline_offset_mins = env::var("PICK_DEADLINE_OFFSET_MINS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(5);

        let provider_base_url = env::var("PROVIDER_BASE_URL").unwrap_or_else(|_| {
            "https://site.api.espn.com/apis/site/v2/sports/football/nfl".into()
        });

        Settings {
            points_per_correct,
            pick_deadline_offset_mins,
            provider_base_url,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
