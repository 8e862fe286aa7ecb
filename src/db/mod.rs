pub mod game_repo;
pub mod league_repo;
pub mod models;
pub mod pick_repo;
pub mod team_repo;
pub mod user_repo;
