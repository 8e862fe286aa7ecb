pub mod auth;
pub mod games;
pub mod health;
pub mod leagues;
pub mod picks;
pub mod routes;
pub mod teams;
pub mod users;
