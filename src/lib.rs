pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod metrics;
pub mod pickem;
pub mod sync;
