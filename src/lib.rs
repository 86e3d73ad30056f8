pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod notifier;
pub mod routes;
pub mod services;
pub mod smtp;
pub mod telemetry;
pub mod validation;

pub use app::{build_router, AppState};
