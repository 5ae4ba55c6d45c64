pub mod app;
pub mod calendar;
pub mod components;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod screens;
pub mod selection;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_fixtures;
