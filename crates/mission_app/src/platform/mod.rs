mod app;
mod config;
mod effects;
mod input;
mod logging;
pub mod ui;

pub use app::run_app;
