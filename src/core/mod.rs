pub mod app;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod types;
