pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod errors;
pub mod models;
pub mod store;
pub mod utils;
