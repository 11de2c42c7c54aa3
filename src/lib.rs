pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod models;
pub mod runner;
pub mod ui;
