//! Encybara Admin - a terminal admin console for the Encybara
//! English-learning platform.
//!
//! This library exposes modules for use in integration tests and benchmarks.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
