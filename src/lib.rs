//! Weather-based irrigation advisory engine.
//!
//! The core is [`logic::calculate_irrigation`], a pure function that
//! turns weather, crop, soil, and field inputs into an irrigation
//! recommendation. Everything else (config, weather file parsing,
//! report rendering, CLI) is a thin collaborator around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;
