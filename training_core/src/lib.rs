#![forbid(unsafe_code)]

//! Core domain model and business logic for the fitreps training scheduler.
//!
//! This crate provides:
//! - Domain types (catalog, programs, schedule entries, workouts)
//! - The built-in catalog and focus rotation
//! - Schedule generation
//! - Program lifecycle and today's-workout resolution
//! - Persistence (store trait, JSON file store, CSV export)

pub mod types;
pub mod error;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod rotation;
pub mod schedule;
pub mod store;
pub mod file_store;
pub mod program;
pub mod today;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use rotation::resolve_exercises;
pub use schedule::ProgramPlan;
pub use store::{Database, TrainingStore};
pub use file_store::JsonFileStore;
pub use program::{AbortReport, ProgramManager};
pub use today::{resolve_today, MaterializeReport, TodayAction, TodayOutcome, TodayResolver};
pub use export::write_schedule_csv;
