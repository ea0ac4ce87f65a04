//! # habitual-core
//!
//! Core library for Habitual - a personal habit tracker.
//!
//! This library provides:
//! - Domain types for habits, daily logs, and activity entries
//! - A single-writer in-memory store with a pluggable persistence boundary
//! - Pure statistics functions: date windows, streaks, period completion
//!   rates, and chart re-bucketing
//! - Data preparation for an external insights service
//!
//! ## Architecture
//!
//! The host application owns presentation and durable storage. It loads a
//! [`Snapshot`] through a [`Repository`], mutates state via [`HabitStore`],
//! and hands read-only slices of that state to the functions in [`stats`] and
//! [`insights`]. Every function takes its reference date explicitly, so the
//! whole crate is deterministic under test.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use habitual_core::stats::calendar::Period;
//! use habitual_core::stats::period::calculate_period_stats;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
//! let window = Period::Week.window(today);
//! let stats = calculate_period_stats(&[], &[], &window, Period::Week.label(), None);
//! assert_eq!(stats.overall_completion_rate, 0.0);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::habit::{CreateHabitRequest, Habit, UpdateHabitRequest};
pub use models::log::{ActivityEntry, HabitLog};
pub use store::{HabitStore, MemoryRepository, Repository, Snapshot};

// Public modules
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod stats;
pub mod store;
