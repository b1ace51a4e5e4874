//! # Calmly Core Library
//!
//! This library provides the client-side logic for the Calmly mood and
//! journal tracker. The REST backend owns validation, persistence and the
//! record of truth; this crate fetches from it, composes the results and
//! derives the wellness statistics shown by the `calmly` CLI.
//!
//! ## Architecture
//!
//! - **Statistics Engine**: pure functions over mood entries (average, day
//!   streak, short-term trend, wellness level)
//! - **Data Sync**: fetch-and-gather pipelines that flatten per-mood journals
//!   and build dashboard/profile snapshots
//! - **API**: the backend contract as a trait plus its reqwest implementation
//! - **Storage**: TOML configuration and the persisted login session
//!
//! ## Key Components
//!
//! - [`WellnessApi`]: Trait for the mood/journal REST endpoints
//! - [`ApiClient`]: HTTP implementation of [`WellnessApi`]
//! - [`DataSync`]: Sync layer over any [`WellnessApi`]
//! - [`Config`]: Application configuration management

pub mod api;
pub mod error;
pub mod model;
pub mod stats;
pub mod storage;
pub mod sync;

pub use api::{ApiClient, Credential, Session, WellnessApi};
pub use error::{ApiError, ConfigError, CoreError, ValidationError};
pub use model::{
    JournalEntry, JournalId, JournalUpdate, JournalWithMood, MoodEntry, MoodId, MoodUpdate,
    NewJournal, NewMood, NewUser, User, UserId, UserUpdate,
};
pub use stats::{WellnessLevel, WellnessStats};
pub use storage::{Config, SessionStore};
pub use sync::{DashboardSnapshot, DataSync, FanOut, JournalFilter, ProfileSnapshot};
