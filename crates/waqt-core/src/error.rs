//! Core error types for waqt-core.
//!
//! This module defines the error hierarchy using thiserror; each layer of
//! the library has its own enum, with [`CoreError`] as the umbrella type.

use std::path::PathBuf;
use thiserror::Error;

use crate::clock::WallClock;
use crate::interval::TimeRange;

/// Core error type for waqt-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Clock parsing and range errors
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    /// Prayer timetable errors
    #[error("Prayer times error: {0}")]
    PrayerTimes(#[from] PrayerTimesError),

    /// Scheduling errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Wall-clock parsing and construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Text was not a valid "HH:MM" clock time
    #[error("Cannot parse '{input}' as a clock time (expected HH:MM)")]
    Parse { input: String },

    /// Minute value outside a single day
    #[error("Minute value {minutes} is outside the day (expected 0..1440)")]
    OutOfRange { minutes: i64 },
}

/// Prayer timetable errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrayerTimesError {
    /// Fewer than the six required boundaries
    #[error("Incomplete prayer timetable: got {found} of 6 boundaries")]
    Incomplete { found: usize },

    /// The same prayer appears more than once
    #[error("Duplicate boundary for {name}")]
    Duplicate { name: String },

    /// Upstream response is missing a named timing
    #[error("Upstream timings missing entry for {name}")]
    MissingTiming { name: String },
}

/// Scheduling errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A block's end must be strictly after its start
    #[error("Invalid time range: start ({start}) is not before end ({end})")]
    EmptyRange { start: WallClock, end: WallClock },

    /// The requested interval overlaps an existing block
    #[error("Time slot already occupied by block {block_id} ({occupied})")]
    Conflict {
        block_id: String,
        occupied: TimeRange,
    },

    /// No stored block with this id
    #[error("No block with id {id}")]
    UnknownBlock { id: String },
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// No configuration key with this name
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// Helper implementations for converting from other error types

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
