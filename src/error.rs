//! # Hydration Error Types
//!
//! Structured error handling for the hydration pipeline using thiserror
//! for typed errors instead of `Box<dyn Error>` patterns.
//!
//! Per-value decode anomalies (malformed epoch strings, unresolvable file
//! references) are *not* errors: they degrade to the fieldtype's empty value
//! so that one bad value never fails a whole batch. The variants below cover
//! the failures that do abort a hydration run.

use thiserror::Error;

/// Errors surfaced by catalog lookups, storage fetches and the hydration
/// driver.
#[derive(Error, Debug)]
pub enum HydrationError {
    #[error("Field not found: {name}")]
    FieldNotFound { name: String },

    #[error("Channel not found: {channel_id}")]
    ChannelNotFound { channel_id: i64 },

    #[error("hydrate() called before preload() for fieldtype {fieldtype}")]
    MissingPreload { fieldtype: String },

    #[error("Storage error on table {table}: {message}")]
    Storage { table: String, message: String },

    #[error("Unknown storage table: {table}")]
    UnknownTable { table: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl HydrationError {
    /// Create a field-not-found error
    pub fn field_not_found(name: impl Into<String>) -> Self {
        Self::FieldNotFound { name: name.into() }
    }

    /// Create a channel-not-found error
    pub fn channel_not_found(channel_id: i64) -> Self {
        Self::ChannelNotFound { channel_id }
    }

    /// Create a missing-preload protocol error
    pub fn missing_preload(fieldtype: impl Into<String>) -> Self {
        Self::MissingPreload {
            fieldtype: fieldtype.into(),
        }
    }

    /// Create a storage error for the given table
    pub fn storage(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create an unknown-table error
    pub fn unknown_table(table: impl Into<String>) -> Self {
        Self::UnknownTable {
            table: table.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HydrationError>;
