//! # Structured Logging Module
//!
//! Environment-aware structured logging for tracing hydration runs and
//! storage fetches across large entry batches.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(EnvFilter::new(log_level)),
        );

        // Use try_init to avoid panic if a global subscriber already exists
        // (e.g. when the host application configured its own).
        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("ENTRIES_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log structured data for a hydration run boundary
pub fn log_hydration_run(
    operation: &str,
    entry_count: usize,
    fieldtype_count: usize,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        entry_count = entry_count,
        fieldtype_count = fieldtype_count,
        status = %status,
        details = details,
        "HYDRATION_RUN"
    );
}

/// Log structured data for storage fetch operations
pub fn log_storage_operation(
    operation: &str,
    table: &str,
    row_count: Option<usize>,
    status: &str,
    details: Option<&str>,
) {
    tracing::debug!(
        operation = %operation,
        table = %table,
        row_count = row_count,
        status = %status,
        details = details,
        "STORAGE_OPERATION"
    );
}
