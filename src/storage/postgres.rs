//! Postgres [`RowFetcher`] over the legacy table layout.
//!
//! Grid tables are named per field (`channel_grid_field_{id}`), so queries
//! are built at runtime with a validated table allowlist rather than
//! compile-time checked macros. Ordering is explicit: positional row
//! identity depends on it.

use crate::config::EntriesConfig;
use crate::constants::tables;
use crate::error::{HydrationError, Result};
use crate::logging::log_storage_operation;
use crate::storage::{RawRow, RowFetcher, RowFilter};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{Column, PgPool, Postgres, QueryBuilder, Row as SqlxRow, TypeInfo};

#[derive(Debug, Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a new pool from configuration
    pub async fn connect(config: &EntriesConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                HydrationError::configuration(format!("Failed to connect database pool: {e}"))
            })?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Explicit sort for each known table; doubles as the table allowlist.
fn order_clause(table: &str) -> Option<&'static str> {
    match table {
        tables::CHANNEL_TITLES | tables::CHANNEL_DATA => Some("entry_id ASC"),
        tables::MATRIX_DATA => Some("entry_id ASC, field_id ASC, row_order ASC"),
        tables::MATRIX_COLS | tables::GRID_COLS => Some("field_id ASC, col_order ASC"),
        t if is_grid_data_table(t) => Some("entry_id ASC, row_order ASC"),
        _ => None,
    }
}

fn is_grid_data_table(table: &str) -> bool {
    table
        .strip_prefix(tables::GRID_DATA_PREFIX)
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
}

fn raw_row_from_pg(row: &PgRow) -> RawRow {
    let mut raw = RawRow::new();
    for column in row.columns() {
        let name = column.name();
        let value = match column.type_info().name() {
            "INT2" => row
                .try_get::<Option<i16>, _>(name)
                .ok()
                .flatten()
                .map(|v| Value::from(i64::from(v))),
            "INT4" => row
                .try_get::<Option<i32>, _>(name)
                .ok()
                .flatten()
                .map(|v| Value::from(i64::from(v))),
            "INT8" => row
                .try_get::<Option<i64>, _>(name)
                .ok()
                .flatten()
                .map(Value::from),
            "FLOAT4" => row
                .try_get::<Option<f32>, _>(name)
                .ok()
                .flatten()
                .map(|v| Value::from(f64::from(v))),
            "FLOAT8" => row
                .try_get::<Option<f64>, _>(name)
                .ok()
                .flatten()
                .map(Value::from),
            "BOOL" => row
                .try_get::<Option<bool>, _>(name)
                .ok()
                .flatten()
                .map(Value::from),
            _ => row
                .try_get::<Option<String>, _>(name)
                .ok()
                .flatten()
                .map(Value::from),
        };
        raw.insert(name, value.unwrap_or(Value::Null));
    }
    raw
}

#[async_trait]
impl RowFetcher for PostgresStorage {
    async fn fetch_rows(&self, table: &str, filter: &RowFilter) -> Result<Vec<RawRow>> {
        let order = order_clause(table).ok_or_else(|| HydrationError::unknown_table(table))?;

        let mut query = QueryBuilder::<Postgres>::new(format!("SELECT * FROM {table}"));
        let mut has_where = false;

        if !filter.entry_ids.is_empty() {
            query.push(" WHERE entry_id = ANY(");
            query.push_bind(filter.entry_ids.clone());
            query.push(")");
            has_where = true;
        }
        if !filter.field_ids.is_empty() {
            query.push(if has_where { " AND " } else { " WHERE " });
            query.push("field_id = ANY(");
            query.push_bind(filter.field_ids.clone());
            query.push(")");
        }
        query.push(format!(" ORDER BY {order}"));

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| HydrationError::storage(table, e.to_string()))?;

        let raw_rows: Vec<RawRow> = rows.iter().map(raw_row_from_pg).collect();
        log_storage_operation("fetch_rows", table, Some(raw_rows.len()), "ok", None);

        Ok(raw_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_clause_allowlist() {
        assert!(order_clause("matrix_data").is_some());
        assert!(order_clause("channel_grid_field_12").is_some());
        assert!(order_clause("channel_grid_field_").is_none());
        assert!(order_clause("channel_grid_field_12x").is_none());
        assert!(order_clause("users; DROP TABLE users").is_none());
    }

    #[test]
    fn test_grid_table_detection() {
        assert!(is_grid_data_table("channel_grid_field_7"));
        assert!(!is_grid_data_table("matrix_data"));
    }
}
