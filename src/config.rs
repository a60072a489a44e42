//! Runtime configuration for storage collaborators, loaded from the
//! environment with sensible development defaults.

use crate::error::{HydrationError, Result};

#[derive(Debug, Clone)]
pub struct EntriesConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Upper bound on the number of entry IDs accepted per hydration run.
    pub max_batch_size: usize,
}

impl Default for EntriesConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/entries_development".to_string(),
            max_connections: 10,
            max_batch_size: 500,
        }
    }
}

impl EntriesConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(max_connections) = std::env::var("ENTRIES_MAX_CONNECTIONS") {
            config.max_connections = max_connections.parse().map_err(|e| {
                HydrationError::configuration(format!("Invalid max_connections: {e}"))
            })?;
        }

        if let Ok(batch_size) = std::env::var("ENTRIES_MAX_BATCH_SIZE") {
            config.max_batch_size = batch_size.parse().map_err(|e| {
                HydrationError::configuration(format!("Invalid max_batch_size: {e}"))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EntriesConfig::default();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.max_batch_size, 500);
    }

    #[test]
    fn test_invalid_env_value_is_a_configuration_error() {
        std::env::set_var("ENTRIES_MAX_BATCH_SIZE", "not-a-number");
        let result = EntriesConfig::from_env();
        std::env::remove_var("ENTRIES_MAX_BATCH_SIZE");
        assert!(matches!(
            result,
            Err(HydrationError::Configuration { .. })
        ));
    }
}
