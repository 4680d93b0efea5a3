//! Store integration for seeding.
//!
//! The [`Seeder`] writes the demo data through any [`DocumentStore`];
//! [`connect_store`] picks the store a [`SeedConfig`] asks for.

mod seeder;

use std::sync::Arc;

use docstore::{DocumentStore, FirestoreClient, MemoryStore, ServiceAccountKey, StoreError};
use tracing::info;

use crate::config::{DEFAULT_EMULATOR_PROJECT, SeedConfig};

pub use seeder::{Phase, SeedError, SeedSummary, SeededPost, Seeder};

/// Builds the store for a run: in-memory for dry runs, the emulator when a
/// host is configured, otherwise Firestore with the service-account key.
pub fn connect_store(config: &SeedConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    if config.dry_run {
        info!("Dry run: writing to an in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    if let Some(host) = &config.emulator_host {
        let project = config
            .project_id
            .as_deref()
            .unwrap_or(DEFAULT_EMULATOR_PROJECT);
        info!("Using Firestore emulator at {host} (project {project})");
        return Ok(Arc::new(FirestoreClient::emulator(host, project)?));
    }

    let key = ServiceAccountKey::from_file(&config.credentials_path)?;
    let client = FirestoreClient::new(key, config.project_id.as_deref())?;
    info!("Connected to Firestore at {}", client.base_url());
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_needs_no_credentials() {
        let config = SeedConfig {
            credentials_path: "/nonexistent/service-account.json".into(),
            dry_run: true,
            ..SeedConfig::default()
        };
        assert!(connect_store(&config).is_ok());
    }

    #[test]
    fn test_emulator_needs_no_credentials() {
        let config = SeedConfig {
            credentials_path: "/nonexistent/service-account.json".into(),
            emulator_host: Some("localhost:8080".to_string()),
            ..SeedConfig::default()
        };
        assert!(connect_store(&config).is_ok());
    }

    #[test]
    fn test_missing_credentials_file() {
        let config = SeedConfig {
            credentials_path: "/nonexistent/service-account.json".into(),
            ..SeedConfig::default()
        };
        let err = connect_store(&config).err().unwrap();
        assert!(err.is_credentials());
        assert!(matches!(err, StoreError::Credentials { .. }));
    }
}
