//! Seeds the LeoConnect demo data into Firestore.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Expects `service-account.json` in the working directory unless
//! `SEED_CREDENTIALS`, `FIRESTORE_EMULATOR_HOST`, or `SEED_DRY_RUN` says otherwise.

use docstore::StoreError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seed_data::config::SeedConfig;
use seed_data::db::{SeedError, Seeder, connect_store};
use tracing_subscriber::EnvFilter;

const CREDENTIALS_HINT: &str =
    "Make sure you have placed 'service-account.json' in this directory.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The error itself is printed once, by anyhow, when `main` returns it.
    let result = seed().await;
    if let Err(err) = &result
        && let Some(hint) = credentials_hint(err)
    {
        tracing::error!("{hint}");
    }

    result
}

async fn seed() -> anyhow::Result<()> {
    let config = SeedConfig::from_env()?;
    let store = connect_store(&config)?;

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = Seeder::new(store)
        .with_missing_reference(config.missing_reference)
        .run(&mut rng)
        .await?;

    // Summary output
    tracing::info!("Database seeding completed successfully!");
    tracing::info!("  Users: {}", summary.users);
    tracing::info!("  Districts: {}", summary.districts);
    tracing::info!("  Clubs: {}", summary.clubs);
    tracing::info!("  Posts: {}", summary.posts);
    tracing::info!("  Likes: {}", summary.likes);
    tracing::info!("  Comments: {}", summary.comments);

    Ok(())
}

/// The hint to print alongside `err`, if it came from unusable credentials.
fn credentials_hint(err: &anyhow::Error) -> Option<&'static str> {
    let is_credentials = match err.downcast_ref::<SeedError>() {
        Some(err) => err.is_credentials(),
        None => err
            .downcast_ref::<StoreError>()
            .is_some_and(StoreError::is_credentials),
    };
    is_credentials.then_some(CREDENTIALS_HINT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_data::db::Phase;
    use seed_data::references::ReferenceKind;

    #[test]
    fn test_hint_for_missing_key_file() {
        let err = anyhow::Error::from(StoreError::Credentials {
            path: "service-account.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(credentials_hint(&err), Some(CREDENTIALS_HINT));
    }

    #[test]
    fn test_hint_for_rejected_token_during_seeding() {
        let err = anyhow::Error::from(SeedError::Store {
            phase: Phase::Users,
            source: StoreError::CredentialFormat("client_email is empty".to_string()),
        });
        assert_eq!(credentials_hint(&err), Some(CREDENTIALS_HINT));
    }

    #[test]
    fn test_no_hint_for_other_failures() {
        let err = anyhow::Error::from(SeedError::MissingReference {
            kind: ReferenceKind::User,
            id: "user-5".to_string(),
            referenced_by: "post-5".to_string(),
        });
        assert_eq!(credentials_hint(&err), None);

        let err = anyhow::Error::from(StoreError::Url("not a url".to_string()));
        assert_eq!(credentials_hint(&err), None);
    }
}
