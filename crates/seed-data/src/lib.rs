//! Mock data seeding for LeoConnect.
//!
//! Populates a Firestore project (or the emulator, or an in-memory store) with
//! the demo data set: four users, the six districts of Multiple District 306,
//! twelve Leo clubs, five posts with likes, and a few comments per post.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let store = connect_store(&config)?;
//! let summary = Seeder::new(store)
//!     .with_missing_reference(config.missing_reference)
//!     .run(&mut rand::thread_rng())
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod generators;
pub mod models;
pub mod references;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{MissingReferencePolicy, SeedConfig};
    pub use crate::db::{Phase, SeedError, SeedSummary, Seeder, connect_store};
    pub use crate::fixtures::{CLUBS, DISTRICTS, POSTS, USERS};
    pub use crate::generators::{
        ClubGenerator, CounterGenerator, PostGenerator, SocialGenerator, UserGenerator,
    };
    pub use crate::models::collections;
    pub use docstore::{DocumentStore, MemoryStore};
}
