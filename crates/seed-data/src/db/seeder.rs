//! Write phases for the LeoConnect demo data.

use std::fmt;
use std::sync::Arc;

use docstore::{DocumentStore, StoreError, to_fields};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::config::MissingReferencePolicy;
use crate::fixtures::{CLUBS, ClubDef, DISTRICTS, POSTS, PostDef, USERS, UserDef};
use crate::generators::{
    ClubGenerator, CounterConfig, CounterGenerator, GeneratedComment, PostGenerator,
    SocialGenConfig, SocialGenerator, UserGenerator,
};
use crate::models::collections;
use crate::references::{ReferenceKind, ReferenceResolver};

/// The write phases, in the order [`Seeder::run`] executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Users,
    Districts,
    Clubs,
    Posts,
    Comments,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Users => "users",
            Phase::Districts => "districts",
            Phase::Clubs => "clubs",
            Phase::Posts => "posts",
            Phase::Comments => "comments",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to write {phase}: {source}")]
    Store {
        phase: Phase,
        #[source]
        source: StoreError,
    },

    #[error("Post {referenced_by} references unknown {kind} {id:?}")]
    MissingReference {
        kind: ReferenceKind,
        id: String,
        referenced_by: String,
    },

    #[error("Failed to encode {collection}/{id}: {source}")]
    Encode {
        collection: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SeedError {
    /// Returns true if the run failed because the store credentials are unusable.
    pub fn is_credentials(&self) -> bool {
        matches!(self, SeedError::Store { source, .. } if source.is_credentials())
    }
}

/// Number of documents written by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub districts: usize,
    pub clubs: usize,
    pub posts: usize,
    pub likes: usize,
    pub comments: usize,
}

/// A post as written, with the creation time later reactions are placed after.
#[derive(Debug, Clone)]
pub struct SeededPost {
    pub def: PostDef,
    pub created_at: OffsetDateTime,
    /// Like writes issued for the post; duplicate likers count once per write.
    pub likes: usize,
}

/// Writes the demo data set through a [`DocumentStore`].
///
/// Every document is keyed by a fixed id and fully replaced on write, so
/// re-running overwrites the same keyspace. Comment ids are random and
/// accumulate across runs.
pub struct Seeder {
    store: Arc<dyn DocumentStore>,
    policy: MissingReferencePolicy,
    counters: CounterGenerator,
    social: SocialGenConfig,
    base_time: OffsetDateTime,
}

impl Seeder {
    /// Creates a seeder writing to `store`, with posts backdated from the current time.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            policy: MissingReferencePolicy::default(),
            counters: CounterGenerator::default(),
            social: SocialGenConfig::default(),
            base_time: OffsetDateTime::now_utc(),
        }
    }

    pub fn with_missing_reference(mut self, policy: MissingReferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_counter_config(mut self, config: CounterConfig) -> Self {
        self.counters = CounterGenerator::with_config(config);
        self
    }

    pub fn with_social_config(mut self, config: SocialGenConfig) -> Self {
        self.social = config;
        self
    }

    /// Sets the reference time posts are backdated from.
    pub fn with_base_time(mut self, base_time: OffsetDateTime) -> Self {
        self.base_time = base_time;
        self
    }

    /// Runs every phase in order: users, districts, clubs, posts with likes, comments.
    pub async fn run(&self, rng: &mut impl Rng) -> Result<SeedSummary, SeedError> {
        info!("Starting database seed...");

        let users = self.write_users(rng).await?;
        let districts = self.write_districts(rng).await?;
        let clubs = self.write_clubs(rng).await?;
        let posts = self.write_posts(&users, &clubs, rng).await?;
        let comments = self.write_comments(&users, &posts, rng).await?;

        Ok(SeedSummary {
            users: users.len(),
            districts,
            clubs: clubs.len(),
            posts: posts.len(),
            likes: posts.iter().map(|p| p.likes).sum(),
            comments: comments.len(),
        })
    }

    /// Upserts the fixture users and returns their definitions.
    pub async fn write_users(&self, rng: &mut impl Rng) -> Result<Vec<UserDef>, SeedError> {
        info!("Seeding {} users...", USERS.len());
        let user_gen = UserGenerator::new(self.counters.clone());

        for user in USERS {
            let doc = user_gen.generate(user, rng);
            self.upsert(Phase::Users, collections::USERS, user.uid, &doc)
                .await?;
            info!("Created/Updated user: {}", user.name);
        }

        Ok(USERS.to_vec())
    }

    /// Upserts one document per district, keyed by the district name.
    pub async fn write_districts(&self, rng: &mut impl Rng) -> Result<usize, SeedError> {
        info!("Seeding {} districts...", DISTRICTS.len());
        let club_gen = ClubGenerator::new(self.counters.clone());

        for name in DISTRICTS {
            let doc = club_gen.generate_district(name, rng);
            self.upsert(Phase::Districts, collections::DISTRICTS, name, &doc)
                .await?;
            info!("Created/Updated district: {name}");
        }

        Ok(DISTRICTS.len())
    }

    /// Upserts the fixture clubs and returns their definitions.
    pub async fn write_clubs(&self, rng: &mut impl Rng) -> Result<Vec<ClubDef>, SeedError> {
        info!("Seeding {} clubs...", CLUBS.len());
        let club_gen = ClubGenerator::new(self.counters.clone());

        for club in CLUBS {
            let doc = club_gen.generate(club, rng);
            self.upsert(Phase::Clubs, collections::CLUBS, club.id, &doc)
                .await?;
            info!("Created/Updated club: {}", club.name);
        }

        Ok(CLUBS.to_vec())
    }

    /// Upserts the fixture posts, denormalizing author and club, and writes
    /// a handful of likes under each one.
    pub async fn write_posts(
        &self,
        users: &[UserDef],
        clubs: &[ClubDef],
        rng: &mut impl Rng,
    ) -> Result<Vec<SeededPost>, SeedError> {
        info!("Seeding {} posts...", POSTS.len());
        let resolver = ReferenceResolver::new(users, clubs, self.policy);
        let post_gen = PostGenerator::new(self.counters.clone());
        let social_gen = SocialGenerator::with_config(self.social.clone(), self.counters.clone());
        let mut seeded = Vec::with_capacity(POSTS.len());

        for post in POSTS {
            let author = resolver.author(post)?;
            let club = resolver.club(post)?;
            let created_at = post_gen.created_at(self.base_time, rng);

            let doc = post_gen.generate(post, &author, &club, created_at, rng);
            self.upsert(Phase::Posts, collections::POSTS, post.post_id, &doc)
                .await?;
            info!("Created/Updated post: {}", post.post_id);

            let likes = social_gen.generate_likes(users, created_at, self.base_time, rng);
            let likes_path = collections::likes(post.post_id);
            for like in &likes {
                self.upsert(Phase::Posts, &likes_path, &like.user_id, like)
                    .await?;
            }
            info!("  Added {} likes to post {}", likes.len(), post.post_id);

            seeded.push(SeededPost {
                def: *post,
                created_at,
                likes: likes.len(),
            });
        }

        Ok(seeded)
    }

    /// Writes up to a few comments on every post, by random users.
    pub async fn write_comments(
        &self,
        users: &[UserDef],
        posts: &[SeededPost],
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedComment>, SeedError> {
        info!("Seeding comments...");
        let social_gen = SocialGenerator::with_config(self.social.clone(), self.counters.clone());
        let mut written = Vec::new();

        for post in posts {
            let comments = social_gen.generate_comments(
                post.def.post_id,
                users,
                post.created_at,
                self.base_time,
                rng,
            );

            for comment in comments {
                self.upsert(Phase::Comments, collections::COMMENTS, &comment.id, &comment.doc)
                    .await?;
                info!(
                    "Created comment {} on post {}",
                    comment.id, post.def.post_id
                );
                written.push(comment);
            }
        }

        Ok(written)
    }

    async fn upsert<T: Serialize>(
        &self,
        phase: Phase,
        collection: &str,
        id: &str,
        doc: &T,
    ) -> Result<(), SeedError> {
        let fields = to_fields(doc).map_err(|source| SeedError::Encode {
            collection: collection.to_string(),
            id: id.to_string(),
            source,
        })?;

        self.store
            .set_document(collection, id, fields)
            .await
            .map_err(|source| SeedError::Store { phase, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_users_phase() {
        let store = Arc::new(MemoryStore::new());
        let seeder = Seeder::new(store.clone());
        let mut rng = StdRng::seed_from_u64(7);

        let users = seeder.write_users(&mut rng).await.unwrap();

        assert_eq!(users.len(), 4);
        assert_eq!(store.count(collections::USERS).await, 4);
    }

    #[tokio::test]
    async fn test_posts_are_backdated_from_base_time() {
        let store = Arc::new(MemoryStore::new());
        let base = OffsetDateTime::now_utc();
        let seeder = Seeder::new(store.clone()).with_base_time(base);
        let mut rng = StdRng::seed_from_u64(7);

        let posts = seeder.write_posts(USERS, CLUBS, &mut rng).await.unwrap();

        assert_eq!(posts.len(), POSTS.len());
        for post in &posts {
            assert!(post.created_at < base);
            assert!((1..=5).contains(&post.likes));
        }
    }

    #[test]
    fn test_credentials_error_detection() {
        let err = SeedError::Store {
            phase: Phase::Users,
            source: StoreError::CredentialFormat("missing client_email".to_string()),
        };
        assert!(err.is_credentials());
        assert_eq!(
            err.to_string(),
            "Failed to write users: Invalid credentials file: missing client_email"
        );

        let err = SeedError::MissingReference {
            kind: ReferenceKind::User,
            id: "user-5".to_string(),
            referenced_by: "post-5".to_string(),
        };
        assert!(!err.is_credentials());
    }
}
