//! Post document generation.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use super::counters::CounterGenerator;
use super::format_timestamp;
use crate::fixtures::PostDef;
use crate::models::PostDoc;
use crate::references::{AuthorRef, ClubRef};

/// Builds denormalized post documents.
#[derive(Debug, Clone, Default)]
pub struct PostGenerator {
    counters: CounterGenerator,
}

impl PostGenerator {
    pub fn new(counters: CounterGenerator) -> Self {
        Self { counters }
    }

    /// Picks a creation time within the three days before `base_time`.
    pub fn created_at(&self, base_time: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
        base_time - Duration::hours(rng.gen_range(1..72)) - Duration::minutes(rng.gen_range(0..60))
    }

    /// Copies author and club fields onto the post. They are not kept in sync afterwards.
    pub fn generate(
        &self,
        post: &PostDef,
        author: &AuthorRef,
        club: &ClubRef,
        created_at: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> PostDoc {
        let counters = self.counters.post(rng);
        let timestamp = format_timestamp(created_at);

        PostDoc {
            content: post.content.to_string(),
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            author_logo: author.photo.clone(),
            club_id: club.id.clone(),
            club_name: club.name.clone(),
            image_url: post.image_url.to_string(),
            images: vec![post.image_url.to_string()],
            likes_count: post.likes_count,
            comments_count: counters.comments,
            shares_count: counters.shares,
            is_pinned: post.is_pinned,
            updated_at: timestamp.clone(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{POSTS, USERS};

    #[test]
    fn test_generate_post() {
        let post_gen = PostGenerator::default();
        let mut rng = rand::thread_rng();
        let author = AuthorRef::from(&USERS[0]);
        let club = ClubRef {
            id: "club-1".to_string(),
            name: "Leo Club of University of Sri Jayewardenepura".to_string(),
        };
        let now = OffsetDateTime::now_utc();
        let created = post_gen.created_at(now, &mut rng);

        let doc = post_gen.generate(&POSTS[0], &author, &club, created, &mut rng);

        assert_eq!(doc.author_id, "user-1");
        assert_eq!(doc.author_name, "John Doe");
        assert_eq!(doc.club_name, club.name);
        assert_eq!(doc.images, vec![doc.image_url.clone()]);
        assert_eq!(doc.likes_count, 245);
        assert!(doc.is_pinned);
        assert_eq!(doc.timestamp, doc.updated_at);
        assert!(created < now);
        assert!(created > now - Duration::days(3));
    }
}
