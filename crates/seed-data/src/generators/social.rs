//! Social interaction generation (likes and comments).

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime};

use super::counters::CounterGenerator;
use super::format_timestamp;
use crate::fixtures::{COMMENT_PHRASES, UserDef};
use crate::models::{CommentDoc, LikeDoc};

/// Generated comment with its document id.
#[derive(Debug, Clone)]
pub struct GeneratedComment {
    pub id: String,
    pub doc: CommentDoc,
}

/// Configuration for likes and comments.
#[derive(Debug, Clone)]
pub struct SocialGenConfig {
    /// Number of likes drawn per post.
    pub likes_per_post: RangeInclusive<usize>,
    /// Number of comments drawn per post.
    pub comments_per_post: RangeInclusive<usize>,
    /// Numeric suffix of comment ids (`comment-NNNN`).
    pub comment_id_suffix: RangeInclusive<u32>,
}

impl Default for SocialGenConfig {
    fn default() -> Self {
        Self {
            likes_per_post: 1..=5,
            comments_per_post: 0..=3,
            comment_id_suffix: 1000..=9999,
        }
    }
}

/// Generates likes and comments on posts.
///
/// Likers and commenters are drawn independently and uniformly from all
/// users, so the same user may appear more than once on a post.
#[derive(Debug, Clone)]
pub struct SocialGenerator {
    config: SocialGenConfig,
    counters: CounterGenerator,
    phrases: &'static [&'static str],
}

impl Default for SocialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialGenerator {
    pub fn new() -> Self {
        Self::with_config(SocialGenConfig::default(), CounterGenerator::default())
    }

    pub fn with_config(config: SocialGenConfig, counters: CounterGenerator) -> Self {
        Self {
            config,
            counters,
            phrases: &COMMENT_PHRASES,
        }
    }

    /// Generates likes for a post. Each like names a user; duplicates are kept.
    pub fn generate_likes(
        &self,
        users: &[UserDef],
        post_time: OffsetDateTime,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<LikeDoc> {
        if users.is_empty() {
            return Vec::new();
        }

        let num_likes = rng.gen_range(self.config.likes_per_post.clone());
        let mut likes = Vec::with_capacity(num_likes);

        for _ in 0..num_likes {
            let Some(user) = users.choose(rng) else {
                break;
            };
            likes.push(LikeDoc {
                user_id: user.uid.to_string(),
                timestamp: format_timestamp(reaction_time(post_time, now, rng)),
            });
        }

        likes
    }

    /// Generates comments for a post.
    pub fn generate_comments(
        &self,
        post_id: &str,
        users: &[UserDef],
        post_time: OffsetDateTime,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedComment> {
        if users.is_empty() {
            return Vec::new();
        }

        let num_comments = rng.gen_range(self.config.comments_per_post.clone());
        let mut comments = Vec::with_capacity(num_comments);

        for _ in 0..num_comments {
            let suffix = rng.gen_range(self.config.comment_id_suffix.clone());
            let Some(author) = users.choose(rng) else {
                break;
            };
            let content = self.phrases.choose(rng).copied().unwrap_or_default();

            comments.push(GeneratedComment {
                id: format!("comment-{suffix}"),
                doc: CommentDoc {
                    post_id: post_id.to_string(),
                    user_id: author.uid.to_string(),
                    author_name: author.name.to_string(),
                    author_photo_url: author.pic.to_string(),
                    content: content.to_string(),
                    likes_count: self.counters.comment_likes(rng),
                    timestamp: format_timestamp(reaction_time(post_time, now, rng)),
                },
            });
        }

        comments
    }
}

/// A moment between the post's creation and `now`.
fn reaction_time(post_time: OffsetDateTime, now: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
    let span = (now - post_time).whole_minutes().max(1);
    post_time + Duration::minutes(rng.gen_range(0..span))
}
