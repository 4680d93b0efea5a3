//! Mock counters.
//!
//! Follower, member, and post counts shown in the app are plain random
//! numbers. They are not derived from the seeded follows, posts, or likes.

use std::ops::RangeInclusive;

use rand::Rng;

/// Ranges for every mock counter, sampled uniformly.
#[derive(Debug, Clone)]
pub struct CounterConfig {
    pub user_followers: RangeInclusive<u32>,
    pub user_following: RangeInclusive<u32>,
    pub user_posts: RangeInclusive<u32>,
    pub club_members: RangeInclusive<u32>,
    pub club_followers: RangeInclusive<u32>,
    pub club_posts: RangeInclusive<u32>,
    pub district_clubs: RangeInclusive<u32>,
    pub district_members: RangeInclusive<u32>,
    pub post_comments: RangeInclusive<u32>,
    pub post_shares: RangeInclusive<u32>,
    pub comment_likes: RangeInclusive<u32>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            user_followers: 10..=500,
            user_following: 5..=200,
            user_posts: 0..=50,
            club_members: 20..=150,
            club_followers: 100..=2000,
            club_posts: 5..=100,
            district_clubs: 10..=50,
            district_members: 200..=2000,
            post_comments: 0..=50,
            post_shares: 0..=30,
            comment_likes: 0..=20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserCounters {
    pub followers: u32,
    pub following: u32,
    pub posts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubCounters {
    pub members: u32,
    pub followers: u32,
    pub posts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictCounters {
    pub clubs: u32,
    pub members: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostCounters {
    pub comments: u32,
    pub shares: u32,
}

/// Draws mock counters from a [`CounterConfig`].
#[derive(Debug, Clone, Default)]
pub struct CounterGenerator {
    config: CounterConfig,
}

impl CounterGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CounterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn user(&self, rng: &mut impl Rng) -> UserCounters {
        UserCounters {
            followers: rng.gen_range(self.config.user_followers.clone()),
            following: rng.gen_range(self.config.user_following.clone()),
            posts: rng.gen_range(self.config.user_posts.clone()),
        }
    }

    pub fn club(&self, rng: &mut impl Rng) -> ClubCounters {
        ClubCounters {
            members: rng.gen_range(self.config.club_members.clone()),
            followers: rng.gen_range(self.config.club_followers.clone()),
            posts: rng.gen_range(self.config.club_posts.clone()),
        }
    }

    pub fn district(&self, rng: &mut impl Rng) -> DistrictCounters {
        DistrictCounters {
            clubs: rng.gen_range(self.config.district_clubs.clone()),
            members: rng.gen_range(self.config.district_members.clone()),
        }
    }

    pub fn post(&self, rng: &mut impl Rng) -> PostCounters {
        PostCounters {
            comments: rng.gen_range(self.config.post_comments.clone()),
            shares: rng.gen_range(self.config.post_shares.clone()),
        }
    }

    pub fn comment_likes(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.config.comment_likes.clone())
    }
}
