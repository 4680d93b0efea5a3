//! User document generation.

use rand::Rng;

use super::counters::CounterGenerator;
use crate::fixtures::UserDef;
use crate::models::UserDoc;

/// Turns authored users into documents with fresh mock counters.
#[derive(Debug, Clone, Default)]
pub struct UserGenerator {
    counters: CounterGenerator,
}

impl UserGenerator {
    pub fn new(counters: CounterGenerator) -> Self {
        Self { counters }
    }

    pub fn generate(&self, user: &UserDef, rng: &mut impl Rng) -> UserDoc {
        let counters = self.counters.user(rng);

        UserDoc {
            uid: user.uid.to_string(),
            display_name: user.name.to_string(),
            email: user.email.to_string(),
            photo_url: user.pic.to_string(),
            leo_id: user.leo_id.to_string(),
            is_webmaster: user.is_webmaster,
            assigned_club_id: user.assigned_club_id.to_string(),
            following_clubs: user.following_clubs.iter().map(|c| c.to_string()).collect(),
            followers_count: counters.followers,
            following_count: counters.following,
            posts_count: counters.posts,
        }
    }
}
