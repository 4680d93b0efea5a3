//! Hand-authored source records.
//!
//! These are the definitions the write phases turn into documents. Identifiers
//! are stable across runs; everything random is added by the generators.

mod clubs;
mod posts;
mod users;

pub use clubs::CLUBS;
pub use posts::POSTS;
pub use users::USERS;

/// A user as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDef {
    pub uid: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub pic: &'static str,
    pub leo_id: &'static str,
    pub is_webmaster: bool,
    pub assigned_club_id: &'static str,
    pub following_clubs: &'static [&'static str],
}

/// A club as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubDef {
    pub id: &'static str,
    pub name: &'static str,
    pub district: &'static str,
    pub description: &'static str,
    pub president: &'static str,
    pub address: &'static str,
    pub is_official: bool,
}

/// A post as authored. `author_id` and `club_id` are resolved against the
/// seeded users and clubs when the post is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostDef {
    pub post_id: &'static str,
    pub club_id: &'static str,
    pub author_id: &'static str,
    pub content: &'static str,
    pub image_url: &'static str,
    pub likes_count: u32,
    pub is_pinned: bool,
}

/// District names; each is also its document id.
pub const DISTRICTS: [&str; 6] = [
    "District 306 A1",
    "District 306 A2",
    "District 306 B1",
    "District 306 B2",
    "District 306 C1",
    "District 306 C2",
];

/// Comment texts drawn at random for every generated comment.
pub const COMMENT_PHRASES: [&str; 8] = [
    "Great initiative! 👏",
    "So proud of our Leos!",
    "Count me in for the next one.",
    "Amazing work, team!",
    "This is what service is all about. 💙",
    "Well done everyone!",
    "Inspiring! Keep it up.",
    "Wish I could have joined!",
];
