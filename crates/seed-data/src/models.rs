//! Document shapes written to the store.
//!
//! Field names follow the LeoConnect app's Firestore schema and must not change.

use serde::{Deserialize, Serialize};

pub mod collections {
    pub const USERS: &str = "users";
    pub const DISTRICTS: &str = "districts";
    pub const CLUBS: &str = "clubs";
    pub const POSTS: &str = "posts";
    pub const COMMENTS: &str = "comments";

    /// Sub-collection of likes under a post.
    pub fn likes(post_id: &str) -> String {
        format!("{POSTS}/{post_id}/likes")
    }
}

/// `users/{uid}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub uid: String,
    pub display_name: String,
    pub email: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub leo_id: String,
    pub is_webmaster: bool,
    pub assigned_club_id: String,
    pub following_clubs: Vec<String>,
    pub followers_count: u32,
    pub following_count: u32,
    pub posts_count: u32,
}

/// `districts/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDoc {
    pub name: String,
    pub total_clubs: u32,
    pub total_members: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

/// `clubs/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDoc {
    pub name: String,
    pub district: String,
    pub district_id: String,
    pub description: String,
    pub president: String,
    pub email: String,
    pub phone: String,
    pub logo_url: String,
    pub cover_image_url: String,
    pub address: String,
    pub is_official: bool,
    pub members_count: u32,
    pub followers_count: u32,
    pub posts_count: u32,
    pub social_links: SocialLinks,
}

/// `posts/{postId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDoc {
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub author_logo: String,
    pub club_id: String,
    pub club_name: String,
    pub image_url: String,
    pub images: Vec<String>,
    pub likes_count: u32,
    pub comments_count: u32,
    pub shares_count: u32,
    pub is_pinned: bool,
    /// Creation time, RFC 3339.
    pub timestamp: String,
    pub updated_at: String,
}

/// `posts/{postId}/likes/{userId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeDoc {
    pub user_id: String,
    pub timestamp: String,
}

/// `comments/{commentId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDoc {
    pub post_id: String,
    pub user_id: String,
    pub author_name: String,
    pub author_photo_url: String,
    pub content: String,
    pub likes_count: u32,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_field_names() {
        let user = UserDoc {
            uid: "user-1".into(),
            display_name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            photo_url: "https://example.com/john.jpg".into(),
            leo_id: "306-A1-12345".into(),
            is_webmaster: true,
            assigned_club_id: "club-1".into(),
            following_clubs: vec![],
            followers_count: 1,
            following_count: 2,
            posts_count: 3,
        };

        let json = serde_json::to_value(&user).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        for expected in [
            "uid",
            "displayName",
            "email",
            "photoURL",
            "leoId",
            "isWebmaster",
            "assignedClubId",
            "followingClubs",
            "followersCount",
            "followingCount",
            "postsCount",
        ] {
            assert!(keys.iter().any(|k| k == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_likes_collection_path() {
        assert_eq!(collections::likes("post-3"), "posts/post-3/likes");
    }
}
