//! Resolution of the author and club a post refers to.
//!
//! Lookups are linear scans over the records seeded earlier in the run. A
//! missing reference is reported as [`Resolution::Missing`];
//! [`ReferenceResolver`] then applies the configured [`MissingReferencePolicy`].

use std::fmt;

use tracing::warn;

use crate::config::MissingReferencePolicy;
use crate::db::SeedError;
use crate::fixtures::{ClubDef, PostDef, UserDef};

/// Club name written when a post's club cannot be found.
pub const UNKNOWN_CLUB: &str = "Unknown Club";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    User,
    Club,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::User => f.write_str("user"),
            ReferenceKind::Club => f.write_str("club"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a, T> {
    Resolved(&'a T),
    Missing,
}

pub fn find_user<'a>(users: &'a [UserDef], uid: &str) -> Resolution<'a, UserDef> {
    match users.iter().find(|u| u.uid == uid) {
        Some(user) => Resolution::Resolved(user),
        None => Resolution::Missing,
    }
}

pub fn find_club<'a>(clubs: &'a [ClubDef], id: &str) -> Resolution<'a, ClubDef> {
    match clubs.iter().find(|c| c.id == id) {
        Some(club) => Resolution::Resolved(club),
        None => Resolution::Missing,
    }
}

/// Author fields copied onto a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: String,
    pub name: String,
    pub photo: String,
}

impl From<&UserDef> for AuthorRef {
    fn from(user: &UserDef) -> Self {
        Self {
            id: user.uid.to_string(),
            name: user.name.to_string(),
            photo: user.pic.to_string(),
        }
    }
}

/// Club fields copied onto a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubRef {
    pub id: String,
    pub name: String,
}

/// Resolves post references against the seeded users and clubs.
pub struct ReferenceResolver<'a> {
    users: &'a [UserDef],
    clubs: &'a [ClubDef],
    policy: MissingReferencePolicy,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(users: &'a [UserDef], clubs: &'a [ClubDef], policy: MissingReferencePolicy) -> Self {
        Self {
            users,
            clubs,
            policy,
        }
    }

    /// The post's author; under a fallback policy, the first seeded user stands in.
    pub fn author(&self, post: &PostDef) -> Result<AuthorRef, SeedError> {
        if let Resolution::Resolved(user) = find_user(self.users, post.author_id) {
            return Ok(user.into());
        }

        let Some(first) = self.users.first() else {
            return Err(missing(ReferenceKind::User, post.author_id, post));
        };
        self.on_missing(ReferenceKind::User, post.author_id, post, first.uid)?;
        Ok(first.into())
    }

    /// The post's club; under a fallback policy the id is kept and the name is [`UNKNOWN_CLUB`].
    pub fn club(&self, post: &PostDef) -> Result<ClubRef, SeedError> {
        if let Resolution::Resolved(club) = find_club(self.clubs, post.club_id) {
            return Ok(ClubRef {
                id: club.id.to_string(),
                name: club.name.to_string(),
            });
        }

        self.on_missing(ReferenceKind::Club, post.club_id, post, UNKNOWN_CLUB)?;
        Ok(ClubRef {
            id: post.club_id.to_string(),
            name: UNKNOWN_CLUB.to_string(),
        })
    }

    fn on_missing(
        &self,
        kind: ReferenceKind,
        id: &str,
        post: &PostDef,
        substitute: &str,
    ) -> Result<(), SeedError> {
        match self.policy {
            MissingReferencePolicy::Fallback => Ok(()),
            MissingReferencePolicy::Warn => {
                warn!(
                    "Post {} references unknown {kind} {id:?}, using {substitute:?}",
                    post.post_id
                );
                Ok(())
            }
            MissingReferencePolicy::Error => Err(missing(kind, id, post)),
        }
    }
}

fn missing(kind: ReferenceKind, id: &str, post: &PostDef) -> SeedError {
    SeedError::MissingReference {
        kind,
        id: id.to_string(),
        referenced_by: post.post_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{CLUBS, POSTS, USERS};

    fn post(author_id: &'static str, club_id: &'static str) -> PostDef {
        PostDef {
            author_id,
            club_id,
            ..POSTS[0]
        }
    }

    #[test]
    fn test_find_user() {
        assert!(matches!(find_user(USERS, "user-3"), Resolution::Resolved(u) if u.name == "Mike Chen"));
        assert_eq!(find_user(USERS, "user-99"), Resolution::Missing);
    }

    #[test]
    fn test_resolved_author_and_club() {
        let resolver = ReferenceResolver::new(USERS, CLUBS, MissingReferencePolicy::Error);
        let p = post("user-4", "club-3");

        let author = resolver.author(&p).unwrap();
        assert_eq!(author.id, "user-4");
        assert_eq!(author.name, "Emma Davis");

        let club = resolver.club(&p).unwrap();
        assert_eq!(club.name, "Leo Club of Kandy");
    }

    #[test]
    fn test_fallback_uses_first_user() {
        for policy in [MissingReferencePolicy::Fallback, MissingReferencePolicy::Warn] {
            let resolver = ReferenceResolver::new(USERS, CLUBS, policy);
            let author = resolver.author(&post("user-5", "club-1")).unwrap();
            assert_eq!(author, AuthorRef::from(&USERS[0]));
        }
    }

    #[test]
    fn test_fallback_unknown_club() {
        let resolver = ReferenceResolver::new(USERS, CLUBS, MissingReferencePolicy::Fallback);
        let club = resolver.club(&post("user-1", "club-missing")).unwrap();
        assert_eq!(club.id, "club-missing");
        assert_eq!(club.name, UNKNOWN_CLUB);
    }

    #[test]
    fn test_error_policy() {
        let resolver = ReferenceResolver::new(USERS, CLUBS, MissingReferencePolicy::Error);

        let err = resolver.author(&post("user-5", "club-1")).unwrap_err();
        assert!(matches!(
            err,
            SeedError::MissingReference { kind: ReferenceKind::User, ref id, .. } if id == "user-5"
        ));

        let err = resolver.club(&post("user-1", "club-missing")).unwrap_err();
        assert!(matches!(
            err,
            SeedError::MissingReference { kind: ReferenceKind::Club, .. }
        ));
    }

    #[test]
    fn test_no_users_is_always_an_error() {
        let resolver = ReferenceResolver::new(&[], CLUBS, MissingReferencePolicy::Fallback);
        assert!(resolver.author(&post("user-1", "club-1")).is_err());
    }
}
