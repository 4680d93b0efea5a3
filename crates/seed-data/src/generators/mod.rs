//! Document generators for the LeoConnect demo data.
//!
//! - [`UserGenerator`]: user profiles with mock social counters
//! - [`ClubGenerator`]: clubs with contact details, plus district summaries
//! - [`PostGenerator`]: denormalized posts with a backdated creation time
//! - [`SocialGenerator`]: likes and comments on posts
//! - [`CounterGenerator`]: the random counters shared by all of the above

pub mod club;
pub mod counters;
pub mod post;
pub mod social;
pub mod user;

pub use club::ClubGenerator;
pub use counters::{CounterConfig, CounterGenerator};
pub use post::PostGenerator;
pub use social::{GeneratedComment, SocialGenConfig, SocialGenerator};
pub use user::UserGenerator;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Formats a timestamp the way the app stores it (RFC 3339, UTC offset kept).
pub fn format_timestamp(t: OffsetDateTime) -> String {
    // RFC 3339 formatting fails only for years outside 0..=9999 or offsets
    // with a seconds component. Seeded times are UTC, within days of now.
    t.format(&Rfc3339).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(datetime!(2024-03-01 09:30:00 UTC)),
            "2024-03-01T09:30:00Z"
        );
    }

    #[test]
    fn test_backdated_times_always_format() {
        let now = OffsetDateTime::now_utc();
        for hours in [0, 1, 71, 72] {
            let formatted = format_timestamp(now - time::Duration::hours(hours));
            assert!(!formatted.is_empty());
            assert!(formatted.ends_with('Z'));
        }
    }
}
