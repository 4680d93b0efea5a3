//! Club and district document generation.

use rand::Rng;

use super::counters::CounterGenerator;
use crate::fixtures::ClubDef;
use crate::models::{ClubDoc, DistrictDoc, SocialLinks};

const CONTACT_DOMAIN: &str = "leoclubs.lk";
const DEFAULT_COVER_URL: &str =
    "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=1200";

/// Builds club and district documents with mock counters and contact details.
#[derive(Debug, Clone, Default)]
pub struct ClubGenerator {
    counters: CounterGenerator,
}

impl ClubGenerator {
    pub fn new(counters: CounterGenerator) -> Self {
        Self { counters }
    }

    pub fn generate(&self, club: &ClubDef, rng: &mut impl Rng) -> ClubDoc {
        let counters = self.counters.club(rng);

        ClubDoc {
            name: club.name.to_string(),
            district: club.district.to_string(),
            // Districts are keyed by their name.
            district_id: club.district.to_string(),
            description: club.description.to_string(),
            president: club.president.to_string(),
            email: contact_email(club.id),
            phone: generate_phone(rng),
            logo_url: logo_url(club.name),
            cover_image_url: DEFAULT_COVER_URL.to_string(),
            address: club.address.to_string(),
            is_official: club.is_official,
            members_count: counters.members,
            followers_count: counters.followers,
            posts_count: counters.posts,
            social_links: social_links(club.id),
        }
    }

    pub fn generate_district(&self, name: &str, rng: &mut impl Rng) -> DistrictDoc {
        let counters = self.counters.district(rng);

        DistrictDoc {
            name: name.to_string(),
            total_clubs: counters.clubs,
            total_members: counters.members,
        }
    }
}

/// Contact address derived from the club id.
pub fn contact_email(club_id: &str) -> String {
    format!("{club_id}@{CONTACT_DOMAIN}")
}

pub fn social_links(club_id: &str) -> SocialLinks {
    SocialLinks {
        facebook: format!("https://facebook.com/{club_id}"),
        instagram: format!("https://instagram.com/{club_id}"),
        twitter: format!("https://twitter.com/{club_id}"),
    }
}

fn logo_url(name: &str) -> String {
    let query = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!("https://ui-avatars.com/api/?name={query}&background=random")
}

/// Sri Lankan mobile number, e.g. `+94 77 123 4567`.
fn generate_phone(rng: &mut impl Rng) -> String {
    format!(
        "+94 7{} {:03} {:04}",
        rng.gen_range(0..=8),
        rng.gen_range(0..1000),
        rng.gen_range(0..10000)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::CLUBS;

    #[test]
    fn test_generate_club() {
        let club_gen = ClubGenerator::default();
        let mut rng = rand::thread_rng();
        let doc = club_gen.generate(&CLUBS[0], &mut rng);

        assert_eq!(doc.name, "Leo Club of University of Sri Jayewardenepura");
        assert_eq!(doc.district, "District 306 A1");
        assert_eq!(doc.district_id, doc.district);
        assert_eq!(doc.email, "club-1@leoclubs.lk");
        assert_eq!(doc.social_links.instagram, "https://instagram.com/club-1");
        assert!(doc.logo_url.contains("name=Leo+Club+of+University"));
        assert!(doc.is_official);
    }

    #[test]
    fn test_phone_format() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let phone = generate_phone(&mut rng);
            assert!(phone.starts_with("+94 7"));
            assert_eq!(phone.len(), "+94 77 123 4567".len());
        }
    }

    #[test]
    fn test_generate_district() {
        let club_gen = ClubGenerator::default();
        let mut rng = rand::thread_rng();
        let doc = club_gen.generate_district("District 306 C2", &mut rng);

        assert_eq!(doc.name, "District 306 C2");
        assert!(doc.total_clubs >= 10);
    }
}
