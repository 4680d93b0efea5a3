use super::UserDef;

pub const USERS: &[UserDef] = &[
    UserDef {
        uid: "user-1",
        name: "John Doe",
        email: "john.doe@example.com",
        pic: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400",
        leo_id: "306-A1-12345",
        is_webmaster: true,
        assigned_club_id: "club-1",
        following_clubs: &["club-2", "club-3"],
    },
    UserDef {
        uid: "user-2",
        name: "Sarah Wilson",
        email: "sarah@example.com",
        pic: "https://ui-avatars.com/api/?name=Sarah+Wilson&background=random",
        leo_id: "306-A1-67890",
        is_webmaster: false,
        assigned_club_id: "club-1",
        following_clubs: &["club-colombo-city"],
    },
    UserDef {
        uid: "user-3",
        name: "Mike Chen",
        email: "mike@example.com",
        pic: "https://ui-avatars.com/api/?name=Mike+Chen&background=random",
        leo_id: "306-A2-11223",
        is_webmaster: false,
        assigned_club_id: "club-2",
        following_clubs: &[],
    },
    UserDef {
        uid: "user-4",
        name: "Emma Davis",
        email: "emma@example.com",
        pic: "https://ui-avatars.com/api/?name=Emma+Davis&background=random",
        leo_id: "306-B1-44556",
        is_webmaster: false,
        assigned_club_id: "club-3",
        following_clubs: &["club-1", "club-4"],
    },
];
