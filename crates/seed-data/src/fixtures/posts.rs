use super::PostDef;

pub const POSTS: &[PostDef] = &[
    PostDef {
        post_id: "post-1",
        club_id: "club-1",
        author_id: "user-1",
        content: "Proud to announce our successful blood donation campaign! Over 150 donors participated. Thank you to everyone who contributed to saving lives! 🩸",
        image_url: "https://images.unsplash.com/photo-1615461066841-6116e61058f4?w=800",
        likes_count: 245,
        is_pinned: true,
    },
    PostDef {
        post_id: "post-2",
        club_id: "club-2",
        author_id: "user-3",
        content: "Beach cleanup drive this Sunday! Join us in making our beaches cleaner and greener. Together we can make a difference! 🌊♻️",
        image_url: "https://images.unsplash.com/photo-1618477461853-cf6ed80faba5?w=800",
        likes_count: 189,
        is_pinned: false,
    },
    PostDef {
        post_id: "post-3",
        club_id: "club-1",
        author_id: "user-1",
        content: "Leadership workshop with international speakers was a huge success! Thank you to all participants for making it memorable. 💪",
        image_url: "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?w=800",
        likes_count: 312,
        is_pinned: false,
    },
    PostDef {
        post_id: "post-4",
        club_id: "club-3",
        author_id: "user-4",
        content: "Book donation drive for rural schools. Education is the key to a brighter future! 📚✨",
        image_url: "https://images.unsplash.com/photo-1524995997946-a1c2e315a42f?w=800",
        likes_count: 167,
        is_pinned: false,
    },
    PostDef {
        post_id: "post-5",
        club_id: "club-4",
        // Not a seeded user; resolved per MissingReferencePolicy.
        author_id: "user-5",
        content: "Mental health awareness session conducted for university students. Breaking the stigma, one conversation at a time. 🧠💚",
        image_url: "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?w=800",
        likes_count: 234,
        is_pinned: false,
    },
];
