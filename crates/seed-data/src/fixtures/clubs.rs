use super::ClubDef;

pub const CLUBS: &[ClubDef] = &[
    ClubDef {
        id: "club-1",
        name: "Leo Club of University of Sri Jayewardenepura",
        district: "District 306 A1",
        description: "Empowering youth through service and leadership development.",
        president: "Leo John Doe",
        address: "University of Sri Jayewardenepura, Gangodawila, Nugegoda",
        is_official: true,
    },
    ClubDef {
        id: "club-2",
        name: "Leo Club of Colombo Central",
        district: "District 306 A1",
        description: "Building tomorrow's leaders through community service.",
        president: "Leo Mike Chen",
        address: "Colombo 07",
        is_official: true,
    },
    ClubDef {
        id: "club-colombo-city",
        name: "Leo Club of Colombo City",
        district: "District 306 A1",
        description: "We serve the community with pride.",
        president: "Leo Alice Brown",
        address: "Colombo 03",
        is_official: false,
    },
    ClubDef {
        id: "club-3",
        name: "Leo Club of Kandy",
        district: "District 306 A2",
        description: "Serving the community with passion and dedication.",
        president: "Leo Emma Davis",
        address: "Peradeniya Road, Kandy",
        is_official: true,
    },
    ClubDef {
        id: "club-piliyandala",
        name: "Leo Club of Piliyandala",
        district: "District 306 A2",
        description: "Unity and service for a better future.",
        president: "Leo Kasun Perera",
        address: "Horana Road, Piliyandala",
        is_official: false,
    },
    ClubDef {
        id: "club-dehiwala",
        name: "Leo Club of Dehiwala East",
        district: "District 306 A2",
        description: "Making a difference in our community.",
        president: "Leo Nimali Silva",
        address: "Dehiwala-Mount Lavinia",
        is_official: false,
    },
    ClubDef {
        id: "club-4",
        name: "Leo Club of Galle",
        district: "District 306 B1",
        description: "Youth leadership and community development.",
        president: "Leo Sarah Wilson",
        address: "Wakwella Road, Galle",
        is_official: true,
    },
    ClubDef {
        id: "club-wattala",
        name: "Leo Club of Wattala",
        district: "District 306 B1",
        description: "Service above self.",
        president: "Leo Dinesh Kumar",
        address: "Negombo Road, Wattala",
        is_official: false,
    },
    ClubDef {
        id: "club-negombo",
        name: "Leo Club of Negombo",
        district: "District 306 B1",
        description: "Together we serve.",
        president: "Leo Shehan Fernando",
        address: "Main Street, Negombo",
        is_official: false,
    },
    ClubDef {
        id: "club-anuradhapura",
        name: "Leo Club of Anuradhapura",
        district: "District 306 B2",
        description: "Serving the ancient city.",
        president: "Leo Ruwan Jayasinghe",
        address: "Maithripala Senanayake Mawatha, Anuradhapura",
        is_official: false,
    },
    ClubDef {
        id: "club-kurunegala",
        name: "Leo Club of Kurunegala",
        district: "District 306 C1",
        description: "Leadership and service.",
        president: "Leo Thilini Bandara",
        address: "Puttalam Road, Kurunegala",
        is_official: false,
    },
    ClubDef {
        id: "club-batticaloa",
        name: "Leo Club of Batticaloa",
        district: "District 306 C2",
        description: "Rising together.",
        president: "Leo Pradeep Kumar",
        address: "Trinco Road, Batticaloa",
        is_official: false,
    },
];
