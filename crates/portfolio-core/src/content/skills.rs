use super::{CardBody, CardEntry, CardGridPage, CategoryChoice, DisclosureStyle};

const CATEGORIES: &[CategoryChoice] = &[
    CategoryChoice { id: "all", label: "All", color: "#00d4ff" },
    CategoryChoice { id: "technical", label: "Technical", color: "#00d4ff" },
    CategoryChoice { id: "soft", label: "Soft Skills", color: "#00ff7f" },
    CategoryChoice { id: "interests", label: "Interests", color: "#ffd93d" },
];

pub const SKILLS: CardGridPage = CardGridPage {
    title: "SKILL.MATRIX",
    subtitle: "Capabilities loaded. Select a module to inspect it.",
    style: DisclosureStyle::Inline,
    categories: CATEGORIES,
    entries: &[
        CardEntry {
            id: "technical",
            title: "Technical Skills",
            subtitle: None,
            summary: "Languages, IoT technologies and embedded systems I work with",
            body: CardBody::List(&[
                "Python (intermediate)",
                "MERN stack",
                "IoT development",
                "Embedded systems",
                "ESP32 programming",
                "LoRa communication",
                "Sensor integration",
                "MySQL",
                "JavaScript",
            ]),
            tags: &[],
            accent_color: "#00d4ff",
            icon: "\u{1F4BB}",
            category: "technical",
            links: &[],
        },
        CardEntry {
            id: "soft",
            title: "Soft Skills",
            subtitle: None,
            summary: "Personal and professional competencies",
            body: CardBody::List(&["Time management", "Problem solving", "Team collaboration"]),
            tags: &[],
            accent_color: "#00ff7f",
            icon: "\u{1F91D}",
            category: "soft",
            links: &[],
        },
        CardEntry {
            id: "interests",
            title: "Interests",
            subtitle: None,
            summary: "Activities and topics that inspire me",
            body: CardBody::List(&[
                "Music",
                "Learning new technologies",
                "Tech videos",
            ]),
            tags: &[],
            accent_color: "#ffd93d",
            icon: "\u{1F3AF}",
            category: "interests",
            links: &[],
        },
    ],
};
